use crate::components::user::UserCard;
use crate::model::*;
use leptos::prelude::*;

/// One card per user, in the order given, keyed by user id.
#[component]
pub fn UserGrid(users: UserCollection) -> impl IntoView {
    view! {
        <div class="user-grid">
            <For
                each=move || users.clone()
                key=|user| user.id
                children=move |user| {
                    view! { <UserCard user /> }
                }
            />
        </div>
    }
}
