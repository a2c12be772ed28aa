use crate::components::*;
use crate::model::UserCollection;
use leptos::prelude::*;
use leptos_meta::Title;

#[server]
pub async fn get_users() -> Result<UserCollection, ServerFnError> {
    use crate::model::{self, AppState};
    let app_state = expect_context::<AppState>();
    Ok(model::fetch_users(&app_state.reqwest_client).await?)
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = Resource::new_blocking(|| (), |_| get_users());

    view! {
        <Title text="Users" />
        <div class="page">
            <Header />
            <main>
                <TitleBar title="Users" />
                <Suspense fallback=|| {
                    view! { <p class="loading">"Loading..."</p> }
                }>
                    {move || Suspend::new(async move {
                        users.await.map(|users| view! { <UserGrid users /> })
                    })}
                </Suspense>
            </main>
        </div>
    }
}
