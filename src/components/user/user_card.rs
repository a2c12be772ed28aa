use crate::model::*;
use icondata::{IoBusinessOutline, IoCallOutline, IoGlobeOutline, IoMailOutline};
use leptos::prelude::*;

#[component]
pub fn UserCard(user: UserRecord) -> impl IntoView {
    let handle = user.handle_line();
    let address = user.address_line();
    let zip = user.zip_line();
    let catch_phrase = user.company.quoted_catch_phrase();

    view! {
        <div class="user-card" title=user.name.clone()>
            <h2>{handle}</h2>
            <p class="contact">
                <svg viewBox=IoMailOutline.view_box inner_html=IoMailOutline.data></svg>
                <span>{user.email}</span>
            </p>
            <p class="contact">
                <svg viewBox=IoCallOutline.view_box inner_html=IoCallOutline.data></svg>
                <span>{user.phone}</span>
            </p>
            <p class="contact">
                <svg viewBox=IoGlobeOutline.view_box inner_html=IoGlobeOutline.data></svg>
                <span>{user.website}</span>
            </p>
            <p class="company">
                <svg viewBox=IoBusinessOutline.view_box inner_html=IoBusinessOutline.data></svg>
                <span>{user.company.name}</span>
            </p>
            <p class="catch-phrase">{catch_phrase}</p>
            <p class="address">{address}</p>
            <p class="zip">{zip}</p>
        </div>
    }
}
