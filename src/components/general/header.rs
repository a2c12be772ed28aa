use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="brand" href="/">
                "User Directory"
            </a>
            <nav>
                <a href="/users">"Users"</a>
            </nav>
        </header>
    }
}
