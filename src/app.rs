use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    *,
};

use crate::pages;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="stylesheet" href="/pkg/user_directory.css" />

                <title>"User Directory"</title>
                <meta
                    name="description"
                    content="A directory of users with their contact details, address and company."
                />

                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <ErrorBoundary fallback=|errors| {
                view! { <ErrorPage errors /> }
            }>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=|| view! { <Redirect path="/users" /> } />
                    <Route path=path!("/users") view=pages::UsersPage ssr=SsrMode::Async />
                </Routes>
            </ErrorBoundary>
        </Router>
    }
}

#[component]
fn ErrorPage(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"Something went wrong."</h1>
            <ul>
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn error_page_lists_errors() {
        let html = Owner::new().with(|| {
            let errors = ArcRwSignal::new(Errors::default());
            errors.update(|errors| {
                errors.insert_with_default_key(crate::model::Error::Fetch(
                    "connection refused".to_string(),
                ))
            });
            view! { <ErrorPage errors /> }.to_html()
        });

        assert!(html.contains("Something went wrong."));
        assert!(html.contains("Error while fetching users: connection refused"));
        assert!(!html.contains("user-card"));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn failed_fetch_replaces_the_whole_users_page() {
        use crate::model::{AppState, load_options};
        use crate::pages::UsersPage;
        use futures::StreamExt;
        use leptos::task::Executor;

        let _ = Executor::init_tokio();

        // every request goes through a proxy on a port nobody listens on
        let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let proxy = format!("http://{}", closed.local_addr().unwrap());
        drop(closed);
        let state = AppState {
            reqwest_client: reqwest::Client::builder()
                .proxy(reqwest::Proxy::all(proxy.as_str()).unwrap())
                .build()
                .unwrap(),
            leptos_options: load_options(Some("Cargo.toml")).unwrap(),
        };

        let owner = Owner::new();
        let stream = owner.with(|| {
            provide_context(state);
            provide_meta_context();
            let (meta, _) = ServerMetaContext::new();
            provide_context(meta);

            view! {
                <ErrorBoundary fallback=|errors| {
                    view! { <ErrorPage errors /> }
                }>
                    <UsersPage />
                </ErrorBoundary>
            }
            .to_html_stream_in_order()
        });
        let html = stream.collect::<String>().await;

        assert!(html.contains("Something went wrong."), "{html}");
        assert!(html.contains("Error while fetching users"), "{html}");
        assert!(!html.contains("user-card"));
        assert!(!html.contains("user-grid"));
        assert!(!html.contains("Add User"));
    }
}
