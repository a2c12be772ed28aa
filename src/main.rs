#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), user_directory::model::Error> {
    use tracing_subscriber::EnvFilter;
    use user_directory::model::{AppState, load_options};
    use user_directory::router;

    let env_file = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if env_file.is_err() {
        tracing::info!("didn't find env file");
    }

    let leptos_options = load_options(None)?;
    let addr = leptos_options.site_addr;
    let routes = router::routes();

    let state = AppState::new(leptos_options)?;
    let app = router::new(routes, state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
