use crate::model::types::*;
use axum::extract::FromRef;
use leptos::config::{LeptosOptions, get_configuration};

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub reqwest_client: reqwest::Client,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions) -> Result<Self, Error> {
        tracing::info!("building http client...");
        let reqwest_client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::Fetch(format!("could not build http client: {}", e)))?;

        Ok(Self {
            reqwest_client,
            leptos_options,
        })
    }
}

/// Reads the Leptos options, from cargo-leptos' env values when `path` is `None`.
pub fn load_options(path: Option<&str>) -> Result<LeptosOptions, Error> {
    tracing::info!("loading configuration...");
    Ok(get_configuration(path)?.leptos_options)
}
