use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Error while fetching users: {0}")]
    Fetch(String),
    #[error("Error from serde decode: {0}")]
    Decode(String),
    #[error("Could not load configuration: {0}")]
    Config(String),
    #[error("Error from io: {0}")]
    Io(String),
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        match val {
            Error::Fetch(s) => s,
            Error::Decode(s) => s,
            Error::Config(s) => s,
            Error::Io(s) => s,
        }
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Decode(e.to_string())
        } else {
            Error::Fetch(e.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

#[cfg(feature = "ssr")]
impl From<leptos::config::errors::LeptosConfigError> for Error {
    fn from(value: leptos::config::errors::LeptosConfigError) -> Self {
        Error::Config(value.to_string())
    }
}

#[cfg(feature = "ssr")]
impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
