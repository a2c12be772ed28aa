#[cfg(feature = "ssr")]
mod app_state;
#[cfg(feature = "ssr")]
pub use app_state::*;

mod error;
pub use error::*;

mod user;
pub use user::*;

#[cfg(test)]
pub(crate) mod fixtures;
