pub mod general;
pub mod user;

#[allow(unused_imports)]
pub use general::*;
#[allow(unused_imports)]
pub use user::*;
