pub mod header;
pub mod title_bar;

#[allow(unused_imports)]
pub use header::*;
#[allow(unused_imports)]
pub use title_bar::*;
