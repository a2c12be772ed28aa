pub mod user_card;
pub mod user_grid;

#[allow(unused_imports)]
pub use user_card::*;
#[allow(unused_imports)]
pub use user_grid::*;
