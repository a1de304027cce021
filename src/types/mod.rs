pub mod bar;
pub mod indicators;
pub mod market;
pub mod recommendation;

pub use bar::*;
pub use indicators::*;
pub use market::*;
pub use recommendation::*;
