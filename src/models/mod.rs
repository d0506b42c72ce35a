pub mod galaxy;
pub mod risk;
pub mod signal;
