#[macro_use]
pub mod utils;

pub mod cell;
pub mod grid;
