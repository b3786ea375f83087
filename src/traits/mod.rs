//! Core traits for classable construction.

mod classify;
mod constructible;

pub use classify::{Classify, Shape};
pub use constructible::{Constructible, StaticMethods};
