//! Domain types for quartermark.

pub mod bar;

pub use bar::{Bar, BarRead};
