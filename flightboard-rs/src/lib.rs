#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a library for reading departure-board schedule dumps copied
//! from flight-tracking sites

pub mod error;
mod models;
mod schedule_dump;

pub use error::*;
pub use models::*;
pub use schedule_dump::*;
