#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod day_bounds;
mod error;
mod operating_window;
mod selection;

pub use day_bounds::*;
pub use error::*;
pub use operating_window::*;
pub use selection::*;
