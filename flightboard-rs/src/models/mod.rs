mod aircraft;
mod flight;
mod flight_number;
mod iata_code;
mod registration;
mod status;

pub use aircraft::*;
pub use flight::*;
pub use flight_number::*;
pub use iata_code::*;
pub use registration::*;
pub use status::*;
