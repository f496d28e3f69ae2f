//! Common utility for extended `std` types and simple physical quantities
//!
//! These are left public for convenience.
//!
//! For example, capitalising a string or using prettier formatting for
//! scientific numbers are useful everywhere, and every duration pulled out of
//! a simulation run carries its unit around as a [Time].

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod option_ext;
mod string_ext;
mod units;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use option_ext::OptionExt;
pub use string_ext::StringExt;
pub use units::{Time, TimeUnit};
pub use value_ext::ValueExt;
