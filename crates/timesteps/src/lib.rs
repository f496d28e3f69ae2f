//! Module for working with SWIFT timesteps files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod reader;
mod scaling;
mod timeline;

// Inline anything important for a nice public API
#[doc(inline)]
pub use timeline::{Timeline, TimelineRow};

#[doc(inline)]
pub use reader::{find_timesteps_file, read_timesteps_file, time_to_solution};

#[doc(inline)]
pub use scaling::{normalised_points, speedup, Scaling, ScalingPoint, Speedup};

#[doc(inline)]
pub use error::{Error, Result};
