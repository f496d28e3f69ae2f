//! Module for reading SWIFT console output
//!
//! A run writes everything it has to say to stdout, which is usually captured
//! to a log file by the batch system. That text is free-form, but a handful of
//! values always appear in a recognisable shape:
//!
//! - [Stdout] - Primary data structure holding the captured lines
//!
//! | Data                | Description                                           |
//! | ------------------- | ----------------------------------------------------- |
//! | [Field]             | one-off scalars such as particle and rank counts      |
//! | [Timesteps]         | the step table, one [TimestepRecord] per step         |
//! | [SchedulerReport]   | time per task [Category] from every scheduler report  |
//!
//! The step table layout has changed between code versions and is described
//! by a [ColumnMap]. [ColumnMap::V2] is used unless told otherwise.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use swtools_stdout::{Stdout, DEFAULT_HEADER_LINES};
//! // Read all lines of the captured output
//! let stdout = Stdout::from_file("/path/to/output.log").unwrap();
//!
//! // One-off values
//! let particles = stdout.num_particles().unwrap();
//! let ranks = stdout.num_ranks().unwrap();
//!
//! // Every step of the run
//! let steps = stdout.parse_timesteps(DEFAULT_HEADER_LINES).unwrap();
//! println!("{} steps took {:.2}", steps.len(), steps.total_duration());
//!
//! // Time spent per task, averaged per thread, without empty categories
//! let report = stdout.scheduler_report_per_thread(true).unwrap();
//! ```

mod core;
mod error;
mod parsers;
mod reader;
mod stdout;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, IntegrityError, Result};

#[doc(inline)]
pub use stdout::{Stdout, Strictness, DEFAULT_HEADER_LINES};

#[doc(inline)]
pub use crate::core::*;
