// Modules under core, split into files for convenience
mod columns;
mod field;
mod scheduler;
mod timestep;

// Re-exports of the key public data structures
pub use columns::ColumnMap;
pub use field::Field;
pub use scheduler::{Category, SchedulerReport};
pub use timestep::{TimestepRecord, Timesteps};
