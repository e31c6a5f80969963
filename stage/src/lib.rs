//! Stage plumbing around a performance.
//!
//! [`BatchProcessor`] pushes a setlist through a caller supplied step until
//! the first failure. [`StageEvent`] and [`StageFlags`] describe what happens
//! on stage while it runs.

pub mod batch;
pub mod event;
pub mod flags;

pub use batch::{BatchError, BatchOutcome, BatchProcessor};
pub use event::StageEvent;
pub use flags::StageFlags;
