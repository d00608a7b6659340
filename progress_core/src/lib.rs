//! Shared learner progress model for FunnyMath.
//!
//! Both the client-side store and the progress API build on [`next_record`],
//! so the two sides always agree on point totals and levels.

pub mod client;
pub mod content;
pub mod progress;

pub use client::ClientProgressStore;
pub use content::{ContentCategory, ContentEntry};
pub use progress::{POINTS_PER_LEVEL, Progress, ProgressRecord, level_for_points, next_record};
