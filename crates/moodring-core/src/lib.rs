//! Pure views over the mood submission log.
//!
//! Everything here is a synchronous function of the snapshot it is given:
//! no I/O, no shared state, and no failure modes beyond whatever the
//! caller already handled when it fetched the snapshot. Calling the same
//! function twice on the same snapshot yields the same answer.

pub mod export;
pub mod stats;
pub mod trend;

pub use export::format_export;
pub use stats::compute_stats;
pub use trend::{DEFAULT_BUCKET_COUNT, DEFAULT_BUCKET_MINUTES, compute_trend};
