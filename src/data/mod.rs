pub mod correlation;
pub mod filter;
pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use correlation::CorrelationMatrix;
pub use filter::Selection;
pub use source::{GameLog, RawRow};
pub use stats::PointsSummary;
