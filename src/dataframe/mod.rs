// DataFrame implementations module
pub mod base;
pub mod drawdown;

// Re-exports for convenience
pub use base::{DataFrame, Row, SortDirection};
pub use drawdown::{calculate_drawdown, DrawdownExt, DrawdownPeriod};
