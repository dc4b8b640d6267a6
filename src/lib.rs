pub mod dataframe;
pub mod error;
pub mod index;
pub mod na;
pub mod scalar;
pub mod series;

// Re-export commonly used types
pub use dataframe::{calculate_drawdown, DataFrame, DrawdownExt, DrawdownPeriod, Row, SortDirection};
pub use error::{Error, Result};
pub use index::{Key, RowIndex};
pub use na::NA;
pub use scalar::Scalar;
pub use series::{Operand, Series};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
