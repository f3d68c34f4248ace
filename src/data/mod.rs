//! Static reference tables: pip values and stop-loss recommendations.

mod pip_values;
mod stop_loss;

pub use pip_values::{PipValueTable, DEFAULT_PIP_VALUE};
pub use stop_loss::StopLossTable;
