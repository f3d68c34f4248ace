//! Calculation engine: validation, position sizing, profit targets, stop assessment.

mod assessment;
mod calculator;
mod position_sizer;
mod targets;
mod validation;

pub use assessment::{assess_stop, StopQuality};
pub use calculator::compute;
pub use targets::REWARD_MULTIPLES;
pub use validation::{MAX_ADVISED_LOTS, MAX_CUSTOM_PIP_VALUE, MIN_CUSTOM_PIP_VALUE, MIN_LOT_SIZE};
