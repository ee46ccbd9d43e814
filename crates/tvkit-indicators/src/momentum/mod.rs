//! Momentum oscillators.

pub mod cci;
pub mod rsi;
pub mod slow_stoch;
pub mod smio;
pub mod stoch;
pub mod trix;
pub mod tsi;

pub use cci::cci;
pub use rsi::rsi;
pub use slow_stoch::{slow_stoch, SlowStochOutput};
pub use smio::smio;
pub use stoch::stoch;
pub use trix::trix;
pub use tsi::tsi;
