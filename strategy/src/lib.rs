#![no_std]

mod constants;
mod errors;
pub mod storage;
mod contract;
mod strategy;
pub mod dependencies;
mod types;
mod events;

pub use constants::{PERFORMANCE_FEE, SCALAR_7};
pub use contract::*;
pub use errors::StrategyError;
pub use types::*;
