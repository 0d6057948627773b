#![no_std]

mod constants;
mod errors;
mod storage;
mod contract;
pub use contract::{VaultContract, VaultContractClient, VaultClient};
pub use errors::VaultError;
mod shares;
mod dependencies;
mod events;
