mod config;
pub use config::{execute_initialize, execute_set_vault};
mod venue;
pub use venue::{balance_of_gauge, balance_of_want, execute_deposit, execute_withdraw};
mod harvest;
pub use harvest::execute_harvest;
mod fees;
