use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Configuration
    InvalidConfig = 500,
    AlreadyBound = 501,

    // Authorization
    Unauthorized = 510,

    // Amount validation
    ZeroAmount = 520,
}
