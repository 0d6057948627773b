use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Amount validation errors
    ZeroAmount = 4041,
    InsufficientShares = 4042,
    ZeroShares = 4043,

    // Depositor errors
    InsufficientFunds = 4044,
}
