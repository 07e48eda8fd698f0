use soroban_sdk::{contracttype, Address};

/// Where accepted contributions go.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleVariant {
    /// Public sale: accepted funds are forwarded to the beneficiary on every
    /// contribution. No refunds.
    Forwarding,
    /// Pre-sale: accepted funds stay in contract custody and each contributor
    /// can reclaim their own balance once the window has closed.
    Escrow,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleState {
    Pending,
    Open,
    Closed,
    Finalized,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    /// Receives proceeds and residual tokens. Also the contract owner.
    pub beneficiary: Address,
    /// Token being sold. The contract's balance of it is the remaining supply.
    pub token: Address,
    /// Asset contract of the currency contributions are paid in.
    pub native_token: Address,
    pub start_time: u64,
    pub end_time: u64,
    /// Token base units per native base unit.
    pub rate: i128,
    pub variant: SaleVariant,
}

/// Outcome of a single contribution.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub tokens_granted: i128,
    pub value_accepted: i128,
    /// Returned to the sender in the same call when the supply ran short.
    pub value_refunded: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinalizeReceipt {
    pub native_swept: i128,
    pub tokens_swept: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Finalized,
    TotalEscrowed,
    MockedNow,
    Whitelist(Address),
    Contribution(Address),
}
