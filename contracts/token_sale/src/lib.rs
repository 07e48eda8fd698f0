#![no_std]

pub mod allocator;
mod clock;
mod contract;
mod errors;
mod events;
mod ledger;
mod storage;
mod types;
mod whitelist;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::SaleError;
pub use events::{
    ContributedEvent, FinalizedEvent, RefundedEvent, SaleInitializedEvent, WhitelistEvent,
};
pub use types::{Allocation, FinalizeReceipt, SaleConfig, SaleState, SaleVariant};
pub use whitelist::EARLY_ACCESS_TIER;
