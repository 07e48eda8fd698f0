use crate::types::{Allocation, FinalizeReceipt, SaleVariant};
use soroban_sdk::{contracttype, symbol_short, Address, Env};

// Topics are (SALE, <action>); indexers can subscribe on the first topic.

#[derive(Clone)]
#[contracttype]
pub struct SaleInitializedEvent {
    pub beneficiary: Address,
    pub token: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub rate: i128,
    pub variant: SaleVariant,
}

#[derive(Clone)]
#[contracttype]
pub struct ContributedEvent {
    pub contributor: Address,
    pub tokens_granted: i128,
    pub value_accepted: i128,
    pub value_refunded: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct WhitelistEvent {
    pub account: Address,
    pub tier: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct FinalizedEvent {
    pub beneficiary: Address,
    pub native_swept: i128,
    pub tokens_swept: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct RefundedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn emit_initialized(
    env: &Env,
    beneficiary: Address,
    token: Address,
    start_time: u64,
    end_time: u64,
    rate: i128,
    variant: SaleVariant,
) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("init")),
        SaleInitializedEvent {
            beneficiary,
            token,
            start_time,
            end_time,
            rate,
            variant,
        },
    );
}

pub fn emit_contributed(env: &Env, contributor: Address, allocation: &Allocation, timestamp: u64) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("contrib")),
        ContributedEvent {
            contributor,
            tokens_granted: allocation.tokens_granted,
            value_accepted: allocation.value_accepted,
            value_refunded: allocation.value_refunded,
            timestamp,
        },
    );
}

pub fn emit_whitelist_updated(env: &Env, account: Address, tier: u32, timestamp: u64) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("whitelist")),
        WhitelistEvent {
            account,
            tier,
            timestamp,
        },
    );
}

pub fn emit_finalized(env: &Env, beneficiary: Address, receipt: &FinalizeReceipt, timestamp: u64) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("finalized")),
        FinalizedEvent {
            beneficiary,
            native_swept: receipt.native_swept,
            tokens_swept: receipt.tokens_swept,
            timestamp,
        },
    );
}

pub fn emit_refunded(env: &Env, contributor: Address, amount: i128, timestamp: u64) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("refunded")),
        RefundedEvent {
            contributor,
            amount,
            timestamp,
        },
    );
}
