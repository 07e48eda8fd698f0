//! Escrowed contributions for the pre-sale variant.
//!
//! Each credit and release updates the per-address balance and the running
//! `TotalEscrowed` together, so the sweep in `finalize_sale` can tell earmarked
//! funds apart from the rest of the contract balance without iterating.

use crate::errors::SaleError;
use crate::storage::{
    get_contribution, get_total_escrowed, remove_contribution, set_contribution,
    set_total_escrowed,
};
use soroban_sdk::{Address, Env};

pub fn owed(env: &Env, contributor: &Address) -> i128 {
    get_contribution(env, contributor)
}

pub fn total_escrowed(env: &Env) -> i128 {
    get_total_escrowed(env)
}

/// Adds `amount` to the contributor's balance and returns the new balance.
pub fn credit(env: &Env, contributor: &Address, amount: i128) -> Result<i128, SaleError> {
    if amount <= 0 {
        return Err(SaleError::InvalidAmount);
    }
    let balance = get_contribution(env, contributor)
        .checked_add(amount)
        .ok_or(SaleError::InvalidAmount)?;
    let total = get_total_escrowed(env)
        .checked_add(amount)
        .ok_or(SaleError::InvalidAmount)?;

    set_contribution(env, contributor, balance);
    set_total_escrowed(env, total);
    Ok(balance)
}

/// Empties the contributor's balance and returns what was owed. No partial
/// releases.
pub fn release(env: &Env, contributor: &Address) -> Result<i128, SaleError> {
    let amount = get_contribution(env, contributor);
    if amount <= 0 {
        return Err(SaleError::NothingToRefund);
    }

    remove_contribution(env, contributor);
    set_total_escrowed(env, get_total_escrowed(env) - amount);
    Ok(amount)
}
