use crate::errors::SaleError;
use crate::types::{DataKey, SaleConfig};
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Escrow and whitelist entries must outlive the sale window plus the refund period.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}

pub fn get_total_escrowed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalEscrowed)
        .unwrap_or(0)
}

pub fn set_total_escrowed(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalEscrowed, &amount);
}

pub fn get_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn remove_contribution(env: &Env, contributor: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Contribution(contributor.clone()));
}

pub fn get_whitelist_tier(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelist(account.clone()))
        .unwrap_or(0)
}

pub fn set_whitelist_tier(env: &Env, account: &Address, tier: u32) {
    let key = DataKey::Whitelist(account.clone());
    env.storage().persistent().set(&key, &tier);
    extend_persistent(env, &key);
}

pub fn remove_whitelist_tier(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Whitelist(account.clone()));
}
