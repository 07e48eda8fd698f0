use crate::storage::{get_whitelist_tier, remove_whitelist_tier, set_whitelist_tier};
use soroban_sdk::{Address, Env};

/// Lowest tier that may buy before the window opens. Higher tiers are
/// accepted but currently carry no extra rights.
pub const EARLY_ACCESS_TIER: u32 = 1;

pub fn tier_of(env: &Env, account: &Address) -> u32 {
    get_whitelist_tier(env, account)
}

pub fn has_early_access(env: &Env, account: &Address) -> bool {
    tier_of(env, account) >= EARLY_ACCESS_TIER
}

/// Tier 0 drops the entry rather than storing a zero.
pub fn set_tier(env: &Env, account: &Address, tier: u32) {
    if tier == 0 {
        remove_whitelist_tier(env, account);
    } else {
        set_whitelist_tier(env, account, tier);
    }
}
