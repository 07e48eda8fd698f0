//! Time source for the sale window.
//!
//! Production builds read the ledger close time. Test builds (`cfg(test)` or the
//! `testutils` feature) can pin the clock to an explicit timestamp stored in
//! instance storage, which lets a test walk the sale through its states without
//! touching the ledger.

use soroban_sdk::Env;

#[cfg(any(test, feature = "testutils"))]
use crate::types::DataKey;

pub fn now(env: &Env) -> u64 {
    mocked_now(env).unwrap_or_else(|| env.ledger().timestamp())
}

#[cfg(any(test, feature = "testutils"))]
fn mocked_now(env: &Env) -> Option<u64> {
    env.storage().instance().get(&DataKey::MockedNow)
}

#[cfg(not(any(test, feature = "testutils")))]
fn mocked_now(_env: &Env) -> Option<u64> {
    None
}

#[cfg(any(test, feature = "testutils"))]
pub fn set_mocked_now(env: &Env, timestamp: u64) {
    env.storage().instance().set(&DataKey::MockedNow, &timestamp);
}

#[cfg(any(test, feature = "testutils"))]
pub fn clear_mocked_now(env: &Env) {
    env.storage().instance().remove(&DataKey::MockedNow);
}
