use crate::allocator::allocate;
use crate::clock;
use crate::errors::SaleError;
use crate::events;
use crate::ledger;
use crate::storage::*;
use crate::types::*;
use crate::whitelist;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Time-boxed Token Sale with Whitelist, Hard Cap and Escrowed Refunds"
);

#[contract]
pub struct TokenSaleContract;

fn require_owner(config: &SaleConfig, caller: &Address) -> Result<(), SaleError> {
    if *caller != config.beneficiary {
        return Err(SaleError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

fn state_at(env: &Env, config: &SaleConfig, now: u64) -> SaleState {
    if is_finalized(env) {
        SaleState::Finalized
    } else if now < config.start_time {
        SaleState::Pending
    } else if now < config.end_time {
        SaleState::Open
    } else {
        SaleState::Closed
    }
}

fn live_supply(env: &Env, config: &SaleConfig) -> i128 {
    token::Client::new(env, &config.token).balance(&env.current_contract_address())
}

#[contractimpl]
impl TokenSaleContract {
    /// Configure the sale. The beneficiary becomes the owner. Tokens for sale
    /// are provided by transferring them to the contract address afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        beneficiary: Address,
        token: Address,
        native_token: Address,
        start_time: u64,
        end_time: u64,
        rate: i128,
        variant: SaleVariant,
    ) -> Result<(), SaleError> {
        if has_config(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        beneficiary.require_auth();

        if start_time >= end_time {
            return Err(SaleError::InvalidWindow);
        }
        if rate <= 0 {
            return Err(SaleError::InvalidRate);
        }
        // Escrow and supply are both read from balances, so the assets must differ.
        if token == native_token {
            return Err(SaleError::SameAsset);
        }

        let config = SaleConfig {
            beneficiary: beneficiary.clone(),
            token: token.clone(),
            native_token,
            start_time,
            end_time,
            rate,
            variant,
        };
        set_config(&env, &config);
        extend_instance(&env);

        events::emit_initialized(
            &env,
            beneficiary,
            token,
            start_time,
            end_time,
            rate,
            variant,
        );
        Ok(())
    }

    /// Buy tokens with `value` native base units.
    ///
    /// Open to everyone inside the window and to whitelisted accounts before
    /// it. If the supply cannot cover the whole request, the sender receives
    /// what is left and the unspent part of `value` is returned in the same
    /// call.
    pub fn contribute(env: Env, sender: Address, value: i128) -> Result<Allocation, SaleError> {
        sender.require_auth();

        let config = get_config(&env)?;
        extend_instance(&env);

        if value <= 0 {
            return Err(SaleError::InvalidAmount);
        }

        let now = clock::now(&env);
        match state_at(&env, &config, now) {
            SaleState::Open => {}
            SaleState::Pending => {
                if !whitelist::has_early_access(&env, &sender) {
                    return Err(SaleError::NotYetOpen);
                }
            }
            SaleState::Closed | SaleState::Finalized => return Err(SaleError::AlreadyClosed),
        }

        let allocation = allocate(value, config.rate, live_supply(&env, &config))?;

        if config.variant == SaleVariant::Escrow && allocation.value_accepted > 0 {
            ledger::credit(&env, &sender, allocation.value_accepted)?;
        }

        let this = env.current_contract_address();
        let native = token::Client::new(&env, &config.native_token);
        native.transfer(&sender, &this, &value);
        if allocation.value_refunded > 0 {
            log!(
                &env,
                "supply short, returning excess",
                sender,
                allocation.value_refunded
            );
            native.transfer(&this, &sender, &allocation.value_refunded);
        }
        if config.variant == SaleVariant::Forwarding && allocation.value_accepted > 0 {
            native.transfer(&this, &config.beneficiary, &allocation.value_accepted);
        }

        token::Client::new(&env, &config.token).transfer(
            &this,
            &sender,
            &allocation.tokens_granted,
        );

        events::emit_contributed(&env, sender, &allocation, now);
        Ok(allocation)
    }

    /// Owner only. Tier 1 or higher lets `account` buy before the window
    /// opens; tier 0 revokes.
    pub fn set_whitelist_status(
        env: Env,
        caller: Address,
        account: Address,
        tier: u32,
    ) -> Result<(), SaleError> {
        let config = get_config(&env)?;
        require_owner(&config, &caller)?;
        extend_instance(&env);

        whitelist::set_tier(&env, &account, tier);

        events::emit_whitelist_updated(&env, account, tier, clock::now(&env));
        Ok(())
    }

    /// Owner only, once, after the window closes. Sends every token the
    /// contract still holds and every unit of native currency not owed to an
    /// escrowed contributor to the beneficiary.
    ///
    /// Calling it while the window is still pending or open fails with
    /// `NotYetClosed`, not `AlreadyClosed`.
    pub fn finalize_sale(env: Env, caller: Address) -> Result<FinalizeReceipt, SaleError> {
        let config = get_config(&env)?;
        require_owner(&config, &caller)?;
        extend_instance(&env);

        let now = clock::now(&env);
        match state_at(&env, &config, now) {
            SaleState::Closed => {}
            SaleState::Finalized => return Err(SaleError::AlreadyFinalized),
            SaleState::Pending | SaleState::Open => return Err(SaleError::NotYetClosed),
        }

        set_finalized(&env);

        let this = env.current_contract_address();
        let native = token::Client::new(&env, &config.native_token);
        let sale_token = token::Client::new(&env, &config.token);

        let native_swept = (native.balance(&this) - ledger::total_escrowed(&env)).max(0);
        if native_swept > 0 {
            native.transfer(&this, &config.beneficiary, &native_swept);
        }

        let tokens_swept = sale_token.balance(&this);
        if tokens_swept > 0 {
            sale_token.transfer(&this, &config.beneficiary, &tokens_swept);
        }

        let receipt = FinalizeReceipt {
            native_swept,
            tokens_swept,
        };
        events::emit_finalized(&env, config.beneficiary, &receipt, now);
        Ok(receipt)
    }

    /// Return the caller's escrowed contribution in full. Available from the
    /// end of the window onwards, before or after finalization.
    pub fn refund(env: Env, contributor: Address) -> Result<i128, SaleError> {
        contributor.require_auth();

        let config = get_config(&env)?;
        extend_instance(&env);

        let now = clock::now(&env);
        if now < config.end_time {
            return Err(SaleError::NothingToRefund);
        }

        let amount = ledger::release(&env, &contributor)?;
        token::Client::new(&env, &config.native_token).transfer(
            &env.current_contract_address(),
            &contributor,
            &amount,
        );

        events::emit_refunded(&env, contributor, amount, now);
        Ok(amount)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, SaleError> {
        let config = get_config(&env)?;
        Ok(state_at(&env, &config, clock::now(&env)))
    }

    pub fn remaining_supply(env: Env) -> Result<i128, SaleError> {
        let config = get_config(&env)?;
        Ok(live_supply(&env, &config))
    }

    pub fn whitelist_tier(env: Env, account: Address) -> u32 {
        whitelist::tier_of(&env, &account)
    }

    pub fn contribution_of(env: Env, contributor: Address) -> i128 {
        ledger::owed(&env, &contributor)
    }

    pub fn total_escrowed(env: Env) -> i128 {
        ledger::total_escrowed(&env)
    }

    pub fn is_finalized(env: Env) -> bool {
        is_finalized(&env)
    }

    /// What `contribute(value)` would yield against the current supply.
    pub fn quote(env: Env, value: i128) -> Result<Allocation, SaleError> {
        let config = get_config(&env)?;
        allocate(value, config.rate, live_supply(&env, &config))
    }
}

#[cfg(any(test, feature = "testutils"))]
#[contractimpl]
impl TokenSaleContract {
    /// Pin the sale clock. Only compiled into test builds.
    pub fn set_mocked_now(env: Env, timestamp: u64) {
        clock::set_mocked_now(&env, timestamp);
    }

    pub fn clear_mocked_now(env: Env) {
        clock::clear_mocked_now(&env);
    }
}
