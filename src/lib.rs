//! # Soroban Diary Ledger
//!
//! Profiles, dated diary entries and follower tokens for the Soroban
//! blockchain.
//!
//! - An account's first profile is free; later profiles cost a flat fee.
//! - Each profile gets one free diary entry per UTC day; later entries on
//!   the same day cost the diary saving fee.
//! - Follower tokens are sold per unit, with a percentage discount for bulk
//!   purchases.
//!
//! Fees are paid in a Stellar Asset Contract token chosen at initialization.
//! Diary content is stored off-chain; entries only hold a URI. Off-chain
//! consumers follow the events this contract publishes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&owner, &payment_token, &saving_fee, &cover_fee, &initial_uri);
//!
//! let profile_id = client.create_profile(&caller, &uri, &false, &0);
//! let diary_id = client.create_diary(&caller, &profile_id, &entry_uri, &0, &0);
//! client.buy_follower_tokens(&caller, &100, &client.follower_price(&100));
//! ```

#![no_std]

mod config;
mod date;
mod diary;
mod events;
mod market;
mod payment;
mod profile;
mod registry;
mod storage;
mod validation;

pub use config::{
    Config, FeeSchedule, DEFAULT_ADDITIONAL_PROFILE_FEE, DEFAULT_BULK_DISCOUNT_RATE,
    DEFAULT_BULK_DISCOUNT_THRESHOLD, DEFAULT_FOLLOWER_UNIT_PRICE, DEFAULT_PRICE_DENOMINATOR,
    FOLLOWER_TOKEN_ID, OWNER_INITIAL_FOLLOWERS,
};
pub use date::{
    days_in_month, from_timestamp, is_leap_year, to_timestamp, Date, MAX_TIMESTAMP, SECONDS_PER_DAY,
};
pub use diary::DiaryEntry;
pub use events::{DiaryCreated, FeesWithdrawn, LedgerEvent, ProfileMint, TokenMinted};
pub use profile::{Profile, Visibility};
pub use storage::LedgerKey;

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

use crate::events::Outcome;

/// Error codes for the diary ledger contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not authorized for this operation.
    NotAuthorized = 3,
    /// Payment is below the fee the operation requires.
    InsufficientFee = 4,
    /// Caller does not own the referenced profile.
    ProfileNotOwnedByYou = 5,
    /// Referenced profile, diary entry or token does not exist.
    InvalidReference = 6,
    /// Amount is negative, or zero where value must move.
    InvalidAmount = 7,
    /// A counter or balance would overflow.
    ArithmeticOverflow = 8,
}

#[contract]
pub struct DiaryLedgerContract;

#[contractimpl]
impl DiaryLedgerContract {
    // ========== Initialization ==========

    /// Initialize the ledger.
    ///
    /// Stores the fee schedule, mints the owner's starting follower tokens
    /// and creates the owner's public profile at `initial_uri`. Neither the
    /// tokens nor the profile are charged.
    ///
    /// # Arguments
    /// * `owner` - Account that may withdraw collected fees
    /// * `payment_token` - Stellar Asset Contract every fee is paid in
    /// * `diary_saving_fee` - Fee for each same-day entry after the first
    /// * `diary_cover_fee` - Published cover fee
    /// * `initial_uri` - URI of the owner's bootstrap profile
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called twice
    /// - `InvalidAmount` if either fee is negative
    pub fn init(
        env: Env,
        owner: Address,
        payment_token: Address,
        diary_saving_fee: i128,
        diary_cover_fee: i128,
        initial_uri: String,
    ) -> Result<(), LedgerError> {
        if storage::is_initialized(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }

        owner.require_auth();
        validation::require_payment(diary_saving_fee)?;
        validation::require_payment(diary_cover_fee)?;

        let config = Config {
            owner: owner.clone(),
            payment_token,
        };
        let fees = FeeSchedule::with_diary_fees(diary_saving_fee, diary_cover_fee);
        storage::set_config(&env, &config, &fees);
        storage::extend_instance(&env);

        let minted = market::mint(&env, &owner, OWNER_INITIAL_FOLLOWERS)?;
        let profile = registry::mint_profile(&env, &owner, initial_uri, Visibility::Public)?;

        log!(&env, "diary ledger initialized", owner);

        minted.merge(profile).publish(&env);
        Ok(())
    }

    /// Get the owner address.
    pub fn owner(env: Env) -> Result<Address, LedgerError> {
        Ok(storage::config(&env)?.owner)
    }

    /// Get the token fees are paid in.
    pub fn payment_token(env: Env) -> Result<Address, LedgerError> {
        Ok(storage::config(&env)?.payment_token)
    }

    // ========== Fee Schedule ==========

    /// Get the full fee schedule.
    pub fn fee_schedule(env: Env) -> Result<FeeSchedule, LedgerError> {
        storage::fees(&env)
    }

    /// Fee for every profile after an account's first.
    pub fn additional_profile_fee(env: Env) -> Result<i128, LedgerError> {
        Ok(storage::fees(&env)?.additional_profile_fee)
    }

    /// Fee for each same-day diary entry after the first.
    pub fn diary_saving_fee(env: Env) -> Result<i128, LedgerError> {
        Ok(storage::fees(&env)?.diary_saving_fee)
    }

    /// Get the diary cover fee.
    pub fn diary_cover_fee(env: Env) -> Result<i128, LedgerError> {
        Ok(storage::fees(&env)?.diary_cover_fee)
    }

    /// Price of one block of `price_denominator` follower tokens.
    pub fn follower_unit_price(env: Env) -> Result<i128, LedgerError> {
        Ok(storage::fees(&env)?.follower_unit_price)
    }

    /// Minimum purchase size that receives the bulk discount.
    pub fn bulk_discount_threshold(env: Env) -> Result<u64, LedgerError> {
        Ok(storage::fees(&env)?.bulk_discount_threshold)
    }

    /// Bulk discount in percent.
    pub fn bulk_discount_rate(env: Env) -> Result<u32, LedgerError> {
        Ok(storage::fees(&env)?.bulk_discount_rate)
    }

    // ========== Profiles ==========

    /// Create a profile owned by `caller`.
    ///
    /// The caller's first profile is free. Every later one requires
    /// `paid >= additional_profile_fee`; the full `paid` amount is
    /// transferred to the contract.
    ///
    /// # Returns
    /// The new profile id
    ///
    /// # Errors
    /// - `InsufficientFee` if a fee is due and `paid` is below it
    /// - `InvalidAmount` if `paid` is negative
    pub fn create_profile(
        env: Env,
        caller: Address,
        uri: String,
        is_private: bool,
        paid: i128,
    ) -> Result<u64, LedgerError> {
        caller.require_auth();
        validation::require_payment(paid)?;
        let config = storage::config(&env)?;

        let outcome = registry::create_profile(&env, &caller, uri, is_private, paid)?;
        payment::collect(&env, &config, &caller, paid);
        storage::extend_instance(&env);

        Ok(outcome.publish(&env))
    }

    /// Get a profile by id.
    pub fn profile(env: Env, profile_id: u64) -> Result<Profile, LedgerError> {
        registry::profile(&env, profile_id)
    }

    /// Check whether `account` owns `profile_id`.
    pub fn is_owned_by(env: Env, profile_id: u64, account: Address) -> Result<bool, LedgerError> {
        registry::is_owned_by(&env, profile_id, &account)
    }

    /// Fee `account` would pay for their next profile.
    pub fn profile_fee_due(env: Env, account: Address) -> Result<i128, LedgerError> {
        registry::profile_fee_due(&env, &account)
    }

    /// Get total profile count.
    pub fn profile_count(env: Env) -> u64 {
        storage::counter(&env, &LedgerKey::ProfileSeq)
    }

    /// Number of profiles owned by `account`.
    pub fn profile_count_of(env: Env, account: Address) -> u64 {
        storage::owned_profiles(&env, &account)
    }

    /// Public profile id at `index`, in creation order.
    pub fn public_profile_id(env: Env, index: u32) -> Result<u64, LedgerError> {
        registry::public_profile_id(&env, index)
    }

    /// Number of profiles in the public index.
    pub fn public_profile_count(env: Env) -> u32 {
        storage::public_profile_count(&env)
    }

    // ========== Diary ==========

    /// Save a diary entry to a profile owned by `caller`.
    ///
    /// The entry is dated by the ledger close time. The first entry for a
    /// profile on a given UTC day is free; later ones require
    /// `paid >= diary_saving_fee`.
    ///
    /// # Returns
    /// The new diary id
    ///
    /// # Errors
    /// - `InvalidReference` if the profile does not exist
    /// - `ProfileNotOwnedByYou` if `caller` does not own the profile
    /// - `InsufficientFee` if a fee is due and `paid` is below it
    /// - `InvalidAmount` if `paid` is negative
    pub fn create_diary(
        env: Env,
        caller: Address,
        profile_id: u64,
        uri: String,
        cover_id: u64,
        paid: i128,
    ) -> Result<u64, LedgerError> {
        caller.require_auth();
        validation::require_payment(paid)?;
        let config = storage::config(&env)?;

        let outcome = diary::create_diary(&env, &caller, profile_id, uri, cover_id, paid)?;
        payment::collect(&env, &config, &caller, paid);
        storage::extend_instance(&env);

        Ok(outcome.publish(&env))
    }

    /// Get a diary entry by id.
    pub fn diary(env: Env, diary_id: u64) -> Result<DiaryEntry, LedgerError> {
        diary::diary(&env, diary_id)
    }

    /// Number of entries saved to `profile_id` on `date`.
    pub fn diary_count(env: Env, profile_id: u64, date: Date) -> u64 {
        storage::diary_count(&env, profile_id, date)
    }

    /// Total diary entries across all profiles.
    pub fn diary_total(env: Env) -> u64 {
        storage::counter(&env, &LedgerKey::DiarySeq)
    }

    /// Fee for the next entry saved to `profile_id` today.
    pub fn diary_fee_due(env: Env, profile_id: u64) -> Result<i128, LedgerError> {
        diary::diary_fee_due(&env, profile_id)
    }

    /// Calendar date the ledger currently buckets entries under.
    pub fn today(env: Env) -> Date {
        diary::today(&env)
    }

    // ========== Follower Tokens ==========

    /// Buy `quantity` follower tokens.
    ///
    /// # Errors
    /// - `InsufficientFee` if `paid` is below `follower_price(quantity)`
    /// - `InvalidAmount` if `paid` is negative
    pub fn buy_follower_tokens(
        env: Env,
        caller: Address,
        quantity: u64,
        paid: i128,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        validation::require_payment(paid)?;
        let config = storage::config(&env)?;

        let outcome = market::buy_follower_tokens(&env, &caller, quantity, paid)?;
        payment::collect(&env, &config, &caller, paid);
        storage::extend_instance(&env);

        outcome.publish(&env);
        Ok(())
    }

    /// Price of `quantity` follower tokens, bulk discount applied.
    pub fn follower_price(env: Env, quantity: u64) -> Result<i128, LedgerError> {
        market::follower_price(&env, quantity)
    }

    /// Balance of `account` for `token_id`.
    pub fn balance_of(env: Env, account: Address, token_id: u32) -> Result<u64, LedgerError> {
        market::balance_of(&env, &account, token_id)
    }

    // ========== Treasury ==========

    /// Send collected fees to `to` (owner only).
    pub fn withdraw(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        caller.require_auth();
        let config = storage::config(&env)?;
        if caller != config.owner {
            return Err(LedgerError::NotAuthorized);
        }
        validation::require_positive(amount)?;

        payment::disburse(&env, &config, &to, amount);
        storage::extend_instance(&env);

        Outcome::new(&env, ())
            .with_event(LedgerEvent::FeesWithdrawn(FeesWithdrawn { to, amount }))
            .publish(&env);
        Ok(())
    }
}
