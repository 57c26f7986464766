//! Storage key definitions and typed accessors for the diary ledger.
//!
//! All ledger state lives behind these helpers. Instance storage holds the
//! configuration and the id sequences; persistent storage holds one entry
//! per profile, diary entry, date bucket and balance.

use soroban_sdk::{contracttype, Address, Env};

use crate::config::{Config, FeeSchedule};
use crate::date::Date;
use crate::diary::DiaryEntry;
use crate::profile::Profile;
use crate::LedgerError;

/// Storage keys for the diary ledger contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum LedgerKey {
    /// Owner and payment token.
    Config,

    /// Fee schedule, immutable after init.
    Fees,

    /// Last allocated profile id.
    ProfileSeq,

    /// Last allocated diary id.
    DiarySeq,

    /// Number of entries in the public profile index.
    PublicProfileCount,

    /// Maps profile id to Profile.
    Profile(u64),

    /// Maps index position to public profile id.
    PublicProfile(u32),

    /// Number of profiles owned by an account.
    OwnedProfiles(Address),

    /// Maps diary id to DiaryEntry.
    Diary(u64),

    /// Entries saved for a profile on a given day.
    DiaryCount(u64, Date),

    /// Follower token balance of an account.
    Followers(Address),
}

/// Time-to-live for ledger data in ledger entries.
pub const LEDGER_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const LEDGER_TTL_EXTEND: u32 = 2592000; // ~150 days

// ========== Instance ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&LedgerKey::Config)
}

pub fn config(env: &Env) -> Result<Config, LedgerError> {
    env.storage()
        .instance()
        .get(&LedgerKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

pub fn fees(env: &Env) -> Result<FeeSchedule, LedgerError> {
    env.storage()
        .instance()
        .get(&LedgerKey::Fees)
        .ok_or(LedgerError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config, fees: &FeeSchedule) {
    env.storage().instance().set(&LedgerKey::Config, config);
    env.storage().instance().set(&LedgerKey::Fees, fees);
}

pub fn counter(env: &Env, key: &LedgerKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub fn set_counter(env: &Env, key: &LedgerKey, value: u64) {
    env.storage().instance().set(key, &value);
}

pub fn public_profile_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&LedgerKey::PublicProfileCount)
        .unwrap_or(0)
}

pub fn set_public_profile_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&LedgerKey::PublicProfileCount, &count);
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_TTL_THRESHOLD, LEDGER_TTL_EXTEND);
}

// ========== Persistent ==========

pub fn profile(env: &Env, id: u64) -> Option<Profile> {
    env.storage().persistent().get(&LedgerKey::Profile(id))
}

pub fn public_profile(env: &Env, index: u32) -> Option<u64> {
    env.storage().persistent().get(&LedgerKey::PublicProfile(index))
}

pub fn owned_profiles(env: &Env, owner: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&LedgerKey::OwnedProfiles(owner.clone()))
        .unwrap_or(0)
}

pub fn diary(env: &Env, id: u64) -> Option<DiaryEntry> {
    env.storage().persistent().get(&LedgerKey::Diary(id))
}

pub fn diary_count(env: &Env, profile_id: u64, date: Date) -> u64 {
    env.storage()
        .persistent()
        .get(&LedgerKey::DiaryCount(profile_id, date))
        .unwrap_or(0)
}

pub fn followers(env: &Env, account: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&LedgerKey::Followers(account.clone()))
        .unwrap_or(0)
}

/// Write a persistent entry and extend its TTL.
pub fn put<V>(env: &Env, key: &LedgerKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_TTL_THRESHOLD, LEDGER_TTL_EXTEND);
}
