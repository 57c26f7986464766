//! Diary entry ledger.
//!
//! Entries are bucketed by profile and UTC calendar day of the ledger
//! timestamp. The first entry in a bucket is free; each later entry in the
//! same bucket costs the diary saving fee.

use soroban_sdk::{contracttype, log, Address, Env, String};

use crate::date::{self, Date};
use crate::events::{DiaryCreated, LedgerEvent, Outcome};
use crate::registry;
use crate::storage::{self, LedgerKey};
use crate::validation;
use crate::LedgerError;

/// A dated record pointing at externally stored content.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiaryEntry {
    pub id: u64,
    pub profile_id: u64,
    pub date: Date,
    pub uri: String,
    pub cover_id: u64,
}

/// Calendar day of the current ledger close time.
pub fn today(env: &Env) -> Date {
    date::from_timestamp(env.ledger().timestamp())
}

/// Fee for the next entry saved to `profile_id` today.
pub fn diary_fee_due(env: &Env, profile_id: u64) -> Result<i128, LedgerError> {
    registry::profile(env, profile_id)?;
    let fees = storage::fees(env)?;
    if storage::diary_count(env, profile_id, today(env)) == 0 {
        Ok(0)
    } else {
        Ok(fees.diary_saving_fee)
    }
}

/// Save a diary entry to a profile owned by `caller`.
pub fn create_diary(
    env: &Env,
    caller: &Address,
    profile_id: u64,
    uri: String,
    cover_id: u64,
    paid: i128,
) -> Result<Outcome<u64>, LedgerError> {
    if !registry::is_owned_by(env, profile_id, caller)? {
        return Err(LedgerError::ProfileNotOwnedByYou);
    }

    let date = today(env);
    let fees = storage::fees(env)?;
    let saved_today = storage::diary_count(env, profile_id, date);
    if saved_today > 0 {
        validation::require_fee(paid, fees.diary_saving_fee)?;
    }

    let count = saved_today
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    let id = storage::counter(env, &LedgerKey::DiarySeq)
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    let entry = DiaryEntry {
        id,
        profile_id,
        date,
        uri: uri.clone(),
        cover_id,
    };

    storage::set_counter(env, &LedgerKey::DiarySeq, id);
    storage::put(env, &LedgerKey::DiaryCount(profile_id, date), &count);
    storage::put(env, &LedgerKey::Diary(id), &entry);

    log!(env, "diary created", profile_id, id, count);

    Ok(Outcome::new(env, id).with_event(LedgerEvent::DiaryCreated(DiaryCreated {
        profile_id,
        diary_id: id,
        date,
        uri,
    })))
}

pub fn diary(env: &Env, diary_id: u64) -> Result<DiaryEntry, LedgerError> {
    storage::diary(env, diary_id).ok_or(LedgerError::InvalidReference)
}
