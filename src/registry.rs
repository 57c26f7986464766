//! Profile registry.
//!
//! An account's first profile is free; every later one costs the
//! additional profile fee. Public profiles are also appended to an index
//! kept in creation order.

use soroban_sdk::{log, xdr::ToXdr, Address, Env, String};

use crate::events::{LedgerEvent, Outcome, ProfileMint};
use crate::profile::{Profile, Visibility};
use crate::storage::{self, LedgerKey};
use crate::validation;
use crate::LedgerError;

/// Fee `owner` must pay for their next profile.
pub fn profile_fee_due(env: &Env, owner: &Address) -> Result<i128, LedgerError> {
    let fees = storage::fees(env)?;
    if storage::owned_profiles(env, owner) == 0 {
        Ok(0)
    } else {
        Ok(fees.additional_profile_fee)
    }
}

/// Create a profile for `caller`, charging the fee if they already own one.
pub fn create_profile(
    env: &Env,
    caller: &Address,
    uri: String,
    is_private: bool,
    paid: i128,
) -> Result<Outcome<u64>, LedgerError> {
    let required = profile_fee_due(env, caller)?;
    validation::require_fee(paid, required)?;

    mint_profile(env, caller, uri, Visibility::from_private_flag(is_private))
}

/// Record a new profile without any fee check.
///
/// Used directly only by initialization.
pub(crate) fn mint_profile(
    env: &Env,
    owner: &Address,
    uri: String,
    visibility: Visibility,
) -> Result<Outcome<u64>, LedgerError> {
    let id = storage::counter(env, &LedgerKey::ProfileSeq)
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    let owned = storage::owned_profiles(env, owner)
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    let public_index = storage::public_profile_count(env);
    if visibility == Visibility::Public && public_index == u32::MAX {
        return Err(LedgerError::ArithmeticOverflow);
    }

    let uri_hash = env.crypto().sha256(&uri.clone().to_xdr(env)).into();
    let profile = Profile::new(id, owner.clone(), visibility, uri);

    storage::set_counter(env, &LedgerKey::ProfileSeq, id);
    storage::put(env, &LedgerKey::Profile(id), &profile);
    storage::put(env, &LedgerKey::OwnedProfiles(owner.clone()), &owned);
    if profile.is_public() {
        storage::put(env, &LedgerKey::PublicProfile(public_index), &id);
        storage::set_public_profile_count(env, public_index + 1);
    }

    log!(env, "profile minted", id, owner.clone());

    Ok(Outcome::new(env, id).with_event(LedgerEvent::ProfileMint(ProfileMint {
        owner: owner.clone(),
        profile_id: id,
        uri_hash,
    })))
}

pub fn profile(env: &Env, profile_id: u64) -> Result<Profile, LedgerError> {
    storage::profile(env, profile_id).ok_or(LedgerError::InvalidReference)
}

/// Whether `account` owns `profile_id`. Unknown profiles are an error.
pub fn is_owned_by(env: &Env, profile_id: u64, account: &Address) -> Result<bool, LedgerError> {
    Ok(profile(env, profile_id)?.is_owned_by(account))
}

/// Id of the public profile at `index` in creation order.
pub fn public_profile_id(env: &Env, index: u32) -> Result<u64, LedgerError> {
    storage::public_profile(env, index).ok_or(LedgerError::InvalidReference)
}
