//! Follower token market.
//!
//! Follower tokens are minted on purchase and never transferred or burned.
//! Pricing lives in [`FeeSchedule::follower_price`](crate::config::FeeSchedule::follower_price).

use soroban_sdk::{log, Address, Env};

use crate::config::FOLLOWER_TOKEN_ID;
use crate::events::{LedgerEvent, Outcome, TokenMinted};
use crate::storage::{self, LedgerKey};
use crate::validation;
use crate::LedgerError;

/// Price of `quantity` follower tokens under the current schedule.
pub fn follower_price(env: &Env, quantity: u64) -> Result<i128, LedgerError> {
    Ok(storage::fees(env)?.follower_price(quantity))
}

/// Sell `quantity` follower tokens to `caller`.
pub fn buy_follower_tokens(
    env: &Env,
    caller: &Address,
    quantity: u64,
    paid: i128,
) -> Result<Outcome<()>, LedgerError> {
    let total = follower_price(env, quantity)?;
    validation::require_fee(paid, total)?;

    mint(env, caller, quantity)
}

/// Credit follower tokens without payment.
pub(crate) fn mint(env: &Env, account: &Address, quantity: u64) -> Result<Outcome<()>, LedgerError> {
    let balance = storage::followers(env, account)
        .checked_add(quantity)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    storage::put(env, &LedgerKey::Followers(account.clone()), &balance);

    log!(env, "followers minted", account.clone(), quantity, balance);

    Ok(Outcome::new(env, ()).with_event(LedgerEvent::TokenMinted(TokenMinted {
        account: account.clone(),
        token_id: FOLLOWER_TOKEN_ID,
        quantity,
    })))
}

/// Balance of `account` for `token_id`. Only the follower token exists.
pub fn balance_of(env: &Env, account: &Address, token_id: u32) -> Result<u64, LedgerError> {
    if token_id != FOLLOWER_TOKEN_ID {
        return Err(LedgerError::InvalidReference);
    }
    Ok(storage::followers(env, account))
}
