//! Fee collection and withdrawal through the payment token.

use soroban_sdk::{token, Address, Env};

use crate::config::Config;

/// Move `amount` from `from` to the contract. Zero amounts are a no-op.
pub fn collect(env: &Env, config: &Config, from: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, &config.payment_token).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
}

/// Move `amount` of collected fees from the contract to `to`.
pub fn disburse(env: &Env, config: &Config, to: &Address, amount: i128) {
    token::Client::new(env, &config.payment_token).transfer(
        &env.current_contract_address(),
        to,
        &amount,
    );
}
