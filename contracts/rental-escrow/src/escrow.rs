//! Token custody. Every value movement of the contract goes through here.
//!
//! The token contract either moves the full amount or traps, and a trap rolls
//! back the whole invocation, so callers may update the ledger before or after
//! a transfer without a partial outcome.

use soroban_sdk::{log, token, Address, Env};

use crate::types::LeaseConfig;

/// Pull `amount` from `from` into contract custody.
pub fn collect(e: &Env, config: &LeaseConfig, from: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::Client::new(e, &config.token);
    token_client.transfer(from, &e.current_contract_address(), &amount);
}

/// Pay `amount` out of contract custody to `to`. A zero amount is a no-op.
pub fn disburse(e: &Env, config: &LeaseConfig, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    log!(e, "escrow disburse", to.clone(), amount);
    let token_client = token::Client::new(e, &config.token);
    token_client.transfer(&e.current_contract_address(), to, &amount);
}
