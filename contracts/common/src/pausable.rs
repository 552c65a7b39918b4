//! Active ⇄ Paused switch.
//!
//! An absent flag reads as Active, so a freshly initialised contract never
//! needs to write it.

use soroban_sdk::{symbol_short, Env, Symbol};

const PAUSED: Symbol = symbol_short!("PAUSED");

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Moves the switch to `paused`.
///
/// Returns `false` without writing anything if the contract is already in
/// the requested state.
pub fn set_paused(env: &Env, paused: bool) -> bool {
    if is_paused(env) == paused {
        return false;
    }
    env.storage().instance().set(&PAUSED, &paused);
    true
}
