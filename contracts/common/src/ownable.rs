//! Single-owner access gating.
//!
//! The owner is stored in instance storage. Ownership moves in two steps:
//! the current owner proposes a successor, and the successor accepts. Until
//! acceptance the current owner keeps full control and may cancel.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

// ── Owner ────────────────────────────────────────────────────────────────────

/// Store `owner` as the sole privileged principal.
/// Callers must verify authorization beforehand.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns `true` only if an owner is set and equals `caller`.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

// ── Two-step transfer ────────────────────────────────────────────────────────

pub fn set_pending_owner(env: &Env, proposed: &Address) {
    env.storage().instance().set(&PENDING_OWNER, proposed);
}

pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

/// Removes the pending proposal and returns it, if there was one.
pub fn take_pending_owner(env: &Env) -> Option<Address> {
    let pending = get_pending_owner(env);
    if pending.is_some() {
        env.storage().instance().remove(&PENDING_OWNER);
    }
    pending
}
