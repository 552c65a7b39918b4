//! Storage lifetime constants and TTL extension helpers.

use soroban_sdk::{Env, IntoVal, Val};

/// Roughly one day of ledgers at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are bumped once their remaining lifetime drops below this.
pub const TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Target lifetime after a bump.
pub const TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

/// Keep the contract instance (and all instance storage) alive.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Keep a persistent entry alive. The key must already exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
