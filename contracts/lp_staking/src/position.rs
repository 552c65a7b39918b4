//! Per-participant ledger entries.
//!
//! Entries are keyed by `(POS, user)` in persistent storage. An absent entry
//! is the zero position; entries are zeroed rather than removed on exit.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use common::ttl;

use crate::{rewards, ContractError};

const USER_POSITION: Symbol = symbol_short!("POS");

/// A participant's stake and reward bookkeeping.
///
/// Invariant: `banked_reward + staked × acc − reward_debt ≥ 0` for the
/// current accumulator `acc`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserPosition {
    pub staked: i128,
    /// `staked × acc` at the last rebase.
    pub reward_debt: i128,
    /// Settled but unclaimed reward.
    pub banked_reward: i128,
}

impl UserPosition {
    pub fn zero() -> Self {
        Self {
            staked: 0,
            reward_debt: 0,
            banked_reward: 0,
        }
    }

    /// Fold everything accrued since the last rebase into `banked_reward`.
    ///
    /// Does not touch `reward_debt`; callers rebase once the stake amount
    /// for this call is final.
    pub fn settle(&mut self, acc: i128) -> Result<i128, ContractError> {
        let delta = rewards::unsettled(self.staked, acc, self.reward_debt)?;
        self.banked_reward = self
            .banked_reward
            .checked_add(delta)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Ok(delta)
    }

    /// Price the current stake in at `acc`.
    pub fn rebase(&mut self, acc: i128) -> Result<(), ContractError> {
        self.reward_debt = rewards::debt_for(self.staked, acc)?;
        Ok(())
    }

    /// Unclaimed reward at accumulator `acc`, settled or not.
    pub fn pending(&self, acc: i128) -> Result<i128, ContractError> {
        rewards::pending(self.staked, acc, self.reward_debt, self.banked_reward)
    }
}

// ── Storage ──────────────────────────────────────────────────────────────────

fn key(user: &Address) -> (Symbol, Address) {
    (USER_POSITION, user.clone())
}

pub fn load(env: &Env, user: &Address) -> UserPosition {
    env.storage()
        .persistent()
        .get(&key(user))
        .unwrap_or_else(UserPosition::zero)
}

pub fn save(env: &Env, user: &Address, position: &UserPosition) {
    let key = key(user);
    env.storage().persistent().set(&key, position);
    ttl::extend_persistent(env, &key);
}
