//! The pool aggregate: emission schedule, total stake and accumulator.
//!
//! The whole aggregate lives under a single instance-storage key and is
//! loaded, mutated in memory and written back once per invocation.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::{rewards, ContractError};

const POOL: Symbol = symbol_short!("POOL");

/// Process-wide pool state.
///
/// Invariant: `start_block ≤ last_checkpoint_block ≤ end_block`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of every user's `staked`.
    pub total_staked: i128,
    /// Cumulative reward per staked unit since inception. Never decreases.
    pub acc_reward_per_share: i128,
    /// Last block the accumulator was advanced to. Never decreases.
    pub last_checkpoint_block: u32,
    pub start_block: u32,
    pub end_block: u32,
    pub reward_per_block: i128,
}

impl PoolState {
    /// A fresh pool. The checkpoint starts at `start_block`, or at `now` if
    /// the schedule is already running, and never past `end_block`.
    pub fn new(start_block: u32, end_block: u32, reward_per_block: i128, now: u32) -> Self {
        Self {
            total_staked: 0,
            acc_reward_per_share: 0,
            last_checkpoint_block: start_block.max(now).min(end_block),
            start_block,
            end_block,
            reward_per_block,
        }
    }

    /// Bring the accumulator up to `now`.
    ///
    /// Idempotent within a block. When nothing is staked the checkpoint
    /// still moves, so the empty interval is never paid out later.
    /// Returns the number of blocks folded in.
    pub fn advance(&mut self, now: u32) -> Result<u32, ContractError> {
        let effective_now = rewards::effective_block(now, self.end_block);
        if effective_now <= self.last_checkpoint_block {
            return Ok(0);
        }

        let elapsed = effective_now - self.last_checkpoint_block;
        self.acc_reward_per_share = rewards::accumulate(
            self.acc_reward_per_share,
            self.reward_per_block,
            elapsed,
            self.total_staked,
        )?;
        self.last_checkpoint_block = effective_now;

        Ok(elapsed)
    }

    /// The accumulator as it would be after `advance(now)`, without mutating.
    pub fn projected_acc(&self, now: u32) -> Result<i128, ContractError> {
        let elapsed =
            rewards::elapsed_blocks(now, self.last_checkpoint_block, self.end_block);
        rewards::accumulate(
            self.acc_reward_per_share,
            self.reward_per_block,
            elapsed,
            self.total_staked,
        )
    }

    pub fn add_stake(&mut self, amount: i128) -> Result<(), ContractError> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Fails with `InvalidAmount` if `amount` exceeds the pooled stake.
    pub fn remove_stake(&mut self, amount: i128) -> Result<(), ContractError> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .filter(|remaining| *remaining >= 0)
            .ok_or(ContractError::InvalidAmount)?;
        Ok(())
    }

    /// Move the end of the schedule.
    ///
    /// Must run after `advance(now)` under the old bounds. If the pool had
    /// already clamped at the old end, the checkpoint jumps to `now` so the
    /// blocks between the old end and this call earn nothing.
    pub fn reschedule_end(&mut self, new_end: u32, now: u32) -> Result<(), ContractError> {
        if new_end < self.start_block || new_end < now {
            return Err(ContractError::InvalidBlockRange);
        }

        self.end_block = new_end;
        if now > self.last_checkpoint_block {
            self.last_checkpoint_block = now;
        }
        Ok(())
    }
}

// ── Storage ──────────────────────────────────────────────────────────────────

pub fn load(env: &Env) -> Result<PoolState, ContractError> {
    env.storage()
        .instance()
        .get(&POOL)
        .ok_or(ContractError::NotInitialized)
}

pub fn save(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&POOL, pool);
}
