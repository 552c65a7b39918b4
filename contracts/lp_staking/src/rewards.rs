//! Block-bounded emission math.
//!
//! The accumulator is an unscaled integer: one unit of `acc_reward_per_share`
//! is one reward unit per staked unit. Each advance floor-divides the
//! interval's emission by the total stake and the remainder is dropped, so
//! stakes that are small relative to the pool under-accrue.
//!
//! ```text
//! effective_now = min(now, end_block)
//! elapsed       = effective_now − last_checkpoint   (0 if not positive)
//! Δacc          = elapsed × reward_per_block / total_staked
//! pending       = banked + staked × acc − reward_debt
//! ```

use crate::ContractError;

/// The last block that can earn rewards as of `now`.
pub fn effective_block(now: u32, end_block: u32) -> u32 {
    now.min(end_block)
}

/// Number of reward-eligible blocks since `last_checkpoint`.
///
/// Zero when the pool has not started yet (the checkpoint sits at the start
/// block, ahead of `now`) or has already been clamped at the end block.
pub fn elapsed_blocks(now: u32, last_checkpoint: u32, end_block: u32) -> u32 {
    effective_block(now, end_block).saturating_sub(last_checkpoint)
}

/// New accumulator value after `elapsed` blocks at `reward_per_block`.
///
/// Returns `acc` unchanged when nothing is staked: that interval's emission
/// is forfeited and stays in the reward reserve.
pub fn accumulate(
    acc: i128,
    reward_per_block: i128,
    elapsed: u32,
    total_staked: i128,
) -> Result<i128, ContractError> {
    if total_staked <= 0 || elapsed == 0 {
        return Ok(acc);
    }

    let emission = reward_per_block
        .checked_mul(i128::from(elapsed))
        .ok_or(ContractError::ArithmeticOverflow)?;
    let delta = emission
        .checked_div(total_staked)
        .ok_or(ContractError::ArithmeticOverflow)?;

    acc.checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// `staked × acc`, the amount already priced into a stake at `acc`.
pub fn debt_for(staked: i128, acc: i128) -> Result<i128, ContractError> {
    staked
        .checked_mul(acc)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Reward accrued since the last settlement, `staked × acc − reward_debt`.
pub fn unsettled(staked: i128, acc: i128, reward_debt: i128) -> Result<i128, ContractError> {
    debt_for(staked, acc)?
        .checked_sub(reward_debt)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Total unclaimed reward, `banked + staked × acc − reward_debt`.
pub fn pending(
    staked: i128,
    acc: i128,
    reward_debt: i128,
    banked: i128,
) -> Result<i128, ContractError> {
    banked
        .checked_add(unsettled(staked, acc, reward_debt)?)
        .ok_or(ContractError::ArithmeticOverflow)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure math, no Soroban environment needed.
