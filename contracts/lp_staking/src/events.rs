#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub start_block: u32,
    pub end_block: u32,
    pub reward_per_block: i128,
    pub timestamp: u64,
}

/// Fired when a user deposits stake.
///
/// `banked_reward` is the user's total unclaimed reward after settlement,
/// not only what this call settled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub user: Address,
    pub amount: i128,
    pub banked_reward: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when a user withdraws stake. Same reward convention as deposits.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub user: Address,
    pub amount: i128,
    pub banked_reward: i128,
    pub block: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsCollectedEvent {
    pub user: Address,
    pub amount: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when a user exits through the paused-only path, forfeiting rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawEvent {
    pub user: Address,
    pub amount: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired on both pause and unpause; the topic tells them apart.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEvent {
    pub owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPerBlockSetEvent {
    pub reward_per_block: i128,
    pub block: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndBlockSetEvent {
    pub end_block: u32,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when the owner pulls reward tokens out of the reserve.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminRewardWithdrawEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when a pending ownership transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    stake_token: Address,
    reward_token: Address,
    start_block: u32,
    end_block: u32,
    reward_per_block: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            stake_token,
            reward_token,
            start_block,
            end_block,
            reward_per_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit(env: &Env, user: Address, amount: i128, banked_reward: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), user.clone()),
        DepositEvent {
            user,
            amount,
            banked_reward,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdraw(env: &Env, user: Address, amount: i128, banked_reward: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), user.clone()),
        WithdrawEvent {
            user,
            amount,
            banked_reward,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_collected(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("COLLECT"), user.clone()),
        RewardsCollectedEvent {
            user,
            amount,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_emergency_withdraw(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), user.clone()),
        EmergencyWithdrawEvent {
            user,
            amount,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env, owner: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"), owner.clone()),
        PauseToggledEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unpaused(env: &Env, owner: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"), owner.clone()),
        PauseToggledEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_per_block_set(env: &Env, reward_per_block: i128) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        RewardPerBlockSetEvent {
            reward_per_block,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_end_block_set(env: &Env, end_block: u32) {
    env.events().publish(
        (symbol_short!("END_SET"),),
        EndBlockSetEvent {
            end_block,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_reward_withdraw(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("ADM_RWD"), owner.clone()),
        AdminRewardWithdrawEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnershipProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnershipAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnershipCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
