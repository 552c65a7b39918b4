#![no_std]

pub mod events;
pub mod pool;
pub mod position;
pub mod rewards;

use common::{ownable, pausable, ttl};
use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env, Symbol};

pub use pool::PoolState;
pub use position::UserPosition;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// Zero, negative, or larger than the caller's stake.
    InvalidAmount = 4,
    NoPendingReward = 5,
    NoStake = 6,
    NotPaused = 7,
    /// `pause` while paused, or `unpause` while active.
    AlreadyInState = 8,
    Paused = 9,
    InvalidBlockRange = 10,
    TokensIdentical = 11,
    ArithmeticOverflow = 12,
    NoPendingOwner = 13,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct LpStakingContract;

#[contractimpl]
impl LpStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `stake_token`      – token users lock into the pool.
    /// * `reward_token`     – token paid out as rewards; fund it by transferring
    ///                        to the contract address.
    /// * `start_block`      – first ledger sequence that can earn rewards.
    /// * `reward_per_block` – reward emitted per ledger across all stakers.
    /// * `end_block`        – last ledger sequence that can earn rewards.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        reward_token: Address,
        start_block: u32,
        reward_per_block: i128,
        end_block: u32,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        if reward_per_block < 0 {
            return Err(ContractError::InvalidAmount);
        }
        if start_block > end_block {
            return Err(ContractError::InvalidBlockRange);
        }

        let pool = PoolState::new(
            start_block,
            end_block,
            reward_per_block,
            env.ledger().sequence(),
        );

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&STAKE_TOKEN, &stake_token);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        pool::save(&env, &pool);
        ownable::set_owner(&env, &owner);
        ttl::extend_instance(&env);

        events::publish_initialized(
            &env,
            owner,
            stake_token,
            reward_token,
            start_block,
            end_block,
            reward_per_block,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` stake tokens into the pool.
    ///
    /// Rewards accrued so far are banked before the stake grows, so the new
    /// tokens never earn retroactively. Returns the user's total unclaimed
    /// reward after settlement.
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        if pausable::is_paused(&env) {
            return Err(ContractError::Paused);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let stake_token = Self::stake_token(&env)?;

        // 1. Flush the accumulator, then bank the user's accrual.
        let mut pool = Self::advance_pool(&env)?;
        let mut position = position::load(&env, &user);
        Self::settle(&env, &mut position, &pool)?;

        // 2. Grow the stake and price it in at the current accumulator.
        position.staked = position
            .staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.rebase(pool.acc_reward_per_share)?;
        pool.add_stake(amount)?;

        pool::save(&env, &pool);
        position::save(&env, &user, &position);
        ttl::extend_instance(&env);

        // 3. Pull tokens last.
        token::Client::new(&env, &stake_token).transfer(
            &user,
            &env.current_contract_address(),
            &amount,
        );

        events::publish_deposit(&env, user, amount, position.banked_reward);

        Ok(position.banked_reward)
    }

    /// Release `amount` of the user's stake.
    ///
    /// Remains available while paused. Returns the user's total unclaimed
    /// reward after settlement.
    pub fn withdraw(env: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        let mut position = position::load(&env, &user);
        if amount <= 0 || amount > position.staked {
            return Err(ContractError::InvalidAmount);
        }
        let stake_token = Self::stake_token(&env)?;

        let mut pool = Self::advance_pool(&env)?;
        Self::settle(&env, &mut position, &pool)?;

        position.staked -= amount;
        position.rebase(pool.acc_reward_per_share)?;
        pool.remove_stake(amount)?;

        pool::save(&env, &pool);
        position::save(&env, &user, &position);
        ttl::extend_instance(&env);

        token::Client::new(&env, &stake_token).transfer(
            &env.current_contract_address(),
            &user,
            &amount,
        );

        events::publish_withdraw(&env, user, amount, position.banked_reward);

        Ok(position.banked_reward)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything the user has earned so far.
    ///
    /// Fails with `NoPendingReward` when there is nothing to pay, including a
    /// second call in the same block. Remains available while paused.
    pub fn collect_rewards(env: Env, user: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        let reward_token = Self::reward_token(&env)?;

        let pool = Self::advance_pool(&env)?;
        let mut position = position::load(&env, &user);
        Self::settle(&env, &mut position, &pool)?;
        position.rebase(pool.acc_reward_per_share)?;

        let payout = position.banked_reward;
        if payout <= 0 {
            return Err(ContractError::NoPendingReward);
        }
        position.banked_reward = 0;

        pool::save(&env, &pool);
        position::save(&env, &user, &position);
        ttl::extend_instance(&env);

        token::Client::new(&env, &reward_token).transfer(
            &env.current_contract_address(),
            &user,
            &payout,
        );

        events::publish_rewards_collected(&env, user, payout);

        Ok(payout)
    }

    /// Return the user's whole stake while the pool is paused.
    ///
    /// Skips the accumulator and settlement entirely: every banked and
    /// unsettled reward is forfeited and the position is zeroed.
    pub fn emergency_withdraw(env: Env, user: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        if !pausable::is_paused(&env) {
            return Err(ContractError::NotPaused);
        }
        let position = position::load(&env, &user);
        if position.staked <= 0 {
            return Err(ContractError::NoStake);
        }
        let stake_token = Self::stake_token(&env)?;

        let amount = position.staked;
        let mut pool = pool::load(&env)?;
        pool.remove_stake(amount)?;

        pool::save(&env, &pool);
        position::save(&env, &user, &UserPosition::zero());
        ttl::extend_instance(&env);

        token::Client::new(&env, &stake_token).transfer(
            &env.current_contract_address(),
            &user,
            &amount,
        );

        events::publish_emergency_withdraw(&env, user, amount);

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Real-time unclaimed reward for `user`, as if the pool were advanced to
    /// the current block. Does not mutate state.
    pub fn calculate_pending_rewards(env: Env, user: Address) -> Result<i128, ContractError> {
        let pool = pool::load(&env)?;
        let acc = pool.projected_acc(env.ledger().sequence())?;
        position::load(&env, &user).pending(acc)
    }

    /// The user's stored position (zero for unknown users).
    pub fn get_user_position(env: Env, user: Address) -> UserPosition {
        position::load(&env, &user)
    }

    /// Snapshot of the pool as of its last checkpoint.
    pub fn get_pool(env: Env) -> Result<PoolState, ContractError> {
        pool::load(&env)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        pool::load(&env).map(|p| p.total_staked).unwrap_or(0)
    }

    pub fn get_reward_per_block(env: Env) -> i128 {
        pool::load(&env).map(|p| p.reward_per_block).unwrap_or(0)
    }

    pub fn get_acc_reward_per_share(env: Env) -> i128 {
        pool::load(&env).map(|p| p.acc_reward_per_share).unwrap_or(0)
    }

    pub fn get_start_block(env: Env) -> u32 {
        pool::load(&env).map(|p| p.start_block).unwrap_or(0)
    }

    pub fn get_end_block(env: Env) -> u32 {
        pool::load(&env).map(|p| p.end_block).unwrap_or(0)
    }

    pub fn get_last_checkpoint_block(env: Env) -> u32 {
        pool::load(&env).map(|p| p.last_checkpoint_block).unwrap_or(0)
    }

    /// Reward-token balance currently held by the pool.
    pub fn get_reward_reserve(env: Env) -> Result<i128, ContractError> {
        let reward_token = Self::reward_token(&env)?;
        Ok(token::Client::new(&env, &reward_token).balance(&env.current_contract_address()))
    }

    pub fn get_stake_token(env: Env) -> Result<Address, ContractError> {
        Self::stake_token(&env)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        Self::reward_token(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownable::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        ownable::get_pending_owner(&env)
    }

    // ── Pause control ────────────────────────────────────────────────────────

    /// Block deposits and open the emergency exit.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if !pausable::set_paused(&env, true) {
            return Err(ContractError::AlreadyInState);
        }
        ttl::extend_instance(&env);

        events::publish_paused(&env, caller);

        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if !pausable::set_paused(&env, false) {
            return Err(ContractError::AlreadyInState);
        }
        ttl::extend_instance(&env);

        events::publish_unpaused(&env, caller);

        Ok(())
    }

    // ── Emission schedule ────────────────────────────────────────────────────

    /// Change the emission rate.
    ///
    /// The accumulator is flushed at the old rate first, so the new rate
    /// only applies to blocks after this call.
    pub fn update_reward_per_block(
        env: Env,
        caller: Address,
        reward_per_block: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if reward_per_block < 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut pool = Self::advance_pool(&env)?;
        pool.reward_per_block = reward_per_block;
        pool::save(&env, &pool);
        ttl::extend_instance(&env);

        events::publish_reward_per_block_set(&env, reward_per_block);

        Ok(())
    }

    /// Move the end of the emission schedule.
    ///
    /// `end_block` may not precede the start block or the current block.
    /// Extending a schedule that has already ended does not pay for the gap
    /// between the old end and now.
    pub fn update_end_block(env: Env, caller: Address, end_block: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let mut pool = Self::advance_pool(&env)?;
        pool.reschedule_end(end_block, env.ledger().sequence())?;
        pool::save(&env, &pool);
        ttl::extend_instance(&env);

        events::publish_end_block_set(&env, end_block);

        Ok(())
    }

    /// Move `amount` reward tokens from the reserve to the owner.
    ///
    /// Not checked against rewards owed to stakers: draining the reserve
    /// below outstanding liabilities makes later `collect_rewards` calls fail
    /// at the token transfer.
    pub fn admin_reward_withdraw(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let reward_token = Self::reward_token(&env)?;
        ttl::extend_instance(&env);

        token::Client::new(&env, &reward_token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        events::publish_admin_reward_withdraw(&env, caller, amount);

        Ok(())
    }

    // ── Ownership transfer (two-step) ────────────────────────────────────────

    /// Propose a new owner. Only the current owner can call this.
    /// The proposed address must call `accept_owner` to complete the transfer.
    pub fn propose_owner(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        ownable::set_pending_owner(&env, &new_owner);
        ttl::extend_instance(&env);

        events::publish_ownership_proposed(&env, caller, new_owner);

        Ok(())
    }

    /// Accept a pending ownership transfer. Only the proposed owner can call this.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        let pending = ownable::get_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        if new_owner != pending {
            return Err(ContractError::Unauthorized);
        }
        let old_owner = ownable::get_owner(&env).ok_or(ContractError::NotInitialized)?;

        ownable::set_owner(&env, &new_owner);
        ownable::take_pending_owner(&env);
        ttl::extend_instance(&env);

        events::publish_ownership_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    /// Cancel a pending ownership transfer. Only the current owner can call this.
    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let pending = ownable::take_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        ttl::extend_instance(&env);

        events::publish_ownership_cancelled(&env, caller, pending);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !ownable::is_owner(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn stake_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn reward_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Load the pool and advance it to the current block. The caller decides
    /// whether to persist the result.
    fn advance_pool(env: &Env) -> Result<PoolState, ContractError> {
        let mut pool = pool::load(env)?;
        let elapsed = pool.advance(env.ledger().sequence())?;
        if elapsed > 0 {
            log!(
                env,
                "pool advanced",
                elapsed,
                pool.acc_reward_per_share,
                pool.total_staked
            );
        }
        Ok(pool)
    }

    /// Bank whatever `position` has accrued against the advanced `pool`.
    fn settle(
        env: &Env,
        position: &mut UserPosition,
        pool: &PoolState,
    ) -> Result<(), ContractError> {
        let delta = position.settle(pool.acc_reward_per_share)?;
        if delta > 0 {
            log!(env, "position settled", delta, position.banked_reward);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
