#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use lp_staking::{LpStakingContract, LpStakingContractClient};

const START: u32 = 10;
const END: u32 = 2_000;
// Keeps untouched entries inside the test environment's minimum TTL.
const LAST_BLOCK: u32 = END + 1_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { user: u8, amount: u32 },
    Withdraw { user: u8, amount: u32 },
    CollectRewards { user: u8 },
    EmergencyWithdraw { user: u8 },
    Pause,
    Unpause,
    SetRewardPerBlock { rate: u16 },
    SetEndBlock { block: u16 },
    Wait { blocks: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(0);

    let stake_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(LpStakingContract, ());
    let client = LpStakingContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.initialize(&owner, &stake_id, &reward_id, &START, &1_000i128, &END);

    StellarAssetClient::new(&env, &reward_id).mint(&contract_id, &i128::from(u64::MAX));

    let users: Vec<Address> = (0..5).map(|_| Address::generate(&env)).collect();
    for user in &users {
        StellarAssetClient::new(&env, &stake_id).mint(user, &i128::from(u64::MAX));
    }
    let stake_token = TokenClient::new(&env, &stake_id);

    let mut last_acc = 0i128;
    let mut last_checkpoint = client.get_last_checkpoint_block();

    // Failed calls are expected; we are looking for panics and broken
    // accounting, not for successful transitions.
    for action in actions {
        let pick = |i: u8| &users[usize::from(i) % users.len()];
        match action {
            FuzzAction::Deposit { user, amount } => {
                let _ = client.try_deposit(pick(user), &i128::from(amount));
            }
            FuzzAction::Withdraw { user, amount } => {
                let _ = client.try_withdraw(pick(user), &i128::from(amount));
            }
            FuzzAction::CollectRewards { user } => {
                let _ = client.try_collect_rewards(pick(user));
            }
            FuzzAction::EmergencyWithdraw { user } => {
                let _ = client.try_emergency_withdraw(pick(user));
            }
            FuzzAction::Pause => {
                let _ = client.try_pause(&owner);
            }
            FuzzAction::Unpause => {
                let _ = client.try_unpause(&owner);
            }
            FuzzAction::SetRewardPerBlock { rate } => {
                let _ = client.try_update_reward_per_block(&owner, &i128::from(rate));
            }
            FuzzAction::SetEndBlock { block } => {
                let _ = client.try_update_end_block(&owner, &u32::from(block));
            }
            FuzzAction::Wait { blocks } => {
                let now = env.ledger().sequence();
                env.ledger()
                    .set_sequence_number((now + u32::from(blocks)).min(LAST_BLOCK));
            }
        }

        let total = client.get_total_staked();
        let summed: i128 = users.iter().map(|u| client.get_user_position(u).staked).sum();
        assert_eq!(summed, total);
        assert_eq!(stake_token.balance(&contract_id), total);

        let acc = client.get_acc_reward_per_share();
        let checkpoint = client.get_last_checkpoint_block();
        assert!(acc >= last_acc);
        assert!(checkpoint >= last_checkpoint);
        last_acc = acc;
        last_checkpoint = checkpoint;

        for user in &users {
            if let Ok(Ok(pending)) = client.try_calculate_pending_rewards(user) {
                assert!(pending >= 0);
            }
        }
    }
});
