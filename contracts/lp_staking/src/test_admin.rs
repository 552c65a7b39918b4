extern crate std;

use soroban_sdk::{testutils::Address as _, token::Client as TokenClient, Address};

use crate::test::{funded_user, go_to, setup, END, RATE, RESERVE, START};
use crate::ContractError;

// ── Pause / unpause ──────────────────────────────────────────────────────────

#[test]
fn test_pause_is_owner_only() {
    let (env, client, owner, _, _) = setup();
    let intruder = Address::generate(&env);

    match client.try_pause(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(!client.is_paused());

    client.pause(&owner);
    assert!(client.is_paused());

    match client.try_unpause(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(client.is_paused());

    client.unpause(&owner);
    assert!(!client.is_paused());
}

#[test]
fn test_redundant_pause_transitions_fail() {
    let (_env, client, owner, _, _) = setup();

    assert_eq!(
        client.try_unpause(&owner),
        Err(Ok(ContractError::AlreadyInState))
    );

    client.pause(&owner);
    assert_eq!(
        client.try_pause(&owner),
        Err(Ok(ContractError::AlreadyInState))
    );
    assert!(client.is_paused());
}

#[test]
fn test_deposit_blocked_while_paused() {
    let (env, client, owner, stake_token, _) = setup();
    let user = funded_user(&env, &stake_token);
    let token = TokenClient::new(&env, &stake_token);

    client.deposit(&user, &100);
    client.pause(&owner);

    match client.try_deposit(&user, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }
    assert_eq!(token.balance(&client.address), 100);
    assert_eq!(token.balance(&user), 900);

    // Accrual is not suspended by the pause itself.
    go_to(&env, START + 10);
    client.unpause(&owner);
    assert_eq!(client.deposit(&user, &100), 1_000);
    assert_eq!(token.balance(&client.address), 200);
}

#[test]
fn test_withdraw_and_collect_allowed_while_paused() {
    let (env, client, owner, stake_token, reward_token) = setup();
    let user = funded_user(&env, &stake_token);

    client.deposit(&user, &100);
    go_to(&env, START + 10);
    client.pause(&owner);

    assert_eq!(client.withdraw(&user, &50), 1_000);
    assert_eq!(client.collect_rewards(&user), 1_000);
    assert_eq!(TokenClient::new(&env, &reward_token).balance(&user), 1_000);
    assert_eq!(TokenClient::new(&env, &stake_token).balance(&user), 950);

    // Regular settlement kept the remaining stake earning.
    go_to(&env, START + 20);
    assert_eq!(client.calculate_pending_rewards(&user), 1_000);
    assert_eq!(client.emergency_withdraw(&user), 50);
}

// ── Emission schedule ────────────────────────────────────────────────────────

#[test]
fn test_update_reward_per_block_is_not_retroactive() {
    let (env, client, owner, stake_token, _) = setup();
    let user = funded_user(&env, &stake_token);

    client.deposit(&user, &100);

    // 50 blocks at 100, then 100 blocks at 50.
    go_to(&env, START + 50);
    client.update_reward_per_block(&owner, &50);
    assert_eq!(client.get_reward_per_block(), 50);
    assert_eq!(client.get_last_checkpoint_block(), START + 50);

    go_to(&env, START + 150);
    assert_eq!(client.calculate_pending_rewards(&user), 5_000 + 5_000);
}

#[test]
fn test_update_reward_per_block_validation() {
    let (env, client, owner, _, _) = setup();
    let intruder = Address::generate(&env);

    match client.try_update_reward_per_block(&intruder, &1_000) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(
        client.try_update_reward_per_block(&owner, &-1),
        Err(Ok(ContractError::InvalidAmount))
    );
    assert_eq!(client.get_reward_per_block(), RATE);

    client.update_reward_per_block(&owner, &0);
    assert_eq!(client.get_reward_per_block(), 0);
}

#[test]
fn test_shortening_end_block_stops_accrual_early() {
    let (env, client, owner, stake_token, _) = setup();
    let user = funded_user(&env, &stake_token);

    client.deposit(&user, &100);
    go_to(&env, 200);
    client.update_end_block(&owner, &300);
    assert_eq!(client.get_end_block(), 300);

    go_to(&env, 500);
    assert_eq!(client.calculate_pending_rewards(&user), 200 * RATE);
}

#[test]
fn test_extending_finished_schedule_skips_the_gap() {
    let (env, client, owner, stake_token, _) = setup();
    let user = funded_user(&env, &stake_token);

    client.deposit(&user, &100);

    go_to(&env, END + 100);
    client.update_end_block(&owner, &(END + 1_000));
    assert_eq!(client.get_last_checkpoint_block(), END + 100);

    // Only the 10 blocks after the update count on top of the original run.
    go_to(&env, END + 110);
    assert_eq!(client.calculate_pending_rewards(&user), RESERVE + 10 * RATE);
}

#[test]
fn test_update_end_block_validation() {
    let (env, client, owner, _, _) = setup();
    let intruder = Address::generate(&env);

    match client.try_update_end_block(&intruder, &10_000) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    go_to(&env, 500);
    assert_eq!(
        client.try_update_end_block(&owner, &499),
        Err(Ok(ContractError::InvalidBlockRange))
    );
    assert_eq!(client.get_end_block(), END);

    client.update_end_block(&owner, &10_000);
    assert_eq!(client.get_end_block(), 10_000);
}

// ── Reward reserve ───────────────────────────────────────────────────────────

#[test]
fn test_admin_reward_withdraw() {
    let (env, client, owner, _, reward_token) = setup();
    let intruder = Address::generate(&env);

    match client.try_admin_reward_withdraw(&intruder, &80_000) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(
        client.try_admin_reward_withdraw(&owner, &0),
        Err(Ok(ContractError::InvalidAmount))
    );

    client.admin_reward_withdraw(&owner, &80_000);
    assert_eq!(client.get_reward_reserve(), 20_000);
    assert_eq!(TokenClient::new(&env, &reward_token).balance(&owner), 80_000);
}

#[test]
fn test_admin_reward_withdraw_ignores_liabilities() {
    let (env, client, owner, stake_token, _) = setup();
    let user = funded_user(&env, &stake_token);

    client.deposit(&user, &100);
    go_to(&env, START + 10);

    // The reserve can be drained below what stakers are owed.
    client.admin_reward_withdraw(&owner, &RESERVE);
    assert_eq!(client.get_reward_reserve(), 0);
    assert_eq!(client.calculate_pending_rewards(&user), 1_000);

    // Payout then fails at the token transfer and the ledger is untouched.
    assert!(client.try_collect_rewards(&user).is_err());
    assert_eq!(client.calculate_pending_rewards(&user), 1_000);
}

// ── Ownership transfer ───────────────────────────────────────────────────────

#[test]
fn test_two_step_ownership_transfer() {
    let (env, client, owner, _, _) = setup();
    let successor = Address::generate(&env);
    let impostor = Address::generate(&env);

    client.propose_owner(&owner, &successor);
    assert_eq!(client.get_pending_owner(), Some(successor.clone()));
    assert_eq!(client.get_owner(), owner);

    assert_eq!(
        client.try_accept_owner(&impostor),
        Err(Ok(ContractError::Unauthorized))
    );

    client.accept_owner(&successor);
    assert_eq!(client.get_owner(), successor);
    assert_eq!(client.get_pending_owner(), None);

    // The previous owner lost every privilege.
    assert_eq!(client.try_pause(&owner), Err(Ok(ContractError::Unauthorized)));
    client.pause(&successor);
    assert!(client.is_paused());
}

#[test]
fn test_ownership_proposal_guards() {
    let (env, client, owner, _, _) = setup();
    let successor = Address::generate(&env);

    assert_eq!(
        client.try_accept_owner(&successor),
        Err(Ok(ContractError::NoPendingOwner))
    );
    assert_eq!(
        client.try_cancel_owner_transfer(&owner),
        Err(Ok(ContractError::NoPendingOwner))
    );
    assert_eq!(
        client.try_propose_owner(&successor, &successor),
        Err(Ok(ContractError::Unauthorized))
    );

    client.propose_owner(&owner, &successor);
    client.cancel_owner_transfer(&owner);
    assert_eq!(client.get_pending_owner(), None);
    assert_eq!(
        client.try_accept_owner(&successor),
        Err(Ok(ContractError::NoPendingOwner))
    );
}
