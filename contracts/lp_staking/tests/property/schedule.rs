//! Emission-window properties.
//!
//! Invariants tested:
//! - nothing accrues before the start block
//! - nothing accrues after the end block, however late the chain runs
//! - an interval with zero stake is never paid to anyone
//! - a sole staker receives the whole emission when it divides evenly

use proptest::prelude::*;
use soroban_sdk::testutils::Ledger as _;

use crate::harness::{Harness, END, RATE, START};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_sole_staker_gets_exact_emission(blocks in 0u32..=(END - START)) {
        let h = Harness::new();
        let user = &h.users[0];

        // A stake of 1 makes every per-share division exact.
        h.client.deposit(user, &1);
        h.advance(blocks);

        prop_assert_eq!(
            h.client.calculate_pending_rewards(user),
            RATE * i128::from(blocks)
        );
    }

    #[test]
    fn prop_no_accrual_after_end(extra in 1u32..=1_500, amount in 1i128..=1_000) {
        let h = Harness::new();
        let user = &h.users[0];

        h.client.deposit(user, &amount);
        h.env.ledger().set_sequence_number(END);
        let at_end = h.client.calculate_pending_rewards(user);

        h.advance(extra);
        prop_assert_eq!(h.client.calculate_pending_rewards(user), at_end);

        h.client.collect_rewards(user);
        h.advance(extra);
        prop_assert_eq!(h.client.calculate_pending_rewards(user), 0);
        prop_assert_eq!(h.client.get_last_checkpoint_block(), END);
    }

    #[test]
    fn prop_zero_stake_gap_is_never_paid(gap in 1u32..=200, tail in 1u32..=100) {
        let h = Harness::new();
        let late = &h.users[1];

        h.advance(gap);
        h.client.deposit(late, &1);
        h.advance(tail);

        // Only the blocks after the first deposit count.
        prop_assert_eq!(
            h.client.calculate_pending_rewards(late),
            RATE * i128::from(tail)
        );
    }

    #[test]
    fn prop_pending_before_start_is_zero(early in 0u32..START, amount in 1i128..=1_000) {
        let h = Harness::new();
        let user = &h.users[0];

        h.env.ledger().set_sequence_number(early);
        h.client.deposit(user, &amount);
        h.env.ledger().set_sequence_number(START);

        prop_assert_eq!(h.client.calculate_pending_rewards(user), 0);
        prop_assert_eq!(h.client.get_acc_reward_per_share(), 0);
    }
}
