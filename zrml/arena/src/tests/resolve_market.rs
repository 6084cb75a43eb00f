// Copyright 2026 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use super::*;
use crate::mock::ext_builder::GENESIS_TIMESTAMP;

#[test]
fn resolve_market_splits_the_losing_pool_among_winners() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market_with_standard_bets();
        resolve(market_id, Position::Yes);

        assert_eq!(
            payouts_of(market_id),
            vec![(Some(true), 125), (Some(true), 375), (Some(false), 0)]
        );
        assert_eq!(total_paid(market_id), 500);

        assert_eq!(balance_of(ALICE), INITIAL_POINTS + 25);
        assert_eq!(balance_of(BOB), INITIAL_POINTS + 75);
        assert_eq!(balance_of(CHARLIE), INITIAL_POINTS - 100);

        let alice = ledger_of(ALICE);
        assert_eq!(alice.win_count, 1);
        assert_eq!(alice.total_won, 125);
        assert_eq!(alice.current_streak, 1);
        let charlie = ledger_of(CHARLIE);
        assert_eq!(charlie.win_count, 0);
        assert_eq!(charlie.loss_count, 1);
        assert_eq!(charlie.current_streak, -1);

        let market = Markets::<Runtime>::get(market_id).unwrap();
        assert_eq!(market.status, MarketStatus::Resolved);
        assert_eq!(market.outcome, Some(Position::Yes));
        assert_eq!(market.resolved_at, Some(GENESIS_TIMESTAMP));
        assert_eq!(
            market.audit_log.to_vec(),
            vec![AuditEntry::Resolved { outcome: Position::Yes, at: GENESIS_TIMESTAMP }]
        );

        System::assert_has_event(
            Event::BetSettled {
                market_id,
                bet_id: 1,
                who: BOB,
                position: Position::Yes,
                is_winner: true,
                payout: 375,
            }
            .into(),
        );
        System::assert_last_event(
            Event::MarketResolved { market_id, outcome: Position::Yes, total_bets: 3 }.into(),
        );
    });
}

#[test]
fn resolve_market_refunds_unopposed_losers_minus_adjustment() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market();
        place_bets(
            market_id,
            &[(ALICE, Position::Yes, 50), (BOB, Position::Yes, 50), (CHARLIE, Position::Yes, 50)],
        );
        resolve(market_id, Position::No);

        assert_eq!(
            payouts_of(market_id),
            vec![(Some(false), 0), (Some(false), 0), (Some(false), 0)]
        );
        for who in [ALICE, BOB, CHARLIE] {
            assert_eq!(balance_of(who), INITIAL_POINTS - 50);
            assert_eq!(ledger_of(who).loss_count, 1);
        }
    });
}

#[test]
fn resolve_market_refunds_large_unopposed_stakes_partially() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market();
        place_bets(market_id, &[(ALICE, Position::No, 200)]);
        resolve(market_id, Position::Yes);

        assert_eq!(payouts_of(market_id), vec![(Some(false), 150)]);
        let alice = ledger_of(ALICE);
        assert_eq!(alice.balance, INITIAL_POINTS - 50);
        assert_eq!(alice.win_count, 0);
        assert_eq!(alice.total_won, 0);
        assert_eq!(alice.loss_count, 1);
    });
}

#[test]
fn resolve_market_pays_the_adjustment_to_unanimous_winners() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market();
        place_bets(market_id, &[(ALICE, Position::No, 100), (BOB, Position::No, 100)]);
        resolve(market_id, Position::No);

        assert_eq!(payouts_of(market_id), vec![(Some(true), 150), (Some(true), 150)]);
        assert_eq!(balance_of(ALICE), INITIAL_POINTS + 50);
        assert_eq!(balance_of(BOB), INITIAL_POINTS + 50);
    });
}

#[test]
fn resolve_market_keeps_the_pool_within_the_rounding_bound() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market();
        place_bets(
            market_id,
            &[
                (ALICE, Position::Yes, 10),
                (BOB, Position::Yes, 10),
                (CHARLIE, Position::Yes, 10),
                (DAVE, Position::No, 11),
            ],
        );
        resolve(market_id, Position::Yes);

        let total_pool = Markets::<Runtime>::get(market_id).unwrap().total_pool;
        assert_eq!(total_pool, 41);
        // Every winner's share of 11 / 3 rounds up to 4.
        assert_eq!(total_paid(market_id), 42);
    });
}

#[test]
fn resolve_market_fails_on_missing_market() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            Arena::resolve_market(RuntimeOrigin::signed(AUTOMATION), 3, Position::Yes),
            Error::<Runtime>::MarketNotFound
        );
    });
}

#[test]
fn resolve_market_fails_on_market_without_bets() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market();
        assert_noop!(
            Arena::resolve_market(RuntimeOrigin::signed(AUTOMATION), market_id, Position::Yes),
            Error::<Runtime>::NoBetsFound
        );
    });
}

#[test]
fn resolve_market_fails_on_resolved_market() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market_with_standard_bets();
        resolve(market_id, Position::Yes);
        assert_noop!(
            Arena::resolve_market(RuntimeOrigin::signed(AUTOMATION), market_id, Position::No),
            Error::<Runtime>::MarketNotActive
        );
    });
}
