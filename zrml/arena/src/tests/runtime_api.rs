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

#[test]
fn preview_settlement_returns_none_for_missing_market() {
    ExtBuilder::default().build().execute_with(|| {
        assert_eq!(Arena::preview_settlement(0, Position::Yes), None);
    });
}

#[test]
fn preview_settlement_does_not_touch_the_ledger() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market_with_standard_bets();
        assert_eq!(
            Arena::preview_settlement(market_id, Position::Yes),
            Some(vec![
                (ALICE, Position::Yes, true, 125),
                (BOB, Position::Yes, true, 375),
                (CHARLIE, Position::No, false, 0),
            ])
        );
        assert_eq!(
            Arena::preview_settlement(market_id, Position::No),
            Some(vec![
                (ALICE, Position::Yes, false, 0),
                (BOB, Position::Yes, false, 0),
                (CHARLIE, Position::No, true, 500),
            ])
        );
        assert_eq!(balance_of(ALICE), INITIAL_POINTS - 100);
        assert_eq!(payouts_of(market_id), vec![(None, 0), (None, 0), (None, 0)]);
    });
}

#[test]
fn preview_settlement_of_market_without_bets_is_empty() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market();
        assert_eq!(Arena::preview_settlement(market_id, Position::No), Some(vec![]));
    });
}

#[test]
fn correction_status_follows_the_correction() {
    ExtBuilder::default().build().execute_with(|| {
        CorrectionBatchSize::set(&2);
        let market_id = create_market_with_standard_bets();
        resolve(market_id, Position::Yes);
        assert_eq!(Arena::correction_status(market_id), None);

        assert_ok!(Arena::correct_resolution(
            RuntimeOrigin::signed(AUTOMATION),
            market_id,
            Position::No
        ));
        let intent = Arena::correction_status(market_id).unwrap();
        assert_eq!(intent.phase, CorrectionPhase::Reversing { next_bet: 2 });
        assert_eq!(intent, Corrections::<Runtime>::get(market_id).unwrap());

        assert_ok!(Arena::resume_correction(RuntimeOrigin::signed(AUTOMATION), market_id));
        assert_eq!(
            Arena::correction_status(market_id).map(|intent| intent.phase),
            Some(CorrectionPhase::Resettling { next_bet: 1 })
        );

        assert_ok!(Arena::resume_correction(RuntimeOrigin::signed(AUTOMATION), market_id));
        assert_eq!(Arena::correction_status(market_id), None);
    });
}
