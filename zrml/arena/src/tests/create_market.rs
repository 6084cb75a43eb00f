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
use arena_primitives::constants::{MAX_QUESTION_LEN, MAX_TOKEN_LEN};
use crate::mock::ext_builder::GENESIS_TIMESTAMP;

#[test]
fn create_market_stores_an_active_market() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market();
        assert_eq!(market_id, 0);
        assert_eq!(MarketCounter::<Runtime>::get(), 1);

        let market = Markets::<Runtime>::get(market_id).unwrap();
        assert_eq!(market.creator, None);
        assert_eq!(market.question.to_vec(), QUESTION.to_vec());
        assert_eq!(market.token.to_vec(), TOKEN.to_vec());
        assert_eq!(market.status, MarketStatus::Active);
        assert_eq!(market.outcome, None);
        assert_eq!(market.total_pool, 0);
        assert_eq!(market.total_bettors, 0);
        assert_eq!(market.created_at, GENESIS_TIMESTAMP);
        assert!(market.audit_log.is_empty());
        assert!(Bets::<Runtime>::get(market_id).is_empty());

        System::assert_last_event(Event::MarketCreated { market_id, creator: None }.into());
    });
}

#[test]
fn create_market_records_the_admin_as_creator() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(Arena::create_market(
            RuntimeOrigin::signed(EVE),
            QUESTION.to_vec(),
            TOKEN.to_vec()
        ));
        assert_eq!(Markets::<Runtime>::get(0).unwrap().creator, Some(EVE));
        System::assert_last_event(Event::MarketCreated { market_id: 0, creator: Some(EVE) }.into());
    });
}

#[test]
fn create_market_assigns_increasing_ids() {
    ExtBuilder::default().build().execute_with(|| {
        assert_eq!(create_market(), 0);
        assert_ok!(Arena::create_market(RuntimeOrigin::root(), QUESTION.to_vec(), TOKEN.to_vec()));
        assert_eq!(create_market(), 2);
        assert_eq!(MarketCounter::<Runtime>::get(), 3);
    });
}

#[test]
fn create_market_fails_on_long_question() {
    ExtBuilder::default().build().execute_with(|| {
        let question = vec![b'?'; MAX_QUESTION_LEN as usize + 1];
        assert_noop!(
            Arena::create_market(RuntimeOrigin::signed(AUTOMATION), question, TOKEN.to_vec()),
            Error::<Runtime>::QuestionTooLong
        );
    });
}

#[test]
fn create_market_fails_on_long_token() {
    ExtBuilder::default().build().execute_with(|| {
        let token = vec![b'x'; MAX_TOKEN_LEN as usize + 1];
        assert_noop!(
            Arena::create_market(RuntimeOrigin::signed(AUTOMATION), QUESTION.to_vec(), token),
            Error::<Runtime>::TokenTooLong
        );
    });
}
