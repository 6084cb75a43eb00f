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

#![cfg(all(feature = "mock", test))]

mod create_market;
mod resolve_market;
mod runtime_api;

use crate::{
    mock::{
        consts::*,
        ext_builder::ExtBuilder,
        runtime::{
            Arena, ArenaProfiles, CorrectionBatchSize, Runtime, RuntimeOrigin, System,
        },
    },
    Bets, Corrections, Error, Event, MarketCounter, Markets,
};
use arena_primitives::{
    traits::LedgerApi,
    types::{
        AccountIdTest, AuditEntry, Balance, CorrectionPhase, LedgerAccount, MarketId, MarketStatus,
        Position,
    },
};
use frame_support::{assert_noop, assert_ok};
use sp_runtime::DispatchError;

const QUESTION: &[u8] = b"Will DOT close above 10 USD on Friday?";
const TOKEN: &[u8] = b"polkadot";

fn create_market() -> MarketId {
    let market_id = MarketCounter::<Runtime>::get();
    assert_ok!(Arena::create_market(
        RuntimeOrigin::signed(AUTOMATION),
        QUESTION.to_vec(),
        TOKEN.to_vec()
    ));
    market_id
}

fn place_bets(market_id: MarketId, bets: &[(AccountIdTest, Position, Balance)]) {
    for &(who, position, amount) in bets {
        assert_ok!(Arena::place_bet(RuntimeOrigin::signed(who), market_id, position, amount));
    }
}

/// Alice and Bob back `Yes` with 100 and 300, Charlie backs `No` with 100.
fn create_market_with_standard_bets() -> MarketId {
    let market_id = create_market();
    place_bets(
        market_id,
        &[(ALICE, Position::Yes, 100), (BOB, Position::Yes, 300), (CHARLIE, Position::No, 100)],
    );
    market_id
}

fn resolve(market_id: MarketId, outcome: Position) {
    assert_ok!(Arena::resolve_market(RuntimeOrigin::signed(AUTOMATION), market_id, outcome));
}

fn balance_of(who: AccountIdTest) -> Balance {
    <ArenaProfiles as LedgerApi>::balance(&who)
}

fn ledger_of(who: AccountIdTest) -> LedgerAccount<Balance> {
    ArenaProfiles::ledger(&who)
}

fn payouts_of(market_id: MarketId) -> Vec<(Option<bool>, Balance)> {
    Bets::<Runtime>::get(market_id).iter().map(|bet| (bet.is_winner, bet.payout)).collect()
}

fn total_paid(market_id: MarketId) -> Balance {
    Bets::<Runtime>::get(market_id).iter().map(|bet| bet.payout).sum()
}
