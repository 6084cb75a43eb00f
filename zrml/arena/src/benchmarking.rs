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

#![cfg(feature = "runtime-benchmarks")]

use crate::{Call, Config, Corrections, Event, MarketCounter, MarketIdOf, Markets, Pallet};
use alloc::vec;
use arena_primitives::{
    constants::{MAX_QUESTION_LEN, MAX_TOKEN_LEN},
    traits::ArenaBenchmarkHelper,
    types::{CorrectionIntent, CorrectionPhase, MarketStatus, Position},
};
use frame_benchmarking::v2::*;
use frame_support::traits::{EnsureOrigin, Get, Time};
use frame_system::{Pallet as System, RawOrigin};

fn operator<T: Config>() -> T::RuntimeOrigin {
    T::AutomationOrigin::try_successful_origin().unwrap()
}

fn position_of(index: u32) -> Position {
    if index % 2 == 0 { Position::Yes } else { Position::No }
}

fn place_bet<T: Config>(market_id: MarketIdOf<T>, index: u32) {
    let who: T::AccountId = account("bettor", index, 0);
    let amount = T::MinBetSize::get();
    T::BenchmarkHelper::fund(&who, amount);
    Pallet::<T>::place_bet(RawOrigin::Signed(who).into(), market_id, position_of(index), amount)
        .unwrap();
}

fn create_market_with_bets<T: Config>(bet_count: u32) -> MarketIdOf<T> {
    let market_id = MarketCounter::<T>::get();
    Pallet::<T>::create_market(
        operator::<T>(),
        vec![b'?'; MAX_QUESTION_LEN as usize],
        vec![b'T'; MAX_TOKEN_LEN as usize],
    )
    .unwrap();
    for index in 0..bet_count {
        place_bet::<T>(market_id, index);
    }
    market_id
}

fn create_resolved_market<T: Config>(bet_count: u32) -> MarketIdOf<T> {
    let market_id = create_market_with_bets::<T>(bet_count);
    Pallet::<T>::resolve_market(operator::<T>(), market_id, Position::Yes).unwrap();
    market_id
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_market() {
        let origin = operator::<T>();
        let market_id = MarketCounter::<T>::get();

        #[extrinsic_call]
        _(
            origin as T::RuntimeOrigin,
            vec![b'?'; MAX_QUESTION_LEN as usize],
            vec![b'T'; MAX_TOKEN_LEN as usize],
        );

        assert!(Markets::<T>::contains_key(market_id));
    }

    #[benchmark]
    fn place_bet(n: Linear<0, 63>) {
        let market_id = create_market_with_bets::<T>(n);
        let who: T::AccountId = whitelisted_caller();
        let amount = T::MinBetSize::get();
        T::BenchmarkHelper::fund(&who, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(who.clone()), market_id, Position::No, amount);

        let expected_event = <T as Config>::RuntimeEvent::from(Event::<T>::BetPlaced {
            market_id,
            bet_id: n,
            who,
            position: Position::No,
            amount,
        });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn resolve_market(n: Linear<1, 64>) {
        let market_id = create_market_with_bets::<T>(n);
        let origin = operator::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, market_id, Position::Yes);

        assert_eq!(Markets::<T>::get(market_id).unwrap().status, MarketStatus::Resolved);
    }

    #[benchmark]
    fn correct_resolution(n: Linear<1, 64>) {
        let market_id = create_resolved_market::<T>(n);
        let origin = operator::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, market_id, Position::No);

        let paused = n.saturating_mul(2) > T::CorrectionBatchSize::get().max(1);
        assert_eq!(Corrections::<T>::contains_key(market_id), paused);
    }

    #[benchmark]
    fn resume_correction(n: Linear<1, 64>) {
        let market_id = create_resolved_market::<T>(n);
        let intent = CorrectionIntent {
            original_outcome: Position::Yes,
            corrected_outcome: Position::No,
            phase: CorrectionPhase::Reversing { next_bet: 0 },
            started_at: T::Timestamp::now(),
        };
        Corrections::<T>::insert(market_id, intent);
        let origin = operator::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, market_id);

        let paused = n.saturating_mul(2) > T::CorrectionBatchSize::get().max(1);
        assert_eq!(Corrections::<T>::contains_key(market_id), paused);
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::ext_builder::ExtBuilder::default().build(),
        crate::mock::runtime::Runtime
    );
}
