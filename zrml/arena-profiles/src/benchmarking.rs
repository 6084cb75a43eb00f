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

use crate::{BalanceOf, Call, Config, Event, Pallet, Profiles};
use frame_benchmarking::v2::*;
use frame_support::traits::EnsureOrigin;
use frame_system::Pallet as System;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_admin() {
        let who: T::AccountId = whitelisted_caller();
        let origin = T::AdminOrigin::try_successful_origin().unwrap();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, who.clone(), true);

        assert!(Profiles::<T>::get(&who).unwrap().is_admin);
        let expected_event =
            <T as Config>::RuntimeEvent::from(Event::<T>::AdminSet { who, is_admin: true });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn grant_points() {
        let who: T::AccountId = whitelisted_caller();
        let origin = T::AdminOrigin::try_successful_origin().unwrap();
        let amount: BalanceOf<T> = 1_000u32.into();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, who.clone(), amount);

        assert_eq!(Pallet::<T>::ledger(&who).balance, amount);
        let expected_event =
            <T as Config>::RuntimeEvent::from(Event::<T>::PointsGranted { who, amount });
        System::<T>::assert_last_event(expected_event.into());
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::ext_builder::ExtBuilder::default().build(),
        crate::mock::runtime::Runtime
    );
}
