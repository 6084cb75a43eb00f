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

//! Weight estimates for the calls of this pallet. These are not benchmark output yet and
//! must be regenerated from `benchmarking.rs` on reference hardware before production use.

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfoZeitgeist {
    fn create_market() -> Weight;
    fn place_bet(n: u32) -> Weight;
    fn resolve_market(n: u32) -> Weight;
    fn correct_resolution(n: u32) -> Weight;
    fn resume_correction(n: u32) -> Weight;
}

pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `ArenaProfiles::Profiles` (r:1 w:0)
    /// Storage: `Arena::MarketCounter` (r:1 w:1)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Storage: `Arena::Markets` (r:0 w:1)
    fn create_market() -> Weight {
        Weight::from_parts(21_000_000, 4_002)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Arena::Markets` (r:1 w:1)
    /// Storage: `Arena::Bets` (r:1 w:1)
    /// Storage: `ArenaProfiles::Profiles` (r:2 w:1)
    /// The range of component `n` is `[0, 64]`.
    fn place_bet(n: u32) -> Weight {
        Weight::from_parts(30_000_000, 5_200)
            .saturating_add(Weight::from_parts(120_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `ArenaProfiles::Profiles` (r:1 w:0)
    /// Storage: `Arena::Markets` (r:1 w:1)
    /// Storage: `Arena::Bets` (r:1 w:1)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Storage: `ArenaProfiles::Profiles` (r:n w:n)
    /// The range of component `n` is `[1, 64]`.
    fn resolve_market(n: u32) -> Weight {
        Weight::from_parts(35_000_000, 5_200)
            .saturating_add(Weight::from_parts(14_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(2_u64))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
    /// Storage: `ArenaProfiles::Profiles` (r:1 w:0)
    /// Storage: `Arena::Markets` (r:1 w:1)
    /// Storage: `Arena::Corrections` (r:1 w:1)
    /// Storage: `Arena::Bets` (r:1 w:1)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Storage: `ArenaProfiles::Profiles` (r:n w:n)
    /// The range of component `n` is `[1, 64]`.
    fn correct_resolution(n: u32) -> Weight {
        Weight::from_parts(45_000_000, 5_400)
            .saturating_add(Weight::from_parts(18_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(3_u64))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
    /// Storage: `ArenaProfiles::Profiles` (r:1 w:0)
    /// Storage: `Arena::Markets` (r:1 w:1)
    /// Storage: `Arena::Corrections` (r:1 w:1)
    /// Storage: `Arena::Bets` (r:1 w:1)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Storage: `ArenaProfiles::Profiles` (r:n w:n)
    /// The range of component `n` is `[1, 64]`.
    fn resume_correction(n: u32) -> Weight {
        Weight::from_parts(40_000_000, 5_400)
            .saturating_add(Weight::from_parts(18_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(3_u64))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
}
