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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Balance, BlockNumber, Moment};
use frame_support::parameter_types;

// Arena
parameter_types! {
    pub const MaxBetsPerMarket: u32 = 64;
    pub const MinBetSize: Balance = 10;
    pub const SoloAdjustment: Balance = DEFAULT_SOLO_ADJUSTMENT;
}

// System
parameter_types! {
    pub const BlockHashCount: BlockNumber = 250;
}

// Timestamp
parameter_types! {
    pub const MinimumPeriod: Moment = 0;
}
