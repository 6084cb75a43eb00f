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

//! Runtime API definition for the arena pallet.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use arena_primitives::types::{CorrectionIntent, Position};
use parity_scale_codec::{Codec, MaxEncodedLen};

sp_api::decl_runtime_apis! {
    pub trait ArenaApi<MarketId, AccountId, Balance, Moment> where
        MarketId: Codec + MaxEncodedLen,
        AccountId: Codec,
        Balance: Codec,
        Moment: Codec,
    {
        /// Payouts every bet of the market would receive if it resolved to `outcome`.
        fn preview_settlement(
            market_id: MarketId,
            outcome: Position,
        ) -> Option<Vec<(AccountId, Position, bool, Balance)>>;

        fn correction_status(market_id: MarketId) -> Option<CorrectionIntent<Moment>>;
    }
}
