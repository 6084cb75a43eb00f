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

use crate::types::Position;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::Zero, RuntimeDebug};

/// A stake placed on one side of a market.
///
/// `amount` never changes after placement. `payout` and `is_winner` are written by settlement and
/// reset while a correction reverses the market.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Bet<AI, BA> {
    pub who: AI,
    pub position: Position,
    pub amount: BA,
    /// Points credited to `who` when the market was settled.
    pub payout: BA,
    /// `None` while the bet is unsettled.
    pub is_winner: Option<bool>,
}

impl<AI, BA> Bet<AI, BA>
where
    BA: Zero,
{
    pub fn new(who: AI, position: Position, amount: BA) -> Self {
        Bet { who, position, amount, payout: BA::zero(), is_winner: None }
    }

    pub fn is_settled(&self) -> bool {
        self.is_winner.is_some()
    }

    /// Puts the bet back into the unsettled state.
    pub fn clear_settlement(&mut self) {
        self.payout = BA::zero();
        self.is_winner = None;
    }
}
