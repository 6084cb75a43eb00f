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

use crate::types::{BetId, Position, QuestionOf};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// The step a correction has reached. `next_bet` is the index of the first bet that has not been
/// processed in that step.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum CorrectionPhase {
    /// Previous payouts are being taken back.
    Reversing { next_bet: BetId },
    /// The market carries the corrected outcome and bets are being settled again.
    Resettling { next_bet: BetId },
}

/// Durable record of a correction which has been started but not completed. While it exists, the
/// market is locked against further corrections.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct CorrectionIntent<M> {
    pub original_outcome: Position,
    pub corrected_outcome: Position,
    pub phase: CorrectionPhase,
    pub started_at: M,
}

#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Reversal<AI, BA> {
    pub who: AI,
    pub position: Position,
    pub was_winner: bool,
    /// Amount actually debited from `who`.
    pub reversed_amount: BA,
}

#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct SettledPayout<AI, BA> {
    pub who: AI,
    pub position: Position,
    pub is_winner: bool,
    pub payout: BA,
}

/// Summary of the work done by a single correction call.
///
/// If `completed` is `false`, the correction was paused and `reversals` and `new_payouts` only
/// cover the bets processed by this call.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct CorrectionReport<AI, BA, MI> {
    pub market_id: MI,
    pub question: QuestionOf,
    pub old_outcome: Position,
    pub new_outcome: Position,
    pub total_bets: u32,
    pub reversals: Vec<Reversal<AI, BA>>,
    pub new_payouts: Vec<SettledPayout<AI, BA>>,
    pub completed: bool,
}
