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

use core::fmt::Debug;
use frame_support::{dispatch::DispatchResult, pallet_prelude::Member, Parameter};
use parity_scale_codec::{HasCompact, MaxEncodedLen};
use sp_runtime::{traits::AtLeast32BitUnsigned, DispatchError};

/// Single-account mutations of the points ledger.
///
/// Every settlement related change of an account goes through this trait, one call per affected
/// bet.
pub trait LedgerApi {
    type AccountId;
    type Balance: AtLeast32BitUnsigned
        + Copy
        + Debug
        + Default
        + HasCompact
        + MaxEncodedLen
        + Member
        + Parameter;

    /// Returns the spendable points of `who`.
    fn balance(who: &Self::AccountId) -> Self::Balance;

    /// Takes `amount` from the balance of `who` to back a new bet.
    ///
    /// Fails if the balance of `who` is smaller than `amount`.
    fn wager(who: &Self::AccountId, amount: Self::Balance) -> DispatchResult;

    /// Adds `amount` to the balance of `who`. A win is also counted as earnings.
    fn credit_balance(
        who: &Self::AccountId,
        amount: Self::Balance,
        is_win: bool,
    ) -> DispatchResult;

    /// Extends or breaks the streak of `who`.
    fn update_streak(who: &Self::AccountId, is_win: bool) -> DispatchResult;

    /// Undoes the credit of a previous settlement. Never drives the balance below zero and
    /// returns the amount that was actually debited.
    fn reverse_settlement(
        who: &Self::AccountId,
        amount: Self::Balance,
        was_win: bool,
    ) -> Result<Self::Balance, DispatchError>;
}
