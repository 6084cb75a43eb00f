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

use crate::math::checked_ops_res::{CheckedAddRes, CheckedSubRes};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::AtLeast32BitUnsigned, DispatchError, RuntimeDebug};

/// Points and performance counters of a single account.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub struct LedgerAccount<BA> {
    pub balance: BA,
    pub total_earned: BA,
    pub total_wagered: BA,
    pub total_won: BA,
    pub win_count: u32,
    pub loss_count: u32,
    /// Positive while on a run of wins, negative while on a run of losses.
    pub current_streak: i32,
    /// Longest run of wins so far.
    pub best_streak: u32,
}

impl<BA> LedgerAccount<BA>
where
    BA: AtLeast32BitUnsigned + Copy,
{
    pub fn with_balance(balance: BA) -> Self {
        LedgerAccount {
            balance,
            total_earned: BA::zero(),
            total_wagered: BA::zero(),
            total_won: BA::zero(),
            win_count: 0,
            loss_count: 0,
            current_streak: 0,
            best_streak: 0,
        }
    }

    /// Moves `amount` out of the balance into play.
    pub fn debit_wager(&mut self, amount: BA) -> Result<(), DispatchError> {
        self.balance = self.balance.checked_sub_res(&amount)?;
        self.total_wagered = self.total_wagered.checked_add_res(&amount)?;
        Ok(())
    }

    pub fn credit(&mut self, amount: BA, is_win: bool) -> Result<(), DispatchError> {
        self.balance = self.balance.checked_add_res(&amount)?;
        if is_win {
            self.win_count = self.win_count.checked_add_res(&1)?;
            self.total_won = self.total_won.checked_add_res(&amount)?;
            self.total_earned = self.total_earned.checked_add_res(&amount)?;
        }
        Ok(())
    }

    /// Extends the current run of wins or losses, breaking the opposite run.
    pub fn record_streak(&mut self, is_win: bool) -> Result<(), DispatchError> {
        if is_win {
            self.current_streak = self.current_streak.max(0).checked_add_res(&1)?;
            self.best_streak = self.best_streak.max(self.current_streak.unsigned_abs());
        } else {
            self.current_streak = self.current_streak.min(0).checked_sub_res(&1)?;
            self.loss_count = self.loss_count.checked_add_res(&1)?;
        }
        Ok(())
    }

    /// Takes back up to `amount` from the balance and rolls back the counters of a previous
    /// settlement. Returns the amount actually debited, which is less than `amount` if the
    /// balance was already spent.
    pub fn reverse(&mut self, amount: BA, was_win: bool) -> BA {
        let debited = amount.min(self.balance);
        self.balance = self.balance.saturating_sub(debited);
        if was_win {
            self.win_count = self.win_count.saturating_sub(1);
            self.total_won = self.total_won.saturating_sub(amount);
            self.total_earned = self.total_earned.saturating_sub(amount);
        } else {
            self.loss_count = self.loss_count.saturating_sub(1);
        }
        debited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Balance;
    use more_asserts::assert_le;
    use sp_runtime::ArithmeticError;
    use test_case::test_case;

    type LedgerAccountTest = LedgerAccount<Balance>;

    #[test]
    fn debit_wager_moves_points_into_play() {
        let mut account = LedgerAccountTest::with_balance(100);
        account.debit_wager(30).unwrap();
        assert_eq!(account.balance, 70);
        assert_eq!(account.total_wagered, 30);
        assert_eq!(
            account.debit_wager(71),
            Err(DispatchError::Arithmetic(ArithmeticError::Underflow))
        );
    }

    #[test]
    fn credit_only_counts_wins_as_earnings() {
        let mut account = LedgerAccountTest::default();
        account.credit(125, true).unwrap();
        account.credit(20, false).unwrap();
        assert_eq!(account.balance, 145);
        assert_eq!(account.total_won, 125);
        assert_eq!(account.total_earned, 125);
        assert_eq!(account.win_count, 1);
        assert_eq!(account.loss_count, 0);
    }

    #[test_case(0, true, 1, 1; "first win")]
    #[test_case(3, true, 4, 4; "win extends winning run")]
    #[test_case(-2, true, 1, 1; "win breaks losing run")]
    #[test_case(0, false, -1, 0; "first loss")]
    #[test_case(-2, false, -3, 0; "loss extends losing run")]
    #[test_case(5, false, -1, 0; "loss breaks winning run")]
    fn record_streak_works(current: i32, is_win: bool, expected: i32, expected_best: u32) {
        let mut account = LedgerAccountTest { current_streak: current, ..Default::default() };
        account.record_streak(is_win).unwrap();
        assert_eq!(account.current_streak, expected);
        assert_eq!(account.best_streak, expected_best);
        assert_eq!(account.loss_count, if is_win { 0 } else { 1 });
    }

    #[test]
    fn record_streak_keeps_best_streak_after_loss() {
        let mut account = LedgerAccountTest::default();
        for _ in 0..3 {
            account.record_streak(true).unwrap();
        }
        account.record_streak(false).unwrap();
        account.record_streak(true).unwrap();
        assert_eq!(account.current_streak, 1);
        assert_eq!(account.best_streak, 3);
    }

    #[test]
    fn reverse_win_rolls_back_counters() {
        let mut account = LedgerAccountTest::with_balance(1_000);
        account.credit(125, true).unwrap();
        let debited = account.reverse(125, true);
        assert_eq!(debited, 125);
        assert_eq!(account.balance, 1_000);
        assert_eq!(account.win_count, 0);
        assert_eq!(account.total_won, 0);
        assert_eq!(account.total_earned, 0);
    }

    #[test]
    fn reverse_never_takes_more_than_the_balance() {
        let mut account = LedgerAccountTest::with_balance(40);
        account.win_count = 0;
        let debited = account.reverse(125, true);
        assert_eq!(debited, 40);
        assert_le!(debited, 125);
        assert_eq!(account.balance, 0);
        assert_eq!(account.win_count, 0);
        assert_eq!(account.total_won, 0);
    }

    #[test]
    fn reverse_loss_decrements_loss_count() {
        let mut account =
            LedgerAccountTest { balance: 10, loss_count: 2, ..Default::default() };
        assert_eq!(account.reverse(0, false), 0);
        assert_eq!(account.loss_count, 1);
        assert_eq!(account.balance, 10);
        account.loss_count = 0;
        account.reverse(5, false);
        assert_eq!(account.loss_count, 0);
        assert_eq!(account.balance, 5);
    }
}
