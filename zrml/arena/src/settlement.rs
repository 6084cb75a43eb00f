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

//! Pari-mutuel settlement of binary markets.
//!
//! The stake of the losing side is shared among the winners proportionally to their stake. Markets
//! without opposition on one side are handled with a fixed adjustment instead:
//!
//! - If nobody picked the winning side, every stake is refunded minus the adjustment.
//! - If nobody picked the losing side, every winner receives their stake plus the adjustment.

use alloc::vec::Vec;
use arena_primitives::{math::checked_ops_res::CheckedAddRes, types::Position};
use sp_arithmetic::{helpers_128bit::multiply_by_rational_with_rounding, Rounding};
use sp_runtime::{
    traits::{AtLeast32BitUnsigned, Zero},
    ArithmeticError, DispatchError, SaturatedConversion,
};

/// The result of settling a single bet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Payout<BA> {
    pub is_winner: bool,
    pub payout: BA,
}

/// Calculates the payout of every stake in `stakes` if the market resolves to `outcome`. The
/// result has the same order as `stakes`.
pub fn settle<BA>(
    stakes: &[(Position, BA)],
    outcome: Position,
    solo_adjustment: BA,
) -> Result<Vec<Payout<BA>>, DispatchError>
where
    BA: AtLeast32BitUnsigned + Copy,
{
    let mut winner_count = 0u32;
    let mut winner_pool = BA::zero();
    let mut loser_pool = BA::zero();
    for &(position, amount) in stakes.iter() {
        if position == outcome {
            winner_count = winner_count.saturating_add(1);
            winner_pool = winner_pool.checked_add_res(&amount)?;
        } else {
            loser_pool = loser_pool.checked_add_res(&amount)?;
        }
    }

    if winner_count == 0 {
        return Ok(stakes
            .iter()
            .map(|&(_, amount)| Payout {
                is_winner: false,
                payout: amount.saturating_sub(solo_adjustment),
            })
            .collect());
    }

    if loser_pool.is_zero() {
        return stakes
            .iter()
            .map(|&(position, amount)| -> Result<Payout<BA>, DispatchError> {
                if position == outcome {
                    let payout = amount.checked_add_res(&solo_adjustment)?;
                    Ok(Payout { is_winner: true, payout })
                } else {
                    Ok(Payout { is_winner: false, payout: BA::zero() })
                }
            })
            .collect();
    }

    let payouts = stakes
        .iter()
        .map(|&(position, amount)| -> Result<Payout<BA>, DispatchError> {
            if position == outcome {
                let share = pool_share(loser_pool, amount, winner_pool)?;
                Ok(Payout { is_winner: true, payout: amount.checked_add_res(&share)? })
            } else {
                Ok(Payout { is_winner: false, payout: BA::zero() })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug_assert!(
        drift_within_bound(&payouts, winner_pool.saturating_add(loser_pool), winner_count),
        "Payouts of {:?} winners drifted too far from the pool",
        winner_count,
    );

    Ok(payouts)
}

/// Returns `loser_pool * amount / winner_pool`, rounded to the nearest integer with halves
/// rounded up.
fn pool_share<BA>(loser_pool: BA, amount: BA, winner_pool: BA) -> Result<BA, DispatchError>
where
    BA: AtLeast32BitUnsigned + Copy,
{
    if winner_pool.is_zero() {
        return Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero));
    }
    let share = multiply_by_rational_with_rounding(
        loser_pool.saturated_into::<u128>(),
        amount.saturated_into::<u128>(),
        winner_pool.saturated_into::<u128>(),
        Rounding::NearestPrefUp,
    )
    .ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))?;
    <BA as TryFrom<u128>>::try_from(share)
        .map_err(|_| DispatchError::Arithmetic(ArithmeticError::Overflow))
}

/// Each winner's share is off by at most one half, so the sum of all payouts may differ from the
/// pool by at most `ceil(winner_count / 2)`.
fn drift_within_bound<BA>(payouts: &[Payout<BA>], total_pool: BA, winner_count: u32) -> bool
where
    BA: AtLeast32BitUnsigned + Copy,
{
    let total_paid = payouts.iter().fold(0u128, |acc, payout| {
        acc.saturating_add(payout.payout.saturated_into::<u128>())
    });
    let total_pool = total_pool.saturated_into::<u128>();
    let bound = u128::from(winner_count.div_ceil(2));
    total_paid.abs_diff(total_pool) <= bound
}
