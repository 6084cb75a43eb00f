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

use crate::{
    constants::{MAX_AUDIT_ENTRIES, MAX_QUESTION_LEN, MAX_TOKEN_LEN},
    math::checked_ops_res::CheckedAddRes,
    types::Position,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::{AtLeast32BitUnsigned, ConstU32},
    BoundedVec, DispatchError, RuntimeDebug,
};

pub type QuestionOf = BoundedVec<u8, ConstU32<MAX_QUESTION_LEN>>;
pub type TokenOf = BoundedVec<u8, ConstU32<MAX_TOKEN_LEN>>;
pub type AuditLogOf<M> = BoundedVec<AuditEntry<M>, ConstU32<MAX_AUDIT_ENTRIES>>;

/// Defines the state of the market.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum MarketStatus {
    /// The market accepts bets.
    Active,
    /// The outcome is known and all bets have been settled. The outcome may still be corrected.
    Resolved,
    /// The market was called off. Terminal.
    Cancelled,
}

/// A single record in a market's resolution history.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum AuditEntry<M> {
    Resolved { outcome: Position, at: M },
    Corrected { original_outcome: Position, corrected_outcome: Position, at: M },
}

/// Types
///
/// * `AI`: Account id
/// * `BA`: Balance type for stakes
/// * `M`: Moment (time moment)
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Market<AI, BA, M> {
    /// Account which created the market. `None` if it was created by the automation origin.
    pub creator: Option<AI>,
    /// The yes/no question the market is about.
    pub question: QuestionOf,
    /// Reference to the token whose price event decides the market.
    pub token: TokenOf,
    /// The current status of the market.
    pub status: MarketStatus,
    /// The winning side. `None` until the market is resolved.
    pub outcome: Option<Position>,
    /// Sum of all stakes on `Yes`.
    pub yes_pool: BA,
    /// Sum of all stakes on `No`.
    pub no_pool: BA,
    /// Sum of all stakes. Always equal to `yes_pool + no_pool`.
    pub total_pool: BA,
    /// Number of distinct accounts that placed a bet.
    pub total_bettors: u32,
    pub created_at: M,
    pub resolved_at: Option<M>,
    pub corrected_at: Option<M>,
    /// Append-only resolution history.
    pub audit_log: AuditLogOf<M>,
}

impl<AI, BA, M> Market<AI, BA, M>
where
    BA: AtLeast32BitUnsigned + Copy,
{
    pub fn new(creator: Option<AI>, question: QuestionOf, token: TokenOf, created_at: M) -> Self {
        Market {
            creator,
            question,
            token,
            status: MarketStatus::Active,
            outcome: None,
            yes_pool: BA::zero(),
            no_pool: BA::zero(),
            total_pool: BA::zero(),
            total_bettors: 0,
            created_at,
            resolved_at: None,
            corrected_at: None,
            audit_log: Default::default(),
        }
    }

    /// Books a new stake of `amount` on `position`.
    pub fn add_stake(&mut self, position: Position, amount: BA) -> Result<(), DispatchError> {
        match position {
            Position::Yes => self.yes_pool = self.yes_pool.checked_add_res(&amount)?,
            Position::No => self.no_pool = self.no_pool.checked_add_res(&amount)?,
        }
        self.total_pool = self.total_pool.checked_add_res(&amount)?;
        Ok(())
    }

    pub fn pools_are_consistent(&self) -> bool {
        self.yes_pool.checked_add(&self.no_pool) == Some(self.total_pool)
    }

    /// Appends `entry` to the audit log. Fails without touching the log if it is full.
    pub fn append_audit(&mut self, entry: AuditEntry<M>) -> Result<(), AuditEntry<M>> {
        self.audit_log.try_push(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountIdTest, Balance, Moment};

    type MarketTest = Market<AccountIdTest, Balance, Moment>;

    fn market() -> MarketTest {
        Market::new(Some(0), Default::default(), Default::default(), 0)
    }

    #[test]
    fn add_stake_keeps_pools_consistent() {
        let mut market = market();
        market.add_stake(Position::Yes, 100).unwrap();
        market.add_stake(Position::No, 40).unwrap();
        market.add_stake(Position::Yes, 5).unwrap();
        assert_eq!(market.yes_pool, 105);
        assert_eq!(market.no_pool, 40);
        assert_eq!(market.total_pool, 145);
        assert!(market.pools_are_consistent());
    }

    #[test]
    fn add_stake_fails_on_overflow() {
        let mut market = market();
        market.add_stake(Position::Yes, Balance::MAX).unwrap();
        assert!(market.add_stake(Position::No, 1).is_err());
    }

    #[test]
    fn append_audit_rejects_entries_once_full() {
        let mut market = market();
        for at in 0..MAX_AUDIT_ENTRIES as u64 {
            let entry = AuditEntry::Resolved { outcome: Position::Yes, at };
            assert!(market.append_audit(entry).is_ok());
        }
        let overflow = AuditEntry::Corrected {
            original_outcome: Position::Yes,
            corrected_outcome: Position::No,
            at: 99,
        };
        assert_eq!(market.append_audit(overflow), Err(overflow));
        assert_eq!(market.audit_log.len(), MAX_AUDIT_ENTRIES as usize);
        assert_eq!(market.audit_log[0], AuditEntry::Resolved { outcome: Position::Yes, at: 0 });
    }
}
