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

pub use crate::{
    bet::*, capability::*, correction::*, ledger_account::*, market::*, position::*,
};
use sp_runtime::{
    traits::{IdentifyAccount, Verify},
    MultiSignature,
};

/// Some way of identifying an account on the chain. We intentionally make it equivalent
/// to the public key of our transaction signing scheme.
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

/// Balance of an account, denominated in points.
pub type Balance = u128;

/// Index of a bet within the bet list of its market.
pub type BetId = u32;

/// An index to a block.
pub type BlockNumber = u64;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// The market identifier type.
pub type MarketId = u128;

/// Time
pub type Moment = u64;

/// Alias to 512-bit hash when used in the context of a transaction signature on the chain.
pub type Signature = MultiSignature;

// Tests

pub type AccountIdTest = u128;
