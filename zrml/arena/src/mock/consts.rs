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

use arena_primitives::types::{AccountIdTest, Balance};

pub(crate) const ALICE: AccountIdTest = 0;
pub(crate) const BOB: AccountIdTest = 1;
pub(crate) const CHARLIE: AccountIdTest = 2;
pub(crate) const DAVE: AccountIdTest = 3;
/// Has an administrator profile but no points.
pub(crate) const EVE: AccountIdTest = 4;
/// Signs as the automation origin.
pub(crate) const AUTOMATION: AccountIdTest = 99;

pub(crate) const INITIAL_POINTS: Balance = 1_000;
