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

#[cfg(feature = "mock")]
pub mod mock;

/// Maximum length of a market question in bytes.
pub const MAX_QUESTION_LEN: u32 = 256;
/// Maximum length of a token reference in bytes.
pub const MAX_TOKEN_LEN: u32 = 64;
/// Maximum number of resolutions and corrections recorded for a single market.
pub const MAX_AUDIT_ENTRIES: u32 = 16;

/// Points credited to unanimous winners and deducted from unopposed losers.
pub const DEFAULT_SOLO_ADJUSTMENT: u128 = 50;
