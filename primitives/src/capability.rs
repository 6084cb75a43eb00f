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

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// What the caller of an operator-gated call is allowed to do.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum Capability<AI> {
    /// Neither signed nor the automation origin.
    Anonymous,
    /// The automation origin configured by the runtime.
    AutomationPrincipal,
    /// A signed account whose profile carries the administrator flag.
    AdminUser(AI),
    /// Any other signed account.
    RegularUser(AI),
}

impl<AI> Capability<AI> {
    /// Operators may create, resolve and correct markets.
    pub fn is_operator(&self) -> bool {
        matches!(self, Capability::AutomationPrincipal | Capability::AdminUser(_))
    }

    pub fn account(&self) -> Option<&AI> {
        match self {
            Capability::AdminUser(who) | Capability::RegularUser(who) => Some(who),
            Capability::Anonymous | Capability::AutomationPrincipal => None,
        }
    }
}
