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

use crate::{AccountIdOf, Config, Error, Pallet};
use arena_primitives::{traits::ProfileApi, types::Capability};
use frame_support::{ensure, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use sp_runtime::DispatchError;

impl<T: Config> Pallet<T> {
    /// Resolves `origin` into what it is allowed to do.
    ///
    /// The automation origin takes precedence over signed accounts, so an automation account
    /// doesn't need a profile.
    pub fn capability(origin: OriginFor<T>) -> Capability<AccountIdOf<T>> {
        let origin = match T::AutomationOrigin::try_origin(origin) {
            Ok(_) => return Capability::AutomationPrincipal,
            Err(origin) => origin,
        };
        match ensure_signed(origin) {
            Ok(who) if T::Profiles::is_admin(&who) => Capability::AdminUser(who),
            Ok(who) => Capability::RegularUser(who),
            Err(_) => Capability::Anonymous,
        }
    }

    /// Fails with `NotAuthorized` unless `origin` is an operator.
    pub(crate) fn ensure_operator(
        origin: OriginFor<T>,
    ) -> Result<Capability<AccountIdOf<T>>, DispatchError> {
        let capability = Self::capability(origin);
        ensure!(capability.is_operator(), Error::<T>::NotAuthorized);
        Ok(capability)
    }
}
