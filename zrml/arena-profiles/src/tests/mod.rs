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

#![cfg(all(feature = "mock", test))]

mod set_admin;

use crate::{
    mock::{
        consts::*,
        ext_builder::ExtBuilder,
        runtime::{ArenaProfiles, Runtime, RuntimeOrigin, System},
    },
    Error, Event, Profiles,
};
use arena_primitives::traits::{LedgerApi, ProfileApi};
use frame_support::{assert_noop, assert_ok};
use sp_runtime::DispatchError;
