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

use crate::mock::{
    consts::{ALICE, BOB, INITIAL_POINTS},
    runtime::{Runtime, System},
};
use alloc::{vec, vec::Vec};
use arena_primitives::types::{AccountIdTest, Balance};
use sp_io::TestExternalities;
use sp_runtime::BuildStorage;

pub struct ExtBuilder {
    balances: Vec<(AccountIdTest, Balance)>,
    admins: Vec<AccountIdTest>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { balances: vec![(ALICE, INITIAL_POINTS), (BOB, INITIAL_POINTS)], admins: vec![] }
    }
}

#[allow(unused)]
impl ExtBuilder {
    pub fn with_admins(mut self, admins: Vec<AccountIdTest>) -> Self {
        self.admins = admins;
        self
    }

    pub fn build(self) -> TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();
        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        crate::GenesisConfig::<Runtime> { balances: self.balances, admins: self.admins }
            .assimilate_storage(&mut t)
            .unwrap();

        let mut test_ext: TestExternalities = t.into();
        test_ext.execute_with(|| System::set_block_number(1));
        test_ext
    }
}
