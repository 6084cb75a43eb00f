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

use crate::{self as zrml_arena, mock::consts::AUTOMATION, weights::WeightInfo};
use arena_primitives::{
    constants::mock::{BlockHashCount, MaxBetsPerMarket, MinBetSize, MinimumPeriod, SoloAdjustment},
    types::{AccountIdTest, Balance, Hash, MarketId, Moment},
};
use frame_support::{
    construct_runtime, ord_parameter_types, parameter_types,
    traits::{EitherOfDiverse, Everything},
};
use frame_system::{mocking::MockBlock, EnsureRoot, EnsureSignedBy};
use sp_runtime::traits::{BlakeTwo256, ConstU32, IdentityLookup};

construct_runtime! {
    pub enum Runtime {
        Arena: zrml_arena,
        ArenaProfiles: zrml_arena_profiles,
        System: frame_system,
        Timestamp: pallet_timestamp,
    }
}

ord_parameter_types! {
    pub const AutomationAccount: AccountIdTest = AUTOMATION;
}

parameter_types! {
    pub storage CorrectionBatchSize: u32 = 1_000;
}

impl zrml_arena::Config for Runtime {
    type AutomationOrigin = EitherOfDiverse<
        EnsureRoot<AccountIdTest>,
        EnsureSignedBy<AutomationAccount, AccountIdTest>,
    >;
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ArenaProfiles;
    type CorrectionBatchSize = CorrectionBatchSize;
    type Ledger = ArenaProfiles;
    type MarketId = MarketId;
    type MaxBetsPerMarket = MaxBetsPerMarket;
    type MinBetSize = MinBetSize;
    type Profiles = ArenaProfiles;
    type RuntimeEvent = RuntimeEvent;
    type SoloAdjustment = SoloAdjustment;
    type Timestamp = Timestamp;
    type WeightInfo = WeightInfo<Runtime>;
}

impl zrml_arena_profiles::Config for Runtime {
    type AdminOrigin = EnsureRoot<AccountIdTest>;
    type Balance = Balance;
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = zrml_arena_profiles::weights::WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = ();
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}
