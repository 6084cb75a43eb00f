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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarking;
pub mod mock;
mod tests;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{types::Profile, weights::WeightInfoZeitgeist};
    use alloc::vec::Vec;
    use arena_primitives::{
        traits::{LedgerApi, ProfileApi},
        types::LedgerAccount,
    };
    use core::{fmt::Debug, marker::PhantomData};
    use frame_support::{
        ensure,
        pallet_prelude::{
            IsType, MaxEncodedLen, Member, OptionQuery, StorageMap, StorageVersion, Twox64Concat,
        },
        traits::{BuildGenesisConfig, EnsureOrigin},
        transactional, DefaultNoBound, Parameter,
    };
    use frame_system::pallet_prelude::OriginFor;
    use parity_scale_codec::HasCompact;
    use sp_runtime::{
        traits::{AtLeast32BitUnsigned, MaybeSerializeDeserialize, Zero},
        DispatchError, DispatchResult, Saturating,
    };

    const LOG_TARGET: &str = "runtime::zrml-arena-profiles";

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The origin which may grant points and appoint administrators.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Type of the virtual points tracked by the ledger.
        type Balance: AtLeast32BitUnsigned
            + Copy
            + Debug
            + Default
            + HasCompact
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + Member
            + Parameter;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type BalanceOf<T> = <T as Config>::Balance;
    pub(crate) type ProfileOf<T> = Profile<BalanceOf<T>>;

    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    /// Profile of every account which has ever held points or been appointed administrator.
    #[pallet::storage]
    pub type Profiles<T: Config> =
        StorageMap<_, Twox64Concat, AccountIdOf<T>, ProfileOf<T>, OptionQuery>;

    #[pallet::genesis_config]
    #[derive(DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Starting points of accounts.
        pub balances: Vec<(AccountIdOf<T>, BalanceOf<T>)>,
        /// Accounts which start out as administrators.
        pub admins: Vec<AccountIdOf<T>>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (who, amount) in self.balances.iter() {
                Profiles::<T>::mutate(who, |maybe_profile| {
                    let profile = maybe_profile.get_or_insert_with(Default::default);
                    profile.ledger.balance = profile.ledger.balance.saturating_add(*amount);
                });
            }
            for who in self.admins.iter() {
                Profiles::<T>::mutate(who, |maybe_profile| {
                    maybe_profile.get_or_insert_with(Default::default).is_admin = true;
                });
            }
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// The administrator flag of `who` was changed to `is_admin`.
        AdminSet { who: AccountIdOf<T>, is_admin: bool },
        /// `amount` points were added to the balance of `who`.
        PointsGranted { who: AccountIdOf<T>, amount: BalanceOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The balance of the account is too small to cover the wager.
        InsufficientBalance,
        /// Granting zero points is not allowed.
        ZeroAmount,
        /// The administrator flag already has the requested value.
        AdminUnchanged,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Set or clear the administrator flag of `who`. Administrators may create, resolve and
        /// correct arena markets.
        ///
        /// Creates an empty profile for `who` if necessary.
        ///
        /// # Arguments
        ///
        /// - `who`: The account whose flag is changed.
        /// - `is_admin`: The new value of the flag.
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        #[transactional]
        pub fn set_admin(
            origin: OriginFor<T>,
            who: AccountIdOf<T>,
            is_admin: bool,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_set_admin(&who, is_admin)?;
            Self::deposit_event(Event::AdminSet { who, is_admin });
            Ok(())
        }

        /// Add `amount` points to the balance of `who`.
        ///
        /// Granted points are not counted as earnings.
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::grant_points())]
        #[transactional]
        pub fn grant_points(
            origin: OriginFor<T>,
            who: AccountIdOf<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
            Self::mutate_ledger(&who, |ledger| ledger.credit(amount, false))?;
            Self::deposit_event(Event::PointsGranted { who, amount });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Returns the ledger of `who`, or an empty ledger if `who` has no profile.
        pub fn ledger(who: &AccountIdOf<T>) -> LedgerAccount<BalanceOf<T>> {
            Profiles::<T>::get(who).map(|profile| profile.ledger).unwrap_or_default()
        }

        fn do_set_admin(who: &AccountIdOf<T>, is_admin: bool) -> DispatchResult {
            Profiles::<T>::try_mutate(who, |maybe_profile| {
                let profile = maybe_profile.get_or_insert_with(Default::default);
                ensure!(profile.is_admin != is_admin, Error::<T>::AdminUnchanged);
                profile.is_admin = is_admin;
                Ok(())
            })
        }

        /// Applies `f` to the ledger of `who`, creating the profile if it doesn't exist yet.
        /// Nothing is written if `f` fails.
        fn mutate_ledger<R, F>(who: &AccountIdOf<T>, f: F) -> Result<R, DispatchError>
        where
            F: FnOnce(&mut LedgerAccount<BalanceOf<T>>) -> Result<R, DispatchError>,
        {
            Profiles::<T>::try_mutate(who, |maybe_profile| {
                let profile = maybe_profile.get_or_insert_with(Default::default);
                f(&mut profile.ledger)
            })
        }
    }

    impl<T: Config> LedgerApi for Pallet<T> {
        type AccountId = AccountIdOf<T>;
        type Balance = BalanceOf<T>;

        fn balance(who: &Self::AccountId) -> Self::Balance {
            Self::ledger(who).balance
        }

        fn wager(who: &Self::AccountId, amount: Self::Balance) -> DispatchResult {
            Self::mutate_ledger(who, |ledger| {
                ensure!(ledger.balance >= amount, Error::<T>::InsufficientBalance);
                ledger.debit_wager(amount)
            })
        }

        fn credit_balance(
            who: &Self::AccountId,
            amount: Self::Balance,
            is_win: bool,
        ) -> DispatchResult {
            Self::mutate_ledger(who, |ledger| ledger.credit(amount, is_win))
        }

        fn update_streak(who: &Self::AccountId, is_win: bool) -> DispatchResult {
            Self::mutate_ledger(who, |ledger| ledger.record_streak(is_win))
        }

        fn reverse_settlement(
            who: &Self::AccountId,
            amount: Self::Balance,
            was_win: bool,
        ) -> Result<Self::Balance, DispatchError> {
            Self::mutate_ledger(who, |ledger| {
                let debited = ledger.reverse(amount, was_win);
                if debited < amount {
                    log::warn!(
                        target: LOG_TARGET,
                        "Reversal of {:?} for {:?} only recovered {:?}; the remainder was \
                        already spent",
                        amount,
                        who,
                        debited,
                    );
                }
                Ok(debited)
            })
        }
    }

    impl<T: Config> ProfileApi for Pallet<T> {
        type AccountId = AccountIdOf<T>;

        fn is_admin(who: &Self::AccountId) -> bool {
            Profiles::<T>::get(who).map(|profile| profile.is_admin).unwrap_or(false)
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    impl<T: Config> arena_primitives::traits::ArenaBenchmarkHelper<AccountIdOf<T>, BalanceOf<T>>
        for Pallet<T>
    {
        fn fund(who: &AccountIdOf<T>, amount: BalanceOf<T>) {
            let _ = Self::mutate_ledger(who, |ledger| ledger.credit(amount, false));
        }
    }
}
