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

mod authorization;
mod benchmarking;
mod correction;
pub mod mock;
pub mod settlement;
mod tests;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        settlement::{self, Payout},
        weights::WeightInfoZeitgeist,
    };
    use alloc::vec::Vec;
    use arena_primitives::{
        math::checked_ops_res::CheckedAddRes,
        traits::{LedgerApi, ProfileApi},
        types::{
            AuditEntry, Bet, BetId, CorrectionIntent, CorrectionPhase, CorrectionReport, Market,
            MarketStatus, Position,
        },
    };
    use core::marker::PhantomData;
    use frame_support::{
        ensure,
        pallet_prelude::{
            IsType, MaxEncodedLen, Member, OptionQuery, StorageMap, StorageValue, StorageVersion,
            Twox64Concat, ValueQuery,
        },
        require_transactional,
        traits::{EnsureOrigin, Get, Time},
        transactional, BoundedVec, Parameter,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use sp_runtime::{
        traits::{AtLeast32Bit, MaybeSerializeDeserialize, One, Zero},
        DispatchError, DispatchResult, SaturatedConversion,
    };

    #[cfg(feature = "runtime-benchmarks")]
    use arena_primitives::traits::ArenaBenchmarkHelper;

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-arena";

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The origin of automated market operations. Callers which satisfy this origin may
        /// create, resolve and correct markets without an administrator profile.
        type AutomationOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: ArenaBenchmarkHelper<Self::AccountId, BalanceOf<Self>>;

        /// The maximum number of bets reversed or settled again by a single correction call.
        #[pallet::constant]
        type CorrectionBatchSize: Get<u32>;

        /// The points ledger which backs all stakes and payouts.
        type Ledger: LedgerApi<AccountId = Self::AccountId>;

        type MarketId: AtLeast32Bit
            + Copy
            + Default
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + Member
            + Parameter;

        /// The maximum number of bets a single market may hold.
        #[pallet::constant]
        type MaxBetsPerMarket: Get<u32>;

        /// The minimum stake of a bet.
        #[pallet::constant]
        type MinBetSize: Get<BalanceOf<Self>>;

        /// Read access to the administrator flag of profiles.
        type Profiles: ProfileApi<AccountId = Self::AccountId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Points credited to unanimous winners and deducted from refunds of unopposed losers.
        #[pallet::constant]
        type SoloAdjustment: Get<BalanceOf<Self>>;

        type Timestamp: Time;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type BalanceOf<T> = <<T as Config>::Ledger as LedgerApi>::Balance;
    pub(crate) type BetOf<T> = Bet<AccountIdOf<T>, BalanceOf<T>>;
    pub(crate) type BetsOf<T> = BoundedVec<BetOf<T>, <T as Config>::MaxBetsPerMarket>;
    pub(crate) type CorrectionIntentOf<T> = CorrectionIntent<MomentOf<T>>;
    pub(crate) type CorrectionReportOf<T> =
        CorrectionReport<AccountIdOf<T>, BalanceOf<T>, MarketIdOf<T>>;
    pub(crate) type MarketIdOf<T> = <T as Config>::MarketId;
    pub(crate) type MarketOf<T> = Market<AccountIdOf<T>, BalanceOf<T>, MomentOf<T>>;
    pub(crate) type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;

    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    /// The id of the next market.
    #[pallet::storage]
    pub type MarketCounter<T: Config> = StorageValue<_, MarketIdOf<T>, ValueQuery>;

    #[pallet::storage]
    pub type Markets<T: Config> = StorageMap<_, Twox64Concat, MarketIdOf<T>, MarketOf<T>>;

    /// Bets of each market in the order they were placed. The index of a bet is its id.
    #[pallet::storage]
    pub type Bets<T: Config> = StorageMap<_, Twox64Concat, MarketIdOf<T>, BetsOf<T>, ValueQuery>;

    /// Corrections which have been started but not completed. An entry locks its market against
    /// further corrections.
    #[pallet::storage]
    pub type Corrections<T: Config> =
        StorageMap<_, Twox64Concat, MarketIdOf<T>, CorrectionIntentOf<T>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A market was created. `creator` is `None` if the automation origin created it.
        MarketCreated { market_id: MarketIdOf<T>, creator: Option<AccountIdOf<T>> },
        /// `who` staked `amount` on `position`.
        BetPlaced {
            market_id: MarketIdOf<T>,
            bet_id: BetId,
            who: AccountIdOf<T>,
            position: Position,
            amount: BalanceOf<T>,
        },
        /// The market was resolved to `outcome` and all of its bets were settled.
        MarketResolved { market_id: MarketIdOf<T>, outcome: Position, total_bets: u32 },
        /// A bet was settled and `payout` was credited to `who`.
        BetSettled {
            market_id: MarketIdOf<T>,
            bet_id: BetId,
            who: AccountIdOf<T>,
            position: Position,
            is_winner: bool,
            payout: BalanceOf<T>,
        },
        /// The outcome of a resolved market is being corrected.
        CorrectionStarted {
            market_id: MarketIdOf<T>,
            original_outcome: Position,
            corrected_outcome: Position,
        },
        /// The settlement of a bet was taken back. `reversed_amount` is the amount actually
        /// debited from `who`.
        BetReversed {
            market_id: MarketIdOf<T>,
            bet_id: BetId,
            who: AccountIdOf<T>,
            position: Position,
            was_winner: bool,
            reversed_amount: BalanceOf<T>,
        },
        /// A correction ran out of its per-call budget. Continue with `resume_correction`.
        CorrectionPaused { market_id: MarketIdOf<T>, phase: CorrectionPhase },
        /// A correction was completed.
        ResolutionCorrected {
            market_id: MarketIdOf<T>,
            old_outcome: Position,
            new_outcome: Position,
            total_bets: u32,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is neither the automation origin nor an administrator.
        NotAuthorized,
        /// The market has not been resolved.
        MarketNotResolved,
        /// The market already carries the requested outcome.
        OutcomeUnchanged,
        /// The market does not accept bets or resolution.
        MarketNotActive,
        /// The stake is smaller than the minimum bet size.
        AmountTooSmall,
        /// The question exceeds the maximum length.
        QuestionTooLong,
        /// The token reference exceeds the maximum length.
        TokenTooLong,
        /// The market does not exist.
        MarketNotFound,
        /// The market has no bets.
        NoBetsFound,
        /// There is no paused correction for the market.
        NoCorrectionInProgress,
        /// A correction of the market was started and has not been completed.
        CorrectionInProgress,
        /// The market holds the maximum number of bets.
        TooManyBets,
        /// The audit log of the market is full.
        AuditLogFull,
        /// The balance of the caller is too small to cover the stake.
        InsufficientBalance,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a new active market.
        ///
        /// Must be called by the automation origin or an administrator.
        ///
        /// # Arguments
        ///
        /// - `question`: The yes/no question of the market.
        /// - `token`: Reference to the token whose price event decides the market.
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_market())]
        #[transactional]
        pub fn create_market(
            origin: OriginFor<T>,
            question: Vec<u8>,
            token: Vec<u8>,
        ) -> DispatchResult {
            let capability = Self::ensure_operator(origin)?;
            let creator = capability.account().cloned();
            Self::do_create_market(creator, question, token)?;
            Ok(())
        }

        /// Stake `amount` points on `position`.
        ///
        /// The stake is taken from the ledger of the caller immediately and only returned through
        /// settlement.
        ///
        /// Complexity: `O(n)`, where `n` is the number of bets of the market.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::place_bet(T::MaxBetsPerMarket::get()))]
        #[transactional]
        pub fn place_bet(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            position: Position,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_place_bet(who, market_id, position, amount)
        }

        /// Resolve an active market to `outcome` and settle all of its bets.
        ///
        /// Must be called by the automation origin or an administrator.
        ///
        /// Complexity: `O(n)`, where `n` is the number of bets of the market.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::resolve_market(T::MaxBetsPerMarket::get()))]
        #[transactional]
        pub fn resolve_market(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            outcome: Position,
        ) -> DispatchResult {
            Self::ensure_operator(origin)?;
            Self::do_resolve_market(market_id, outcome)
        }

        /// Change the outcome of a resolved market to `outcome`.
        ///
        /// All payouts of the market are taken back and the bets are settled again under the new
        /// outcome. At most `CorrectionBatchSize` bets are processed per call; if the market has
        /// more bets, the correction is paused and must be continued with `resume_correction`.
        /// The market is locked against other corrections until the correction is completed.
        ///
        /// Must be called by the automation origin or an administrator.
        ///
        /// Complexity: `O(n)`, where `n` is the number of bets of the market.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::correct_resolution(T::CorrectionBatchSize::get()))]
        #[transactional]
        pub fn correct_resolution(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            outcome: Position,
        ) -> DispatchResult {
            Self::ensure_operator(origin)?;
            Self::do_correct_resolution(market_id, outcome)?;
            Ok(())
        }

        /// Continue a paused correction.
        ///
        /// Must be called by the automation origin or an administrator.
        ///
        /// Complexity: `O(n)`, where `n` is the number of bets of the market.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::resume_correction(T::CorrectionBatchSize::get()))]
        #[transactional]
        pub fn resume_correction(origin: OriginFor<T>, market_id: MarketIdOf<T>) -> DispatchResult {
            Self::ensure_operator(origin)?;
            Self::do_resume_correction(market_id)?;
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        #[require_transactional]
        pub(crate) fn do_create_market(
            creator: Option<AccountIdOf<T>>,
            question: Vec<u8>,
            token: Vec<u8>,
        ) -> Result<MarketIdOf<T>, DispatchError> {
            let question = question.try_into().map_err(|_| Error::<T>::QuestionTooLong)?;
            let token = token.try_into().map_err(|_| Error::<T>::TokenTooLong)?;

            let market_id = MarketCounter::<T>::get();
            MarketCounter::<T>::put(market_id.checked_add_res(&One::one())?);

            let market = Market::new(creator.clone(), question, token, T::Timestamp::now());
            Markets::<T>::insert(market_id, market);

            Self::deposit_event(Event::MarketCreated { market_id, creator });

            Ok(market_id)
        }

        #[require_transactional]
        fn do_place_bet(
            who: AccountIdOf<T>,
            market_id: MarketIdOf<T>,
            position: Position,
            amount: BalanceOf<T>,
        ) -> DispatchResult {
            let mut market = Markets::<T>::get(market_id).ok_or(Error::<T>::MarketNotFound)?;
            ensure!(market.status == MarketStatus::Active, Error::<T>::MarketNotActive);
            ensure!(amount >= T::MinBetSize::get(), Error::<T>::AmountTooSmall);
            ensure!(T::Ledger::balance(&who) >= amount, Error::<T>::InsufficientBalance);

            let mut bets = Bets::<T>::get(market_id);
            let is_new_bettor = !bets.iter().any(|bet| bet.who == who);
            let bet_id: BetId = bets.len().saturated_into();
            bets.try_push(Bet::new(who.clone(), position, amount))
                .map_err(|_| Error::<T>::TooManyBets)?;

            T::Ledger::wager(&who, amount)?;

            market.add_stake(position, amount)?;
            if is_new_bettor {
                market.total_bettors = market.total_bettors.saturating_add(1);
            }
            debug_assert!(market.pools_are_consistent());

            Bets::<T>::insert(market_id, bets);
            Markets::<T>::insert(market_id, market);

            Self::deposit_event(Event::BetPlaced { market_id, bet_id, who, position, amount });

            Ok(())
        }

        #[require_transactional]
        fn do_resolve_market(market_id: MarketIdOf<T>, outcome: Position) -> DispatchResult {
            let mut market = Markets::<T>::get(market_id).ok_or(Error::<T>::MarketNotFound)?;
            ensure!(market.status == MarketStatus::Active, Error::<T>::MarketNotActive);
            let mut bets = Bets::<T>::get(market_id);
            ensure!(!bets.is_empty(), Error::<T>::NoBetsFound);

            let now = T::Timestamp::now();
            market
                .append_audit(AuditEntry::Resolved { outcome, at: now })
                .map_err(|_| Error::<T>::AuditLogFull)?;
            market.status = MarketStatus::Resolved;
            market.outcome = Some(outcome);
            market.resolved_at = Some(now);

            let payouts = Self::calculate_payouts(&bets, outcome)?;
            for (index, (bet, payout)) in bets.iter_mut().zip(payouts).enumerate() {
                Self::settle_bet(market_id, index.saturated_into(), bet, payout)?;
            }

            let total_bets: u32 = bets.len().saturated_into();
            log::debug!(
                target: LOG_TARGET,
                "Resolved market {:?} to {:?}: {} bets, pool of {:?}",
                market_id,
                outcome,
                total_bets,
                market.total_pool,
            );

            Bets::<T>::insert(market_id, bets);
            Markets::<T>::insert(market_id, market);

            Self::deposit_event(Event::MarketResolved { market_id, outcome, total_bets });

            Ok(())
        }

        /// Runs the settlement calculator over `bets` with the configured solo adjustment.
        pub(crate) fn calculate_payouts(
            bets: &[BetOf<T>],
            outcome: Position,
        ) -> Result<Vec<Payout<BalanceOf<T>>>, DispatchError> {
            let stakes = bets.iter().map(|bet| (bet.position, bet.amount)).collect::<Vec<_>>();
            settlement::settle(&stakes, outcome, T::SoloAdjustment::get())
        }

        /// Credits `payout` to the owner of `bet` and records it on the bet.
        ///
        /// Winners are credited as a win. Losers are only credited if they receive a refund.
        pub(crate) fn settle_bet(
            market_id: MarketIdOf<T>,
            bet_id: BetId,
            bet: &mut BetOf<T>,
            payout: Payout<BalanceOf<T>>,
        ) -> DispatchResult {
            let Payout { is_winner, payout } = payout;
            if is_winner || !payout.is_zero() {
                T::Ledger::credit_balance(&bet.who, payout, is_winner)?;
            }
            T::Ledger::update_streak(&bet.who, is_winner)?;
            bet.payout = payout;
            bet.is_winner = Some(is_winner);

            Self::deposit_event(Event::BetSettled {
                market_id,
                bet_id,
                who: bet.who.clone(),
                position: bet.position,
                is_winner,
                payout,
            });

            Ok(())
        }

        /// Returns what every bet of the market would receive if it resolved to `outcome`, or
        /// `None` if the market doesn't exist.
        pub fn preview_settlement(
            market_id: MarketIdOf<T>,
            outcome: Position,
        ) -> Option<Vec<(AccountIdOf<T>, Position, bool, BalanceOf<T>)>> {
            if !Markets::<T>::contains_key(market_id) {
                return None;
            }
            let bets = Bets::<T>::get(market_id);
            let payouts = Self::calculate_payouts(&bets, outcome).ok()?;
            Some(
                bets.into_iter()
                    .zip(payouts)
                    .map(|(bet, payout)| (bet.who, bet.position, payout.is_winner, payout.payout))
                    .collect(),
            )
        }

        /// Returns the state of the correction of `market_id`, if one is in progress.
        pub fn correction_status(market_id: MarketIdOf<T>) -> Option<CorrectionIntentOf<T>> {
            Corrections::<T>::get(market_id)
        }
    }
}
