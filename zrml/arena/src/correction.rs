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

//! Correction of resolved markets.
//!
//! A correction runs in two phases. First, the settlement of every bet is taken back through the
//! ledger. Then the market receives the corrected outcome and every bet is settled again. The
//! progress is stored in a `CorrectionIntent`, which also locks the market against concurrent
//! corrections, so that a correction which exceeds the per-call budget can be continued by
//! `resume_correction`.

use crate::{
    BetsOf, Bets, Config, CorrectionIntentOf, CorrectionReportOf, Corrections, Error, Event,
    MarketIdOf, MarketOf, Markets, Pallet, LOG_TARGET,
};
use alloc::vec::Vec;
use arena_primitives::{
    constants::MAX_AUDIT_ENTRIES,
    traits::LedgerApi,
    types::{
        AuditEntry, BetId, CorrectionIntent, CorrectionPhase, CorrectionReport, MarketStatus,
        Position, Reversal, SettledPayout,
    },
};
use frame_support::{
    ensure, require_transactional,
    traits::{Get, Time},
};
use sp_runtime::{DispatchError, SaturatedConversion};

impl<T: Config> Pallet<T> {
    #[require_transactional]
    pub(crate) fn do_correct_resolution(
        market_id: MarketIdOf<T>,
        outcome: Position,
    ) -> Result<CorrectionReportOf<T>, DispatchError> {
        let market = Markets::<T>::get(market_id).ok_or(Error::<T>::MarketNotFound)?;
        ensure!(!Corrections::<T>::contains_key(market_id), Error::<T>::CorrectionInProgress);
        ensure!(market.status == MarketStatus::Resolved, Error::<T>::MarketNotResolved);
        let original_outcome = market.outcome.ok_or(Error::<T>::MarketNotResolved)?;
        ensure!(outcome != original_outcome, Error::<T>::OutcomeUnchanged);
        ensure!(Bets::<T>::decode_len(market_id).unwrap_or(0) > 0, Error::<T>::NoBetsFound);
        ensure!(market.audit_log.len() < MAX_AUDIT_ENTRIES as usize, Error::<T>::AuditLogFull);

        let intent = CorrectionIntent {
            original_outcome,
            corrected_outcome: outcome,
            phase: CorrectionPhase::Reversing { next_bet: 0 },
            started_at: T::Timestamp::now(),
        };
        Corrections::<T>::insert(market_id, intent);

        log::info!(
            target: LOG_TARGET,
            "Correcting market {:?} from {:?} to {:?}",
            market_id,
            original_outcome,
            outcome,
        );
        Self::deposit_event(Event::CorrectionStarted {
            market_id,
            original_outcome,
            corrected_outcome: outcome,
        });

        Self::process_correction(market_id, market, intent)
    }

    #[require_transactional]
    pub(crate) fn do_resume_correction(
        market_id: MarketIdOf<T>,
    ) -> Result<CorrectionReportOf<T>, DispatchError> {
        let market = Markets::<T>::get(market_id).ok_or(Error::<T>::MarketNotFound)?;
        let intent = Corrections::<T>::get(market_id).ok_or(Error::<T>::NoCorrectionInProgress)?;
        Self::process_correction(market_id, market, intent)
    }

    /// Continues the correction described by `intent` for at most `CorrectionBatchSize` bets.
    fn process_correction(
        market_id: MarketIdOf<T>,
        mut market: MarketOf<T>,
        mut intent: CorrectionIntentOf<T>,
    ) -> Result<CorrectionReportOf<T>, DispatchError> {
        let mut bets = Bets::<T>::get(market_id);
        let total_bets: u32 = bets.len().saturated_into();
        let mut budget = T::CorrectionBatchSize::get().max(1);
        let mut report = CorrectionReport {
            market_id,
            question: market.question.clone(),
            old_outcome: intent.original_outcome,
            new_outcome: intent.corrected_outcome,
            total_bets,
            reversals: Vec::new(),
            new_payouts: Vec::new(),
            completed: false,
        };

        if let CorrectionPhase::Reversing { next_bet } = intent.phase {
            let processed =
                Self::reverse_bets(market_id, &mut bets, next_bet, budget, &mut report)?;
            budget = budget.saturating_sub(processed);
            let next_bet = next_bet.saturating_add(processed);
            if next_bet < total_bets {
                intent.phase = CorrectionPhase::Reversing { next_bet };
                Self::pause_correction(market_id, market, bets, intent);
                return Ok(report);
            }

            let now = T::Timestamp::now();
            market
                .append_audit(AuditEntry::Corrected {
                    original_outcome: intent.original_outcome,
                    corrected_outcome: intent.corrected_outcome,
                    at: now,
                })
                .map_err(|_| Error::<T>::AuditLogFull)?;
            market.outcome = Some(intent.corrected_outcome);
            market.corrected_at = Some(now);
            intent.phase = CorrectionPhase::Resettling { next_bet: 0 };
        }

        if let CorrectionPhase::Resettling { next_bet } = intent.phase {
            let processed = Self::resettle_bets(
                market_id,
                &mut bets,
                intent.corrected_outcome,
                next_bet,
                budget,
                &mut report,
            )?;
            let next_bet = next_bet.saturating_add(processed);
            if next_bet < total_bets {
                intent.phase = CorrectionPhase::Resettling { next_bet };
                Self::pause_correction(market_id, market, bets, intent);
                return Ok(report);
            }
        }

        debug_assert!(bets.iter().all(|bet| bet.is_settled()));
        Bets::<T>::insert(market_id, bets);
        Markets::<T>::insert(market_id, market);
        Corrections::<T>::remove(market_id);

        log::info!(
            target: LOG_TARGET,
            "Corrected market {:?} from {:?} to {:?}; {} bets settled again",
            market_id,
            intent.original_outcome,
            intent.corrected_outcome,
            total_bets,
        );
        Self::deposit_event(Event::ResolutionCorrected {
            market_id,
            old_outcome: intent.original_outcome,
            new_outcome: intent.corrected_outcome,
            total_bets,
        });

        report.completed = true;
        Ok(report)
    }

    /// Takes back the settlement of up to `budget` bets starting at `from`. Returns the number of
    /// bets processed.
    fn reverse_bets(
        market_id: MarketIdOf<T>,
        bets: &mut BetsOf<T>,
        from: BetId,
        budget: u32,
        report: &mut CorrectionReportOf<T>,
    ) -> Result<u32, DispatchError> {
        let mut processed = 0u32;
        for (index, bet) in bets.iter_mut().enumerate().skip(from as usize).take(budget as usize) {
            if let Some(was_winner) = bet.is_winner {
                let reversed_amount =
                    T::Ledger::reverse_settlement(&bet.who, bet.payout, was_winner)?;
                Self::deposit_event(Event::BetReversed {
                    market_id,
                    bet_id: index.saturated_into(),
                    who: bet.who.clone(),
                    position: bet.position,
                    was_winner,
                    reversed_amount,
                });
                report.reversals.push(Reversal {
                    who: bet.who.clone(),
                    position: bet.position,
                    was_winner,
                    reversed_amount,
                });
            }
            bet.clear_settlement();
            processed = processed.saturating_add(1);
        }
        Ok(processed)
    }

    /// Settles up to `budget` bets starting at `from` under `outcome`. Returns the number of bets
    /// processed.
    fn resettle_bets(
        market_id: MarketIdOf<T>,
        bets: &mut BetsOf<T>,
        outcome: Position,
        from: BetId,
        budget: u32,
        report: &mut CorrectionReportOf<T>,
    ) -> Result<u32, DispatchError> {
        let payouts = Self::calculate_payouts(bets.as_slice(), outcome)?;
        let mut processed = 0u32;
        for (index, (bet, payout)) in
            bets.iter_mut().zip(payouts).enumerate().skip(from as usize).take(budget as usize)
        {
            Self::settle_bet(market_id, index.saturated_into(), bet, payout)?;
            report.new_payouts.push(SettledPayout {
                who: bet.who.clone(),
                position: bet.position,
                is_winner: payout.is_winner,
                payout: payout.payout,
            });
            processed = processed.saturating_add(1);
        }
        Ok(processed)
    }

    fn pause_correction(
        market_id: MarketIdOf<T>,
        market: MarketOf<T>,
        bets: BetsOf<T>,
        intent: CorrectionIntentOf<T>,
    ) {
        Bets::<T>::insert(market_id, bets);
        Markets::<T>::insert(market_id, market);
        Corrections::<T>::insert(market_id, intent);

        log::info!(
            target: LOG_TARGET,
            "Paused correction of market {:?} at {:?}",
            market_id,
            intent.phase,
        );
        Self::deposit_event(Event::CorrectionPaused { market_id, phase: intent.phase });
    }
}
