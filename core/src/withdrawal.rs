//! # Withdrawal Service
//!
//! Implements the core "Withdraw Cash" use case.
//!
//! The service coordinates the catalog, the card provider, the bank and the depot
//! through one withdrawal:
//!
//! ```text
//! Idle ─► AmountValidated ─► Authorized ─► TransactionStarted ─► Charged ─► Dispensed ─► Committed
//!   │            │                                  │               │
//!   └────────────┴─► Rejected                       └───────────────┴─► Aborted
//! ```
//!
//! Every collaborator is called at most once per withdrawal, always in that order,
//! and nothing is retried. The amount is checked against the catalog before any
//! collaborator is touched.

use cashpoint_common::card::Card;
use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::error::WithdrawalError;
use cashpoint_common::money::{Banknote, Money, Payment};
use cashpoint_common::services::bank::BankService;
use cashpoint_common::services::card_provider::CardProviderService;
use cashpoint_common::services::depot::MoneyDepot;
use tracing::{debug, warn};

use crate::breakdown::{self, BreakdownError};

/// Where a withdrawal currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawalState {
    Idle,
    AmountValidated,
    Authorized,
    TransactionStarted,
    Charged,
    Dispensed,
    /// Success. The bank transaction was committed.
    Committed,
    /// Failure after the bank transaction was opened.
    Aborted,
    /// Failure before the bank saw anything.
    Rejected,
}

impl WithdrawalState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WithdrawalState::Committed | WithdrawalState::Aborted | WithdrawalState::Rejected
        )
    }

    pub fn can_transition_to(&self, next: WithdrawalState) -> bool {
        use WithdrawalState::*;

        matches!(
            (self, next),
            (Idle, AmountValidated)
                | (Idle, Rejected)
                | (AmountValidated, Authorized)
                | (AmountValidated, Rejected)
                | (Authorized, TransactionStarted)
                | (TransactionStarted, Charged)
                | (TransactionStarted, Aborted)
                | (Charged, Dispensed)
                | (Charged, Aborted)
                | (Dispensed, Committed)
        )
    }
}

/// Tracks one withdrawal through its states. Lives only as long as a `withdraw` call.
struct Lifecycle {
    state: WithdrawalState,
}

impl Lifecycle {
    fn new() -> Self {
        Self {
            state: WithdrawalState::Idle,
        }
    }

    fn advance(&mut self, next: WithdrawalState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal withdrawal transition {:?} -> {:?}",
            self.state,
            next
        );
        debug!(from = ?self.state, to = ?next, "withdrawal state transition");
        self.state = next;
    }

    fn fail(&mut self, terminal: WithdrawalState, err: WithdrawalError) -> WithdrawalError {
        self.advance(terminal);
        warn!("withdrawal ended {:?}: {}", terminal, err);
        err
    }
}

/// Application service for cash withdrawals.
///
/// Owns the collaborators for one machine. `withdraw` takes `&mut self`, so a
/// machine runs one withdrawal to completion before the next can start.
pub struct WithdrawalService {
    catalog: DenominationCatalog,
    card_provider: Box<dyn CardProviderService>,
    bank: Box<dyn BankService>,
    depot: Box<dyn MoneyDepot>,
}

impl WithdrawalService {
    pub fn new(
        catalog: DenominationCatalog,
        card_provider: Box<dyn CardProviderService>,
        bank: Box<dyn BankService>,
        depot: Box<dyn MoneyDepot>,
    ) -> Self {
        Self {
            catalog,
            card_provider,
            bank,
            depot,
        }
    }

    /// Withdraws `money` using `card`.
    ///
    /// On success the returned [`Payment`] holds notes summing exactly to the
    /// requested amount, smallest face value first.
    ///
    /// # Errors
    /// * [`WithdrawalError::WrongMoneyAmount`] - amount ≤ 0, not payable with the catalog,
    ///   or needing more notes than one withdrawal may dispense.
    /// * [`WithdrawalError::UnsupportedCurrency`] - the catalog has no table for the currency.
    /// * [`WithdrawalError::CardAuthorization`] - the card provider issued no token.
    /// * [`WithdrawalError::InsufficientFunds`] - the bank declined the charge.
    /// * [`WithdrawalError::MoneyDepot`] - the depot failed; the bank transaction was aborted.
    pub fn withdraw(&mut self, money: &Money, card: &Card) -> Result<Payment, WithdrawalError> {
        let mut lifecycle = Lifecycle::new();

        let banknotes: Vec<Banknote> = match self.preview(money) {
            Ok(banknotes) => banknotes,
            Err(err) => return Err(lifecycle.fail(WithdrawalState::Rejected, err)),
        };
        lifecycle.advance(WithdrawalState::AmountValidated);

        let Some(token) = self.card_provider.authorize(card) else {
            return Err(lifecycle.fail(WithdrawalState::Rejected, WithdrawalError::CardAuthorization));
        };
        lifecycle.advance(WithdrawalState::Authorized);

        self.bank.start_transaction(&token);
        lifecycle.advance(WithdrawalState::TransactionStarted);

        // A declined charge reserved nothing, so there is nothing to abort.
        if !self.bank.charge(&token, money) {
            return Err(lifecycle.fail(WithdrawalState::Aborted, WithdrawalError::InsufficientFunds));
        }
        lifecycle.advance(WithdrawalState::Charged);

        if !self.depot.release_banknotes(&banknotes) {
            self.bank.abort(&token);
            return Err(lifecycle.fail(WithdrawalState::Aborted, WithdrawalError::MoneyDepot));
        }
        lifecycle.advance(WithdrawalState::Dispensed);

        self.bank.commit(&token);
        lifecycle.advance(WithdrawalState::Committed);

        Ok(Payment::new(banknotes))
    }

    /// Validates `money` and computes its breakdown without touching any collaborator.
    pub fn preview(&self, money: &Money) -> Result<Vec<Banknote>, WithdrawalError> {
        validate(&self.catalog, money)
    }
}

/// Checks that `money` can be paid out from `catalog` and returns its breakdown.
///
/// This is the guard every withdrawal passes before any collaborator is called.
pub fn validate(catalog: &DenominationCatalog, money: &Money) -> Result<Vec<Banknote>, WithdrawalError> {
    let wrong_amount = WithdrawalError::WrongMoneyAmount {
        amount: money.amount(),
    };

    let amount: u64 = match u64::try_from(money.amount()) {
        Ok(amount) if amount > 0 => amount,
        _ => return Err(wrong_amount),
    };

    breakdown::breakdown(catalog, amount, money.currency()).map_err(|err| match err {
        BreakdownError::Catalog(_) => WithdrawalError::UnsupportedCurrency(money.currency()),
        BreakdownError::Unrepresentable { .. } | BreakdownError::TooManyNotes { .. } => wrong_amount,
    })
}
