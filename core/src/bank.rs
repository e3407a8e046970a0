use std::collections::HashMap;

use cashpoint_common::card::AuthenticationToken;
use cashpoint_common::money::Money;
use cashpoint_common::services::bank::BankService;
use tracing::{debug, warn};

#[derive(Debug)]
struct PendingTransaction {
    user_id: String,
    reserved: i64,
}

/// Bank ledger held in memory.
///
/// Balances are kept per user id in whole currency units; currencies are not
/// converted. A charge moves money out of the balance into the open
/// transaction, `commit` lets it go and `abort` puts it back.
#[derive(Debug, Default)]
pub struct InMemoryBank {
    balances: HashMap<String, i64>,
    pending: HashMap<u32, PendingTransaction>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, user_id: impl Into<String>, balance: i64) -> Self {
        self.balances.insert(user_id.into(), balance);
        self
    }

    pub fn balance(&self, user_id: &str) -> Option<i64> {
        self.balances.get(user_id).copied()
    }

    pub fn has_open_transaction(&self, token: &AuthenticationToken) -> bool {
        self.pending.contains_key(&token.authorization_code())
    }
}

impl BankService for InMemoryBank {
    fn start_transaction(&mut self, token: &AuthenticationToken) {
        debug!("opening transaction {}", token.authorization_code());
        self.pending.insert(
            token.authorization_code(),
            PendingTransaction {
                user_id: token.user_id().to_string(),
                reserved: 0,
            },
        );
    }

    fn charge(&mut self, token: &AuthenticationToken, money: &Money) -> bool {
        let Some(transaction) = self.pending.get_mut(&token.authorization_code()) else {
            warn!("charge without an open transaction {}", token.authorization_code());
            return false;
        };
        let Some(balance) = self.balances.get_mut(&transaction.user_id) else {
            return false;
        };

        if money.amount() <= 0 || *balance < money.amount() {
            return false;
        }

        *balance -= money.amount();
        transaction.reserved += money.amount();
        true
    }

    fn commit(&mut self, token: &AuthenticationToken) {
        if let Some(transaction) = self.pending.remove(&token.authorization_code()) {
            debug!(
                "committed {} for user {}",
                transaction.reserved, transaction.user_id
            );
        }
    }

    fn abort(&mut self, token: &AuthenticationToken) {
        let Some(transaction) = self.pending.remove(&token.authorization_code()) else {
            return;
        };
        if let Some(balance) = self.balances.get_mut(&transaction.user_id) {
            *balance += transaction.reserved;
        }
        debug!(
            "aborted transaction, refunded {} to user {}",
            transaction.reserved, transaction.user_id
        );
    }
}
