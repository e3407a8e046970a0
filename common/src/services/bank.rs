use crate::card::AuthenticationToken;
use crate::money::Money;

/// Bank-side transaction ledger.
///
/// Within one withdrawal the calls arrive in a fixed order, always with the same token:
/// `start_transaction`, `charge`, then exactly one of `commit` or `abort` if the
/// charge went through.
pub trait BankService {
    /// Opens a transaction context for `token`.
    fn start_transaction(&mut self, token: &AuthenticationToken);

    /// Reserves `money` on the account behind `token`.
    ///
    /// Returns `false` when funds are insufficient or the charge is declined.
    fn charge(&mut self, token: &AuthenticationToken, money: &Money) -> bool;

    /// Finalizes the charge.
    fn commit(&mut self, token: &AuthenticationToken);

    /// Cancels the transaction and releases anything reserved by `charge`.
    fn abort(&mut self, token: &AuthenticationToken);
}
