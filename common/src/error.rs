//! # Errors
//!
//! Typed failures shared by every layer.
//!
//! A withdrawal ends in at most one [`WithdrawalError`]. The variants are mutually
//! exclusive and tell the caller exactly how far the withdrawal got before it stopped.

use thiserror::Error;

use crate::money::Currency;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code: {0}")]
pub struct ParseCurrencyError(pub String);

/// Problems with the denomination catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no denominations configured for currency {0}")]
    UnsupportedCurrency(Currency),

    #[error("denomination table for {0} is empty")]
    EmptyDenominations(Currency),

    #[error("denomination table for {0} contains a zero face value")]
    ZeroFaceValue(Currency),

    #[error("denomination table for {currency} lists face value {value} more than once")]
    DuplicateFaceValue { currency: Currency, value: u32 },
}

/// Reasons a withdrawal did not produce a payment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WithdrawalError {
    /// Amount is not positive, the catalog cannot represent it exactly, or it needs
    /// more notes than one withdrawal may dispense.
    /// Nothing was sent to the card provider or the bank.
    #[error("wrong money amount: {amount}")]
    WrongMoneyAmount { amount: i64 },

    /// The card provider did not issue a token. Nothing was sent to the bank.
    #[error("card authorization failed")]
    CardAuthorization,

    /// The bank declined the charge. No compensation was needed.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The depot failed to release the notes after a successful charge.
    /// The bank transaction has already been aborted.
    #[error("money depot failed to release banknotes")]
    MoneyDepot,

    /// The catalog handed to the machine has no table for this currency.
    /// Raised before the card provider is touched.
    #[error("currency {0} is not supported by this machine")]
    UnsupportedCurrency(Currency),
}
