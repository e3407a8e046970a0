//! # Money Model
//!
//! Value objects describing *what* is being withdrawn and *what* comes out of the machine.
//!
//! * [`Currency`]: the closed set of monetary units the machine understands.
//! * [`Money`]: a requested amount in a given currency.
//! * [`Banknote`]: a single physical note.
//! * [`Payment`]: the ordered notes handed to the customer.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCurrencyError;

/// Monetary unit of a withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Currency {
    /// Polish zloty.
    PL,
    /// Euro.
    EU,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::PL, Currency::EU];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::PL => "PL",
            Currency::EU => "EU",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    /// Parses a currency code, ignoring case (`"pl"`, `"EU"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PL" => Ok(Currency::PL),
            "EU" => Ok(Currency::EU),
            _ => Err(ParseCurrencyError(s.to_string())),
        }
    }
}

/// A requested amount.
///
/// Construction never fails; whether the amount is acceptable for a withdrawal
/// is decided by the withdrawal service, which reports non-positive amounts as
/// [`crate::error::WithdrawalError::WrongMoneyAmount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub const fn amount(&self) -> i64 {
        self.amount
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }

    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// One physical note. Its face value always comes from the denomination catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Banknote {
    value: u32,
    currency: Currency,
}

impl Banknote {
    pub const fn new(value: u32, currency: Currency) -> Self {
        Self { value, currency }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Banknote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// Result of a successful withdrawal: the dispensed notes, smallest face value first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payment {
    banknotes: Vec<Banknote>,
}

impl Payment {
    pub fn new(banknotes: Vec<Banknote>) -> Self {
        Self { banknotes }
    }

    pub fn banknotes(&self) -> &[Banknote] {
        &self.banknotes
    }

    pub fn len(&self) -> usize {
        self.banknotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banknotes.is_empty()
    }

    /// Sum of all face values.
    pub fn total(&self) -> u64 {
        self.banknotes.iter().map(|note| u64::from(note.value)).sum()
    }

    pub fn into_banknotes(self) -> Vec<Banknote> {
        self.banknotes
    }
}
