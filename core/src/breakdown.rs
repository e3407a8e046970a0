//! # Banknote Breakdown
//!
//! Converts an amount into the physical notes that make it up.
//!
//! The strategy is greedy: walk the catalog from the largest face value down,
//! taking as many notes of each value as still fit. Whatever is left after the
//! smallest face value must be exactly zero, otherwise the amount is rejected.
//! There is no rounding and no partial dispensing.
//!
//! A single withdrawal never pays out more than [`MAX_NOTES_PER_WITHDRAWAL`] notes;
//! the note count is checked before any note is built.

use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::error::CatalogError;
use cashpoint_common::money::{Banknote, Currency};
use thiserror::Error;

/// Most notes one withdrawal may hand out.
pub const MAX_NOTES_PER_WITHDRAWAL: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakdownError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("amount {amount} cannot be paid out exactly, {remainder} left over")]
    Unrepresentable { amount: u64, remainder: u64 },

    #[error("amount {amount} needs {notes} notes, more than one withdrawal may dispense")]
    TooManyNotes { amount: u64, notes: u64 },
}

/// Splits `amount` into banknotes of `currency`.
///
/// The returned notes are ordered by increasing face value (smallest first).
/// An `amount` of zero yields no notes; callers reject zero before getting here.
pub fn breakdown(
    catalog: &DenominationCatalog,
    amount: u64,
    currency: Currency,
) -> Result<Vec<Banknote>, BreakdownError> {
    let denominations: &[u32] = catalog.denominations_for(currency)?;

    let mut remaining: u64 = amount;
    let mut counts: Vec<(u32, u64)> = Vec::with_capacity(denominations.len());

    for &value in denominations {
        let count: u64 = remaining / u64::from(value);
        if count > 0 {
            counts.push((value, count));
            remaining -= count * u64::from(value);
        }
    }

    if remaining != 0 {
        return Err(BreakdownError::Unrepresentable {
            amount,
            remainder: remaining,
        });
    }

    let total: u64 = counts.iter().map(|(_, count)| count).sum();
    let capacity: usize = match usize::try_from(total) {
        Ok(capacity) if total <= MAX_NOTES_PER_WITHDRAWAL => capacity,
        _ => return Err(BreakdownError::TooManyNotes { amount, notes: total }),
    };

    // Generated largest-first; handed out smallest-first.
    let mut notes: Vec<Banknote> = Vec::with_capacity(capacity);
    for (value, count) in counts.into_iter().rev() {
        for _ in 0..count {
            notes.push(Banknote::new(value, currency));
        }
    }

    Ok(notes)
}
