#![cfg(test)]
use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::error::WithdrawalError;
use cashpoint_common::money::{Currency, Money};
use cashpoint_core::breakdown::{self, BreakdownError};
use proptest::prelude::*;

use crate::support::{self, Script};

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::PL), Just(Currency::EU)]
}

/// Multiples of the smallest face value, i.e. every amount the standard catalog can pay.
fn payable_amount() -> impl Strategy<Value = u64> {
    (1u64..5_000).prop_map(|tens| tens * 10)
}

fn unpayable_amount() -> impl Strategy<Value = u64> {
    (1u64..50_000).prop_filter("must not be a multiple of 10", |amount| amount % 10 != 0)
}

proptest! {
    /// Notes always add up to the requested amount.
    #[test]
    fn notes_sum_to_amount(amount in payable_amount(), currency in currency()) {
        let notes = breakdown::breakdown(&DenominationCatalog::standard(), amount, currency).unwrap();

        let total: u64 = notes.iter().map(|note| u64::from(note.value())).sum();
        prop_assert_eq!(total, amount);
    }

    /// Notes come out smallest face value first, all in the requested currency.
    #[test]
    fn notes_ascend_in_requested_currency(amount in payable_amount(), currency in currency()) {
        let notes = breakdown::breakdown(&DenominationCatalog::standard(), amount, currency).unwrap();

        prop_assert!(notes.windows(2).all(|pair| pair[0].value() <= pair[1].value()));
        prop_assert!(notes.iter().all(|note| note.currency() == currency));
    }

    /// Same input, same notes.
    #[test]
    fn breakdown_is_deterministic(amount in payable_amount(), currency in currency()) {
        let catalog = DenominationCatalog::standard();

        prop_assert_eq!(
            breakdown::breakdown(&catalog, amount, currency),
            breakdown::breakdown(&catalog, amount, currency)
        );
    }

    /// Greedy never needs more than four notes below the largest face value.
    #[test]
    fn at_most_four_small_notes(amount in payable_amount()) {
        let notes = breakdown::breakdown(&DenominationCatalog::standard(), amount, Currency::PL).unwrap();

        prop_assert!(notes.iter().filter(|note| note.value() < 200).count() <= 4);
    }

    #[test]
    fn unpayable_amounts_are_rejected(amount in unpayable_amount()) {
        let result = breakdown::breakdown(&DenominationCatalog::standard(), amount, Currency::PL);

        prop_assert_eq!(result, Err(BreakdownError::Unrepresentable { amount, remainder: amount % 10 }));
    }

    /// A withdrawal the catalog cannot pay never reaches any collaborator.
    #[test]
    fn unpayable_withdrawal_touches_nothing(amount in unpayable_amount()) {
        let (mut atm, journal) = support::machine(Script::HAPPY);
        let amount = amount as i64;

        let result = atm.withdraw(&Money::new(amount, Currency::PL), &support::card());

        prop_assert_eq!(result, Err(WithdrawalError::WrongMoneyAmount { amount }));
        prop_assert!(journal.is_empty());
    }

    #[test]
    fn non_positive_withdrawal_touches_nothing(amount in i64::MIN..=0) {
        let (mut atm, journal) = support::machine(Script::HAPPY);

        let result = atm.withdraw(&Money::new(amount, Currency::EU), &support::card());

        prop_assert_eq!(result, Err(WithdrawalError::WrongMoneyAmount { amount }));
        prop_assert!(journal.is_empty());
    }
}
