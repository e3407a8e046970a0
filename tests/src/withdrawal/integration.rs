#![cfg(test)]
use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::error::WithdrawalError;
use cashpoint_common::money::{Banknote, Currency, Money, Payment};
use rstest::rstest;

use crate::support::{self, Call, Script};

fn values(payment: &Payment) -> Vec<u32> {
    payment.banknotes().iter().map(Banknote::value).collect()
}

#[test]
fn returns_payment_with_correct_money_amount() {
    let (mut atm, _journal) = support::machine(Script::HAPPY);

    let payment = atm.withdraw(&Money::new(10, Currency::PL), &support::card()).unwrap();

    assert_eq!(payment.total(), 10);
    assert_eq!(values(&payment), vec![10]);
}

#[test]
fn returns_payment_with_correct_amount_of_banknotes() {
    let (mut atm, _journal) = support::machine(Script::HAPPY);

    let payment = atm.withdraw(&Money::new(350, Currency::PL), &support::card()).unwrap();

    assert_eq!(payment.len(), 3);
    assert_eq!(payment.total(), 350);
}

#[test]
fn returns_banknotes_ordered_smallest_face_value_first() {
    let (mut atm, _journal) = support::machine(Script::HAPPY);

    let payment = atm.withdraw(&Money::new(380, Currency::PL), &support::card()).unwrap();

    assert_eq!(values(&payment), vec![10, 20, 50, 100, 200]);
}

#[test]
fn returns_banknotes_in_requested_currency() {
    let (mut atm, journal) = support::machine(Script::HAPPY);

    let payment = atm.withdraw(&Money::new(250, Currency::EU), &support::card()).unwrap();

    assert!(payment.banknotes().iter().all(|note| note.currency() == Currency::EU));
    assert_eq!(journal.count(|call| matches!(call, Call::StartTransaction(_))), 1);
    assert_eq!(journal.count(|call| matches!(call, Call::Commit(_))), 1);
}

#[test]
fn successful_withdrawal_runs_every_step_once_in_order() {
    let (mut atm, journal) = support::machine(Script::HAPPY);

    let payment = atm.withdraw(&Money::new(350, Currency::PL), &support::card()).unwrap();

    assert_eq!(
        journal.sequence(),
        vec!["authorize", "start", "charge", "release", "commit"]
    );
    assert_eq!(journal.count(|call| matches!(call, Call::Abort(_))), 0);
    assert!(journal.calls().contains(&Call::ReleaseBanknotes(payment.into_banknotes())));
}

#[test]
fn bank_receives_the_issued_token_and_requested_money() {
    let (mut atm, journal) = support::machine(Script::HAPPY);
    let money = Money::new(250, Currency::EU);

    atm.withdraw(&money, &support::card()).unwrap();

    assert!(journal.bank_tokens().iter().all(|token| *token == support::token()));
    assert!(journal.calls().contains(&Call::Charge(support::token(), money)));
    assert!(journal.calls().contains(&Call::Authorize(support::card())));
}

#[rstest]
#[case(0)]
#[case(-10)]
#[case(i64::MIN)]
fn non_positive_amount_is_wrong_money_amount(#[case] amount: i64) {
    let (mut atm, journal) = support::machine(Script::HAPPY);

    let result = atm.withdraw(&Money::new(amount, Currency::PL), &support::card());

    assert_eq!(result, Err(WithdrawalError::WrongMoneyAmount { amount }));
    assert!(journal.is_empty());
}

#[rstest]
#[case(3)]
#[case(15)]
#[case(205)]
fn unpayable_amount_is_wrong_money_amount(#[case] amount: i64) {
    let (mut atm, journal) = support::machine(Script::HAPPY);

    let result = atm.withdraw(&Money::new(amount, Currency::PL), &support::card());

    assert_eq!(result, Err(WithdrawalError::WrongMoneyAmount { amount }));
    assert!(journal.is_empty());
}

#[rstest]
#[case(9_000_000_000_000_000_000)]
#[case(i64::MAX - 7)]
#[case(100_200)]
fn amount_needing_too_many_notes_is_wrong_money_amount(#[case] amount: i64) {
    let (mut atm, journal) = support::machine(Script::HAPPY);

    let result = atm.withdraw(&Money::new(amount, Currency::PL), &support::card());

    assert_eq!(result, Err(WithdrawalError::WrongMoneyAmount { amount }));
    assert!(journal.is_empty());
}

#[test]
fn largest_permitted_withdrawal_is_paid_out() {
    let (mut atm, journal) = support::machine(Script::HAPPY);

    let payment = atm.withdraw(&Money::new(100_000, Currency::PL), &support::card()).unwrap();

    assert_eq!(payment.len(), 500);
    assert_eq!(journal.count(|call| matches!(call, Call::Commit(_))), 1);
}

#[test]
fn missing_token_is_card_authorization_failure() {
    let (mut atm, journal) = support::machine(Script::UNAUTHORIZED);

    let result = atm.withdraw(&Money::new(10, Currency::PL), &support::card());

    assert_eq!(result, Err(WithdrawalError::CardAuthorization));
    assert_eq!(journal.sequence(), vec!["authorize"]);
}

#[test]
fn declined_charge_is_insufficient_funds() {
    let (mut atm, journal) = support::machine(Script::DECLINED);

    let result = atm.withdraw(&Money::new(10, Currency::PL), &support::card());

    assert_eq!(result, Err(WithdrawalError::InsufficientFunds));
    assert_eq!(journal.sequence(), vec!["authorize", "start", "charge"]);
    assert_eq!(journal.count(|call| matches!(call, Call::Abort(_))), 0);
    assert_eq!(journal.count(|call| matches!(call, Call::ReleaseBanknotes(_))), 0);
    assert_eq!(journal.count(|call| matches!(call, Call::Commit(_))), 0);
}

#[test]
fn depot_failure_aborts_bank_transaction() {
    let (mut atm, journal) = support::machine(Script::DEPOT_FAILURE);

    let result = atm.withdraw(&Money::new(10, Currency::PL), &support::card());

    assert_eq!(result, Err(WithdrawalError::MoneyDepot));
    assert_eq!(
        journal.sequence(),
        vec!["authorize", "start", "charge", "release", "abort"]
    );
    assert_eq!(journal.count(|call| matches!(call, Call::Abort(_))), 1);
    assert_eq!(journal.count(|call| matches!(call, Call::Commit(_))), 0);
    assert!(journal.bank_tokens().iter().all(|token| *token == support::token()));
}

#[test]
fn currency_without_catalog_is_rejected_before_authorization() {
    let catalog = DenominationCatalog::new([(Currency::EU, vec![200, 100, 50, 20, 10])]).unwrap();
    let (mut atm, journal) = support::machine_with_catalog(catalog, Script::HAPPY);

    let result = atm.withdraw(&Money::new(10, Currency::PL), &support::card());

    assert_eq!(result, Err(WithdrawalError::UnsupportedCurrency(Currency::PL)));
    assert!(journal.is_empty());
}

#[test]
fn machine_serves_consecutive_withdrawals() {
    let (mut atm, journal) = support::machine(Script::HAPPY);

    atm.withdraw(&Money::new(10, Currency::PL), &support::card()).unwrap();
    let rejected = atm.withdraw(&Money::new(3, Currency::PL), &support::card());
    assert_eq!(rejected, Err(WithdrawalError::WrongMoneyAmount { amount: 3 }));
    atm.withdraw(&Money::new(20, Currency::EU), &support::card()).unwrap();

    assert_eq!(journal.count(|call| matches!(call, Call::Commit(_))), 2);
    assert_eq!(journal.count(|call| matches!(call, Call::Authorize(_))), 2);
}

#[test]
fn preview_touches_no_collaborator() {
    let (atm, journal) = support::machine(Script::HAPPY);

    let notes = atm.preview(&Money::new(380, Currency::PL)).unwrap();

    assert_eq!(notes.len(), 5);
    assert!(journal.is_empty());
}
