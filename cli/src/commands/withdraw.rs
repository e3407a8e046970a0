use std::time::Instant;

use anyhow::Context;
use cashpoint_common::card::Card;
use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::config::{Config, SimulationConfig};
use cashpoint_common::money::{Money, Payment};
use cashpoint_core::bank::InMemoryBank;
use cashpoint_core::card_provider::SimulatedCardProvider;
use cashpoint_core::depot::CassetteDepot;
use cashpoint_core::withdrawal::WithdrawalService;
use colored::*;
use tracing::info_span;

use crate::terminal::{colors, format, print};

pub fn withdraw(money: Money, card: Card, sim: &SimulationConfig, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("withdrawal", amount = money.amount(), currency = %money.currency());
    let _guard = span.enter();

    let mut service: WithdrawalService = build_machine(sim);

    print::aligned_line("Amount", money.to_string());
    print::aligned_line("Card", card.number().to_string());

    let start_time: Instant = Instant::now();
    let result = service.withdraw(&money, &card);

    match result {
        Ok(payment) => {
            payment_ends(&payment, start_time, cfg);
            Ok(())
        }
        Err(err) => {
            print::header("withdrawal failed", cfg.quiet);
            Err(err).with_context(|| format!("could not withdraw {money}"))
        }
    }
}

/// Wires the simulated collaborators into a withdrawal service.
fn build_machine(sim: &SimulationConfig) -> WithdrawalService {
    let catalog: DenominationCatalog = DenominationCatalog::standard();

    let card_provider = SimulatedCardProvider::new().with_card(&sim.card_number, sim.pin, &sim.user_id);
    let bank = InMemoryBank::new().with_account(&sim.user_id, sim.balance);
    let depot = CassetteDepot::stocked(&catalog, sim.notes_per_denomination);

    WithdrawalService::new(catalog, Box::new(card_provider), Box::new(bank), Box::new(depot))
}

fn payment_ends(payment: &Payment, start_time: Instant, cfg: &Config) {
    print::header("dispensed banknotes", cfg.quiet);

    if cfg.quiet < 2 {
        print::as_tree_one_level(format::notes_to_detail(payment.banknotes()));
    }

    let notes: ColoredString = format!("{} notes", payment.len()).bold().green();
    let total: ColoredString = payment.total().to_string().bold().yellow();
    let elapsed: ColoredString = format!("{:.2}ms", start_time.elapsed().as_secs_f64() * 1000.0).normal();
    let output: String = format!("Withdrawal Complete: {notes} totalling {total} in {elapsed}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => print::print_status(output),
    }
}
