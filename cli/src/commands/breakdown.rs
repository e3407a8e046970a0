use anyhow::Context;
use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::config::Config;
use cashpoint_common::money::Money;
use cashpoint_core::withdrawal;

use crate::terminal::{format, print};

pub fn breakdown(money: Money, cfg: &Config) -> anyhow::Result<()> {
    let catalog: DenominationCatalog = DenominationCatalog::standard();

    match withdrawal::validate(&catalog, &money) {
        Ok(notes) => {
            print::header(&format!("breakdown of {money}"), cfg.quiet);
            print::as_tree_one_level(format::notes_to_detail(&notes));
            print::print_status(format!("{} notes", notes.len()));
            Ok(())
        }
        Err(err) => {
            print::header("cannot be paid out", cfg.quiet);
            Err(err).with_context(|| format!("could not break down {money}"))
        }
    }
}
