use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::config::Config;

use crate::terminal::print;

pub fn denominations(cfg: &Config) -> anyhow::Result<()> {
    let catalog: DenominationCatalog = DenominationCatalog::standard();

    print::header("denominations", cfg.quiet);
    for currency in catalog.currencies() {
        let values: String = catalog
            .denominations_for(currency)?
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        print::aligned_line(currency.code(), values);
    }
    Ok(())
}
