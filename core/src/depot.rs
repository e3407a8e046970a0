use std::collections::HashMap;

use cashpoint_common::catalog::DenominationCatalog;
use cashpoint_common::money::{Banknote, Currency};
use cashpoint_common::services::depot::MoneyDepot;
use tracing::warn;

/// Note dispenser made of one cassette per (currency, face value).
///
/// A release is all or nothing: if any cassette is short, no note leaves the machine.
#[derive(Debug, Default)]
pub struct CassetteDepot {
    cassettes: HashMap<(Currency, u32), u32>,
}

impl CassetteDepot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills one cassette for every face value in `catalog` with `count` notes.
    pub fn stocked(catalog: &DenominationCatalog, count: u32) -> Self {
        let mut depot = Self::new();
        for currency in catalog.currencies() {
            for &value in catalog.denominations_for(currency).unwrap_or_default() {
                depot.load(currency, value, count);
            }
        }
        depot
    }

    pub fn load(&mut self, currency: Currency, value: u32, count: u32) {
        *self.cassettes.entry((currency, value)).or_insert(0) += count;
    }

    pub fn stock(&self, currency: Currency, value: u32) -> u32 {
        self.cassettes.get(&(currency, value)).copied().unwrap_or(0)
    }
}

impl MoneyDepot for CassetteDepot {
    fn release_banknotes(&mut self, banknotes: &[Banknote]) -> bool {
        let mut requested: HashMap<(Currency, u32), u32> = HashMap::new();
        for note in banknotes {
            *requested.entry((note.currency(), note.value())).or_insert(0) += 1;
        }

        for (&(currency, value), &count) in &requested {
            if self.stock(currency, value) < count {
                warn!("cassette {} {} holds fewer than {} notes", value, currency, count);
                return false;
            }
        }

        for (key, count) in requested {
            if let Some(stock) = self.cassettes.get_mut(&key) {
                *stock -= count;
            }
        }
        true
    }
}
