//! # Denomination Catalog
//!
//! Fixed table of banknote face values available for each [`Currency`].
//!
//! The table is built once and handed to the withdrawal service, which only ever
//! reads from it. Face values are kept in strictly descending order so the
//! dispensing algorithm can walk them largest-first.

use std::collections::BTreeMap;

use crate::error::CatalogError;
use crate::money::Currency;

/// Face values stocked by a standard machine, largest first.
pub const STANDARD_DENOMINATIONS: [u32; 5] = [200, 100, 50, 20, 10];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenominationCatalog {
    tables: BTreeMap<Currency, Vec<u32>>,
}

impl DenominationCatalog {
    /// Builds a catalog from explicit per-currency tables.
    ///
    /// Values may be given in any order; they are stored descending.
    /// Rejects empty tables, zero face values and duplicates.
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Currency, Vec<u32>)>,
    {
        let mut tables: BTreeMap<Currency, Vec<u32>> = BTreeMap::new();

        for (currency, mut values) in entries {
            if values.is_empty() {
                return Err(CatalogError::EmptyDenominations(currency));
            }
            if values.contains(&0) {
                return Err(CatalogError::ZeroFaceValue(currency));
            }

            values.sort_unstable_by(|a, b| b.cmp(a));
            if let Some(pair) = values.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(CatalogError::DuplicateFaceValue {
                    currency,
                    value: pair[0],
                });
            }

            tables.insert(currency, values);
        }

        Ok(Self { tables })
    }

    /// The reference catalog: every supported currency uses [`STANDARD_DENOMINATIONS`].
    pub fn standard() -> Self {
        let tables = Currency::ALL
            .iter()
            .map(|currency| (*currency, STANDARD_DENOMINATIONS.to_vec()))
            .collect();

        Self { tables }
    }

    /// Face values for `currency`, largest first.
    pub fn denominations_for(&self, currency: Currency) -> Result<&[u32], CatalogError> {
        self.tables
            .get(&currency)
            .map(Vec::as_slice)
            .ok_or(CatalogError::UnsupportedCurrency(currency))
    }

    pub fn supports(&self, currency: Currency) -> bool {
        self.tables.contains_key(&currency)
    }

    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.tables.keys().copied()
    }
}

impl Default for DenominationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
