use crate::money::Banknote;

/// The physical note dispenser.
pub trait MoneyDepot {
    /// Releases `banknotes` to the customer.
    ///
    /// Returns `false` if the notes could not be dispensed (e.g. an empty cassette).
    fn release_banknotes(&mut self, banknotes: &[Banknote]) -> bool;
}
