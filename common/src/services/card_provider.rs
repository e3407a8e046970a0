use crate::card::{AuthenticationToken, Card};

/// Defines the contract for authorizing a card (and its PIN).
pub trait CardProviderService {
    /// Authorizes `card`.
    ///
    /// # Returns
    /// * `Some(token)` - The card and PIN were accepted.
    /// * `None` - The card or PIN could not be validated. Callers must not retry.
    fn authorize(&mut self, card: &Card) -> Option<AuthenticationToken>;
}
