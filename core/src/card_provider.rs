use std::collections::HashMap;

use cashpoint_common::card::{AuthenticationToken, Card};
use cashpoint_common::services::card_provider::CardProviderService;
use rand::Rng;
use tracing::debug;

struct Registration {
    pin: u32,
    user_id: String,
}

/// Card provider backed by an in-memory registry of cards.
///
/// A registered card with the matching PIN gets a token with a fresh six-digit
/// authorization code.
#[derive(Default)]
pub struct SimulatedCardProvider {
    cards: HashMap<String, Registration>,
}

impl SimulatedCardProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, card_number: impl Into<String>, pin: u32, user_id: impl Into<String>) {
        self.cards.insert(
            card_number.into(),
            Registration {
                pin,
                user_id: user_id.into(),
            },
        );
    }

    pub fn with_card(mut self, card_number: impl Into<String>, pin: u32, user_id: impl Into<String>) -> Self {
        self.register(card_number, pin, user_id);
        self
    }
}

impl CardProviderService for SimulatedCardProvider {
    fn authorize(&mut self, card: &Card) -> Option<AuthenticationToken> {
        let registration = self.cards.get(card.number())?;

        if registration.pin != card.pin() {
            debug!("PIN mismatch for card {}", card.number());
            return None;
        }

        let authorization_code: u32 = rand::rng().random_range(100_000..1_000_000);
        Some(AuthenticationToken::new(authorization_code, registration.user_id.clone()))
    }
}
