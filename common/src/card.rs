//! # Card Model
//!
//! The card presented at the machine and the token a card provider issues for it.

use std::fmt;

/// A physical card as presented by the customer.
///
/// Fields are private so the card cannot change once it has been handed to the machine.
#[derive(Clone, PartialEq, Eq)]
pub struct Card {
    number: String,
    pin: u32,
}

impl Card {
    pub fn new(number: impl Into<String>, pin: u32) -> Self {
        Self {
            number: number.into(),
            pin,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn pin(&self) -> u32 {
        self.pin
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("number", &self.number)
            .field("pin", &"****")
            .finish()
    }
}

/// Proof that a card was authorized.
///
/// Only a [`crate::services::card_provider::CardProviderService`] creates these; the
/// withdrawal service passes them through to the bank without looking inside.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AuthenticationToken {
    authorization_code: u32,
    user_id: String,
}

impl AuthenticationToken {
    pub fn new(authorization_code: u32, user_id: impl Into<String>) -> Self {
        Self {
            authorization_code,
            user_id: user_id.into(),
        }
    }

    pub fn authorization_code(&self) -> u32 {
        self.authorization_code
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
