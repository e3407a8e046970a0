//! # Collaborator Ports
//!
//! Traits for the services a cash machine *drives* but does not implement itself.
//!
//! ## Rules
//! 1. All items here are `traits`; concrete implementations live in `cashpoint-core`
//!    (simulations) or in test crates (scripted fakes).
//! 2. Signatures speak in domain models only.
//! 3. Calls are synchronous. Each one returns a definite outcome; timeouts and
//!    transport failures are the implementor's problem.
//!
//! ## Available Ports
//! * [`card_provider::CardProviderService`]: turns a card into an authentication token.
//! * [`bank::BankService`]: the bank-side transaction ledger.
//! * [`depot::MoneyDepot`]: the physical note dispenser.

pub mod bank;
pub mod card_provider;
pub mod depot;
