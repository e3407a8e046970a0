//! # Cashpoint Common
//!
//! Shared vocabulary of the cash machine: domain models, the denomination catalog,
//! collaborator ports and the error taxonomy.
//!
//! * **[`money`]**, **[`card`]**: value objects. Pure Rust, no IO.
//! * **[`catalog`]**: the per-currency table of face values.
//! * **[`services`]**: traits for the card provider, bank and depot.
//! * **[`error`]**: typed failures.
//! * **[`config`]**: run configuration assembled by the command line.

pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod services;
