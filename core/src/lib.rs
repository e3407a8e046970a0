//! # Cashpoint Core
//!
//! The withdrawal engine and the simulated collaborators it can run against.
//!
//! * **[`breakdown`]**: turns an amount into banknotes.
//! * **[`withdrawal`]**: the [`withdrawal::WithdrawalService`] state machine.
//! * **[`card_provider`]**, **[`bank`]**, **[`depot`]**: in-memory implementations of
//!   the ports in [`cashpoint_common::services`].

pub mod bank;
pub mod breakdown;
pub mod card_provider;
pub mod depot;
pub mod withdrawal;
