pub mod breakdown;
pub mod denominations;
pub mod withdraw;

use cashpoint_common::card::Card;
use cashpoint_common::config::SimulationConfig;
use cashpoint_common::money::Currency;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cashpoint")]
#[command(about = "A simulated cash machine.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (repeat for less)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show diagnostic logs (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Withdraw cash from a simulated machine
    #[command(alias = "w")]
    Withdraw {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        #[arg(short, long, default_value = "pl")]
        currency: Currency,
        #[command(flatten)]
        simulation: SimulationArgs,
    },
    /// Show which banknotes an amount would be paid out in
    #[command(alias = "b")]
    Breakdown {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        #[arg(short, long, default_value = "pl")]
        currency: Currency,
    },
    /// List the face values stocked per currency
    #[command(alias = "d")]
    Denominations,
}

#[derive(Args)]
pub struct SimulationArgs {
    /// Card number to present (defaults to the registered card)
    #[arg(long)]
    pub card: Option<String>,
    /// PIN to enter (defaults to the registered PIN)
    #[arg(long)]
    pub pin: Option<u32>,
    /// Opening balance of the simulated account
    #[arg(long)]
    pub balance: Option<i64>,
    /// Notes loaded into every cassette
    #[arg(long)]
    pub notes: Option<u32>,
}

impl SimulationArgs {
    /// Splits the flags into the machine's seed data and the card the customer presents.
    pub fn resolve(self) -> (SimulationConfig, Card) {
        let mut sim: SimulationConfig = SimulationConfig::default();
        if let Some(balance) = self.balance {
            sim.balance = balance;
        }
        if let Some(notes) = self.notes {
            sim.notes_per_denomination = notes;
        }

        let card: Card = Card::new(
            self.card.unwrap_or_else(|| sim.card_number.clone()),
            self.pin.unwrap_or(sim.pin),
        );

        (sim, card)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
