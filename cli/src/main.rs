mod commands;
mod terminal;

use cashpoint_common::config::Config;
use cashpoint_common::money::Money;
use commands::{CommandLine, Commands, breakdown, denominations, withdraw};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Withdraw {
            amount,
            currency,
            simulation,
        } => {
            print::header("withdrawal", cfg.quiet);
            let (sim, card) = simulation.resolve();
            withdraw::withdraw(Money::new(amount, currency), card, &sim, &cfg)
        }
        Commands::Breakdown { amount, currency } => {
            breakdown::breakdown(Money::new(amount, currency), &cfg)
        }
        Commands::Denominations => denominations::denominations(&cfg),
    }
}
