/// Presentation settings for a command-line run.
pub struct Config {
    /// Skips the banner printed on start-up.
    pub no_banner: bool,
    /// Output reduction level. `1` hides headers, `2` hides per-note details.
    pub quiet: u8,
}

/// Seed data for the in-memory card provider, bank and depot.
///
/// These only describe a simulated machine; they are never consulted by the
/// withdrawal service itself.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of the single card registered with the simulated card provider.
    pub card_number: String,
    /// PIN that card expects.
    pub pin: u32,
    /// Account the card belongs to.
    pub user_id: String,
    /// Opening balance of that account, in whole currency units.
    pub balance: i64,
    /// How many notes of each face value every cassette starts with.
    pub notes_per_denomination: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            card_number: String::from("4000-0000-0000-0002"),
            pin: 1111,
            user_id: String::from("1"),
            balance: 1000,
            notes_per_denomination: 10,
        }
    }
}
