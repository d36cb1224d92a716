use clap::Parser;

/// CLI arguments for the colony simulator
#[derive(Parser, Debug)]
#[command(name = "lem_in", about = "🐜 Ant colony path simulator")]
pub struct Args {
    /// Path to the colony description file
    pub map: String,

    /// Number of ants (overrides the count in the colony file)
    #[arg(short = 'n', long = "ants")]
    pub ants: Option<u32>,

    /// Print the colony description before the moves
    #[arg(long, default_value_t = false)]
    pub echo: bool,

    /// Print turn count and latency to stderr once the ants are home
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}
