use clap::Parser;

use streamstats::stream::{StreamConfig, DEFAULT_PRECISION};

#[derive(Parser, Debug)]
#[command(name = "streamstats")]
#[command(bin_name = "streamstats")]
#[command(about = "print running mean, standard deviation and median of numbers read from stdin")]
pub struct Cli {
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    #[arg(help = "decimal places in every output value")]
    pub precision: u32,

    #[arg(long, default_value_t = 0)]
    #[arg(help = "delta degrees of freedom for the standard deviation (0 = population)")]
    pub ddof: u32,

    #[arg(short, long, help = "do not print the precision prompt or the exit message")]
    pub quiet: bool,
}

impl Cli {
    pub fn config(&self) -> StreamConfig {
        StreamConfig {
            precision: self.precision,
            ddof: self.ddof,
        }
    }
}
