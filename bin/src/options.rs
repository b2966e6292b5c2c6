//! Command line options.

use clap::Parser;
use mcrt::config::Config;
use mcrt::plane::Float;

/// Command line options for the simulation.
#[derive(Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    /// Number of photon packets to transport.
    #[clap(
        long = "packets",
        short = 'n',
        value_name = "NUM",
        default_value_t = 1_000_000,
        help = "Transport the specified number of photon packets."
    )]
    pub n_packets: u64,

    /// The optical thickness of the slab.
    #[clap(
        long = "tau",
        short = 't',
        value_name = "FLOAT",
        default_value_t = 7.0,
        help = "Optical thickness of the slab."
    )]
    pub tau_max: Float,

    /// The scattering albedo for packet interactions.
    #[clap(
        long,
        short = 'a',
        value_name = "FLOAT",
        default_value_t = 1.0,
        help = "Scattering albedo for packet interactions."
    )]
    pub albedo: Float,

    /// Number of escape angle bins.
    #[clap(
        long = "bins",
        short = 'b',
        value_name = "NUM",
        default_value_t = 20,
        help = "Number of escape angle bins in the intensity histogram."
    )]
    pub n_bins: usize,

    /// Number of levels for the radiation field moments.
    #[clap(
        long = "levels",
        short = 'l',
        value_name = "NUM",
        default_value_t = 10,
        help = "Number of levels for the radiation field moments."
    )]
    pub n_levels: usize,

    /// Seed for the random number generator.
    #[clap(
        long,
        short = 's',
        value_name = "NUM",
        default_value_t = 42,
        help = "Seed for the random number generator."
    )]
    pub seed: u64,

    /// Suppress the progress bar.
    #[clap(long, help = "Suppress the progress bar.")]
    pub quiet: bool,

    /// Path to the intensity table file.
    #[clap(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        default_value = "intensity.txt",
        help = "Write the binned intensity table to the given filename."
    )]
    pub intensity_file: String,

    /// Path to the radiation field moments file.
    #[clap(
        long = "moments",
        short = 'm',
        value_name = "FILE",
        default_value = "moments.txt",
        help = "Write the radiation field moments to the given filename."
    )]
    pub moments_file: String,
}

impl Options {
    /// Build the immutable simulation configuration from the options.
    pub fn to_config(&self) -> Config {
        Config {
            n_packets: self.n_packets,
            tau_max: self.tau_max,
            albedo: self.albedo,
            n_bins: self.n_bins,
            n_levels: self.n_levels,
            seed: self.seed,
            output_frequency: mcrt::plane::max(self.n_packets / 100, 1),
        }
    }
}
