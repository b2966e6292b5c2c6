//! Simulation configuration.

use crate::error::Error;
use crate::plane::*;

/// Immutable parameters for one simulation run.
///
/// A run is entirely determined by these values; there is no other process
/// wide state. The defaults reproduce the reference setup of an optically
/// thick, purely scattering slab.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of photon packets to transport.
    pub n_packets: u64,

    /// The maximum optical depth a packet can traverse, i.e. the optical
    /// thickness of the slab.
    pub tau_max: Float,

    /// The scattering albedo for packet interactions. An interaction scatters
    /// with this probability and absorbs the packet otherwise.
    pub albedo: Float,

    /// Number of escape angle bins in the intensity histogram.
    pub n_bins: usize,

    /// Number of levels used to calculate the moments of the radiation field.
    pub n_levels: usize,

    /// Seed for the random number generator.
    pub seed: u64,

    /// Report progress every this many completed packets. Zero disables
    /// progress reporting entirely.
    pub output_frequency: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_packets: 1_000_000,
            tau_max: 7.0,
            albedo: 1.0,
            n_bins: 20,
            n_levels: 10,
            seed: 42,
            output_frequency: 100_000,
        }
    }
}

impl Config {
    /// Check the parameter values before any sampling happens.
    ///
    /// Invalid values are rejected immediately and never retried.
    pub fn validate(&self) -> Result<(), Error> {
        if self.n_packets == 0 {
            return Err(Error::config("n_packets", "must be positive"));
        }
        if self.n_bins == 0 {
            return Err(Error::config("n_bins", "must be positive"));
        }
        if self.n_levels == 0 {
            return Err(Error::config("n_levels", "must be positive"));
        }
        if !(self.tau_max > 0.0) || !self.tau_max.is_finite() {
            return Err(Error::config(
                "tau_max",
                format!("must be a positive finite optical depth, got {}", self.tau_max),
            ));
        }
        if !(0.0..=1.0).contains(&self.albedo) {
            return Err(Error::config(
                "albedo",
                format!("must be a probability in [0, 1], got {}", self.albedo),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_packets_rejected() {
        let config = Config {
            n_packets: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_bins_rejected() {
        let config = Config {
            n_bins: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_levels_rejected() {
        let config = Config {
            n_levels: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_tau_rejected() {
        for tau_max in [0.0, -1.0, Float::NAN, Float::INFINITY] {
            let config = Config {
                tau_max,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "tau_max = {tau_max} accepted");
        }
    }

    #[test]
    fn albedo_outside_unit_interval_rejected() {
        for albedo in [-0.1, 1.1, Float::NAN] {
            let config = Config {
                albedo,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "albedo = {albedo} accepted");
        }
    }
}
