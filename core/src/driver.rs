//! Simulation Driver

use crate::config::Config;
use crate::error::Error;
use crate::histogram::AngleHistogram;
use crate::moments::{MomentLevel, RadiationMoments};
use crate::plane::*;
use crate::rng::RNG;
use crate::transport::{Outcome, TransportEngine};

/// The results of one completed simulation run.
///
/// Rows are ordered by decreasing escape angle, equivalently increasing
/// μ = cosθ, ready to be written out as a table or handed to a plotter.
pub struct RunSummary {
    /// The binned escape angles in radians.
    pub theta: Vec<Float>,

    /// The number of packets which escaped from each binned angle.
    pub counts: Vec<u64>,

    /// The flux normalised intensity of each binned angle.
    pub intensity: Vec<Float>,

    /// The normalised moments of the radiation field per slab level.
    pub moments: Vec<MomentLevel>,

    /// Total number of interactions over all transported packets.
    pub total_interactions: u64,

    /// The number of packets transported.
    pub n_packets: u64,
}

impl RunSummary {
    /// Iterate the (theta, counts, intensity) table rows in output order.
    pub fn rows(&self) -> impl Iterator<Item = (Float, u64, Float)> + '_ {
        self.theta
            .iter()
            .zip(self.counts.iter())
            .zip(self.intensity.iter())
            .map(|((&theta, &count), &intensity)| (theta, count, intensity))
    }

    /// Average number of interactions a packet underwent before terminating.
    pub fn mean_interactions(&self) -> Float {
        self.total_interactions as Float / self.n_packets as Float
    }
}

/// Run a complete simulation with the given parameters.
///
/// * `config` - The simulation parameters.
pub fn run(config: &Config) -> Result<RunSummary, Error> {
    run_with_progress(config, |_, _| {})
}

/// Run a complete simulation, reporting progress along the way.
///
/// Transports `config.n_packets` independent trials strictly sequentially,
/// binning every escaping packet. Two runs with identical seed and parameters
/// produce identical counts, element for element.
///
/// The observer is called with (completed, total) every
/// `config.output_frequency` completed trials. It sees only trial counts and
/// cannot perturb the random sequence.
///
/// * `config`   - The simulation parameters.
/// * `progress` - Progress observer.
pub fn run_with_progress<F>(config: &Config, mut progress: F) -> Result<RunSummary, Error>
where
    F: FnMut(u64, u64),
{
    config.validate()?;

    let mut rng = RNG::new(config.seed);
    let engine = TransportEngine::new(config.tau_max, config.albedo);
    let mut histogram = AngleHistogram::new(config.n_bins);
    let mut moments = RadiationMoments::new(config.n_levels);
    let mut total_interactions: u64 = 0;

    for trial in 1..=config.n_packets {
        let (outcome, n_interactions) = engine.transport(&mut rng, &mut moments);
        total_interactions += n_interactions;

        if let Outcome::Escaped { cos_theta } = outcome {
            histogram.record_escape(cos_theta);
        }

        if config.output_frequency > 0 && trial % config.output_frequency == 0 {
            progress(trial, config.n_packets);
        }
    }

    let intensity = histogram.intensity(config.n_packets);
    info!(
        "transported {} packets, {} escaped, {} interactions in total",
        config.n_packets,
        histogram.total_escaped(),
        total_interactions
    );

    Ok(RunSummary {
        theta: histogram.theta.clone(),
        counts: histogram.counts,
        intensity,
        moments: moments.normalized(config.n_packets),
        total_interactions,
        n_packets: config.n_packets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        Config {
            n_packets: 5_000,
            tau_max: 7.0,
            albedo: 1.0,
            n_bins: 20,
            n_levels: 10,
            seed: 42,
            output_frequency: 0,
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_sampling() {
        let config = Config {
            albedo: 2.0,
            ..small_config()
        };
        assert!(matches!(run(&config), Err(Error::Config { .. })));
    }

    #[test]
    fn escapes_never_exceed_the_packet_budget() {
        let config = Config {
            albedo: 0.5,
            ..small_config()
        };
        let summary = run(&config).unwrap();
        let escaped: u64 = summary.counts.iter().sum();
        assert!(escaped <= config.n_packets);
    }

    #[test]
    fn pure_scattering_escapes_every_packet() {
        // With albedo 1 no packet can be absorbed, so every trial eventually
        // leaves through the top, floor restarts included.
        let summary = run(&small_config()).unwrap();
        let escaped: u64 = summary.counts.iter().sum();
        assert_eq!(escaped, 5_000);
    }

    #[test]
    fn pure_absorption_in_a_thick_slab_escapes_nothing() {
        let config = Config {
            n_packets: 500,
            tau_max: 20.0,
            albedo: 0.0,
            ..small_config()
        };
        let summary = run(&config).unwrap();
        let escaped: u64 = summary.counts.iter().sum();
        assert!(escaped <= 1, "{escaped} packets escaped a slab of depth 20");
    }

    #[test]
    fn intensities_are_non_negative() {
        let summary = run(&small_config()).unwrap();
        assert!(summary.intensity.iter().all(|&i| i >= 0.0));
    }

    #[test]
    fn moment_streams_are_sign_consistent() {
        let summary = run(&small_config()).unwrap();
        for row in summary.moments.iter() {
            assert!(row.h_plus >= 0.0);
            assert!(row.h_minus <= 0.0);
            assert!(row.j_plus >= 0.0 && row.j_minus >= 0.0);
            assert!(row.k_plus >= 0.0 && row.k_minus >= 0.0);
        }
    }

    #[test]
    fn identical_seeds_reproduce_identical_counts() {
        let config = small_config();
        let first = run(&config).unwrap();
        let second = run(&config).unwrap();
        assert_eq!(first.counts, second.counts);
        assert_eq!(first.total_interactions, second.total_interactions);
    }

    #[test]
    fn reference_scenario_is_deterministic() {
        // The canonical reproducibility scenario: a deep, purely scattering
        // slab with a fixed seed must give bit-identical counts on every run.
        let config = Config {
            n_packets: 100_000,
            tau_max: 7.0,
            albedo: 1.0,
            n_bins: 20,
            n_levels: 10,
            seed: 42,
            output_frequency: 0,
        };
        let first = run(&config).unwrap();
        let second = run(&config).unwrap();
        assert_eq!(first.counts, second.counts);
        assert_eq!(first.counts.iter().sum::<u64>(), 100_000);
    }

    #[test]
    fn progress_observer_sees_every_interval() {
        let config = Config {
            n_packets: 1_000,
            output_frequency: 250,
            ..small_config()
        };
        let mut reports = Vec::new();
        let summary = run_with_progress(&config, |done, total| {
            reports.push((done, total));
        })
        .unwrap();
        assert_eq!(reports, vec![(250, 1_000), (500, 1_000), (750, 1_000), (1_000, 1_000)]);
        assert_eq!(summary.n_packets, 1_000);
    }

    #[test]
    fn progress_reporting_does_not_alter_the_random_sequence() {
        let config = Config {
            output_frequency: 100,
            ..small_config()
        };
        let with_progress = run_with_progress(&config, |_, _| {}).unwrap();
        let without_progress = run(&Config {
            output_frequency: 0,
            ..config
        })
        .unwrap();
        assert_eq!(with_progress.counts, without_progress.counts);
    }
}
