//! Monte Carlo radiative transfer through a plane-parallel slab.

#[macro_use]
extern crate log;

mod options;
mod output;

use clap::Parser;
use indicatif::ProgressBar;
use mcrt::driver;
use options::Options;
use std::time::Instant;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();

    // In case of error report it and exit.
    if let Err(e) = simulate(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn simulate(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let config = options.to_config();
    let start = Instant::now();

    let bar = if options.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(config.n_packets)
    };

    let summary = driver::run_with_progress(&config, |completed, _total| {
        bar.set_position(completed);
    })?;
    bar.finish();

    info!(
        "transport of {} packets completed in {:.2} s, {:.1} interactions per packet",
        config.n_packets,
        start.elapsed().as_secs_f64(),
        summary.mean_interactions()
    );

    output::write_intensity(&options.intensity_file, &summary)?;
    output::write_moments(&options.moments_file, &summary)?;

    Ok(())
}
