//! Table output.

use mcrt::driver::RunSummary;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Write the intensity of the binned escape angles to file.
///
/// * `path`    - Path of the output file.
/// * `summary` - The completed simulation results.
pub fn write_intensity(path: &str, summary: &RunSummary) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "theta\tcounts\tintensity")?;
    for (theta, counts, intensity) in summary.rows() {
        writeln!(file, "{theta:.6}\t{counts}\t{intensity:.6}")?;
    }

    file.flush()
}

/// Write the JHK moments of the radiation field to file.
///
/// * `path`    - Path of the output file.
/// * `summary` - The completed simulation results.
pub fn write_moments(path: &str, summary: &RunSummary) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(
        file,
        "level\tj_plus\tj_minus\th_plus\th_minus\tk_plus\tk_minus"
    )?;
    for row in summary.moments.iter() {
        writeln!(
            file,
            "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            row.level, row.j_plus, row.j_minus, row.h_plus, row.h_minus, row.k_plus, row.k_minus
        )?;
    }

    file.flush()
}
