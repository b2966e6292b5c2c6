//! Escape Angle Histogram

use crate::plane::*;

/// Bins the escape angles of packets leaving the top of the slab and converts
/// the raw counts into a flux normalised intensity.
///
/// Binning is uniform in μ = cosθ, so every bin subtends an equal amount of
/// solid angle. Bin i covers μ ∈ [i/n_bins, (i+1)/n_bins) and is represented
/// by the angle of the interval midpoint, which keeps the last bin's centre
/// strictly below π/2.
pub struct AngleHistogram {
    /// The binned escape angles in radians, decreasing with the bin index.
    pub theta: Vec<Float>,

    /// Counters for the number of packets escaped from each binned angle.
    pub counts: Vec<u64>,
}

impl AngleHistogram {
    /// Create a new `AngleHistogram` with all counters at zero.
    ///
    /// * `n_bins` - The number of bins in the histogram.
    pub fn new(n_bins: usize) -> Self {
        let d_theta = 1.0 / n_bins as Float;
        let half_width = 0.5 * d_theta;

        let theta = (0..n_bins)
            .map(|i| (i as Float * d_theta + half_width).acos())
            .collect();

        Self {
            theta,
            counts: vec![0; n_bins],
        }
    }

    /// The number of bins in the histogram.
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Increment the bin counter for an escaped packet.
    ///
    /// A packet escaping straight up (cosθ = 1) lands exactly on the upper
    /// edge of μ space and is clamped into the last bin.
    ///
    /// * `cos_theta` - The packet's escape angle, μ = cos(θ).
    pub fn record_escape(&mut self, cos_theta: Float) {
        let n_bins = self.n_bins();
        let index = clamp(
            (cos_theta.abs() * n_bins as Float) as usize,
            0,
            n_bins - 1,
        );
        self.counts[index] += 1;
    }

    /// Total number of escaped packets recorded so far.
    pub fn total_escaped(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Calculate the flux normalised intensity of each binned angle.
    ///
    /// Counts are normalised by the packet budget and the solid angle of a
    /// bin; the cos(θ) term corrects for the projected area of the emitting
    /// surface seen at the bin's angle.
    ///
    /// * `n_packets` - The number of packets in the simulation.
    pub fn intensity(&self, n_packets: u64) -> Vec<Float> {
        debug_assert!(n_packets > 0);
        let n_bins = self.n_bins() as Float;
        self.counts
            .iter()
            .zip(self.theta.iter())
            .map(|(&count, &theta)| {
                count as Float * n_bins / (2.0 * n_packets as Float * theta.cos())
            })
            .collect()
    }

    /// Merge the counts of another histogram into this one.
    ///
    /// Merging is an elementwise sum, so partial histograms from independent
    /// shards can be combined in any order.
    ///
    /// * `other` - The histogram to merge, binned identically to this one.
    pub fn merge(&mut self, other: &AngleHistogram) {
        assert_eq!(self.n_bins(), other.n_bins());
        for (count, &other_count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += other_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn bin_angles_decrease_within_open_interval() {
        let hist = AngleHistogram::new(20);
        for pair in hist.theta.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        for &theta in hist.theta.iter() {
            assert!(theta > 0.0 && theta < PI_OVER_TWO);
        }
    }

    #[test]
    fn vertical_escape_lands_in_last_bin() {
        let mut hist = AngleHistogram::new(20);
        hist.record_escape(1.0);
        assert_eq!(hist.counts[19], 1);
    }

    #[test]
    fn grazing_escape_lands_in_first_bin() {
        let mut hist = AngleHistogram::new(20);
        hist.record_escape(0.01);
        assert_eq!(hist.counts[0], 1);
    }

    #[test]
    fn intensity_matches_estimator() {
        let mut hist = AngleHistogram::new(10);
        hist.record_escape(0.55);
        hist.record_escape(0.55);

        let intensity = hist.intensity(100);
        let expected = 2.0 * 10.0 / (2.0 * 100.0 * hist.theta[5].cos());
        assert!(approx_eq!(f64, intensity[5], expected, ulps = 2));

        for (i, &value) in intensity.iter().enumerate() {
            if i != 5 {
                assert_eq!(value, 0.0);
            }
        }
    }

    #[test]
    fn merge_is_an_elementwise_sum() {
        let mut a = AngleHistogram::new(5);
        let mut b = AngleHistogram::new(5);
        a.record_escape(0.1);
        a.record_escape(0.9);
        b.record_escape(0.9);

        a.merge(&b);
        assert_eq!(a.counts, vec![1, 0, 0, 0, 2]);
        assert_eq!(a.total_escaped(), 3);
    }

    proptest! {
        #[test]
        fn every_escape_angle_maps_to_a_valid_bin(
            cos_theta in -1.0f64..=1.0,
            n_bins in 1usize..100,
        ) {
            let mut hist = AngleHistogram::new(n_bins);
            hist.record_escape(cos_theta);
            prop_assert_eq!(hist.total_escaped(), 1);
        }
    }
}
