//! Radiation Field Moments

use crate::plane::*;

/// Moment estimators for the radiation field inside the slab.
///
/// The slab is divided into `n_levels` horizontal levels and the estimators
/// count packet crossings of each level boundary, giving `n_levels + 1`
/// entries. Each crossing contributes to the mean intensity J, the Eddington
/// flux H and the radiation pressure K, with upward (`plus`) and downward
/// (`minus`) directions accumulated separately.
pub struct RadiationMoments {
    n_levels: usize,

    /// Upward J moment counters.
    pub j_plus: Vec<Float>,

    /// Downward J moment counters.
    pub j_minus: Vec<Float>,

    /// Upward H moment counters.
    pub h_plus: Vec<Float>,

    /// Downward H moment counters, accumulated negatively.
    pub h_minus: Vec<Float>,

    /// Upward K moment counters.
    pub k_plus: Vec<Float>,

    /// Downward K moment counters.
    pub k_minus: Vec<Float>,
}

/// One level of the normalised radiation field moments.
#[derive(Clone, Copy, Debug)]
pub struct MomentLevel {
    /// The level number, starting at 1.
    pub level: usize,

    /// Upward and downward mean intensity.
    pub j_plus: Float,
    pub j_minus: Float,

    /// Upward and downward Eddington flux.
    pub h_plus: Float,
    pub h_minus: Float,

    /// Upward and downward radiation pressure.
    pub k_plus: Float,
    pub k_minus: Float,
}

impl RadiationMoments {
    /// Create a new `RadiationMoments` with all counters at zero.
    ///
    /// * `n_levels` - The number of levels in the slab.
    pub fn new(n_levels: usize) -> Self {
        Self {
            n_levels,
            j_plus: vec![0.0; n_levels + 1],
            j_minus: vec![0.0; n_levels + 1],
            h_plus: vec![0.0; n_levels + 1],
            h_minus: vec![0.0; n_levels + 1],
            k_plus: vec![0.0; n_levels + 1],
            k_minus: vec![0.0; n_levels + 1],
        }
    }

    /// The number of levels the estimators are defined over.
    pub fn n_levels(&self) -> usize {
        self.n_levels
    }

    /// Update the moment counters for one transport step.
    ///
    /// Every level the packet crossed between its pre and post step positions
    /// is incremented with 1/|cosθ| for J, ±1 for H and |cosθ| for K. Upward
    /// and downward directions are kept separate, so the physical moment at a
    /// level is the sum of the two streams.
    ///
    /// * `z_pre`     - The packet position before the step.
    /// * `z_post`    - The packet position after the step.
    /// * `cos_theta` - The cosine of the packet's theta direction.
    pub fn record_path(&mut self, z_pre: Float, z_post: Float, cos_theta: Float) {
        let n = self.n_levels as Float;

        // The packet stayed within one level, nothing was crossed.
        if z_pre > 0.0
            && z_post > 0.0
            && (z_pre * n) as usize == (z_post * n) as usize
        {
            return;
        }

        if cos_theta > 0.0 {
            let pre = if z_pre <= 0.0 {
                0
            } else {
                (z_pre * n) as usize + 1
            };
            let post = if z_post >= 1.0 {
                self.n_levels
            } else {
                (z_post * n) as usize
            };

            for i in pre..=post {
                self.j_plus[i] += 1.0 / cos_theta;
                self.h_plus[i] += 1.0;
                self.k_plus[i] += cos_theta;
            }
        } else if cos_theta < 0.0 {
            let pre = (z_pre * n) as usize;
            let post = if z_post <= 0.0 {
                0
            } else {
                (z_post * n) as usize + 1
            };

            for i in post..=pre {
                self.j_minus[i] += 1.0 / cos_theta.abs();
                self.h_minus[i] -= 1.0;
                self.k_minus[i] += cos_theta.abs();
            }
        }
    }

    /// Normalise the counters by the packet budget into per-level rows.
    ///
    /// * `n_packets` - The number of packets in the simulation.
    pub fn normalized(&self, n_packets: u64) -> Vec<MomentLevel> {
        let norm = n_packets as Float;
        (0..=self.n_levels)
            .map(|i| MomentLevel {
                level: i + 1,
                j_plus: self.j_plus[i] / norm,
                j_minus: self.j_minus[i] / norm,
                h_plus: self.h_plus[i] / norm,
                h_minus: self.h_minus[i] / norm,
                k_plus: self.k_plus[i] / norm,
                k_minus: self.k_minus[i] / norm,
            })
            .collect()
    }
}
