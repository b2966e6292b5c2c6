//! Packet Transport

use crate::moments::RadiationMoments;
use crate::packet::PhotonPacket;
use crate::plane::*;
use crate::rng::RNG;

/// Terminal classification of one transported trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The packet left through the top of the slab with the given direction.
    Escaped { cos_theta: Float },

    /// The packet was absorbed inside the slab.
    Absorbed,
}

/// Transports single packets through a homogeneous plane-parallel slab.
///
/// Free path lengths are sampled from the negative exponential optical depth
/// distribution, τ = −ln(ξ), and converted into geometric distances with the
/// slab's optical thickness. A packet keeps stepping until it either escapes
/// the top surface or is absorbed at an interaction.
pub struct TransportEngine {
    /// The maximum optical depth a packet can traverse.
    pub tau_max: Float,

    /// The scattering albedo for packet interactions.
    pub albedo: Float,
}

impl TransportEngine {
    /// Create a new `TransportEngine` for a slab.
    ///
    /// * `tau_max` - The optical thickness of the slab.
    /// * `albedo`  - The scattering albedo for packet interactions.
    pub fn new(tau_max: Float, albedo: Float) -> Self {
        Self { tau_max, albedo }
    }

    /// Transport one trial from emission to a terminal outcome.
    ///
    /// A packet travelling below the emission plane is lost into the opaque
    /// floor; the trial restarts with a fresh emission to enforce the
    /// boundary flux condition, without consuming the packet budget. The
    /// restart is expected behaviour, not a failure.
    ///
    /// Returns the terminal outcome together with the number of interactions
    /// the surviving packet underwent.
    ///
    /// * `rng`     - Random number generator.
    /// * `moments` - The radiation field moment estimators to update.
    pub fn transport(&self, rng: &mut RNG, moments: &mut RadiationMoments) -> (Outcome, u64) {
        let mut packet = PhotonPacket::emit(rng);

        loop {
            // Sample a random optical depth and update the packet position.
            let z_pre = packet.z;
            let tau = -rng.uniform_open().ln();
            packet.advance(tau / self.tau_max);
            packet.n_interactions += 1;

            moments.record_path(z_pre, packet.z, packet.cos_theta);

            if packet.z < 0.0 {
                // Lost into the atmosphere below the emission plane; restart
                // the trial with a new packet.
                packet = PhotonPacket::emit(rng);
            } else if packet.z > 1.0 {
                return (
                    Outcome::Escaped {
                        cos_theta: packet.cos_theta,
                    },
                    packet.n_interactions,
                );
            } else {
                let xi = rng.uniform_float();
                if xi < self.albedo {
                    packet.scatter(rng);
                } else {
                    return (Outcome::Absorbed, packet.n_interactions);
                }
            }
        }
    }
}
