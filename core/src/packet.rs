//! Photon Packet

use crate::plane::*;
use crate::rng::RNG;

/// Represents one photon packet in flight through the slab.
///
/// Positions are tracked in Cartesian coordinates with z measured in units of
/// the slab thickness; z = 0 is the emission plane and z = 1 the top surface.
/// The direction is stored as the sines and cosines of the polar angle θ
/// (measured from the z-axis) and the azimuthal angle φ. The pairs satisfy
/// cos² + sin² = 1 and are re-derived on every (re)sample, never updated
/// incrementally.
#[derive(Clone)]
pub struct PhotonPacket {
    /// The x position of the packet.
    pub x: Float,

    /// The y position of the packet.
    pub y: Float,

    /// The z position of the packet, in optical depth units of the slab.
    pub z: Float,

    /// The cosine of the packet's theta direction.
    pub cos_theta: Float,

    /// The sine of the packet's theta direction.
    pub sin_theta: Float,

    /// The cosine of the packet's phi direction.
    pub cos_phi: Float,

    /// The sine of the packet's phi direction.
    pub sin_phi: Float,

    /// Number of interactions the packet has undergone inside the slab.
    pub n_interactions: u64,
}

impl PhotonPacket {
    /// Emit a fresh packet at the origin of the slab.
    ///
    /// The polar direction is cosine-weighted (cosθ = √ξ), the Lambertian
    /// emission law for a source embedded in the plane. The weighting must
    /// match the intensity estimator's normalization, so it is not
    /// interchangeable with an isotropic emission law.
    ///
    /// * `rng` - Random number generator.
    pub fn emit(rng: &mut RNG) -> Self {
        let cos_theta = rng.uniform_float().sqrt();
        let cos_phi = (TWO_PI * rng.uniform_float()).cos();

        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            cos_theta,
            sin_theta: (1.0 - cos_theta * cos_theta).sqrt(),
            cos_phi,
            sin_phi: (1.0 - cos_phi * cos_phi).sqrt(),
            n_interactions: 0,
        }
    }

    /// Resample the packet's direction isotropically over the full sphere.
    ///
    /// * `rng` - Random number generator.
    pub fn scatter(&mut self, rng: &mut RNG) {
        self.cos_theta = 2.0 * rng.uniform_float() - 1.0;
        self.sin_theta = (1.0 - self.cos_theta * self.cos_theta).sqrt();
        self.cos_phi = (TWO_PI * rng.uniform_float()).cos();
        self.sin_phi = (1.0 - self.cos_phi * self.cos_phi).sqrt();
    }

    /// Transport the packet a distance ds along its current direction.
    ///
    /// * `ds` - The displacement for the packet to travel.
    pub fn advance(&mut self, ds: Float) {
        self.x += ds * self.sin_theta * self.cos_phi;
        self.y += ds * self.sin_theta * self.sin_phi;
        self.z += ds * self.cos_theta;
    }
}
