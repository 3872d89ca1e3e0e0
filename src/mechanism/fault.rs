//! Slip and normal vectors of a fault plane.
//!
//! Vectors follow Aki & Richards (1980), Figure 4.20 and Equation 4.83: a right-handed
//! frame with `x` = North, `y` = East, `z` = Down.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::angles::{wrap_rake, wrap_strike};
use super::config::MechanismConfig;
use super::error::MechanismError;

/// Computes the slip vector `u` and fault normal `v` from fault angles in degrees.
///
/// No validation is performed: any real input is evaluated, and out-of-domain angles
/// give well-defined but physically meaningless vectors. Both outputs have unit length
/// up to floating-point error.
///
/// # Arguments
/// * `strike` - Fault trace bearing, clockwise from North, in [0, 360)
/// * `dip` - Fault plane inclination below horizontal, in [0, 90]
/// * `rake` - Slip direction measured in the fault plane from strike, in (-180, 180]
///
/// # Returns
/// `(u, v)` as North-East-Down vectors
///
/// # Example
/// ```
/// use faultvec::fault2uv;
///
/// let (u, v) = fault2uv(20.0, 30.0, 40.0);
/// assert!((u.x - 0.9102388).abs() < 1e-6);
/// assert!((v.z + 0.8660254).abs() < 1e-6);
/// ```
pub fn fault2uv(strike: f64, dip: f64, rake: f64) -> (DVec3, DVec3) {
    let (sstr, cstr) = strike.to_radians().sin_cos();
    let (sdip, cdip) = dip.to_radians().sin_cos();
    let (srak, crak) = rake.to_radians().sin_cos();

    let u = DVec3::new(
        crak * cstr + srak * cdip * sstr,
        crak * sstr - srak * cdip * cstr,
        -srak * sdip,
    );
    let v = DVec3::new(-sdip * sstr, sdip * cstr, -cdip);
    (u, v)
}

/// Orientation of a fault plane and its slip, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultOrientation {
    pub strike: f64,
    pub dip: f64,
    pub rake: f64,
}

impl FaultOrientation {
    pub const fn new(strike: f64, dip: f64, rake: f64) -> Self {
        Self { strike, dip, rake }
    }

    /// Returns a copy with strike wrapped into [0, 360) and rake into (-180, 180].
    ///
    /// Dip is left as is.
    pub fn wrapped(&self) -> Self {
        Self {
            strike: wrap_strike(self.strike),
            dip: self.dip,
            rake: wrap_rake(self.rake),
        }
    }

    /// Evaluates the slip and normal vectors without validation.
    pub fn vectors(&self) -> FaultVectors {
        let (slip, normal) = fault2uv(self.strike, self.dip, self.rake);
        FaultVectors { slip, normal }
    }

    /// Validates the orientation against `config`, then evaluates it.
    pub fn checked_vectors(&self, config: &MechanismConfig) -> Result<FaultVectors, MechanismError> {
        Ok(config.validate(self)?.vectors())
    }

    /// Slip direction `u`.
    pub fn slip_vector(&self) -> DVec3 {
        self.vectors().slip
    }

    /// Fault normal `v`.
    pub fn normal_vector(&self) -> DVec3 {
        self.vectors().normal
    }
}

/// Slip direction and fault normal of a fault, North-East-Down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultVectors {
    /// Slip direction `u`.
    pub slip: DVec3,
    /// Fault normal `v`.
    pub normal: DVec3,
}

impl FaultVectors {
    /// Returns `(u, v)` as plain component arrays.
    pub fn to_arrays(&self) -> ([f64; 3], [f64; 3]) {
        (self.slip.to_array(), self.normal.to_array())
    }

    /// Checks that both vectors have unit length and are mutually perpendicular.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        (self.slip.length() - 1.0).abs() <= tolerance
            && (self.normal.length() - 1.0).abs() <= tolerance
            && self.slip.dot(self.normal).abs() <= tolerance
    }
}

impl From<FaultVectors> for (DVec3, DVec3) {
    fn from(vectors: FaultVectors) -> Self {
        (vectors.slip, vectors.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const TOL: f64 = 1e-9;

    fn assert_vec_close(actual: DVec3, expected: [f64; 3], tol: f64) {
        let diff = (actual - DVec3::from_array(expected)).abs().max_element();
        assert!(diff < tol, "got {:?}, expected {:?} (max diff {})", actual, expected, diff);
    }

    fn random_angles(rng: &mut ChaCha8Rng, spread: f64) -> (f64, f64, f64) {
        (
            rng.random_range(-spread..spread),
            rng.random_range(-spread..spread),
            rng.random_range(-spread..spread),
        )
    }

    #[test]
    fn test_reference_orientation() {
        let (u, v) = fault2uv(20.0, 30.0, 40.0);
        assert_vec_close(u, [0.9102388, -0.26109644, -0.3213938], 1e-6);
        assert_vec_close(v, [-0.17101007, 0.46984631, -0.8660254], 1e-6);
    }

    #[test]
    fn test_pure_dip_slip_on_vertical_fault() {
        let (u, v) = fault2uv(0.0, 90.0, 90.0);
        assert_vec_close(u, [0.0, 0.0, -1.0], TOL);
        assert_vec_close(v, [0.0, 1.0, 0.0], TOL);
    }

    #[test]
    fn test_pure_strike_slip_on_vertical_fault() {
        let (u, v) = fault2uv(0.0, 90.0, 0.0);
        assert_vec_close(u, [1.0, 0.0, 0.0], TOL);
        assert_vec_close(v, [0.0, 1.0, 0.0], TOL);
    }

    #[test]
    fn test_horizontal_fault_normal_points_up() {
        let (u, v) = fault2uv(0.0, 0.0, 0.0);
        assert_vec_close(u, [1.0, 0.0, 0.0], TOL);
        assert_vec_close(v, [0.0, 0.0, -1.0], TOL);
    }

    #[test]
    fn test_normal_fault_slip_goes_down() {
        // Strike East, dipping 45 degrees, rake -90.
        let (u, v) = fault2uv(90.0, 45.0, -90.0);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_vec_close(u, [-h, 0.0, h], TOL);
        assert_vec_close(v, [-h, 0.0, -h], TOL);
    }

    #[test]
    fn test_unit_length_and_orthogonality() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            // Includes out-of-domain angles, which are still evaluated.
            let (s, d, r) = random_angles(&mut rng, 720.0);
            let (u, v) = fault2uv(s, d, r);
            assert!((u.length() - 1.0).abs() < TOL, "|u| = {} for ({s}, {d}, {r})", u.length());
            assert!((v.length() - 1.0).abs() < TOL, "|v| = {} for ({s}, {d}, {r})", v.length());
            assert!(u.dot(v).abs() < TOL, "u.v = {} for ({s}, {d}, {r})", u.dot(v));
        }
    }

    #[test]
    fn test_periodic_in_strike_and_rake() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let s = rng.random_range(0.0..360.0);
            let d = rng.random_range(0.0..=90.0);
            let r = rng.random_range(-180.0..180.0);
            let (u, v) = fault2uv(s, d, r);

            let (us, vs) = fault2uv(s + 360.0, d, r);
            assert_vec_close(us, u.to_array(), TOL);
            assert_vec_close(vs, v.to_array(), TOL);

            let (ur, vr) = fault2uv(s, d, r + 360.0);
            assert_vec_close(ur, u.to_array(), TOL);
            assert_vec_close(vr, v.to_array(), TOL);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let (u, v) = fault2uv(f64::NAN, 30.0, 40.0);
        assert!(u.x.is_nan());
        assert!(v.x.is_nan());
    }

    #[test]
    fn test_orientation_matches_free_function() {
        let fault = FaultOrientation::new(20.0, 30.0, 40.0);
        let (u, v) = fault2uv(20.0, 30.0, 40.0);
        let vectors = fault.vectors();
        assert_eq!(vectors.slip, u);
        assert_eq!(vectors.normal, v);
        assert_eq!(fault.slip_vector(), u);
        assert_eq!(fault.normal_vector(), v);
        assert_eq!(<(DVec3, DVec3)>::from(vectors), (u, v));
    }

    #[test]
    fn test_wrapped_orientation_gives_same_vectors() {
        let fault = FaultOrientation::new(-340.0, 30.0, 400.0);
        let wrapped = fault.wrapped();
        assert!((wrapped.strike - 20.0).abs() < TOL);
        assert!((wrapped.rake - 40.0).abs() < TOL);
        assert_eq!(wrapped.dip, 30.0);

        let a = fault.vectors();
        let b = wrapped.vectors();
        assert_vec_close(a.slip, b.slip.to_array(), TOL);
        assert_vec_close(a.normal, b.normal.to_array(), TOL);
    }

    #[test]
    fn test_to_arrays_and_orthonormal_check() {
        let vectors = FaultOrientation::new(20.0, 30.0, 40.0).vectors();
        let (u, v) = vectors.to_arrays();
        assert_eq!(u[2], vectors.slip.z);
        assert_eq!(v[1], vectors.normal.y);
        assert!(vectors.is_orthonormal(TOL));

        let skewed = FaultVectors { slip: DVec3::X, normal: DVec3::new(1.0, 1.0, 0.0).normalize() };
        assert!(!skewed.is_orthonormal(TOL));
    }
}
