use crate::math::{Matrix3, Vector3};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// An orthonormal 3-frame used for ball orientation and the pendulum
///
/// `axes[0..3]` are the frame's basis vectors in world space. Every rotation
/// re-orthonormalizes the frame, so drift stays below single-precision noise
/// across thousands of steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Basis {
    pub axes: [Vector3; 3],
}

impl Basis {
    /// Creates the world-aligned identity frame
    #[inline]
    pub fn identity() -> Self {
        Self {
            axes: [Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()],
        }
    }

    /// Integrates the rotation of the frame under angular velocity `w`
    /// through time `dt`
    ///
    /// A zero angular velocity leaves the frame untouched.
    pub fn rotate(&mut self, w: Vector3, dt: f32) {
        if w.length() > 0.0 {
            let m = Matrix3::from_axis_angle(w.normalize(), w.length() * dt);

            let f = [
                m.multiply_vector(self.axes[0]),
                m.multiply_vector(self.axes[1]),
                m.multiply_vector(self.axes[2]),
            ];

            // Re-orthonormalize with the three-cross-product cascade.
            self.axes[2] = f[0].cross(&f[1]).normalize();
            self.axes[1] = f[2].cross(&f[0]).normalize();
            self.axes[0] = f[1].cross(&f[2]).normalize();
        }
    }

    /// Returns true if the frame is orthonormal to within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let [u, v, w] = self.axes;

        (u.length() - 1.0).abs() < tolerance
            && (v.length() - 1.0).abs() < tolerance
            && (w.length() - 1.0).abs() < tolerance
            && u.dot(&v).abs() < tolerance
            && v.dot(&w).abs() < tolerance
            && w.dot(&u).abs() < tolerance
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::identity()
    }
}
