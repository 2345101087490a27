//! Bloch-sphere geometry.

use std::f64::consts::FRAC_PI_2;

/// A point on (or inside) the Bloch sphere: `(⟨X⟩, ⟨Y⟩, ⟨Z⟩)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The |0⟩ state, north pole.
    pub const fn zero_state() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Vector length. 1.0 for pure states.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Euclidean distance to another vector.
    pub fn distance(&self, other: &Self) -> f64 {
        self.add(&other.scale(-1.0)).norm()
    }

    /// Rotate about a unit `axis` by `angle` radians (Rodrigues' formula).
    pub fn rotate(&self, axis: &BlochVector, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.scale(cos)
            .add(&axis.cross(self).scale(sin))
            .add(&axis.scale(axis.dot(self) * (1.0 - cos)))
    }

    /// Spherical coordinates `(theta, phi, r)`: polar angle from +z,
    /// azimuth from +x, and radius.
    pub fn spherical(&self) -> (f64, f64, f64) {
        let r = self.norm();
        if r < 1e-3 {
            return (FRAC_PI_2, 0.0, 0.0);
        }
        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        (theta, phi, r)
    }

    /// Name of the nearest cardinal state, or a radius readout.
    pub fn label(&self) -> String {
        let r = self.norm();
        if r > 0.95 && self.z > 0.9 {
            "|0⟩".to_string()
        } else if r > 0.95 && self.z < -0.9 {
            "|1⟩".to_string()
        } else if r > 0.95 && self.x.abs() > 0.9 {
            if self.x > 0.0 { "|+⟩" } else { "|-⟩" }.to_string()
        } else if r > 0.95 && self.y.abs() > 0.9 {
            if self.y > 0.0 { "|+i⟩" } else { "|-i⟩" }.to_string()
        } else if r < 0.3 {
            "mixed".to_string()
        } else {
            format!("r={:.1}", r)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-10;

    #[test]
    fn test_rotate_zero_about_x() {
        let v = BlochVector::zero_state().rotate(&BlochVector::new(1.0, 0.0, 0.0), PI / 2.0);
        assert!(v.distance(&BlochVector::new(0.0, -1.0, 0.0)) < EPS);
    }

    #[test]
    fn test_rotation_preserves_norm() {
        let axis = BlochVector::new(1.0, 1.0, 1.0).scale(1.0 / 3f64.sqrt());
        let v = BlochVector::new(0.3, -0.4, 0.5).rotate(&axis, 1.234);
        assert!((v.norm() - BlochVector::new(0.3, -0.4, 0.5).norm()).abs() < EPS);
    }

    #[test]
    fn test_spherical() {
        let (theta, phi, r) = BlochVector::new(0.0, 1.0, 0.0).spherical();
        assert!((theta - PI / 2.0).abs() < EPS);
        assert!((phi - PI / 2.0).abs() < EPS);
        assert!((r - 1.0).abs() < EPS);

        let (_, _, r) = BlochVector::default().spherical();
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(BlochVector::zero_state().label(), "|0⟩");
        assert_eq!(BlochVector::new(0.0, 0.0, -1.0).label(), "|1⟩");
        assert_eq!(BlochVector::new(-1.0, 0.0, 0.0).label(), "|-⟩");
        assert_eq!(BlochVector::new(0.0, 1.0, 0.0).label(), "|+i⟩");
        assert_eq!(BlochVector::new(0.5, 0.0, 0.5).label(), "r=0.7");
    }
}
