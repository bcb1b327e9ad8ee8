use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::error::{GeometryError, Result, TransformError};
use crate::math::{approx_eq, approx_zero, tolerance, Matrix3};

use super::Transform;

/// A planar projective transformation (homography).
///
/// Acts on homogeneous column vectors. For `h = a * b`, applying `h` is the
/// same as applying `b` first and then `a`.
#[derive(Debug, Clone, Copy)]
pub struct Homogr {
    matrix: Matrix3,
}

impl Homogr {
    /// The identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Counter-clockwise rotation by `theta` radians about the origin.
    #[must_use]
    pub fn rotation(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            matrix: Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Translation by `(dx, dy)`.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            matrix: Matrix3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0),
        }
    }

    /// Axis scaling by `(sx, sy)` about the origin. Negative factors mirror.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            matrix: Matrix3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Wraps an arbitrary 3x3 matrix.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if an entry is not finite or the
    /// matrix is zero. Singular matrices are accepted; see [`Homogr::inverse`].
    pub fn from_matrix(matrix: Matrix3) -> Result<Self> {
        if matrix.iter().any(|v| !v.is_finite()) || matrix.iter().all(|v| approx_zero(*v)) {
            return Err(GeometryError::DegenerateInput(format!(
                "not a usable projective matrix: {matrix}"
            ))
            .into());
        }
        Ok(Self { matrix })
    }

    /// Applies a translation after the current transformation.
    #[must_use]
    pub fn add_translation(self, dx: f64, dy: f64) -> Self {
        Self::translation(dx, dy) * self
    }

    /// Applies a rotation about the origin after the current transformation.
    #[must_use]
    pub fn add_rotation(self, theta: f64) -> Self {
        Self::rotation(theta) * self
    }

    /// Applies an axis scaling after the current transformation.
    #[must_use]
    pub fn add_scale(self, sx: f64, sy: f64) -> Self {
        Self::scaling(sx, sy) * self
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Returns the inverse transformation.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMatrix` if the determinant, taken on
    /// the matrix scaled to unit Frobenius norm, is zero within tolerance. The
    /// test does not depend on the overall scale of the matrix.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        let norm = self.matrix.norm();
        if norm == 0.0 || approx_zero(determinant / norm.powi(3)) {
            tracing::debug!(determinant, "refusing to invert singular homography");
            return Err(TransformError::SingularMatrix { determinant }.into());
        }
        let matrix = self
            .matrix
            .try_inverse()
            .ok_or(TransformError::SingularMatrix { determinant })?;
        Ok(Self { matrix })
    }

    /// Applies the transformation to any transformable primitive.
    ///
    /// # Errors
    ///
    /// Propagates the primitive's failure, see [`Transform::transformed`].
    pub fn apply<T: Transform>(&self, item: &T) -> Result<T> {
        item.transformed(self)
    }

    /// Returns the matrix scaled so that its bottom-right entry is 1, or
    /// `None` when that entry vanishes (not affine).
    fn affine_normalized(&self) -> Option<Matrix3> {
        let w = self.matrix[(2, 2)];
        if approx_zero(w) {
            return None;
        }
        let m = self.matrix / w;
        (approx_zero(m[(2, 0)]) && approx_zero(m[(2, 1)])).then_some(m)
    }

    /// Returns `true` if the transformation has no perspective component.
    #[must_use]
    pub fn is_affine(&self) -> bool {
        self.affine_normalized().is_some()
    }

    /// Returns `true` for rotations, uniform scalings, translations, mirrors
    /// and their compositions.
    #[must_use]
    pub fn is_similarity(&self) -> bool {
        self.similarity_scale().is_some()
    }

    /// Uniform scale factor of a non-degenerate similarity, `None` otherwise.
    #[must_use]
    pub fn similarity_scale(&self) -> Option<f64> {
        let m = self.affine_normalized()?;
        let (p, q, r, s) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
        let direct = approx_eq(p, s) && approx_eq(q, -r);
        let mirrored = approx_eq(p, -s) && approx_eq(q, r);
        let scale = p.hypot(r);
        ((direct || mirrored) && scale > tolerance()).then_some(scale)
    }

    /// Returns `true` if the linear part reverses orientation.
    #[must_use]
    pub fn is_orientation_reversing(&self) -> bool {
        self.is_affine() && self.determinant() * self.matrix[(2, 2)].signum() < 0.0
    }

    /// Projective equality: the matrices agree up to a non-zero scale factor.
    #[must_use]
    pub fn approx_eq(&self, other: &Homogr) -> bool {
        let (a, b) = (canonical(&self.matrix), canonical(&other.matrix));
        a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y))
    }
}

/// Scales a matrix to unit Frobenius norm with a positive largest entry.
fn canonical(m: &Matrix3) -> Matrix3 {
    let norm = m.norm();
    if norm == 0.0 {
        return *m;
    }
    let pivot = m.iter().copied().fold(0.0_f64, |acc, v| if v.abs() > acc.abs() { v } else { acc });
    *m / (norm * pivot.signum())
}

impl Default for Homogr {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Homogr {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Mul for Homogr {
    type Output = Homogr;

    fn mul(self, rhs: Homogr) -> Homogr {
        Homogr {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl Mul<&Homogr> for &Homogr {
    type Output = Homogr;

    fn mul(self, rhs: &Homogr) -> Homogr {
        Homogr {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl MulAssign for Homogr {
    fn mul_assign(&mut self, rhs: Homogr) {
        self.matrix *= rhs.matrix;
    }
}

impl fmt::Display for Homogr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Line2d, Point2d};

    #[test]
    fn composition_applies_rightmost_first() {
        let t = Homogr::translation(10.0, 0.0);
        let r = Homogr::rotation(FRAC_PI_2);
        let p = Point2d::new(1.0, 0.0);
        // Rotate first: (0, 1), then translate: (10, 1).
        assert_eq!((t * r).apply(&p).unwrap(), Point2d::new(10.0, 1.0));
        // Translate first: (11, 0), then rotate: (0, 11).
        assert_eq!((r * t).apply(&p).unwrap(), Point2d::new(0.0, 11.0));
    }

    #[test]
    fn builder_appends_transforms() {
        let h = Homogr::identity().add_rotation(FRAC_PI_2).add_translation(10.0, 0.0);
        let expected = Homogr::translation(10.0, 0.0) * Homogr::rotation(FRAC_PI_2);
        assert_eq!(h, expected);
        let pl = Homogr::default().add_translation(100.0, 60.0);
        assert_eq!(pl.apply(&Point2d::new(0.0, 0.0)).unwrap(), Point2d::new(100.0, 60.0));
    }

    #[test]
    fn rotation_about_a_point() {
        let h = Homogr::translation(200.0, 100.0)
            * Homogr::rotation(PI)
            * Homogr::translation(-200.0, -100.0);
        assert_eq!(h.apply(&Point2d::new(210.0, 100.0)).unwrap(), Point2d::new(190.0, 100.0));
    }

    #[test]
    fn inverse_of_translation() {
        let h = Homogr::translation(3.0, -4.0);
        let inv = h.inverse().unwrap();
        assert_eq!(inv, Homogr::translation(-3.0, 4.0));
        assert_eq!(h * inv, Homogr::identity());
    }

    #[test]
    fn singular_matrix_not_invertible() {
        let h = Homogr::scaling(1.0, 0.0);
        let err = h.inverse().unwrap_err();
        assert!(matches!(
            err,
            crate::error::HgeomError::Transform(TransformError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn scaled_matrix_inverts_like_identity() {
        let h = Homogr::from_matrix(Matrix3::identity() * 1e-4).unwrap();
        assert_eq!(h, Homogr::identity());
        assert_eq!(h.inverse().unwrap(), Homogr::identity());
        let line = Line2d::from_coefficients(1.0, 2.0, -3.0).unwrap();
        assert_eq!(h.apply(&line).unwrap(), line);

        let big = Homogr::from_matrix(*Homogr::scaling(1.0, 0.0).matrix() * 1e6).unwrap();
        assert!(big.inverse().is_err());
    }

    #[test]
    fn from_matrix_validation() {
        assert!(Homogr::from_matrix(Matrix3::zeros()).is_err());
        let mut m = Matrix3::identity();
        m[(0, 1)] = f64::NAN;
        assert!(Homogr::from_matrix(m).is_err());
        assert!(Homogr::from_matrix(Matrix3::identity() * 2.0).unwrap() == Homogr::identity());
    }

    #[test]
    fn similarity_detection() {
        let sim = Homogr::translation(5.0, 1.0) * Homogr::rotation(0.3) * Homogr::scaling(2.0, 2.0);
        assert!(sim.is_similarity());
        assert_relative_eq!(sim.similarity_scale().unwrap(), 2.0, epsilon = 1e-12);
        assert!(Homogr::scaling(-1.0, 1.0).is_similarity());
        assert!(!Homogr::scaling(2.0, 1.0).is_similarity());

        let mut shear = Matrix3::identity();
        shear[(0, 1)] = 0.5;
        assert!(!Homogr::from_matrix(shear).unwrap().is_similarity());

        let mut perspective = Matrix3::identity();
        perspective[(2, 0)] = 0.01;
        let h = Homogr::from_matrix(perspective).unwrap();
        assert!(!h.is_affine());
        assert!(!h.is_similarity());
    }

    #[test]
    fn orientation_reversal() {
        assert!(Homogr::scaling(-1.0, 1.0).is_orientation_reversing());
        assert!(!Homogr::rotation(1.0).is_orientation_reversing());
    }
}
