mod homogr;

pub use homogr::Homogr;

use crate::error::{Result, TransformError};
use crate::geometry::{Circle, Line2d, Point2d, Polyline, Segment};

/// A primitive that a [`Homogr`] can map to a new primitive of the same kind.
pub trait Transform: Sized {
    /// Returns the image of `self` under `h`. The input is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is not representable as `Self`.
    fn transformed(&self, h: &Homogr) -> Result<Self>;
}

impl Transform for Point2d {
    /// Fails with `GeometryError::PointAtInfinity` if the point is sent to infinity.
    fn transformed(&self, h: &Homogr) -> Result<Self> {
        Point2d::from_vector(&(h.matrix() * self.homogeneous()))
    }
}

impl Transform for Line2d {
    /// Lines map through the inverse transpose. Fails with
    /// `TransformError::SingularMatrix` when `h` is not invertible.
    fn transformed(&self, h: &Homogr) -> Result<Self> {
        let inv = h.inverse()?;
        Line2d::from_vector(&(inv.matrix().transpose() * self.coefficients()))
    }
}

impl Transform for Segment {
    fn transformed(&self, h: &Homogr) -> Result<Self> {
        Ok(Segment::new_unchecked(
            self.start().transformed(h)?,
            self.end().transformed(h)?,
        ))
    }
}

impl Transform for Circle {
    /// Only similarities keep a circle a circle; anything else fails with
    /// `TransformError::UnsupportedTransform`.
    fn transformed(&self, h: &Homogr) -> Result<Self> {
        let Some(scale) = h.similarity_scale() else {
            tracing::debug!(matrix = %h, "circle transform rejected: not a similarity");
            return Err(TransformError::UnsupportedTransform(
                "circles only accept similarity transforms".into(),
            )
            .into());
        };
        Circle::new(self.center().transformed(h)?, self.radius() * scale)
    }
}

impl Transform for Polyline {
    /// Maps every vertex; vertex order and the open/closed tag are kept, so a
    /// mirroring transform reverses the winding.
    fn transformed(&self, h: &Homogr) -> Result<Self> {
        let points = self
            .points()
            .iter()
            .map(|p| p.transformed(h))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_points(points))
    }
}
