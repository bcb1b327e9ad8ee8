mod circle;
mod line;
mod point;
mod polyline;
mod rectangle;
mod segment;

pub use circle::{Circle, CircleRelation, LineRelation, PointLocation};
pub use line::Line2d;
pub use point::Point2d;
pub use polyline::{Edges, Polyline, PolylineKind};
pub use rectangle::Rectangle;
pub use segment::Segment;
