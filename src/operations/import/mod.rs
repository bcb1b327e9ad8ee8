mod foreign;

pub use foreign::{polyline_from_foreign, polyline_from_points, ForeignPolygon, ForeignRing};
