pub mod import;
pub mod intersect;
pub mod transform;
