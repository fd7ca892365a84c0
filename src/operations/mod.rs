mod anchor;
mod boundary;
mod holes;
mod partition;
mod simplify;

pub use anchor::{interior_distances, AnchorSelector, AnchorStrategy};
pub use boundary::BoundaryTracer;
pub use holes::{enclosed_holes, EnclosedHoleBuilder, HoleAwarePolygonBuilder};
pub use partition::partition;
pub use simplify::PolygonSimplifier;
