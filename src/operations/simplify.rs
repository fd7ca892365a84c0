use crate::math::planar::{planar_distance, triangle_area};
use crate::math::Vertex;
use crate::params::GeometryParams;

/// Local, single-pass vertex reduction for traced boundaries.
///
/// Each interior vertex is judged against its original predecessor and
/// successor: it is dropped only when both are closer than `distance` and
/// the three points span a triangle smaller than `area`. First and last
/// vertices always survive, so a closed ring stays closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonSimplifier {
    distance: f64,
    area: f64,
}

impl PolygonSimplifier {
    /// Creates a simplifier with explicit tolerances.
    #[must_use]
    pub fn new(distance: f64, area: f64) -> Self {
        Self { distance, area }
    }

    /// Creates a simplifier from the closeness and collinearity tolerances.
    #[must_use]
    pub fn from_params(params: &GeometryParams) -> Self {
        Self::new(params.simplify_distance, params.collinear_area)
    }

    /// Returns the reduced point list. Inputs of three or fewer points are
    /// returned unchanged.
    #[must_use]
    pub fn simplify(&self, points: &[Vertex]) -> Vec<Vertex> {
        if points.len() <= 3 {
            return points.to_vec();
        }

        let mut kept = Vec::with_capacity(points.len());
        kept.push(points[0]);
        for w in points.windows(3) {
            let (prev, curr, next) = (&w[0], &w[1], &w[2]);
            if !self.is_redundant(prev, curr, next) {
                kept.push(*curr);
            }
        }
        kept.push(points[points.len() - 1]);
        kept
    }

    fn is_redundant(&self, prev: &Vertex, curr: &Vertex, next: &Vertex) -> bool {
        planar_distance(prev, curr) < self.distance
            && planar_distance(curr, next) < self.distance
            && triangle_area(prev, curr, next) < self.area
    }
}

impl Default for PolygonSimplifier {
    fn default() -> Self {
        Self::from_params(&GeometryParams::default())
    }
}
