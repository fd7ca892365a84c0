use crate::math::planar::{ring_contains, signed_area};
use crate::math::Vertex;

/// Smallest valid closed ring: three corners plus the closing repeat.
pub const MIN_RING_VERTICES: usize = 4;

/// A closed ring of world-space vertices.
///
/// The first vertex is repeated as the last, and there are always at least
/// [`MIN_RING_VERTICES`] entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Closes `points` by repeating the first vertex if needed.
    ///
    /// Returns `None` if the closed ring would be shorter than
    /// [`MIN_RING_VERTICES`].
    #[must_use]
    pub fn close(mut points: Vec<Vertex>) -> Option<Self> {
        let first = *points.first()?;
        if points.last() != Some(&first) || points.len() == 1 {
            points.push(first);
        }
        if points.len() < MIN_RING_VERTICES {
            return None;
        }
        Some(Self { vertices: points })
    }

    /// Axis-aligned rectangle between two world corners, wound
    /// min-min, max-min, max-max, min-max and closed.
    #[must_use]
    pub fn rectangle(min: (f64, f64), max: (f64, f64), elevation: f64) -> Self {
        let (x0, z0) = min;
        let (x1, z1) = max;
        Self {
            vertices: vec![
                Vertex::new(x0, elevation, z0),
                Vertex::new(x1, elevation, z0),
                Vertex::new(x1, elevation, z1),
                Vertex::new(x0, elevation, z1),
                Vertex::new(x0, elevation, z0),
            ],
        }
    }

    /// All vertices including the closing repeat.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices without the closing repeat.
    #[must_use]
    pub fn ring(&self) -> &[Vertex] {
        &self.vertices[..self.vertices.len() - 1]
    }

    /// Vertex count including the closing repeat.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a ring holds at least [`MIN_RING_VERTICES`] vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Signed area in the x/z plane.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Even-odd containment of a world `(x, z)` position.
    #[must_use]
    pub fn contains_point(&self, x: f64, z: f64) -> bool {
        ring_contains(&self.vertices, x, z)
    }

    /// World bounds as `((min_x, min_z), (max_x, max_z))`.
    #[must_use]
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for v in &self.vertices {
            min.0 = min.0.min(v.x);
            min.1 = min.1.min(v.z);
            max.0 = max.0.max(v.x);
            max.1 = max.1.max(v.z);
        }
        (min, max)
    }
}

/// An outer ring plus zero or more hole rings.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonWithHoles {
    pub outer: Polygon,
    pub holes: Vec<Polygon>,
}

impl PolygonWithHoles {
    /// Wraps a ring with no holes.
    #[must_use]
    pub fn solid(outer: Polygon) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Outer area minus hole areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.outer.area() - self.holes.iter().map(Polygon::area).sum::<f64>()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, z: f64) -> Vertex {
        Vertex::new(x, 0.0, z)
    }

    #[test]
    fn close_appends_first_vertex() {
        let p = Polygon::close(vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)]).unwrap();
        assert_eq!(p.len(), 4);
        assert!(p.is_closed());
        assert_eq!(p.ring().len(), 3);
    }

    #[test]
    fn close_keeps_existing_closure() {
        let p = Polygon::close(vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 0.0)]).unwrap();
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn close_rejects_degenerate_input() {
        assert!(Polygon::close(Vec::new()).is_none());
        assert!(Polygon::close(vec![v(0.0, 0.0)]).is_none());
        assert!(Polygon::close(vec![v(0.0, 0.0), v(1.0, 0.0)]).is_none());
    }

    #[test]
    fn rectangle_is_closed_five_vertices() {
        let r = Polygon::rectangle((0.0, 0.0), (32.0, 16.0), 64.0);
        assert_eq!(r.len(), 5);
        assert!(r.is_closed());
        assert_relative_eq!(r.area(), 512.0);
        assert_eq!(r.bounds(), ((0.0, 0.0), (32.0, 16.0)));
        assert!(r.vertices().iter().all(|p| (p.y - 64.0).abs() < f64::EPSILON));
    }

    #[test]
    fn area_with_holes() {
        let outer = Polygon::rectangle((0.0, 0.0), (48.0, 48.0), 0.0);
        let hole = Polygon::rectangle((16.0, 16.0), (32.0, 32.0), 0.0);
        let shape = PolygonWithHoles {
            outer,
            holes: vec![hole],
        };
        assert_relative_eq!(shape.area(), 48.0 * 48.0 - 256.0);
    }
}
