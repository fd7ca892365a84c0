//! Planar helpers over the x/z map plane. Elevation (`y`) is ignored throughout.

use super::Vertex;

/// Euclidean distance between two vertices in the x/z plane.
#[must_use]
pub fn planar_distance(a: &Vertex, b: &Vertex) -> f64 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Unsigned area of the triangle `a`, `b`, `c` in the x/z plane.
#[must_use]
pub fn triangle_area(a: &Vertex, b: &Vertex, c: &Vertex) -> f64 {
    (a.x * (b.z - c.z) + b.x * (c.z - a.z) + c.x * (a.z - b.z)).abs() * 0.5
}

/// Signed area of a ring in the x/z plane (shoelace formula).
///
/// A repeated closing vertex contributes nothing, so closed and open rings
/// give the same result. Positive when the ring turns from +x towards +z.
#[must_use]
pub fn signed_area(points: &[Vertex]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].z - points[j].x * points[i].z;
    }
    sum * 0.5
}

/// Even-odd containment test of `(x, z)` against a ring.
///
/// Points exactly on an edge may land on either side.
#[must_use]
pub fn ring_contains(points: &[Vertex], x: f64, z: f64) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&points[i], &points[j]);
        if (pi.z > z) != (pj.z > z) {
            let cross_x = pj.x + (z - pj.z) * (pi.x - pj.x) / (pi.z - pj.z);
            if x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
