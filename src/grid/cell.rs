use crate::math::Vertex;

/// One claimed grid unit, identified by integer `(x, z)`.
///
/// Ordered by `x`, then `z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    /// Creates a cell at `(x, z)`.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The orthogonal neighbours in fixed order: east, west, south, north.
    ///
    /// Neighbours outside the `i32` range are skipped, so a cell on the range
    /// limit yields fewer than four.
    pub fn neighbours4(self) -> impl Iterator<Item = Cell> {
        [
            self.x.checked_add(1).map(|x| Cell::new(x, self.z)),
            self.x.checked_sub(1).map(|x| Cell::new(x, self.z)),
            self.z.checked_add(1).map(|z| Cell::new(self.x, z)),
            self.z.checked_sub(1).map(|z| Cell::new(self.x, z)),
        ]
        .into_iter()
        .flatten()
    }

    /// World coordinates of the cell's minimum corner.
    #[must_use]
    pub fn world_min(self, cell_size: f64) -> (f64, f64) {
        (f64::from(self.x) * cell_size, f64::from(self.z) * cell_size)
    }

    /// Geometric center of the cell at the given elevation.
    #[must_use]
    pub fn center(self, cell_size: f64, elevation: f64) -> Vertex {
        let (x, z) = self.world_min(cell_size);
        let half = cell_size * 0.5;
        Vertex::new(x + half, elevation, z + half)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ordering_is_x_then_z() {
        assert!(Cell::new(0, 5) < Cell::new(1, -5));
        assert!(Cell::new(1, -5) < Cell::new(1, 0));
    }

    #[test]
    fn neighbours4_order() {
        let n: Vec<_> = Cell::new(3, 7).neighbours4().collect();
        assert_eq!(
            n,
            [Cell::new(4, 7), Cell::new(2, 7), Cell::new(3, 8), Cell::new(3, 6)]
        );
    }

    #[test]
    fn neighbours4_stop_at_range_limits() {
        let n: Vec<_> = Cell::new(i32::MAX, i32::MIN).neighbours4().collect();
        assert_eq!(n, [Cell::new(i32::MAX - 1, i32::MIN), Cell::new(i32::MAX, i32::MIN + 1)]);
    }

    #[test]
    fn center_of_negative_cell() {
        let p = Cell::new(-1, -2).center(16.0, 70.0);
        assert_relative_eq!(p.x, -8.0);
        assert_relative_eq!(p.y, 70.0);
        assert_relative_eq!(p.z, -24.0);
    }
}
