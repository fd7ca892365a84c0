use crate::error::TraceError;

use super::lattice::SubGrid;

/// Step offsets clockwise from north: N, NE, E, SE, S, SW, W, NW.
/// North is `-z`.
const DX: [i64; 8] = [0, 1, 1, 1, 0, -1, -1, -1];
const DZ: [i64; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];

/// Samples collected by one boundary walk, without the closing repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Walk {
    pub(crate) points: Vec<(i64, i64)>,
    /// `true` if the point cap stopped the walk before it returned to start.
    pub(crate) truncated: bool,
}

/// Moore-neighbourhood contour walk around the occupied samples.
///
/// Starts facing north. Each step scans the eight neighbours clockwise,
/// beginning two positions counter-clockwise of the current facing, and
/// moves to the first occupied one. Stops on returning to `start` with at
/// least two points, or once `cap` points are collected.
pub(crate) fn walk(grid: &SubGrid, start: (i64, i64), cap: usize) -> Result<Walk, TraceError> {
    let mut points = Vec::new();
    let mut current = start;
    let mut facing = 0usize;

    loop {
        points.push(current);
        if points.len() >= cap {
            return Ok(Walk {
                points,
                truncated: true,
            });
        }

        let search = (facing + 6) % 8;
        let step = (0..8).map(|i| (search + i) % 8).find_map(|dir| {
            let next = (current.0 + DX[dir], current.1 + DZ[dir]);
            grid.contains(next).then_some((next, dir))
        });
        let Some((next, dir)) = step else {
            return Err(TraceError::DeadEnd {
                x: current.0,
                z: current.1,
            });
        };

        current = next;
        facing = dir;
        if current == start && points.len() >= 2 {
            break;
        }
    }

    Ok(Walk {
        points,
        truncated: false,
    })
}
