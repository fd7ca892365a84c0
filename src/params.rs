use crate::error::{ConfigError, Result};
use crate::geometry::MIN_RING_VERTICES;

/// Parameters controlling outline tracing, simplification and anchoring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeometryParams {
    /// World units per grid cell side.
    pub cell_size: f64,
    /// Supersampling factor: each cell side is split into this many steps.
    pub subdivisions: u32,
    /// A vertex is only dropped if both neighbours are closer than this.
    pub simplify_distance: f64,
    /// Triangles with smaller area count as collinear.
    pub collinear_area: f64,
    /// Hard cap on points collected by one boundary walk.
    pub max_trace_points: usize,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            cell_size: 16.0,
            subdivisions: 4,
            simplify_distance: 8.0,
            collinear_area: 1.0,
            max_trace_points: 10_000,
        }
    }
}

impl GeometryParams {
    /// World size of one supersampled step.
    #[must_use]
    pub fn sub_cell_size(&self) -> f64 {
        self.cell_size / f64::from(self.subdivisions.max(1))
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size).into());
        }
        if self.subdivisions == 0 {
            return Err(ConfigError::ZeroSubdivisions.into());
        }
        for (name, value) in [
            ("simplify_distance", self.simplify_distance),
            ("collinear_area", self.collinear_area),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value }.into());
            }
        }
        if self.max_trace_points < MIN_RING_VERTICES {
            return Err(ConfigError::TraceCapTooSmall(self.max_trace_points).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerritoryError;
    use approx::assert_relative_eq;

    fn config_err(params: GeometryParams) -> ConfigError {
        match params.validate() {
            Err(TerritoryError::Config(e)) => e,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let p = GeometryParams::default();
        assert!(p.validate().is_ok());
        assert_relative_eq!(p.sub_cell_size(), 4.0);
    }

    #[test]
    fn rejects_bad_cell_size() {
        let p = GeometryParams {
            cell_size: 0.0,
            ..GeometryParams::default()
        };
        assert_eq!(config_err(p), ConfigError::InvalidCellSize(0.0));
        let p = GeometryParams {
            cell_size: f64::NAN,
            ..GeometryParams::default()
        };
        assert!(matches!(config_err(p), ConfigError::InvalidCellSize(_)));
    }

    #[test]
    fn rejects_zero_subdivisions() {
        let p = GeometryParams {
            subdivisions: 0,
            ..GeometryParams::default()
        };
        assert_eq!(config_err(p), ConfigError::ZeroSubdivisions);
    }

    #[test]
    fn rejects_negative_tolerance() {
        let p = GeometryParams {
            collinear_area: -1.0,
            ..GeometryParams::default()
        };
        assert_eq!(
            config_err(p),
            ConfigError::InvalidTolerance {
                name: "collinear_area",
                value: -1.0
            }
        );
    }

    #[test]
    fn rejects_tiny_trace_cap() {
        let p = GeometryParams {
            max_trace_points: 3,
            ..GeometryParams::default()
        };
        assert_eq!(config_err(p), ConfigError::TraceCapTooSmall(3));
    }
}
