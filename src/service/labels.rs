use crate::geometry::Polygon;
use crate::math::Vertex;

/// Display text for region `index` (0-based) of a territory with `total`
/// regions: the bare name for a single region, `"{name} #{n}"` otherwise.
#[must_use]
pub fn region_label(name: &str, index: usize, total: usize) -> String {
    if total <= 1 {
        name.to_owned()
    } else {
        format!("{name} #{}", index + 1)
    }
}

/// Small closed square centered on `anchor`, for renderers that hang a
/// label on its own invisible shape.
#[must_use]
pub fn label_marker(anchor: &Vertex, half_extent: f64) -> Polygon {
    Polygon::rectangle(
        (anchor.x - half_extent, anchor.z - half_extent),
        (anchor.x + half_extent, anchor.z + half_extent),
        anchor.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_region_uses_bare_name() {
        assert_eq!(region_label("Kingdom", 0, 1), "Kingdom");
    }

    #[test]
    fn multiple_regions_are_numbered_from_one() {
        assert_eq!(region_label("Kingdom", 0, 3), "Kingdom #1");
        assert_eq!(region_label("Kingdom", 2, 3), "Kingdom #3");
    }

    #[test]
    fn marker_surrounds_anchor() {
        let m = label_marker(&Vertex::new(8.0, 70.0, 8.0), 1.0);
        assert_eq!(m.len(), 5);
        assert_eq!(m.bounds(), ((7.0, 7.0), (9.0, 9.0)));
        assert!(m.contains_point(8.0, 8.0));
    }
}
