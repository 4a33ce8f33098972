use greiner_hormann::{
    core::{math::Vector2, traits::FuzzyEq},
    polygon::Polygon,
};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a polygon for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PolygonProperties {
    pub vertex_count: usize,
    /// Absolute area (result orientation is not fixed).
    pub area: f64,
    pub path_length: f64,
    pub extents: AABB<f64>,
}

impl PolygonProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-5;

    pub fn new(
        vertex_count: usize,
        area: f64,
        path_length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            area,
            path_length,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_polygon(polygon: &Polygon<f64>) -> Self {
        Self {
            vertex_count: polygon.vertex_count(),
            area: polygon.area().abs(),
            path_length: polygon.path_length(),
            extents: polygon.extents().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if self.vertex_count != other.vertex_count {
            return false;
        }
        if !self.area.fuzzy_eq_eps(other.area, eps) {
            return false;
        }
        if !self.path_length.fuzzy_eq_eps(other.path_length, eps) {
            return false;
        }
        if !aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps) {
            return false;
        }
        true
    }
}

/// Property set of the non-empty components of a result.
pub fn create_property_set<'a, I>(polygons: I) -> Vec<PolygonProperties>
where
    I: IntoIterator<Item = &'a Polygon>,
{
    polygons
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(PolygonProperties::from_polygon)
        .collect()
}

pub fn property_sets_match(
    result_set: &[PolygonProperties],
    expected_set: &[PolygonProperties],
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // N^2 comparisons, sets are always small
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, PolygonProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

/// Returns true if `a` and `b` describe the same closed point cycle, allowing a different start
/// point and reversed direction.
pub fn cycles_match(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let n = a.len();
    if n == 0 {
        return true;
    }

    let eq = |i: usize, p: &Vector2<f64>| a[i % n].fuzzy_eq(*p);
    (0..n).any(|offset| {
        let forward = b.iter().enumerate().all(|(k, p)| eq(offset + k, p));
        let backward = b
            .iter()
            .enumerate()
            .all(|(k, p)| eq(offset + n - k, p));
        forward || backward
    })
}

/// Returns true if the non-empty components of `result` match the `expected` point cycles (in any
/// order).
pub fn components_match(result: &[Polygon], expected: &[Polygon]) -> bool {
    let result: Vec<&Polygon> = result.iter().filter(|p| !p.is_empty()).collect();
    let matched = result.len() == expected.len()
        && expected.iter().all(|e| {
            result
                .iter()
                .filter(|r| cycles_match(&r.points, &e.points))
                .count()
                == 1
        });

    if !matched {
        eprintln!("result:\n{:?}", result);
        eprintln!("expected:\n{:?}", expected);
    }

    matched
}

/// Sum of the absolute areas of all components.
pub fn total_area(polygons: &[Polygon]) -> f64 {
    polygons.iter().map(|p| p.area().abs()).sum()
}
