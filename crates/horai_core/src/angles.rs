//! Angle helpers shared across the workspace.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Minimal angular separation between two ecliptic longitudes, in [0, 180].
pub fn arc_separation(lon_a: f64, lon_b: f64) -> f64 {
    let diff = (normalize_360(lon_a) - normalize_360(lon_b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps_positive() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn separation_simple() {
        assert!((arc_separation(10.0, 40.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn separation_across_zero() {
        assert!((arc_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn separation_max_180() {
        assert!((arc_separation(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((arc_separation(0.0, 181.0) - 179.0).abs() < 1e-12);
    }
}
