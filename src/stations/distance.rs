/// Mean diameter of the Earth in kilometers.
pub const EARTH_DIAMETER_KM: f64 = 12742.0;

/// Great-circle distance in kilometers between two points given in decimal degrees.
///
/// Haversine formula written against the Earth's diameter, so the result is
/// `D * asin(sqrt(a))`. NaN coordinates yield NaN.
///
/// ```
/// use smhi::distance;
///
/// assert_eq!(distance(59.33, 18.06, 59.33, 18.06), 0.0);
/// let quarter = distance(0.0, 0.0, 0.0, 90.0);
/// assert!((quarter - 10007.5).abs() < 100.0);
/// ```
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let p = std::f64::consts::PI / 180.0;
    let a = 0.5 - ((lat2 - lat1) * p).cos() / 2.0
        + (lat1 * p).cos() * (lat2 * p).cos() * (1.0 - ((lon2 - lon1) * p).cos()) / 2.0;
    EARTH_DIAMETER_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use haversine::{Location, Units};

    #[test]
    fn test_same_point_is_zero() {
        for (lat, lon) in [(59.33, 18.06), (0.0, 0.0), (-33.86, 151.2), (89.9, -179.9)] {
            assert_eq!(distance(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let a = distance(59.33, 18.06, 57.70, 11.97);
        let b = distance(57.70, 11.97, 59.33, 18.06);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_great_circle() {
        let d = distance(0.0, 0.0, 0.0, 90.0);
        let expected = EARTH_DIAMETER_KM * std::f64::consts::PI / 4.0;
        assert!((d - expected).abs() < 1e-6);
        assert!((d - 10007.5).abs() / 10007.5 < 0.01);
    }

    #[test]
    fn test_matches_haversine_crate() {
        // Stockholm -> Gothenburg
        let ours = distance(59.3293, 18.0686, 57.7089, 11.9746);
        let reference = haversine::distance(
            Location {
                latitude: 59.3293,
                longitude: 18.0686,
            },
            Location {
                latitude: 57.7089,
                longitude: 11.9746,
            },
            Units::Kilometers,
        );
        assert!((ours - reference).abs() < 1e-2, "{} vs {}", ours, reference);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}
