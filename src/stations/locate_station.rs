use crate::stations::distance::distance;
use crate::types::station::Station;
use log::debug;

/// Finds the station closest to `(latitude, longitude)` together with its distance in km.
///
/// Every station is checked; stations lacking a latitude or longitude are skipped. On equal
/// distances the station listed first wins. Returns `None` only when no station has both
/// coordinates.
pub fn closest_station_with_distance(
    stations: &[Station],
    latitude: f64,
    longitude: f64,
) -> Option<(&Station, f64)> {
    let mut closest: Option<(&Station, f64)> = None;
    // Larger than any great-circle distance, so the first valid station always replaces it.
    let mut best_distance_km = 1e10;

    for station in stations {
        let Some((station_lat, station_lon)) = station.coordinates() else {
            debug!("Skipping station {} without coordinates", station.id);
            continue;
        };

        let dist_km = distance(latitude, longitude, station_lat, station_lon);
        if dist_km < best_distance_km {
            best_distance_km = dist_km;
            closest = Some((station, dist_km));
        }
    }

    closest
}

/// Finds the station closest to `(latitude, longitude)`.
///
/// ```
/// use smhi::{closest_station, Station};
///
/// let stations: Vec<Station> = serde_json::from_str(r#"[
///     {"id": 1, "latitude": 59.0, "longitude": 18.0},
///     {"id": 2, "latitude": 60.0, "longitude": 18.0}
/// ]"#).unwrap();
///
/// assert_eq!(closest_station(&stations, 59.1, 18.0).map(|s| s.id), Some(1));
/// ```
pub fn closest_station(stations: &[Station], latitude: f64, longitude: f64) -> Option<&Station> {
    closest_station_with_distance(stations, latitude, longitude).map(|(station, _)| station)
}
