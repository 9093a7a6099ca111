// Distance calculation utilities

/// Mean Earth radius used by the haversine formula, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two (latitude, longitude)
/// pairs given in decimal degrees.
///
/// No range validation is done here; callers are expected to pass
/// coordinates that were checked when loaded.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Degrees of latitude spanned by `km` kilometers along a meridian
#[cfg(test)]
pub(crate) fn km_to_lat_degrees(km: f64) -> f64 {
    (km / EARTH_RADIUS_KM).to_degrees()
}
