//! Coordinate - A geographic point

/// Latitude/longitude pair in decimal degrees.
///
/// Values are not range-checked here; the geocoding provider is the
/// authority on what it accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_comma_joined() {
        let coordinate = Coordinate::new(51.520847, -0.195521);
        assert_eq!(coordinate.to_string(), "51.520847,-0.195521");
    }
}
