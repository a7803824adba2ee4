//! Contact details and location

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MOROCCO_PREFIX: &str = "+212";
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Group a Moroccan international number as `+212 XXX XXX XXX`.
///
/// Anything that is not `+212` followed by nine characters is returned as is.
pub fn format_phone_number(phone: &str) -> String {
    match phone.strip_prefix(MOROCCO_PREFIX) {
        Some(national) if national.len() == 9 && national.is_ascii() => format!(
            "{} {} {} {}",
            MOROCCO_PREFIX,
            &national[..3],
            &national[3..6],
            &national[6..]
        ),
        _ => phone.to_string(),
    }
}

/// A point on the globe, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometres, rounded to two decimals
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        (EARTH_RADIUS_KM * c * 100.0).round() / 100.0
    }
}

impl FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid location: '{}'. Expected LATITUDE,LONGITUDE", s);

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid());
        }
        Ok(Coordinates::new(latitude, longitude))
    }
}

impl TryFrom<String> for Coordinates {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        coordinates.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
