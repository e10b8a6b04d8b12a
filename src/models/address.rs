use serde::{Deserialize, Serialize};
use validator::Validate;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Address {
    #[serde(rename = "lat")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[serde(rename = "long")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Address {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
