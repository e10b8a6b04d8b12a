//! # Floor Materials
//!
//! The closed set of materials a provider can be experienced with, and the
//! filter used when asking the store for candidates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Provider;

/// A floor material a customer can request.
///
/// This is a closed set: any other name is rejected with [`UnsupportedMaterial`]
/// and never treated as a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorMaterial {
    Wood,
    Carpet,
    Tile,
}

impl FloorMaterial {
    /// Every material, in the order capabilities are reported to clients.
    pub const ALL: [FloorMaterial; 3] = [
        FloorMaterial::Wood,
        FloorMaterial::Carpet,
        FloorMaterial::Tile,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FloorMaterial::Wood => "wood",
            FloorMaterial::Carpet => "carpet",
            FloorMaterial::Tile => "tile",
        }
    }
}

impl fmt::Display for FloorMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a material name is not one of `wood`, `carpet` or `tile`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported floor material: {0:?}")]
pub struct UnsupportedMaterial(pub String);

impl FromStr for FloorMaterial {
    type Err = UnsupportedMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wood" => Ok(FloorMaterial::Wood),
            "carpet" => Ok(FloorMaterial::Carpet),
            "tile" => Ok(FloorMaterial::Tile),
            other => Err(UnsupportedMaterial(other.to_string())),
        }
    }
}

/// Capability filter applied when listing candidate providers.
///
/// [`MaterialFilter::Any`] disables the capability check entirely. It exists for
/// administrative listing and is never built from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialFilter {
    Only(FloorMaterial),
    Any,
}

impl MaterialFilter {
    /// Returns true if the provider passes this filter.
    #[inline]
    pub fn admits(&self, provider: &Provider) -> bool {
        match self {
            MaterialFilter::Only(material) => provider.supports(*material),
            MaterialFilter::Any => true,
        }
    }
}

impl From<FloorMaterial> for MaterialFilter {
    fn from(material: FloorMaterial) -> Self {
        MaterialFilter::Only(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    fn provider(wood: bool, carpet: bool, tile: bool) -> Provider {
        Provider {
            id: 0,
            name: "p".to_string(),
            address: Address::new(0.0, 0.0),
            radius: 1.0,
            rating: 1.0,
            wood,
            carpet,
            tile,
        }
    }

    #[test]
    fn parses_known_materials() {
        for material in FloorMaterial::ALL {
            assert_eq!(material.as_str().parse::<FloorMaterial>(), Ok(material));
        }
    }

    #[test]
    fn rejects_unknown_materials() {
        for name in ["", "stone", "Wood", " wood", "*"] {
            assert_eq!(
                name.parse::<FloorMaterial>(),
                Err(UnsupportedMaterial(name.to_string()))
            );
        }
    }

    #[test]
    fn only_filter_checks_the_matching_flag() {
        let wood_only = provider(true, false, false);
        assert!(MaterialFilter::Only(FloorMaterial::Wood).admits(&wood_only));
        assert!(!MaterialFilter::Only(FloorMaterial::Carpet).admits(&wood_only));
        assert!(!MaterialFilter::Only(FloorMaterial::Tile).admits(&wood_only));
    }

    #[test]
    fn any_filter_admits_providers_without_capabilities() {
        let nothing = provider(false, false, false);
        assert!(MaterialFilter::Any.admits(&nothing));
        for material in FloorMaterial::ALL {
            assert!(!MaterialFilter::from(material).admits(&nothing));
        }
    }
}
