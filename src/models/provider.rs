use serde::{Deserialize, Serialize};

use super::{Address, FloorMaterial};

/// Identifier assigned by the provider store on creation.
pub type ProviderId = i64;

/// A flooring service provider as kept in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Zero until the store assigns one.
    pub id: ProviderId,
    pub name: String,
    /// Base location the service radius is measured from.
    pub address: Address,
    /// Maximum service distance in meters. Never negative.
    pub radius: f64,
    /// Higher is better.
    pub rating: f64,
    pub wood: bool,
    pub carpet: bool,
    pub tile: bool,
}

impl Provider {
    /// Returns true if this provider can service the given material.
    #[inline]
    pub const fn supports(&self, material: FloorMaterial) -> bool {
        match material {
            FloorMaterial::Wood => self.wood,
            FloorMaterial::Carpet => self.carpet,
            FloorMaterial::Tile => self.tile,
        }
    }

    /// Supported materials in wood, carpet, tile order.
    pub fn materials(&self) -> Vec<FloorMaterial> {
        FloorMaterial::ALL
            .into_iter()
            .filter(|material| self.supports(*material))
            .collect()
    }
}
