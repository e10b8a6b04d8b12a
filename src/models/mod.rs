mod address;
mod material;
mod provider;
mod state;

pub use address::Address;
pub use material::{FloorMaterial, MaterialFilter, UnsupportedMaterial};
pub use provider::{Provider, ProviderId};
pub use state::AppState;
