//! # Business Logic Services
//!
//! ## Available Services
//!
//! - **Geo** (`geo`) - Great-circle distance between addresses
//! - **Matching** (`matching`) - Capability, radius and rating based provider matching
//! - **Store** (`store`) - Provider persistence contract and its PostgreSQL implementation

pub mod geo;
pub mod matching;
pub mod store;
