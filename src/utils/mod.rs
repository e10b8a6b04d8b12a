//! # Utility Modules
//!
//! - **Constants** (`constant`) - Configuration defaults and fixed intervals
//! - **Secrets** (`secret`) - Reading secrets from files or the environment

pub mod constant;
pub mod secret;
