//! Data models for Atrio

mod content;
mod entitlement;

pub use content::*;
pub use entitlement::*;
