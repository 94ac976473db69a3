//! Atrio Core Library
//!
//! Access model for the Atrio members area: key-based entitlement
//! resolution, durable session slots, day-based unlock scheduling and
//! completion progress. Everything is synchronous and local; the
//! presentation layer sits on top and decides what to render.

pub mod access;
pub mod catalog;
pub mod error;
pub mod models;
pub mod schedule;
pub mod storage;

pub use access::{GatedArea, MemberArea};
pub use error::{Error, Result};
pub use models::*;
pub use storage::{Database, ProgressStore, SessionStore, SLOT_AI_HUB, SLOT_MAIN, SLOT_VAULT};
