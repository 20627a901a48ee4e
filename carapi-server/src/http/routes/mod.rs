//! Route handlers organized by resource

pub mod cars;
pub mod health;
