//! World-Space HUD Components
//!
//! Stateless rendering components drawn above entities in camera space. They
//! are created once and reused for every entity that needs one.
//!
//! # Available Components
//!
//! - [`HealthBar`] - Displays a health fraction above an entity

pub mod health_bar;

pub use health_bar::{HealthBar, HealthBarStyle};
