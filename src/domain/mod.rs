//! Domain layer - Core business logic
//!
//! This module contains the core domain entities, repository traits,
//! and domain services. Image decoding and filesystem access live behind
//! the traits defined here.

pub mod entities;
pub mod repositories;
pub mod services;
