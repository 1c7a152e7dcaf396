//! Configuration modules for Coursetable.
//!
//! Configuration is loaded from environment variables, typically via a
//! `.env` file in development. See each submodule for the specific
//! variable names and their defaults.
//!
//! # Modules
//!
//! - [`database`]: PostgreSQL connection pool initialization

pub mod database;
