//! Configuration modules for the PawCare API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and injected into the application
//! state. Nothing here is read lazily at request time.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: Session-token signing configuration

pub mod cors;
pub mod jwt;
