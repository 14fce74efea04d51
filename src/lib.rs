//! Côte d'Ivoire location hierarchy (city → commune → quartier) with the
//! cascading selection used by job and profile forms.

pub mod config;
pub mod location;
pub mod record;
pub mod selection;
pub mod server;
