//! Configuration, credentials and the movie record types

pub mod config;
pub mod models;
pub mod secrets;
