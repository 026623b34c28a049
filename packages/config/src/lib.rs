// ABOUTME: Configuration constants for Folio
// ABOUTME: Environment variable names and their defaults

pub mod constants;

pub use constants::*;
