// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod grid;
pub mod state;

// Re-export public types for convenient access via `qho::core::TypeName`
pub use error::QhoError;
pub use grid::Grid;
pub use state::{OscillatorState, Wavefunction};

pub mod constants;
pub use constants::qho_constants::{N_MAX, TWO_PI}; // Re-export
