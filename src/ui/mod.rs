//! UI utilities for terminal output
//!
//! This module provides the progress spinner shown while requests are in
//! flight.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
