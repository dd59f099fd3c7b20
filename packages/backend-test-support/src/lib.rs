//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing, including
//! unified logging initialization, unique test data generation, and Problem
//! Details response assertions.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
