//! crimescope: Chicago Crime Story Library
//!
//! Loads crime, population, income, and community-area boundary data and
//! computes the derived tables behind each scene: crime rate over time, rate
//! against income, rate per community area, and counts per location category.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
