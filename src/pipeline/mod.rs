//! Pipeline module - loading and aggregating the crime-story datasets

pub mod bar;
pub mod error;
pub mod filter;
pub mod heatmap;
pub mod income;
pub mod loader;
pub mod location;
pub mod options;
pub mod rate;
pub mod records;
pub mod scene;
pub mod spatial;
pub mod temporal;

pub use bar::*;
pub use error::*;
pub use filter::*;
pub use heatmap::*;
pub use income::*;
pub use loader::*;
pub use location::*;
pub use options::*;
pub use rate::*;
pub use records::*;
pub use scene::*;
pub use spatial::*;
pub use temporal::*;
