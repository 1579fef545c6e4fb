//! Navigation geometry for ATCSIM.
//!
//! Loads runway, ILS, fix and approach records from a provider and
//! resolves them into pixel geometry for the current projection:
//! runway pavements paired with their reciprocal ends, and localizer
//! course lines sized from published approach fixes.

pub mod dataset;
pub mod localizer;
pub mod provider;
pub mod resolver;
pub mod runway;

pub use atcsim_core as core;
pub use dataset::NavigationDataset;
pub use localizer::{LocalizerLengthSource, RenderedLocalizer};
pub use provider::{JsonFileProvider, NavDataError, NavDataProvider};
pub use resolver::{NavGeometry, NavGeometryResolver, NavPoint};
pub use runway::{FarEndSource, RenderedRunway, RunwayIdent};

#[cfg(test)]
mod tests;
