//! Design system catalog: dataset loading, browse/compare/recommend pipelines,
//! statistics, and the read-only HTTP adapter.

pub mod browse;
pub mod compare;
pub mod components;
pub mod dataset;
pub mod domain;
pub mod format;
pub mod recommend;
pub mod router;
pub mod service;
pub mod stats;

#[cfg(test)]
mod tests;

pub use components::{
    ComponentIndex, ComponentSource, DirectoryComponentSource, InMemoryComponentSource,
};
pub use dataset::{Catalog, FilterOptions};
pub use domain::{
    AccessibilityLevel, AiCodeGen, AiQuality, CatalogError, ComponentAudit, ComponentCategory,
    ComponentEntry, SystemId, SystemRecord, Theming,
};
pub use router::catalog_router;
pub use service::{CatalogService, CatalogServiceError};
