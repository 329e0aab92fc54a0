mod insights;
mod profile;
mod summary;
pub mod views;

pub use profile::{
    license_anchor, AuditSummary, CategorySummary, ComponentLine, ComponentLink, Rank, Resources,
    SystemProfile,
};
pub use summary::{catalog_stats, TOP_BY_STARS};
pub use views::CatalogStats;
