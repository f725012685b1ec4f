/// Stat descriptors and the report builder that applies them
pub mod builder;
pub mod stat;

pub use builder::{default_color, LineKind, Report, ReportBuilder, ReportLine};
pub use stat::{coins, int, text, StatSpec, Transform};
