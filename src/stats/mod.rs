//! Aggregate statistics over the cataloged corpus.
//!
//! Metadata distributions come from catalog records; component and license
//! figures are recomputed from the documents themselves. A record whose
//! document is missing or unparseable is skipped for the content figures,
//! logged, and reported in [`CorpusStatistics::skipped`]; it never fails the
//! whole computation.

mod distribution;
mod engine;
mod platform;
mod result;

pub use distribution::{Counter, Distribution};
pub use engine::{StatisticsEngine, TOP_DISTRIBUTION_LIMIT, TOP_PLATFORM_LICENSE_LIMIT};
pub use platform::{Platform, PlatformStats};
pub use result::{CorpusStatistics, SkipReason, SkippedDocument};
