//! Document extraction: one raw scorecard document in, one normalized
//! [`SupplierRecord`] out. Missing sections degrade to defaults; only a
//! document that is not markup at all fails extraction.

pub mod domain;
mod extractor;
mod numeric;
pub mod report;

#[cfg(test)]
mod tests;

pub use domain::{
    Certification, IndexReading, IndexStatus, PerformanceFigures, QualityIndex, QualityIndices,
    SupplierRecord, SupplierRecordView, Trend, NOT_AVAILABLE, UNKNOWN_NAME,
};
pub use report::ScorecardSummary;

use chrono::NaiveDate;

/// The raw document could not be treated as structured markup at all. Per
/// contract the caller must drop this source from downstream aggregation
/// rather than substitute an all-default record.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("source '{source_id}': document is empty or not parseable as markup")]
    UnparsableDocument { source_id: String },
}

impl ExtractionError {
    pub fn source_id(&self) -> &str {
        match self {
            Self::UnparsableDocument { source_id } => source_id,
        }
    }
}

/// Stateless extractor turning rendered scorecard markup into records.
pub struct ScorecardExtractor;

impl ScorecardExtractor {
    /// `today` drives the software-index review-age override and is passed
    /// explicitly so extraction stays deterministic.
    pub fn extract(
        source_id: &str,
        raw_document: &str,
        today: NaiveDate,
    ) -> Result<SupplierRecord, ExtractionError> {
        extractor::extract(source_id, raw_document, today)
    }
}
