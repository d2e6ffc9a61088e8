use super::domain::{SupplierRecord, Trend};
use serde::Serialize;

/// Batch KPIs consumed by the rendering collaborator.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScorecardSummary {
    pub suppliers: usize,
    pub qpm_over_50: usize,
    pub ppm_over_50: usize,
    pub qpm_trending_up: usize,
    pub qpm_trending_down: usize,
}

impl ScorecardSummary {
    pub fn from_records(records: &[SupplierRecord]) -> Self {
        let mut summary = Self {
            suppliers: records.len(),
            ..Self::default()
        };

        for record in records {
            if record.qpm.actual_value().is_some_and(|value| value > 50.0) {
                summary.qpm_over_50 += 1;
            }
            if record.ppm.actual_value().is_some_and(|value| value > 50.0) {
                summary.ppm_over_50 += 1;
            }
            match record.qpm.trend {
                Trend::Up => summary.qpm_trending_up += 1,
                Trend::Down => summary.qpm_trending_down += 1,
                Trend::Neutral => {}
            }
        }

        summary
    }
}
