use super::common::*;
use crate::workflows::scorecard::{ScorecardExtractor, ScorecardSummary, SupplierRecord, Trend};

#[test]
fn view_renders_sentinels_for_absent_values() {
    let view = SupplierRecord::new("empty-record").to_view();

    assert_eq!(view.id, "empty-record");
    assert_eq!(view.parma_code, "N/A");
    assert_eq!(view.name, "Unknown");
    assert_eq!(view.logo_glyph, "?");
    assert_eq!(view.apqp, "N/A");
    assert_eq!(view.ppap, "N/A");
    assert_eq!(view.indices.software.value, "N/A");
    assert_eq!(view.indices.software.status, "N/A");
    assert_eq!(view.indices.software.reviewed_on, "N/A");
    assert_eq!(view.qpm.last_period, "N/A");
    assert_eq!(view.qpm.change, "N/A");
    assert_eq!(view.qpm.trend, Trend::Neutral);
    assert!(view.certifications.is_empty());
}

#[test]
fn view_serializes_with_snake_case_trends() {
    let record = ScorecardExtractor::extract(SOURCE_ID, &full_document(), today())
        .expect("extraction succeeds");
    let value = serde_json::to_value(record.to_view()).expect("serializes");

    assert_eq!(value["parma_code"], "123456");
    assert_eq!(value["qpm"]["trend"], "up");
    assert_eq!(value["indices"]["ee"]["status"], "Approved with conditions");
}

#[test]
fn summary_counts_thresholds_and_trends() {
    let mut over = SupplierRecord::new("supplier-a");
    over.qpm.actual = Some("55.0".to_string());
    over.qpm.trend = Trend::Up;
    over.ppm.actual = Some("61.2".to_string());

    let mut under = SupplierRecord::new("supplier-b");
    under.qpm.actual = Some("12.0".to_string());
    under.qpm.trend = Trend::Down;

    let blank = SupplierRecord::new("supplier-c");

    let summary = ScorecardSummary::from_records(&[over, under, blank]);
    assert_eq!(summary.suppliers, 3);
    assert_eq!(summary.qpm_over_50, 1);
    assert_eq!(summary.ppm_over_50, 1);
    assert_eq!(summary.qpm_trending_up, 1);
    assert_eq!(summary.qpm_trending_down, 1);
}
