use super::common::*;
use crate::workflows::alerts::{AlertKind, AlertPriority};
use crate::workflows::scorecard::SupplierRecord;

#[test]
fn subject_embeds_supplier_and_values() {
    let record = supplier_with_qpm_actual("55.0");
    let notifications = engine().evaluate(&[record], today());

    let subject = &notifications[0].subject;
    assert!(subject.contains("Acme Components AB"));
    assert!(subject.contains("123456"));
    assert!(subject.contains("55.0"));
}

#[test]
fn body_carries_priority_color_and_deep_link() {
    let record = supplier_with_qpm_actual("55.0");
    let notifications = engine().evaluate(&[record], today());

    let body = &notifications[0].body;
    assert!(body.contains(AlertPriority::Critical.color()));
    assert!(body.contains("https://supplierportal.example.com/scorecard?parma=123456"));
    assert!(body.starts_with("<h2"));
}

#[test]
fn unknown_parma_renders_the_sentinel_in_the_link() {
    let mut record = SupplierRecord::new("mystery-1");
    record.qpm.actual = Some("55.0".to_string());

    let notifications = engine().evaluate(&[record], today());
    assert!(notifications[0].body.contains("/scorecard?parma=N/A"));
    assert!(notifications[0].subject.contains("Unknown"));
}

#[test]
fn bodies_are_reproducible() {
    let build = || {
        let record = supplier_with_qpm("40.0", "55.0");
        engine().evaluate(&[record], today())
    };
    assert_eq!(build(), build());
}

#[test]
fn notifications_serialize_with_rank_and_tag() {
    let record = supplier_with_qpm_actual("42.0");
    let notifications = engine().evaluate(&[record], today());

    let value = serde_json::to_value(&notifications[0]).expect("serializes");
    assert_eq!(value["priority"], 2);
    assert_eq!(value["kind"], "qpm_warning_30_50");
    assert_eq!(value["recipient"], RECIPIENT);
    assert_eq!(value["supplier_id"], "acme-881");
}

#[test]
fn priority_metadata_is_stable() {
    assert_eq!(AlertPriority::Critical.rank(), 1);
    assert_eq!(AlertPriority::Medium.rank(), 2);
    assert_eq!(AlertPriority::Low.rank(), 3);
    assert_eq!(AlertKind::QpmIncrease10.tag(), "qpm_increase_10");
    assert_eq!(AlertKind::CertNotice.tag(), "cert_notice");
}
