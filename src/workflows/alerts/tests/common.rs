use crate::workflows::alerts::AlertEngine;
use crate::workflows::scorecard::{Certification, SupplierRecord};
use chrono::{Duration, NaiveDate};

pub(super) const RECIPIENT: &str = "sqa-team@example.com";
pub(super) const BASE_URL: &str = "https://supplierportal.example.com";

pub(super) fn engine() -> AlertEngine {
    AlertEngine::new(RECIPIENT, BASE_URL)
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")
}

pub(super) fn supplier() -> SupplierRecord {
    let mut record = SupplierRecord::new("acme-881");
    record.parma_code = Some("123456".to_string());
    record.name = Some("Acme Components AB".to_string());
    record.logo_glyph = 'A';
    record
}

pub(super) fn supplier_with_qpm(last_period: &str, actual: &str) -> SupplierRecord {
    let mut record = supplier();
    record.qpm.last_period = Some(last_period.to_string());
    record.qpm.actual = Some(actual.to_string());
    record
}

pub(super) fn supplier_with_qpm_actual(actual: &str) -> SupplierRecord {
    let mut record = supplier();
    record.qpm.actual = Some(actual.to_string());
    record
}

pub(super) fn certification(name: &str, expiry_date: &str) -> Certification {
    Certification {
        name: name.to_string(),
        certified_place: "Gothenburg".to_string(),
        expiry_date: expiry_date.to_string(),
        status: "Valid".to_string(),
    }
}

pub(super) fn expiring_in(days: i64) -> String {
    (today() + Duration::days(days)).to_string()
}
