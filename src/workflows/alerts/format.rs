//! Notification composition. Every function here is a pure function of the
//! record, the rule inputs, and the recipient; the delivery collaborator
//! only ever sees the finished subject/body pair.

use super::{AlertKind, AlertPriority, Notification};
use crate::workflows::scorecard::{Certification, SupplierRecord};
use tracing::debug;

pub(crate) fn qpm_increase(
    record: &SupplierRecord,
    last_period: f64,
    actual: f64,
    recipient: &str,
    base_url: &str,
) -> Notification {
    compose(
        AlertKind::QpmIncrease10,
        AlertPriority::Low,
        record,
        format!(
            "QPM up 10% or more for {}: {last_period:.1} to {actual:.1}",
            supplier_ref(record)
        ),
        format!(
            "QPM moved from {last_period:.1} last period to {actual:.1}, an increase of 10% or more."
        ),
        recipient,
        base_url,
    )
}

pub(crate) fn qpm_warning(
    record: &SupplierRecord,
    actual: f64,
    recipient: &str,
    base_url: &str,
) -> Notification {
    compose(
        AlertKind::QpmWarning30To50,
        AlertPriority::Medium,
        record,
        format!("QPM warning for {}: {actual:.1}", supplier_ref(record)),
        format!("QPM is at {actual:.1}, inside the 30-50 warning band."),
        recipient,
        base_url,
    )
}

pub(crate) fn qpm_critical(
    record: &SupplierRecord,
    actual: f64,
    recipient: &str,
    base_url: &str,
) -> Notification {
    compose(
        AlertKind::QpmCriticalOver50,
        AlertPriority::Critical,
        record,
        format!("QPM critical for {}: {actual:.1}", supplier_ref(record)),
        format!("QPM is at {actual:.1}, above the critical threshold of 50."),
        recipient,
        base_url,
    )
}

pub(crate) fn software_index_expired(
    record: &SupplierRecord,
    recipient: &str,
    base_url: &str,
) -> Notification {
    compose(
        AlertKind::SwIndexExpired,
        AlertPriority::Critical,
        record,
        format!("Software index expired for {}", supplier_ref(record)),
        "The software index review is older than five years and is considered expired."
            .to_string(),
        recipient,
        base_url,
    )
}

pub(crate) fn certification_expired(
    record: &SupplierRecord,
    certification: &Certification,
    days_since: i64,
    recipient: &str,
    base_url: &str,
) -> Notification {
    compose(
        AlertKind::CertExpired,
        AlertPriority::Critical,
        record,
        format!(
            "Certification '{}' expired for {}",
            certification.name,
            supplier_ref(record)
        ),
        format!(
            "Certification '{}' ({}) expired {days_since} day(s) ago, on {}.",
            certification.name, certification.certified_place, certification.expiry_date
        ),
        recipient,
        base_url,
    )
}

pub(crate) fn certification_expiring(
    record: &SupplierRecord,
    certification: &Certification,
    days_until: i64,
    recipient: &str,
    base_url: &str,
) -> Notification {
    compose(
        AlertKind::CertExpiring,
        AlertPriority::Medium,
        record,
        format!(
            "Certification '{}' expires in {days_until} day(s) for {}",
            certification.name,
            supplier_ref(record)
        ),
        format!(
            "Certification '{}' ({}) expires on {}, in {days_until} day(s).",
            certification.name, certification.certified_place, certification.expiry_date
        ),
        recipient,
        base_url,
    )
}

pub(crate) fn certification_notice(
    record: &SupplierRecord,
    certification: &Certification,
    days_until: i64,
    recipient: &str,
    base_url: &str,
) -> Notification {
    compose(
        AlertKind::CertNotice,
        AlertPriority::Low,
        record,
        format!(
            "Certification '{}' due for renewal for {}",
            certification.name,
            supplier_ref(record)
        ),
        format!(
            "Certification '{}' ({}) expires on {}, in {days_until} day(s). Plan the renewal.",
            certification.name, certification.certified_place, certification.expiry_date
        ),
        recipient,
        base_url,
    )
}

fn supplier_ref(record: &SupplierRecord) -> String {
    format!("{} ({})", record.display_name(), record.parma_code_or_na())
}

fn compose(
    kind: AlertKind,
    priority: AlertPriority,
    record: &SupplierRecord,
    subject: String,
    detail: String,
    recipient: &str,
    base_url: &str,
) -> Notification {
    debug!(supplier = %record.id, kind = kind.tag(), "alert rule fired");

    let link = format!(
        "{}/scorecard?parma={}",
        base_url.trim_end_matches('/'),
        record.parma_code_or_na()
    );
    let body = format!(
        "<h2 style=\"color:{color};\">{subject}</h2>\n<p>{detail}</p>\n<p><a href=\"{link}\">Open the scorecard for {name}</a></p>",
        color = priority.color(),
        name = record.display_name(),
    );

    Notification {
        recipient: recipient.to_string(),
        subject,
        body,
        priority,
        kind,
        supplier_id: record.id.clone(),
    }
}
