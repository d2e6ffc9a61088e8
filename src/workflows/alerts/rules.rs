use super::format;
use super::Notification;
use crate::workflows::scorecard::{IndexStatus, SupplierRecord};
use chrono::NaiveDate;

const QPM_INCREASE_FACTOR: f64 = 1.1;
const QPM_WARNING_LOW: f64 = 30.0;
const QPM_WARNING_HIGH: f64 = 50.0;
const CERT_EXPIRING_WINDOW_DAYS: i64 = 90;
const CERT_NOTICE_WINDOW_DAYS: i64 = 180;

/// Runs every rule against one record, in the documented order: QPM
/// increase, QPM band, software index, certifications in list order.
pub(crate) fn evaluate_record(
    record: &SupplierRecord,
    today: NaiveDate,
    recipient: &str,
    base_url: &str,
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    let last_period = record.qpm.last_period_value();
    let actual = record.qpm.actual_value();

    // Period-over-period increase; independent of the band rules below.
    if let (Some(last), Some(actual)) = (last_period, actual) {
        if last > 0.0 && actual >= last * QPM_INCREASE_FACTOR {
            notifications.push(format::qpm_increase(record, last, actual, recipient, base_url));
        }
    }

    // Band rules are mutually exclusive on the same actual value.
    if let Some(actual) = actual {
        if (QPM_WARNING_LOW..=QPM_WARNING_HIGH).contains(&actual) {
            notifications.push(format::qpm_warning(record, actual, recipient, base_url));
        } else if actual > QPM_WARNING_HIGH {
            notifications.push(format::qpm_critical(record, actual, recipient, base_url));
        }
    }

    if record.indices.software.status == Some(IndexStatus::Expired) {
        notifications.push(format::software_index_expired(record, recipient, base_url));
    }

    for certification in &record.certifications {
        // Strict date contract; anything else is silently ignored.
        let Ok(expiry) = NaiveDate::parse_from_str(&certification.expiry_date, "%Y-%m-%d") else {
            continue;
        };
        let days_until = (expiry - today).num_days();

        if days_until <= 0 {
            notifications.push(format::certification_expired(
                record,
                certification,
                -days_until,
                recipient,
                base_url,
            ));
        } else if days_until <= CERT_EXPIRING_WINDOW_DAYS {
            notifications.push(format::certification_expiring(
                record,
                certification,
                days_until,
                recipient,
                base_url,
            ));
        } else if days_until <= CERT_NOTICE_WINDOW_DAYS {
            notifications.push(format::certification_notice(
                record,
                certification,
                days_until,
                recipient,
                base_url,
            ));
        }
    }

    notifications
}
