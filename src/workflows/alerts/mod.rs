//! Alert rule evaluation: a batch of supplier records in, an ordered list of
//! [`Notification`]s out. Rules run independently per record, in a fixed
//! order (QPM rules, software index, certifications in list order); output is
//! never globally re-sorted by priority.

mod format;
mod rules;

#[cfg(test)]
mod tests;

use crate::workflows::scorecard::SupplierRecord;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Stateless evaluator; recipient and deep-link base are fixed per engine.
pub struct AlertEngine {
    recipient: String,
    scorecard_base_url: String,
}

impl AlertEngine {
    pub fn new(recipient: impl Into<String>, scorecard_base_url: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            scorecard_base_url: scorecard_base_url.into(),
        }
    }

    /// Evaluates every rule against every record. `today` is threaded
    /// explicitly so expiry arithmetic is deterministic.
    pub fn evaluate(&self, records: &[SupplierRecord], today: NaiveDate) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for record in records {
            notifications.extend(rules::evaluate_record(
                record,
                today,
                &self.recipient,
                &self.scorecard_base_url,
            ));
        }
        notifications
    }
}

/// Composed alert content. Created fresh per evaluation pass and handed to
/// the delivery collaborator; never mutated or persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    /// HTML with a priority-colored heading and a scorecard deep link.
    pub body: String,
    pub priority: AlertPriority,
    pub kind: AlertKind,
    /// Identifier of the supplier record the alert concerns.
    pub supplier_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPriority {
    Critical,
    Medium,
    Low,
}

impl AlertPriority {
    /// 1 = highest.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Heading color used in notification bodies.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "#c0392b",
            Self::Medium => "#e67e22",
            Self::Low => "#2980b9",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Serialize for AlertPriority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.rank())
    }
}

/// Identifies the rule that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    #[serde(rename = "qpm_increase_10")]
    QpmIncrease10,
    #[serde(rename = "qpm_warning_30_50")]
    QpmWarning30To50,
    #[serde(rename = "qpm_critical_over_50")]
    QpmCriticalOver50,
    #[serde(rename = "sw_index_expired")]
    SwIndexExpired,
    #[serde(rename = "cert_expiring")]
    CertExpiring,
    #[serde(rename = "cert_expired")]
    CertExpired,
    #[serde(rename = "cert_notice")]
    CertNotice,
}

impl AlertKind {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::QpmIncrease10 => "qpm_increase_10",
            Self::QpmWarning30To50 => "qpm_warning_30_50",
            Self::QpmCriticalOver50 => "qpm_critical_over_50",
            Self::SwIndexExpired => "sw_index_expired",
            Self::CertExpiring => "cert_expiring",
            Self::CertExpired => "cert_expired",
            Self::CertNotice => "cert_notice",
        }
    }
}
