use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel rendered for absent values at the formatting boundary.
pub const NOT_AVAILABLE: &str = "N/A";
/// Sentinel rendered for an absent supplier name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Normalized view of one supplier's quality scorecard document.
///
/// Unknown values are modeled as `None` internally; the documented sentinel
/// strings only appear in [`SupplierRecordView`], which is what external
/// consumers (renderer, delivery) see.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierRecord {
    /// Caller-supplied source identifier; always present.
    pub id: String,
    /// Canonical supplier identifier from the identity anchor.
    pub parma_code: Option<String>,
    pub name: Option<String>,
    /// Display hint: uppercase first character of the name, `'?'` when unknown.
    pub logo_glyph: char,
    pub apqp: Option<String>,
    pub ppap: Option<String>,
    pub indices: QualityIndices,
    pub qpm: PerformanceFigures,
    pub ppm: PerformanceFigures,
    /// Source document order; never re-sorted.
    pub certifications: Vec<Certification>,
}

impl SupplierRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parma_code: None,
            name: None,
            logo_glyph: '?',
            apqp: None,
            ppap: None,
            indices: QualityIndices::default(),
            qpm: PerformanceFigures::default(),
            ppm: PerformanceFigures::default(),
            certifications: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    pub fn parma_code_or_na(&self) -> &str {
        self.parma_code.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn to_view(&self) -> SupplierRecordView {
        SupplierRecordView {
            id: self.id.clone(),
            parma_code: or_na(&self.parma_code),
            name: self
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            logo_glyph: self.logo_glyph.to_string(),
            apqp: or_na(&self.apqp),
            ppap: or_na(&self.ppap),
            indices: self.indices.to_view(),
            qpm: self.qpm.to_view(),
            ppm: self.ppm.to_view(),
            certifications: self.certifications.clone(),
        }
    }
}

/// The four audit indices a scorecard may carry. Fixed schema: an absent
/// block leaves its reading at the default rather than dropping a key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QualityIndices {
    pub software: IndexReading,
    pub ee: IndexReading,
    pub sma: IndexReading,
    pub polymer: IndexReading,
}

impl QualityIndices {
    pub(crate) fn slot_mut(&mut self, index: QualityIndex) -> &mut IndexReading {
        match index {
            QualityIndex::Software => &mut self.software,
            QualityIndex::Ee => &mut self.ee,
            QualityIndex::Sma => &mut self.sma,
            QualityIndex::Polymer => &mut self.polymer,
        }
    }

    fn to_view(&self) -> QualityIndicesView {
        QualityIndicesView {
            software: self.software.to_view(),
            ee: self.ee.to_view(),
            sma: self.sma.to_view(),
            polymer: self.polymer.to_view(),
        }
    }
}

/// Identifies one of the known index blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityIndex {
    Software,
    Ee,
    Sma,
    Polymer,
}

/// One extracted index block: percentage figure, approval status, review date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexReading {
    pub value: Option<String>,
    pub status: Option<IndexStatus>,
    pub reviewed_on: Option<NaiveDate>,
}

impl IndexReading {
    fn to_view(&self) -> IndexReadingView {
        IndexReadingView {
            value: or_na(&self.value),
            status: self
                .status
                .map(IndexStatus::label)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            reviewed_on: self
                .reviewed_on
                .map(|date| date.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStatus {
    Approved,
    ApprovedWithConditions,
    NotApproved,
    Expired,
}

impl IndexStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::ApprovedWithConditions => "Approved with conditions",
            Self::NotApproved => "Not approved",
            Self::Expired => "Expired",
        }
    }
}

/// Period-over-period performance figures for one measurement (QPM or PPM).
/// Values stay as display strings; `change`/`trend` are derived only when
/// both periods parse numerically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerformanceFigures {
    pub last_period: Option<String>,
    pub actual: Option<String>,
    pub change: Option<String>,
    pub trend: Trend,
}

impl PerformanceFigures {
    pub fn last_period_value(&self) -> Option<f64> {
        self.last_period
            .as_deref()
            .and_then(super::numeric::parse_metric)
    }

    pub fn actual_value(&self) -> Option<f64> {
        self.actual
            .as_deref()
            .and_then(super::numeric::parse_metric)
    }

    fn to_view(&self) -> PerformanceFiguresView {
        PerformanceFiguresView {
            last_period: or_na(&self.last_period),
            actual: or_na(&self.actual),
            change: or_na(&self.change),
            trend: self.trend,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral",
        }
    }
}

/// One certification row from the scorecard's certification table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub certified_place: String,
    /// Expected `YYYY-MM-DD`; free text is carried as-is and simply never
    /// produces expiry alerts.
    pub expiry_date: String,
    pub status: String,
}

/// External contract: every field rendered, absent values as sentinels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRecordView {
    pub id: String,
    pub parma_code: String,
    pub name: String,
    pub logo_glyph: String,
    pub apqp: String,
    pub ppap: String,
    pub indices: QualityIndicesView,
    pub qpm: PerformanceFiguresView,
    pub ppm: PerformanceFiguresView,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityIndicesView {
    pub software: IndexReadingView,
    pub ee: IndexReadingView,
    pub sma: IndexReadingView,
    pub polymer: IndexReadingView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexReadingView {
    pub value: String,
    pub status: String,
    pub reviewed_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceFiguresView {
    pub last_period: String,
    pub actual: String,
    pub change: String,
    pub trend: Trend,
}

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
