use super::domain::{
    Certification, IndexStatus, PerformanceFigures, QualityIndex, SupplierRecord, Trend,
    NOT_AVAILABLE,
};
use super::numeric;
use super::ExtractionError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Software index reviews older than this are considered expired.
const SOFTWARE_INDEX_MAX_AGE_DAYS: f64 = 5.0 * 365.25;

const PERFORMANCE_ROW_LABEL: &str = "Supplier Total";
const PERFORMANCE_HEADER_LABEL: &str = "Measurement";
const MIN_PERFORMANCE_CELLS: usize = 9;
const PPM_LAST_CELL: usize = 3;
const PPM_ACTUAL_CELL: usize = 4;
const QPM_LAST_CELL: usize = 7;
const QPM_ACTUAL_CELL: usize = 8;
const MIN_CERTIFICATION_CELLS: usize = 4;

/// Known index block labels. Blocks are not individually delimited in the
/// source, so each block's text runs from its own label to the nearest other
/// label, or the end of the container. Adding an index is a row here plus a
/// slot in `QualityIndices`.
const INDEX_FENCES: &[(&str, QualityIndex)] = &[
    ("Software Index", QualityIndex::Software),
    ("EE Index", QualityIndex::Ee),
    ("SMA Index", QualityIndex::Sma),
    ("Criticality-1 Index", QualityIndex::Sma),
    ("Polymer Index", QualityIndex::Polymer),
];

/// Checked in declaration order; the composite phrases must come before the
/// bare "Approved" they contain.
const STATUS_KEYWORDS: &[(&str, IndexStatus)] = &[
    ("Approved with conditions", IndexStatus::ApprovedWithConditions),
    ("Not approved", IndexStatus::NotApproved),
    ("Approved", IndexStatus::Approved),
];

pub(crate) fn extract(
    source_id: &str,
    raw_document: &str,
    today: NaiveDate,
) -> Result<SupplierRecord, ExtractionError> {
    if !looks_like_markup(raw_document) {
        return Err(ExtractionError::UnparsableDocument {
            source_id: source_id.to_string(),
        });
    }

    let mut record = SupplierRecord::new(source_id);
    extract_identity(raw_document, &mut record);
    extract_status_codes(raw_document, &mut record);
    extract_indices(raw_document, today, &mut record);
    extract_performance(raw_document, &mut record);
    extract_certifications(raw_document, &mut record);
    Ok(record)
}

fn looks_like_markup(raw: &str) -> bool {
    !raw.trim().is_empty() && tag_open_re().is_match(raw)
}

/// Strips tags, resolves the handful of entities the scorecard pages use,
/// and collapses whitespace.
fn flatten(fragment: &str) -> String {
    let text = tag_re().replace_all(fragment, " ");
    let text = text.replace("&nbsp;", " ").replace("&amp;", "&");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_identity(doc: &str, record: &mut SupplierRecord) {
    let Some(caps) = identity_anchor_re().captures(doc) else {
        debug!(source = %record.id, "supplier-information anchor not found");
        return;
    };

    // Anchor text has the form "<code>, <name>"; split once on the first comma.
    let text = flatten(&caps[1]);
    let (code, name) = match text.split_once(',') {
        Some((code, name)) => (code.trim(), name.trim()),
        None => (text.trim(), ""),
    };

    if !code.is_empty() && code != NOT_AVAILABLE {
        record.parma_code = Some(code.to_string());
    }
    if !name.is_empty() {
        record.name = Some(name.to_string());
        if let Some(first) = name.chars().next().and_then(|ch| ch.to_uppercase().next()) {
            record.logo_glyph = first;
        }
    }
}

fn extract_status_codes(doc: &str, record: &mut SupplierRecord) {
    let text = flatten(doc);
    record.apqp = apqp_re()
        .captures(&text)
        .map(|caps| caps[1].to_string());
    record.ppap = ppap_re()
        .captures(&text)
        .map(|caps| caps[1].to_string());
    if record.apqp.is_none() && record.ppap.is_none() {
        debug!(source = %record.id, "project status markers not found");
    }
}

fn extract_indices(doc: &str, today: NaiveDate, record: &mut SupplierRecord) {
    let Some(caps) = indices_container_re().captures(doc) else {
        debug!(source = %record.id, "quality indices container not found");
        return;
    };
    let text = flatten(&caps[1]);

    for (label, slot) in INDEX_FENCES {
        let Some(start) = text.find(label) else {
            continue;
        };
        let body_start = start + label.len();
        let body_end = INDEX_FENCES
            .iter()
            .filter(|(other, _)| other != label)
            .filter_map(|(other, _)| text[body_start..].find(other))
            .min()
            .map(|offset| body_start + offset)
            .unwrap_or(text.len());

        parse_index_block(&text[body_start..body_end], record, *slot);
    }

    // Review-age override applies to the software index only.
    if let Some(reviewed_on) = record.indices.software.reviewed_on {
        let age_days = (today - reviewed_on).num_days() as f64;
        if age_days > SOFTWARE_INDEX_MAX_AGE_DAYS {
            record.indices.software.status = Some(IndexStatus::Expired);
        }
    }
}

fn parse_index_block(block: &str, record: &mut SupplierRecord, slot: QualityIndex) {
    let reading = record.indices.slot_mut(slot);

    if let Some(caps) = percent_re().captures(block) {
        reading.value = Some(format!("{}%", &caps[1]));
    }

    for (keyword, status) in STATUS_KEYWORDS {
        if block.contains(keyword) {
            reading.status = Some(*status);
            break;
        }
    }

    if let Some(caps) = date_re().captures(block) {
        let raw = &caps[1];
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => reading.reviewed_on = Some(date),
            Err(_) => warn!(raw, "skipping malformed index review date"),
        }
    }
}

fn extract_performance(doc: &str, record: &mut SupplierRecord) {
    for table in table_re().captures_iter(doc) {
        for row in row_re().captures_iter(&table[2]) {
            let cells = row_cells(&row[1]);
            if cells.len() < MIN_PERFORMANCE_CELLS {
                continue;
            }
            if cells[0] == PERFORMANCE_HEADER_LABEL {
                continue;
            }
            if cells[0] != PERFORMANCE_ROW_LABEL {
                continue;
            }

            record.ppm = performance_figures(&cells[PPM_LAST_CELL], &cells[PPM_ACTUAL_CELL]);
            record.qpm = performance_figures(&cells[QPM_LAST_CELL], &cells[QPM_ACTUAL_CELL]);
            // At most one Supplier Total row is expected.
            return;
        }
    }
    debug!(source = %record.id, "performance table has no Supplier Total row");
}

fn performance_figures(last_period: &str, actual: &str) -> PerformanceFigures {
    let mut figures = PerformanceFigures {
        last_period: non_empty(last_period),
        actual: non_empty(actual),
        change: None,
        trend: Trend::Neutral,
    };

    if let (Some(last), Some(actual)) = (figures.last_period_value(), figures.actual_value()) {
        let (change, trend) = numeric::signed_change(last, actual);
        figures.change = Some(change);
        figures.trend = trend;
    }

    figures
}

fn extract_certifications(doc: &str, record: &mut SupplierRecord) {
    for table in table_re().captures_iter(doc) {
        if !is_certification_table(&table[1], &table[2]) {
            continue;
        }

        for row in row_re().captures_iter(&table[2]) {
            let cells = row_cells(&row[1]);
            if cells.len() < MIN_CERTIFICATION_CELLS {
                continue;
            }
            let name = cells[0].trim();
            if name.is_empty() || name == NOT_AVAILABLE {
                continue;
            }

            record.certifications.push(Certification {
                name: name.to_string(),
                certified_place: cells[1].clone(),
                expiry_date: cells[2].clone(),
                status: cells[3].clone(),
            });
        }
        return;
    }
    debug!(source = %record.id, "certification table not found");
}

fn is_certification_table(attrs: &str, body: &str) -> bool {
    if attrs.to_ascii_lowercase().contains("certification") {
        return true;
    }
    caption_re()
        .captures(body)
        .map(|caps| flatten(&caps[1]).to_ascii_lowercase().contains("certification"))
        .unwrap_or(false)
}

fn row_cells(row_body: &str) -> Vec<String> {
    cell_re()
        .captures_iter(row_body)
        .map(|caps| flatten(&caps[1]))
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn tag_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[A-Za-z!/]").expect("tag-open pattern"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"))
}

fn identity_anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<a\b[^>]*href="[^"]*supplier[-_]?information[^"]*"[^>]*>(.*?)</a>"#)
            .expect("identity anchor pattern")
    })
}

fn apqp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"APQP:\s*([^\s,]+)").expect("apqp pattern"))
}

fn ppap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"PPAP:\s*([^\s,]+)").expect("ppap pattern"))
}

fn indices_container_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?is)<(?:div|section)\b[^>]*(?:class|id)="[^"]*quality-indices[^"]*"[^>]*>(.*?)</(?:div|section)>"#,
        )
        .expect("indices container pattern")
    })
}

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("percent pattern"))
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").expect("date pattern"))
}

fn table_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<table\b([^>]*)>(.*?)</table>").expect("table pattern"))
}

fn row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>").expect("row pattern"))
}

fn cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").expect("cell pattern"))
}

fn caption_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<caption\b[^>]*>(.*?)</caption>").expect("caption pattern"))
}
