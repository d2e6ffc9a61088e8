use chrono::NaiveDate;

pub(super) const SOURCE_ID: &str = "acme-881";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")
}

pub(super) fn identity_fragment() -> String {
    r#"<div class="header">
  <a href="/portal/supplierinformation?id=881">123456, Acme Components AB</a>
</div>"#
        .to_string()
}

pub(super) fn status_fragment() -> String {
    r#"<span class="status-line">APQP: Green, PPAP: Level-3</span>"#.to_string()
}

pub(super) fn indices_fragment(software_date: &str) -> String {
    format!(
        r#"<div class="quality-indices">
  Software Index 82% Approved {software_date}
  EE Index 74% Approved with conditions 2025-01-09
  SMA Index 66% Not approved 2023-11-02
  Polymer Index 91% Approved 2025-06-30
</div>"#
    )
}

pub(super) fn performance_table(
    ppm_last: &str,
    ppm_actual: &str,
    qpm_last: &str,
    qpm_actual: &str,
) -> String {
    format!(
        r#"<table class="performance-summary">
  <tr><td>Measurement</td><td>Unit</td><td>Target</td><td>Last</td><td>Actual</td><td>Trend</td><td>Target</td><td>Last</td><td>Actual</td></tr>
  <tr><td>Plant North</td><td>ppm</td><td>10</td><td>12.0</td><td>9.5</td><td>down</td><td>20</td><td>18.0</td><td>17.0</td></tr>
  <tr><td>Totals below</td><td>span</td></tr>
  <tr><td>Supplier Total</td><td>ppm</td><td>10</td><td>{ppm_last}</td><td>{ppm_actual}</td><td>up</td><td>20</td><td>{qpm_last}</td><td>{qpm_actual}</td></tr>
</table>"#
    )
}

pub(super) fn certification_table(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut body = String::from(
        "<table class=\"certifications\">\n  <tr><th>Certification</th><th>Certified place</th><th>Expiry date</th><th>Status</th></tr>\n",
    );
    for (name, place, expiry, status) in rows {
        body.push_str(&format!(
            "  <tr><td>{name}</td><td>{place}</td><td>{expiry}</td><td>{status}</td></tr>\n"
        ));
    }
    body.push_str("</table>");
    body
}

pub(super) fn document_from(fragments: &[&str]) -> String {
    format!("<html><body>\n{}\n</body></html>", fragments.join("\n"))
}

pub(super) fn full_document() -> String {
    document_from(&[
        &identity_fragment(),
        &status_fragment(),
        &indices_fragment("2024-05-17"),
        &performance_table("14.0", "18.5", "40.0", "55.0"),
        &certification_table(&[
            ("ISO 9001", "Gothenburg", "2027-11-15", "Valid"),
            ("IATF 16949", "Gent", "not-a-date", "Valid"),
            ("N/A", "-", "-", "-"),
        ]),
    ])
}
