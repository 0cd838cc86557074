// ── HTML rendering ──
//
// The only place that produces markup. Every record-derived string goes
// through `escape`, including attribute values, and row actions are
// plain `data-*` attributes: no inline script is ever emitted.

use std::fmt::{self, Write};

use super::table::{Cell, Row, RowAction, Table, TableView};

/// An HTML fragment produced by this module.
///
/// Only the renderer can build one, so anything typed `Html` has already
/// had its record content escaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Html(String);

impl Html {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render a table view into a container fragment.
pub fn render(view: &TableView) -> Html {
    match view {
        TableView::Empty(message) => Html(format!("<p>{}</p>", escape(message))),
        TableView::Table(table) => Html(render_table(table)),
    }
}

fn render_table(table: &Table) -> String {
    let mut out = String::from("<div class=\"table-container\"><table><thead><tr>");
    for header in table.headers {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr></thead><tbody>");
    for (index, row) in table.rows.iter().enumerate() {
        render_row(&mut out, index, row);
    }
    out.push_str("</tbody></table></div>");
    out
}

fn render_row(out: &mut String, index: usize, row: &Row) {
    let _ = write!(out, "<tr data-index=\"{index}\">");
    for cell in &row.cells {
        out.push_str("<td>");
        render_cell(out, cell);
        out.push_str("</td>");
    }
    out.push_str("</tr>");
}

fn render_cell(out: &mut String, cell: &Cell) {
    match cell {
        Cell::Text(text) => out.push_str(&escape(text)),
        Cell::Lines(lines) => {
            let escaped: Vec<String> = lines.iter().map(String::as_str).map(escape).collect();
            out.push_str(&escaped.join("<br>"));
        }
        Cell::Status { label, class } => {
            let _ = write!(
                out,
                "<span class=\"{}\">{}</span>",
                escape(class),
                escape(label)
            );
        }
        Cell::Action(action) => render_action(out, action),
    }
}

fn render_action(out: &mut String, action: &RowAction) {
    let _ = write!(
        out,
        "<button type=\"button\" class=\"{}\"",
        escape(action.class())
    );
    match action {
        RowAction::UpdateStatus { case_id } => {
            let _ = write!(
                out,
                " data-action=\"update-status\" data-case-id=\"{}\"",
                escape(case_id)
            );
        }
        RowAction::AddHospital(result) => {
            let _ = write!(
                out,
                " data-action=\"add-hospital\" data-name=\"{}\" data-address=\"{}\" \
                 data-lat=\"{}\" data-lon=\"{}\"",
                escape(&result.name),
                escape(&result.address),
                escape(&result.lat),
                escape(&result.lon)
            );
        }
    }
    let _ = write!(out, ">{}</button>", escape(action.label()));
}

#[cfg(test)]
mod tests {
    use resqtrack_api::{Case, HospitalSearchResult};

    use super::*;
    use crate::view::table::{cases_view, search_results_view};

    fn case(id: &str, reporter: &str, status: &str) -> Case {
        Case {
            case_id: id.into(),
            reporter_name: reporter.into(),
            reporter_phone: "555".into(),
            location: "Pune".into(),
            animal_type: "Dog".into(),
            urgency: "High".into(),
            status: status.into(),
            created_at: "2024-06-15".into(),
            notes: None,
            media_url: None,
            assigned_hospital: None,
        }
    }

    #[test]
    fn empty_view_is_a_paragraph_not_a_table() {
        let html = render(&cases_view(&[]));
        assert_eq!(html.as_str(), "<p>No cases found.</p>");
        assert!(!html.as_str().contains("<table"));
    }

    #[test]
    fn one_body_row_per_record() {
        let cases = vec![
            case("C1", "A", "Reported"),
            case("C2", "B", "Reported"),
            case("C3", "C", "Resolved"),
        ];
        let html = render(&cases_view(&cases));
        assert_eq!(html.as_str().matches("<tr data-index=").count(), 3);
        let c1 = html.as_str().find("<td>C1</td>").unwrap_or(usize::MAX);
        let c3 = html.as_str().find("<td>C3</td>").unwrap_or(0);
        assert!(c1 < c3, "rows out of order");
    }

    #[test]
    fn status_badge_uses_lowercased_class() {
        let html = render(&cases_view(&[case("C1", "A", "Resolved")]));
        assert!(
            html.as_str()
                .contains("<span class=\"status-resolved\">Resolved</span>")
        );
    }

    #[test]
    fn record_content_is_escaped() {
        let html = render(&cases_view(&[case(
            "C1'><script>",
            "<img src=x onerror=alert(1)>",
            "\"open\"",
        )]));
        let s = html.as_str();
        assert!(!s.contains("<script>"));
        assert!(!s.contains("<img"));
        assert!(s.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(s.contains("data-case-id=\"C1&#39;&gt;&lt;script&gt;\""));
        assert!(s.contains("class=\"status-&quot;open&quot;\""));
    }

    #[test]
    fn reporter_lines_joined_with_break() {
        let html = render(&cases_view(&[case("C1", "Asha", "Reported")]));
        assert!(html.as_str().contains("<td>Asha<br>555</td>"));
    }

    #[test]
    fn add_button_carries_result_fields() {
        let result = HospitalSearchResult {
            name: "O'Brien Vet".into(),
            address: "1 High St, Springfield".into(),
            lat: "1.5".into(),
            lon: "2.5".into(),
            boundingbox: vec![],
        };
        let html = render(&search_results_view(&[result]));
        let s = html.as_str();
        assert!(s.contains("data-action=\"add-hospital\""));
        assert!(s.contains("data-name=\"O&#39;Brien Vet\""));
        assert!(s.contains(">Add</button>"));
        assert!(!s.contains("onclick"));
    }
}
