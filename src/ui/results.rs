//! Presentation of decoded responses.
//!
//! Pure functions from domain types to view models. Nothing here counts,
//! aggregates or re-judges validity: tones come from the server's verdicts
//! only, and the `Empty` placeholder is a display fallback, not a verdict.

use crate::domain::{AuditReport, AuditStatus, FieldResult, IssueSummary, RowResult};
use crate::ui::viewmodel::{
    DisplayValue, FieldCard, MiniField, PageTwoView, ReportView, RowCard, StatusBanner, SummaryView, Tone,
};

/// Page-1 keys in display order, with their labels.
pub const PAGE_ONE_FIELDS: [(&str, &str); 4] = [
    ("company_name", "Company Name"),
    ("year", "Year / Period End"),
    ("completed_by", "Completed By"),
    ("date", "Date"),
];

/// Placeholder for a missing or falsy value.
pub const EMPTY_PLACEHOLDER: &str = "Empty";

/// Placeholder shown when page 2 has no rows.
pub const NO_TABLE_DATA: &str = "No table data found on Page 2";

/// Placeholder shown when a summary has no issues.
pub const NO_ISSUES: &str = "No issues reported";

const VALID: &str = "VALID";
const INVALID: &str = "INVALID";

/// Builds the results view for a full report.
#[must_use]
pub fn present_report(document: &str, report: &AuditReport) -> ReportView {
    let page_one = PAGE_ONE_FIELDS
        .iter()
        .map(|(key, label)| {
            let field = report.page_1.fields.get(*key).cloned().unwrap_or_else(FieldResult::missing);
            field_card(label, &field)
        })
        .collect();

    let page_two = if report.page_2.rows.is_empty() {
        PageTwoView::NoData {
            message: NO_TABLE_DATA.to_string(),
        }
    } else {
        PageTwoView::Rows(report.page_2.rows.iter().map(row_card).collect())
    };

    ReportView {
        document: document.to_string(),
        banner: banner(&report.overall_status),
        page_one,
        page_two,
    }
}

/// Builds the results view for an issue summary.
#[must_use]
pub fn present_summary(document: &str, summary: &IssueSummary) -> SummaryView {
    let no_issues = summary.issues.is_empty();
    let issues = if no_issues {
        vec![NO_ISSUES.to_string()]
    } else {
        summary.issues.iter().map(crate::domain::Issue::describe).collect()
    };

    SummaryView {
        document: document.to_string(),
        banner: banner(&summary.overall_status),
        can_proceed: format!("Can proceed: {}", if summary.can_proceed { "yes" } else { "no" }),
        issues,
        no_issues,
    }
}

fn banner(status: &AuditStatus) -> StatusBanner {
    StatusBanner {
        text: status.as_str().to_string(),
        tone: Tone::from_bool(status.is_pass()),
    }
}

fn field_card(label: &str, field: &FieldResult) -> FieldCard {
    FieldCard {
        label: label.to_string(),
        value: display_value(field.value.as_deref()),
        verdict: if field.valid { VALID } else { INVALID }.to_string(),
        error: field.error.clone(),
        tone: Tone::from_bool(field.valid),
    }
}

fn row_card(row: &RowResult) -> RowCard {
    let passed = row.row_status.is_pass();
    let slots = [
        ("Name", row.fields.business_person_name.as_ref()),
        ("Criteria", row.fields.criteria_code.as_ref()),
        ("Type", row.fields.transaction_type.as_ref()),
    ];

    RowCard {
        title: format!("Row {}", row.row_number.as_deref().unwrap_or("?")),
        badge: StatusBanner {
            text: if passed { "PASS" } else { "FAIL" }.to_string(),
            tone: Tone::from_bool(passed),
        },
        fields: slots
            .into_iter()
            .map(|(label, slot)| {
                let field = crate::domain::RowFields::resolve(slot);
                MiniField {
                    label: label.to_string(),
                    value: display_value(field.value.as_deref()),
                    error: field.error,
                    tone: Tone::from_bool(field.valid),
                }
            })
            .collect(),
    }
}

fn display_value(value: Option<&str>) -> DisplayValue {
    value.map_or_else(
        || DisplayValue {
            text: EMPTY_PLACEHOLDER.to_string(),
            is_placeholder: true,
        },
        |text| DisplayValue {
            text: text.to_string(),
            is_placeholder: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(json: &str) -> AuditReport {
        AuditReport::from_slice(json.as_bytes()).unwrap()
    }

    #[test]
    fn absent_page_one_keys_get_missing_cards() {
        let view = present_report("a.pdf", &report(r#"{"overall_status":"PASS","page_1":{"fields":{}}}"#));

        assert_eq!(view.page_one.len(), 4);
        for card in &view.page_one {
            assert_eq!(card.value.text, "Empty");
            assert!(card.value.is_placeholder);
            assert_eq!(card.verdict, "INVALID");
            assert_eq!(card.error.as_deref(), Some("Missing"));
            assert_eq!(card.tone, Tone::Fail);
        }
        let labels: Vec<_> = view.page_one.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Company Name", "Year / Period End", "Completed By", "Date"]);
    }

    #[test]
    fn only_exact_pass_gets_pass_tone() {
        for (raw, tone) in [
            (r#""PASS""#, Tone::Pass),
            (r#""pass""#, Tone::Fail),
            (r#""FAILED""#, Tone::Fail),
            (r#""""#, Tone::Fail),
            (r#""ERROR""#, Tone::Fail),
            ("null", Tone::Fail),
        ] {
            let view = present_report("a.pdf", &report(&format!(r#"{{"overall_status":{raw}}}"#)));
            assert_eq!(view.banner.tone, tone, "status {raw}");
        }
    }

    #[test]
    fn unknown_status_is_shown_verbatim() {
        let view = present_report("a.pdf", &report(r#"{"overall_status":"ERROR"}"#));
        assert_eq!(view.banner.text, "ERROR");
    }

    #[test]
    fn empty_or_absent_rows_show_single_placeholder() {
        for json in [
            r#"{"overall_status":"PASS"}"#,
            r#"{"overall_status":"PASS","page_2":{}}"#,
            r#"{"overall_status":"PASS","page_2":{"rows":[]}}"#,
            r#"{"overall_status":"PASS","page_2":{"rows":null}}"#,
        ] {
            assert_eq!(
                present_report("a.pdf", &report(json)).page_two,
                PageTwoView::NoData {
                    message: NO_TABLE_DATA.to_string()
                },
                "{json}"
            );
        }
    }

    #[test]
    fn rows_keep_order_and_badge_is_exact_pass() {
        let view = present_report(
            "a.pdf",
            &report(
                r#"{"overall_status":"FAIL","page_2":{"rows":[
                    {"row_number":2,"row_status":"PASS","fields":{
                        "business_person_name":{"valid":true,"value":"Jane Roe"},
                        "criteria_code":{"valid":true,"value":"1.a"},
                        "transaction_type":{"valid":true,"value":"Lease"}}},
                    {"row_number":1,"row_status":"pass","fields":{
                        "business_person_name":{"valid":false,"value":"","error":"Required"}}}
                ]}}"#,
            ),
        );

        let PageTwoView::Rows(rows) = view.page_two else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].title, "Row 2");
        assert_eq!(rows[0].badge.text, "PASS");
        assert_eq!(rows[0].badge.tone, Tone::Pass);
        let values: Vec<_> = rows[0].fields.iter().map(|f| f.value.text.as_str()).collect();
        assert_eq!(values, ["Jane Roe", "1.a", "Lease"]);

        assert_eq!(rows[1].title, "Row 1");
        assert_eq!(rows[1].badge.text, "FAIL");
        assert_eq!(rows[1].badge.tone, Tone::Fail);
        let name = &rows[1].fields[0];
        assert_eq!(name.label, "Name");
        assert_eq!(name.value.text, "Empty");
        assert_eq!(name.error.as_deref(), Some("Required"));
        let criteria = &rows[1].fields[1];
        assert_eq!(criteria.error.as_deref(), Some("Missing"));
    }

    #[test]
    fn missing_row_number_renders_question_mark() {
        let view = present_report("a.pdf", &report(r#"{"page_2":{"rows":[{"row_status":"FAIL"}]}}"#));
        let PageTwoView::Rows(rows) = view.page_two else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].title, "Row ?");
    }

    #[test]
    fn falsy_value_shows_empty_regardless_of_validity() {
        let view = present_report(
            "a.pdf",
            &report(
                r#"{"page_1":{"fields":{
                    "company_name":{"valid":true,"value":""},
                    "year":{"valid":true,"value":0},
                    "completed_by":{"valid":true,"value":null},
                    "date":{"valid":true,"value":false}}}}"#,
            ),
        );

        for card in &view.page_one {
            assert_eq!(card.value.text, "Empty", "{}", card.label);
            assert_eq!(card.verdict, "VALID");
            assert_eq!(card.tone, Tone::Pass);
        }
    }

    #[test]
    fn null_page_one_entry_gets_missing_card() {
        let view = present_report(
            "a.pdf",
            &report(
                r#"{"overall_status":"FAIL","page_1":{"fields":{
                    "company_name":{"valid":true,"value":"Acme"},
                    "year":null,
                    "completed_by":"J. Smith"}},"page_2":{"rows":[]}}"#,
            ),
        );

        assert_eq!(view.page_one[0].value.text, "Acme");

        let year = &view.page_one[1];
        assert_eq!(year.label, "Year / Period End");
        assert_eq!(year.value.text, "Empty");
        assert_eq!(year.verdict, "INVALID");
        assert_eq!(year.error.as_deref(), Some("Missing"));

        let completed_by = &view.page_one[2];
        assert_eq!(completed_by.value.text, "Empty");
        assert_eq!(completed_by.verdict, "INVALID");
        assert!(completed_by.error.is_none());
    }

    #[test]
    fn invalid_without_error_has_no_message() {
        let view = present_report("a.pdf", &report(r#"{"page_1":{"fields":{"date":{"valid":false,"value":"31/02"}}}}"#));
        let date = &view.page_one[3];
        assert_eq!(date.verdict, "INVALID");
        assert_eq!(date.value.text, "31/02");
        assert!(date.error.is_none());
    }

    #[test]
    fn summary_lists_issues_or_placeholder() {
        let summary = IssueSummary::from_slice(
            br#"{"success":true,"overall_status":"FAIL","can_proceed":false,
                 "issues":[{"field":"Date","message":"Invalid date"},"Page 2 not found"]}"#,
        )
        .unwrap();
        let view = present_summary("a.pdf", &summary);
        assert_eq!(view.banner.tone, Tone::Fail);
        assert_eq!(view.can_proceed, "Can proceed: no");
        assert_eq!(view.issues, ["Date: Invalid date", "Page 2 not found"]);
        assert!(!view.no_issues);

        let clean = IssueSummary::from_slice(br#"{"success":true,"overall_status":"PASS","can_proceed":true,"issues":[]}"#)
            .unwrap();
        let view = present_summary("a.pdf", &clean);
        assert_eq!(view.banner.tone, Tone::Pass);
        assert_eq!(view.issues, [NO_ISSUES]);
        assert!(view.no_issues);
    }
}
