use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// One funding opportunity, assembled field by field from a single page.
/// Every extracted field is optional: extraction misses narrow the populated
/// set instead of failing. Several fields exist only in the output schema and
/// are never populated by extraction; they still appear in the row header.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Opportunity {
    pub opportunity_id: Option<String>,
    pub opportunity_number: Option<String>,
    pub opportunity_title: Option<String>,
    pub opportunity_status: Option<String>,
    pub agency_code: Option<String>,
    pub category: Option<String>,
    pub category_explanation: Option<String>,
    pub post_date: Option<String>,
    pub close_date: Option<String>,
    pub close_date_description: Option<String>,
    pub archive_date: Option<String>,
    pub is_cost_sharing: Option<bool>,
    pub expected_number_of_awards: Option<i64>,
    pub estimated_total_program_funding: Option<i64>,
    pub award_floor: Option<i64>,
    pub award_ceiling: Option<i64>,
    pub additional_info_url: Option<String>,
    pub additional_info_url_description: Option<String>,
    pub opportunity_assistance_listings: Option<Vec<String>>,
    pub funding_instruments: Option<Vec<String>>,
    pub funding_categories: Option<Vec<String>>,
    pub funding_category_description: Option<String>,
    pub applicant_types: Option<Vec<String>>,
    pub applicant_eligibility_description: Option<String>,
    pub agency_name: Option<String>,
    pub top_level_agency_name: Option<String>,
    pub agency_contact_description: Option<String>,
    pub agency_email_address: Option<String>,
    pub agency_email_address_description: Option<String>,
    pub is_forecast: Option<bool>,
    pub forecasted_post_date: Option<String>,
    pub forecasted_close_date: Option<String>,
    pub forecasted_close_date_description: Option<String>,
    pub forecasted_award_date: Option<String>,
    pub forecasted_project_start_date: Option<String>,
    pub fiscal_year: Option<i32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub summary_description: Option<String>,
    pub tags: Vec<String>,
}

/// Fixed column order for row-oriented output. Every defined field appears,
/// populated or not.
pub const FIELD_ORDER: &[&str] = &[
    "opportunity_id",
    "opportunity_number",
    "opportunity_title",
    "opportunity_status",
    "agency_code",
    "category",
    "category_explanation",
    "post_date",
    "close_date",
    "close_date_description",
    "archive_date",
    "is_cost_sharing",
    "expected_number_of_awards",
    "estimated_total_program_funding",
    "award_floor",
    "award_ceiling",
    "additional_info_url",
    "additional_info_url_description",
    "opportunity_assistance_listings",
    "funding_instruments",
    "funding_categories",
    "funding_category_description",
    "applicant_types",
    "applicant_eligibility_description",
    "agency_name",
    "top_level_agency_name",
    "agency_contact_description",
    "agency_email_address",
    "agency_email_address_description",
    "is_forecast",
    "forecasted_post_date",
    "forecasted_close_date",
    "forecasted_close_date_description",
    "forecasted_award_date",
    "forecasted_project_start_date",
    "fiscal_year",
    "created_at",
    "updated_at",
    "summary_description",
    "tags",
];

impl Opportunity {
    /// Fresh record with identifiers and creation timestamps. Both timestamps
    /// come from the same instant.
    pub fn new(opportunity_id: Option<String>, opportunity_title: Option<String>) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        Opportunity {
            opportunity_id,
            opportunity_title,
            created_at: Some(now.clone()),
            updated_at: Some(now),
            ..Default::default()
        }
    }

    /// Serialized record with absent, empty-string, and empty-list fields
    /// removed. Idempotent: pruning a pruned record changes nothing.
    pub fn to_pruned_map(&self) -> Map<String, Value> {
        let Ok(Value::Object(map)) = serde_json::to_value(self) else {
            return Map::new();
        };
        map.into_iter().filter(|(_, v)| !is_empty_value(v)).collect()
    }

    /// Row cells in `FIELD_ORDER`. Absent fields are empty cells; list fields
    /// collapse to a `|`-joined string (one-way).
    pub fn to_csv_row(&self) -> Vec<String> {
        let map = self.to_pruned_map();
        FIELD_ORDER
            .iter()
            .map(|field| match map.get(*field) {
                None => String::new(),
                Some(Value::Array(items)) => items
                    .iter()
                    .map(value_to_cell)
                    .collect::<Vec<_>>()
                    .join("|"),
                Some(value) => value_to_cell(value),
            })
            .collect()
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
