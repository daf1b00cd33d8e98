//! Report builders for the Cryptorank `/v2/funds` resource family.
//!
//! Each operation is a declarative list of (title, field mapping,
//! response subpath) carved out of one decoded response body. The
//! builders are pure: hand them a `serde_json::Value` and they return the
//! finished report text, with missing fields degrading to `N/A` and empty
//! sub-collections degrading to omitted sections.

use serde_json::Value;

use crate::project::Column;
use crate::record::{
    extract,
    FieldPath::{First, Join, Key},
    FALLBACK,
};
use crate::report::{compose, Section};

/// Full fund columns, shared by the search table and the basic
/// Field/Value view.
const FUND_COLUMNS: &[Column] = &[
    Column::new("ID", Key("id")),
    Column::new("Key", Key("key")),
    Column::new("Name", Key("name")),
    Column::new("Tier", Key("tier")),
    Column::new("Type", Key("type")),
    Column::new("Jurisdiction", Key("jurisdiction")),
    Column::new("Portfolio", Key("portfolio")),
    Column::new("Funding Rounds", Key("fundingRounds")),
    Column::new("Retail ROI", Key("retailRoi")),
    Column::new("Lead Investments", Key("leadInvestments")),
];

/// Abbreviated columns for the full fund map.
const MAP_COLUMNS: &[Column] = &[
    Column::new("ID", Key("id")),
    Column::new("Name", Key("name")),
    Column::new("Tier", Key("tier")),
    Column::new("Type", Key("type")),
];

/// Full-metadata Field/Value view; the basic set plus a description.
const DETAIL_FIELDS: &[Column] = &[
    Column::new("ID", Key("id")),
    Column::new("Key", Key("key")),
    Column::new("Name", Key("name")),
    Column::new("Tier", Key("tier")),
    Column::new("Type", Key("type")),
    Column::new("Jurisdiction", Key("jurisdiction")),
    Column::new("Description", Key("description")),
    Column::new("Portfolio", Key("portfolio")),
    Column::new("Funding Rounds", Key("fundingRounds")),
    Column::new("Retail ROI", Key("retailRoi")),
    Column::new("Lead Investments", Key("leadInvestments")),
];

const FOCUS_COLUMNS: &[Column] = &[
    Column::new("ID", Key("id")),
    Column::new("Name", Key("name")),
    Column::new("Percent", Key("percent")),
];

const INVESTMENT_COLUMNS: &[Column] = &[
    Column::new("ID", Key("id")),
    Column::new("Symbol", Key("symbol")),
    Column::new("Name", Key("name")),
    Column::new("Logo", Key("logo")),
];

const LINK_COLUMNS: &[Column] = &[
    Column::new("Type", Key("type")),
    Column::new("Value", Key("value")),
];

const LOCATION_COLUMNS: &[Column] = &[
    Column::new("Code", Key("code")),
    Column::new("Count", Key("count")),
];

const ROUND_COLUMNS: &[Column] = &[
    Column::new("ID", Key("id")),
    Column::new("Name", Key("name")),
    Column::new("Logo", Key("logo")),
    Column::new("Raise", Key("raise")),
    Column::new("Date", Key("date")),
];

const AVG_RAISE_COLUMNS: &[Column] = &[
    Column::new("Raise From", Key("raiseFrom")),
    Column::new("Raise To", Key("raiseTo")),
    Column::new("Percent", Key("percent")),
];

/// Each stage's `type` is itself a list; only its first element is shown.
const STAGE_COLUMNS: &[Column] = &[
    Column::new("Type", First("type")),
    Column::new("Percent", Key("percent")),
];

const TEAM_COLUMNS: &[Column] = &[
    Column::new("ID", Key("id")),
    Column::new("Name", Key("name")),
    Column::new("Jobs", Join("jobs")),
    Column::new("Priority", Key("priority")),
];

/// A list-valued key of a record, or an empty slice when absent or not a
/// list.
fn list<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The `data` list every list-shaped response wraps its payload in.
fn data_records(body: &Value) -> &[Value] {
    list(body, "data")
}

/// Report for `GET /funds`: one flat table of funds matching the filters.
pub fn search_report(body: &Value) -> String {
    compose(
        &[Section::from_records("Funds", data_records(body), FUND_COLUMNS)],
        "No funds data available for the specified filters.",
    )
}

/// Report for `GET /funds/map`: the complete fund list with abbreviated
/// columns.
pub fn map_report(body: &Value) -> String {
    compose(
        &[Section::from_records("Funds", data_records(body), MAP_COLUMNS)],
        "No funds data available.",
    )
}

/// Report for `GET /funds/{id}`: main metrics, focus areas, and top
/// investments. The response wraps the single fund in a one-element
/// `data` list.
pub fn basic_report(body: &Value, fund_id: u64) -> String {
    let no_data = format!("No data available for fund ID {fund_id}.");

    let Some(fund) = data_records(body).first() else {
        return no_data;
    };

    let sections = [
        Section::from_record_fields("Fund Metrics", fund, FUND_COLUMNS),
        Section::from_records("Focus Areas", list(fund, "focusArea"), FOCUS_COLUMNS),
        Section::from_records(
            "Top Investments (Last 12 Months)",
            list(fund, "topInvestments"),
            INVESTMENT_COLUMNS,
        ),
    ];

    compose(&sections, &no_data)
}

/// Report for `GET /funds/{id}/full-metadata`: the comprehensive view.
/// Here `data` is a single object rather than a list.
pub fn detail_report(body: &Value, fund_id: u64) -> String {
    let no_data = format!("No data available for fund ID {fund_id}.");

    let fund = body
        .get("data")
        .filter(|f| f.as_object().is_some_and(|m| !m.is_empty()));
    let Some(fund) = fund else {
        return no_data;
    };

    let sections = [
        Section::from_record_fields("Comprehensive Fund Data", fund, DETAIL_FIELDS),
        Section::from_records("Links", list(fund, "links"), LINK_COLUMNS),
        Section::from_records("Focus Areas", list(fund, "focusArea"), FOCUS_COLUMNS),
        Section::from_records(
            "Top Investments (Recent)",
            list(fund, "topInvestments"),
            INVESTMENT_COLUMNS,
        ),
        Section::from_records(
            "Funding Locations",
            list(fund, "fundingLocations"),
            LOCATION_COLUMNS,
        ),
        Section::from_records(
            "Recent Funding Rounds",
            list(fund, "recentRounds"),
            ROUND_COLUMNS,
        ),
        Section::from_records(
            "Average Rounds Raise",
            list(fund, "avgRoundsRaise"),
            AVG_RAISE_COLUMNS,
        ),
        Section::from_records(
            "Investment Stages",
            list(fund, "investmentStages"),
            STAGE_COLUMNS,
        ),
    ];

    compose(&sections, &no_data)
}

/// Report for `GET /funds/{id}/team`: the roster plus one flattened row
/// per (member, link) pair.
pub fn team_report(body: &Value, fund_id: u64) -> String {
    let no_data = format!("No team data available for fund ID {fund_id}.");

    let members = data_records(body);
    if members.is_empty() {
        return no_data;
    }

    let roster = Section::from_records("Fund Team Details", members, TEAM_COLUMNS);

    // Members with no links contribute no rows; each emitted row carries
    // its member's name.
    let link_rows = members
        .iter()
        .flat_map(|member| {
            let name = extract(member, Key("name"), FALLBACK);
            list(member, "links").iter().map(move |link| {
                vec![
                    name.clone(),
                    extract(link, Key("type"), FALLBACK),
                    extract(link, Key("value"), FALLBACK),
                ]
            })
        })
        .collect();

    let links = Section::from_rows(
        "Team Social Links",
        &["Member Name", "Link Type", "Link Value"],
        link_rows,
    );

    compose(&[roster, links], &no_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fund_record() -> Value {
        json!({
            "id": 10,
            "key": "paradigm",
            "name": "Paradigm",
            "tier": 1,
            "type": "Venture",
            "jurisdiction": "US",
            "portfolio": 120,
            "fundingRounds": 45,
            "retailRoi": 3.2,
            "leadInvestments": 30
        })
    }

    #[test]
    fn test_search_report_lists_funds() {
        let body = json!({"data": [fund_record(), {"id": 11, "name": "a16z"}]});

        let text = search_report(&body);

        assert!(text.starts_with("Funds:\n"));
        assert!(text.contains("Paradigm"));
        assert!(text.contains("a16z"));
        assert!(text.contains("Funding Rounds"));
        // The sparse second fund degrades to fallbacks, not errors.
        assert!(text.contains("N/A"));
    }

    #[test]
    fn test_search_report_empty_data_literal() {
        let body = json!({"data": []});

        assert_eq!(
            search_report(&body),
            "No funds data available for the specified filters."
        );
    }

    #[test]
    fn test_search_report_missing_data_key() {
        assert_eq!(
            search_report(&json!({})),
            "No funds data available for the specified filters."
        );
    }

    #[test]
    fn test_map_report_abbreviated_columns() {
        let body = json!({"data": [fund_record()]});

        let text = map_report(&body);

        assert!(text.contains("Name"));
        assert!(text.contains("Tier"));
        assert!(!text.contains("Jurisdiction"));
        assert!(!text.contains("Portfolio"));
    }

    #[test]
    fn test_map_report_empty_literal() {
        assert_eq!(map_report(&json!({"data": []})), "No funds data available.");
    }

    #[test]
    fn test_basic_report_all_sections() {
        let mut fund = fund_record();
        fund["focusArea"] = json!([{"id": 1, "name": "DeFi", "percent": 60}]);
        fund["topInvestments"] =
            json!([{"id": 5, "symbol": "UNI", "name": "Uniswap", "logo": "uni.png"}]);
        let body = json!({"data": [fund]});

        let text = basic_report(&body, 10);

        assert!(text.starts_with("Fund Metrics:\n"));
        assert!(text.contains("Focus Areas:"));
        assert!(text.contains("Top Investments (Last 12 Months):"));
        assert!(text.contains("DeFi"));
        assert!(text.contains("Uniswap"));
    }

    #[test]
    fn test_basic_report_empty_focus_area_omits_section() {
        let mut fund = fund_record();
        fund["focusArea"] = json!([]);
        let body = json!({"data": [fund]});

        let text = basic_report(&body, 10);

        assert!(text.contains("Fund Metrics:"));
        assert!(!text.contains("Focus Areas:"));
        assert!(!text.contains("Top Investments"));
    }

    #[test]
    fn test_basic_report_no_data() {
        assert_eq!(
            basic_report(&json!({"data": []}), 42),
            "No data available for fund ID 42."
        );
    }

    #[test]
    fn test_detail_report_sections_in_declared_order() {
        let body = json!({"data": {
            "id": 10,
            "name": "Paradigm",
            "description": "Crypto investment firm",
            "links": [{"type": "web", "value": "https://paradigm.xyz"}],
            "focusArea": [{"id": 1, "name": "DeFi", "percent": 60}],
            "fundingLocations": [{"code": "US", "count": 80}],
            "recentRounds": [{"id": 3, "name": "OpenSea", "raise": 300, "date": "2022-01-04"}],
            "avgRoundsRaise": [{"raiseFrom": 1, "raiseTo": 5, "percent": 40}],
            "investmentStages": [{"type": ["Seed"], "percent": 55}]
        }});

        let text = detail_report(&body, 10);

        let order = [
            "Comprehensive Fund Data:",
            "Links:",
            "Focus Areas:",
            "Funding Locations:",
            "Recent Funding Rounds:",
            "Average Rounds Raise:",
            "Investment Stages:",
        ];
        let mut last = 0;
        for title in order {
            let at = text.find(title).unwrap_or_else(|| panic!("missing {title}"));
            assert!(at >= last, "{title} out of order");
            last = at;
        }
        // No top investments in the fixture, so no section header for it.
        assert!(!text.contains("Top Investments (Recent):"));
        assert!(text.contains("Description"));
        assert!(text.contains("Seed"));
    }

    #[test]
    fn test_detail_report_empty_stage_type_falls_back() {
        let body = json!({"data": {
            "id": 10,
            "name": "Paradigm",
            "investmentStages": [{"type": [], "percent": 55}]
        }});

        let text = detail_report(&body, 10);

        assert!(text.contains("Investment Stages:"));
        let stage_table = &text[text.find("Investment Stages:").unwrap()..];
        assert!(stage_table.contains("N/A"));
        assert!(stage_table.contains("55"));
    }

    #[test]
    fn test_detail_report_empty_object_is_no_data() {
        assert_eq!(
            detail_report(&json!({"data": {}}), 7),
            "No data available for fund ID 7."
        );
        assert_eq!(
            detail_report(&json!({}), 7),
            "No data available for fund ID 7."
        );
    }

    #[test]
    fn test_team_report_roster_and_joined_jobs() {
        let body = json!({"data": [
            {"id": 1, "name": "Alice", "jobs": ["Partner", "Founder"], "priority": 1}
        ]});

        let text = team_report(&body, 10);

        assert!(text.starts_with("Fund Team Details:\n"));
        assert!(text.contains("Partner, Founder"));
        assert!(!text.contains("Team Social Links:"));
    }

    #[test]
    fn test_team_report_flattens_member_links() {
        let body = json!({"data": [
            {"id": 1, "name": "Alice", "jobs": ["Partner"], "priority": 1,
             "links": [
                {"type": "twitter", "value": "https://x.com/alice"},
                {"type": "linkedin", "value": "https://linkedin.com/in/alice"}
             ]},
            {"id": 2, "name": "Bob", "jobs": ["Analyst"], "priority": 2}
        ]});

        let text = team_report(&body, 10);

        assert!(text.contains("Team Social Links:"));
        let links_table = &text[text.find("Team Social Links:").unwrap()..];
        // Two links for Alice, none for Bob: exactly two flattened rows.
        assert_eq!(links_table.matches("Alice").count(), 2);
        assert!(!links_table.contains("Bob"));
        assert!(links_table.contains("twitter"));
        assert!(links_table.contains("linkedin"));
    }

    #[test]
    fn test_team_report_no_data() {
        assert_eq!(
            team_report(&json!({"data": []}), 9),
            "No team data available for fund ID 9."
        );
    }

    #[test]
    fn test_reports_are_idempotent() {
        let body = json!({"data": [fund_record()]});

        assert_eq!(search_report(&body), search_report(&body));
        assert_eq!(basic_report(&body, 10), basic_report(&body, 10));
    }
}
