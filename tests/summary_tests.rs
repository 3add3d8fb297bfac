use chrono::{DateTime, Utc};
use rcheckin::core::logic::Core;
use rcheckin::core::summary::{count_not_checked_in, count_present, group_present_by_company};
use rcheckin::models::attendee::Attendee;

fn ms(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

/// Roster row shorthand: company plus the two optional stamps.
fn att(
    id: &str,
    company: Option<&str>,
    check_in: Option<i64>,
    check_out: Option<i64>,
) -> Attendee {
    Attendee {
        id: id.to_string(),
        community_id: "tech-conference".to_string(),
        first_name: "Person".to_string(),
        last_name: id.to_string(),
        company_name: company.map(str::to_string),
        title: company.map(|_| "Staff".to_string()),
        check_in: check_in.map(ms),
        check_out: check_out.map(ms),
    }
}

#[test]
fn empty_roster_yields_zero_counts_and_none_group() {
    let empty: Vec<Attendee> = Vec::new();
    assert_eq!(count_present(&empty), 0);
    assert_eq!(count_not_checked_in(&empty), 0);
    assert_eq!(group_present_by_company(&empty), vec!["none".to_string()]);
}

#[test]
fn present_requires_checkin_without_checkout() {
    let roster = vec![
        att("in", Some("Acme"), Some(1_000), None),
        att("out", Some("Acme"), Some(1_000), Some(2_000)),
        att("missing", Some("Acme"), None, None),
    ];
    assert_eq!(count_present(&roster), 1);
    assert_eq!(count_not_checked_in(&roster), 1);
}

#[test]
fn states_partition_the_roster() {
    let roster = vec![
        att("a", Some("Acme"), Some(1_000), None),
        att("b", None, None, None),
        att("c", Some("Globex"), Some(1_000), Some(5_000)),
        att("d", Some("Initech"), Some(2_000), None),
        att("e", None, Some(3_000), Some(4_000)),
    ];

    let departed = roster
        .iter()
        .filter(|a| a.check_in.is_some() && a.check_out.is_some())
        .count();

    assert_eq!(
        count_present(&roster) + count_not_checked_in(&roster) + departed,
        roster.len()
    );
}

#[test]
fn grouping_skips_attendees_without_company() {
    let roster = vec![
        att("a", None, Some(1_000), None),
        att("b", Some("Acme"), Some(1_000), None),
    ];
    assert_eq!(group_present_by_company(&roster), vec!["Acme (1)".to_string()]);
}

#[test]
fn grouping_orders_by_first_occurrence() {
    let roster = vec![
        att("a", Some("B"), Some(1_000), None),
        att("b", Some("A"), Some(1_000), None),
        att("c", Some("B"), Some(1_000), None),
    ];
    assert_eq!(
        group_present_by_company(&roster),
        vec!["B (2)".to_string(), "A (1)".to_string()]
    );
}

#[test]
fn grouping_matches_company_names_exactly() {
    // "Labs" is a substring of "Acme Labs"; the groups must not merge
    let roster = vec![
        att("a", Some("Labs"), Some(1_000), None),
        att("b", Some("Acme Labs"), Some(1_000), None),
    ];
    assert_eq!(
        group_present_by_company(&roster),
        vec!["Labs (1)".to_string(), "Acme Labs (1)".to_string()]
    );
}

#[test]
fn grouping_is_case_sensitive_and_untrimmed() {
    let roster = vec![
        att("a", Some("acme"), Some(1_000), None),
        att("b", Some("Acme"), Some(1_000), None),
        att("c", Some("Acme "), Some(1_000), None),
    ];
    assert_eq!(
        group_present_by_company(&roster),
        vec![
            "acme (1)".to_string(),
            "Acme (1)".to_string(),
            "Acme  (1)".to_string()
        ]
    );
}

#[test]
fn departed_attendees_do_not_count_toward_their_company() {
    let roster = vec![
        att("a", Some("Acme"), Some(1_000), Some(2_000)),
        att("b", Some("Acme"), Some(1_000), None),
    ];
    assert_eq!(group_present_by_company(&roster), vec!["Acme (1)".to_string()]);
}

#[test]
fn group_of_present_without_company_is_none() {
    let roster = vec![att("a", None, Some(1_000), None)];
    assert_eq!(group_present_by_company(&roster), vec!["none".to_string()]);
}

#[test]
fn mixed_roster_scenario() {
    // present w/ company, not arrived w/ company, departed w/o company
    let roster = vec![
        att("a", Some("Acme"), Some(1_000), None),
        att("b", Some("Acme"), None, None),
        att("c", None, Some(2_000), Some(3_000)),
    ];

    assert_eq!(count_present(&roster), 1);
    assert_eq!(count_not_checked_in(&roster), 1);
    assert_eq!(group_present_by_company(&roster), vec!["Acme (1)".to_string()]);
}

#[test]
fn roster_summary_bundles_the_three_aggregates() {
    let roster = vec![
        att("a", Some("Acme"), Some(1_000), None),
        att("b", Some("Acme"), None, None),
        att("c", None, Some(2_000), Some(3_000)),
    ];

    let summary = Core::build_roster_summary(&roster);
    assert_eq!(summary.present, 1);
    assert_eq!(summary.not_checked_in, 1);
    assert_eq!(summary.by_company, vec!["Acme (1)".to_string()]);
}
