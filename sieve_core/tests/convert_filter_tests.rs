//! Tests for converting between equations and persisted filters

use sieve_core::{
    EquationStatus, Filter, Label, Nature, Token, TokenEquation, ValueType, equations_to_filters,
    filter_to_equation, verify_equations,
};

fn typed_round_trip(filter: &Filter, value_type: ValueType) -> Vec<Filter> {
    let mut equation = filter_to_equation(filter).unwrap();
    for token in &mut equation.items {
        token.value_type = value_type;
    }
    let verified = verify_equations(&[equation]);
    equations_to_filters(&verified)
}

#[test]
fn test_round_trip_single_value_operators() {
    let filters = [
        (Filter::single("Status", "eq", "Running"), ValueType::String),
        (Filter::single("Site", "neq", "LCG.CERN.ch"), ValueType::String),
        (Filter::single("Owner", "like", "ali"), ValueType::String),
        (Filter::single("UserPriority", "gt", "3"), ValueType::Number),
        (Filter::single("SubmissionTime", "lt", "2024-01-01T00:00:00"), ValueType::Date),
        (Filter::single("SubmissionTime", "last", "3 days"), ValueType::Date),
        (Filter::single("Rescheduled", "eq", "true"), ValueType::Boolean),
    ];

    for (filter, value_type) in filters {
        let back = typed_round_trip(&filter, value_type);
        assert_eq!(back, vec![filter.clone()], "round trip of {:?}", filter);
        assert_eq!(back[0].values, None);
    }
}

#[test]
fn test_round_trip_placeholder_types() {
    let filter = Filter::single("Status", "eq", "Running");
    let equation = filter_to_equation(&filter).unwrap();
    assert_eq!(equations_to_filters(&[equation]), vec![filter]);
}

#[test]
fn test_set_operator_produces_values() {
    let filter = Filter::multi(
        "Status",
        "in",
        vec!["Running".to_string(), "Completed".to_string()],
    );
    let equation = filter_to_equation(&filter).unwrap();
    assert_eq!(
        equation.items[2].label,
        Label::Multi(vec!["Running".to_string(), "Completed".to_string()])
    );

    let back = equations_to_filters(&[equation]);
    assert_eq!(back, vec![filter]);
    assert_eq!(back[0].value, None);
}

#[test]
fn test_filters_follow_equation_order() {
    let keyword = TokenEquation::starting_with(Token::custom("needle", ValueType::Custom));
    let site = filter_to_equation(&Filter::single("Site", "eq", "ANY")).unwrap();
    let status = filter_to_equation(&Filter::single("Status", "neq", "Done")).unwrap();
    let waiting = TokenEquation::new(
        vec![Token::category("Owner", ValueType::String)],
        EquationStatus::Waiting,
    );

    let filters = equations_to_filters(&[site, keyword, status, waiting]);
    let parameters: Vec<&str> = filters.iter().map(|f| f.parameter.as_str()).collect();
    assert_eq!(parameters, vec!["Site", "Status"]);
}

#[test]
fn test_filter_json_round_trip_through_equations() {
    let json = r#"[
        {"parameter":"Status","operator":"not in","values":["Done","Failed"]},
        {"parameter":"JobID","operator":"eq","value":"42"}
    ]"#;
    let filters: Vec<Filter> = serde_json::from_str(json).unwrap();

    let equations: Vec<TokenEquation> = filters
        .iter()
        .map(|f| filter_to_equation(f).unwrap())
        .collect();
    assert!(equations
        .iter()
        .all(|eq| eq.items[0].nature == Nature::Category));

    assert_eq!(equations_to_filters(&equations), filters);
}
