//! Checks on the tables shipped with the crate.

use survey_standards::{OTHER_CURRENCY, default_standards};

#[test]
fn embedded_tables_load() {
    let standards = default_standards().expect("embedded standards");
    assert_eq!(standards.currency_aliases.len(), 5);
    assert!(standards.other_currency_aliases.len() > 50);
    assert!(standards.country_aliases.len() > 40);
    assert_eq!(standards.rates.len(), 20);
}

#[test]
fn currency_variants_resolve() {
    let standards = default_standards().expect("embedded standards");
    assert_eq!(standards.currency_aliases.get("US"), Some("USD"));
    assert_eq!(standards.currency_aliases.get("Pounds"), Some("GBP"));
    assert_eq!(standards.other_currency_aliases.get("RMB"), Some("CNY"));
    assert_eq!(standards.other_currency_aliases.get("Polish Złoty"), Some("PLN"));
    assert_eq!(standards.other_currency_aliases.get("equity"), Some(""));
}

#[test]
fn country_variants_resolve() {
    let standards = default_standards().expect("embedded standards");
    for variant in ["us", "U.S.", " united states ", "Unites States"] {
        assert_eq!(
            standards.country_aliases.get(variant),
            Some("United States"),
            "{variant}"
        );
    }
    assert_eq!(
        standards.country_aliases.get("Scotland"),
        Some("United Kingdom")
    );
}

#[test]
fn every_rate_is_positive() {
    let standards = default_standards().expect("embedded standards");
    for code in standards.rates.codes() {
        let rate = standards.rates.currency_rate(code).expect("listed code");
        assert!(rate > 0.0, "{code}");
    }
    assert_eq!(standards.rates.currency_rate("USD"), Some(1.0));
    assert_eq!(
        standards.rates.rate(Some(OTHER_CURRENCY), Some("Tanzania")),
        0.00043
    );
}
