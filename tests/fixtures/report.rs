use claims::assert_ok;
use email_fixtures::FixtureGenerator;
use email_fixtures::report::{render_json, render_text};

use crate::helpers::{init_tracing, seeded};

#[test]
fn text_listing_has_one_paragraph_per_case() {
    init_tracing();
    let cases = assert_ok!(FixtureGenerator::default().generate_with_rng(&mut seeded(9), true));
    let text = render_text(&cases);

    let paragraphs: Vec<_> = text.trim_end().split("\n\n").collect();
    assert_eq!(paragraphs.len(), cases.len());
    assert!(paragraphs[0].starts_with("1. a@a.ru\n   "));
    assert!(paragraphs[0].ends_with("(Valid)"));
    assert!(paragraphs[3].starts_with("4. user.example.com\n"));
    assert!(paragraphs[3].ends_with("(Invalid)"));
    assert!(paragraphs[14].starts_with("15. пользователь@домен.рф\n"));
    assert!(paragraphs[14].ends_with("(Contextual)"));
}

#[test]
fn json_round_trips_the_addresses() {
    init_tracing();
    let cases = assert_ok!(FixtureGenerator::default().generate_with_rng(&mut seeded(9), false));
    let json = assert_ok!(render_json(&cases));
    let value: serde_json::Value = assert_ok!(serde_json::from_str(&json));

    let addresses: Vec<_> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry["address"].as_str().expect("address").to_string())
        .collect();
    let expected: Vec<_> = cases.iter().map(|c| c.address.clone()).collect();
    assert_eq!(addresses, expected);
}
