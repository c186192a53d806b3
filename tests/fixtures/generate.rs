use claims::assert_ok;
use email_fixtures::domain::{Category, Validity};
use email_fixtures::sampling::{has_hyphen_free_edges, is_dot_atom_shaped};
use email_fixtures::{FixtureGenerator, generate_test_emails};

use crate::helpers::{find, init_tracing, literal_positions, seeded};

#[test]
fn literal_cases_are_identical_between_calls() {
    init_tracing();
    let first = assert_ok!(generate_test_emails(false));
    let second = assert_ok!(generate_test_emails(false));

    assert_eq!(first.len(), second.len());
    let positions = literal_positions(&first);
    // 1, 2, 4-9, 12-14 in the 1-based listing
    assert_eq!(positions, [0, 1, 3, 4, 5, 6, 7, 8, 11, 12, 13]);
    for i in positions {
        assert_eq!(first[i], second[i], "case {} differs", i + 1);
    }
}

#[test]
fn unicode_toggle_appends_exactly_one_contextual_case() {
    init_tracing();
    let generator = FixtureGenerator::default();
    let without = assert_ok!(generator.generate_with_rng(&mut seeded(5), false));
    let with = assert_ok!(generator.generate_with_rng(&mut seeded(5), true));

    assert_eq!(with.len(), without.len() + 1);
    assert_eq!(&with[..without.len()], &without[..]);

    let unicode = with.last().expect("non-empty");
    assert_eq!(unicode.address, "пользователь@домен.рф");
    assert_eq!(unicode.category, Category::NonAscii);
    assert_eq!(unicode.validity, Validity::Contextual);
    assert!(unicode.expected_valid());
}

#[test]
fn every_case_has_a_description_and_a_category_label() {
    init_tracing();
    let cases = assert_ok!(generate_test_emails(true));
    for case in &cases {
        assert!(!case.description.trim().is_empty(), "{case:?}");
        assert_eq!(case.validity, case.category.validity());
    }
    let negatives = cases.iter().filter(|c| !c.expected_valid()).count();
    assert_eq!(negatives, 11);
}

#[test]
fn literal_addresses_match_the_table() {
    init_tracing();
    let cases = assert_ok!(generate_test_emails(false));
    let expected = [
        (Category::Minimal, "a@a.ru"),
        (
            Category::TypicalWithSubdomainAndTag,
            "user.example+tag@subdomain.domain.com",
        ),
        (Category::MissingSeparator, "user.example.com"),
        (Category::MultipleSeparators, "user@domain@com"),
        (Category::LeadingDotInLocalPart, ".user@domain.com"),
        (Category::TrailingDotInLocalPart, "user.@domain.com"),
        (Category::ConsecutiveDotsInLocalPart, "user..name@domain.com"),
        (Category::LeadingHyphenInDomainLabel, "user@-domain.com"),
        (Category::Empty, ""),
        (Category::SurroundingWhitespace, " user@domain.com "),
        (Category::DisallowedDomainCharacter, "user@domain/com"),
    ];
    for (category, address) in expected {
        assert_eq!(find(&cases, category).address, address, "{category:?}");
    }
}

#[test]
fn randomized_cases_hold_their_boundaries_across_many_seeds() {
    init_tracing();
    let generator = FixtureGenerator::default();
    for seed in 0..200 {
        let cases = assert_ok!(generator.generate_with_rng(&mut seeded(seed), false));

        let max = find(&cases, Category::MaximumLength);
        let local = max.local_part().expect("separator");
        assert_eq!(local.len(), 64);
        assert!(is_dot_atom_shaped(local));
        assert!(max.address.len() <= 254);
        assert!(
            max.domain()
                .expect("separator")
                .split('.')
                .all(|label| label.len() <= 63 && has_hyphen_free_edges(label))
        );

        let long_local = find(&cases, Category::LocalPartTooLong);
        assert_eq!(long_local.local_part().map(str::len), Some(65));

        let long_label = find(&cases, Category::DomainLabelTooLong);
        let label = long_label
            .address
            .strip_prefix("user@")
            .and_then(|rest| rest.strip_suffix(".com"))
            .expect("user@<label>.com");
        assert_eq!(label.len(), 64);
        assert!(has_hyphen_free_edges(label));
    }
}

#[test]
fn unseeded_calls_vary_the_random_cases() {
    init_tracing();
    // Two 64-character draws colliding is practically impossible.
    let first = assert_ok!(generate_test_emails(false));
    let second = assert_ok!(generate_test_emails(false));
    assert_ne!(
        find(&first, Category::LocalPartTooLong).address,
        find(&second, Category::LocalPartTooLong).address
    );
}
