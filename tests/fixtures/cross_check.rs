use claims::assert_ok;
use email_fixtures::FixtureGenerator;
use email_fixtures::cross_check::{cross_check, summarize};
use email_fixtures::domain::Validity;

use crate::helpers::{init_tracing, seeded};

#[test]
fn cross_check_keeps_order_and_declared_labels() {
    init_tracing();
    let cases = assert_ok!(FixtureGenerator::default().generate_with_rng(&mut seeded(2), true));
    let verdicts = cross_check(&cases);

    assert_eq!(verdicts.len(), cases.len());
    for (i, (verdict, case)) in verdicts.iter().zip(&cases).enumerate() {
        assert_eq!(verdict.index, i + 1);
        assert_eq!(verdict.address, case.address);
        assert_eq!(verdict.declared, case.validity);
    }
    let unicode = verdicts.last().expect("non-empty");
    assert_eq!(unicode.declared, Validity::Contextual);
    assert!(unicode.agrees());
}

#[test]
fn summary_counts_agreements() {
    init_tracing();
    let cases = assert_ok!(FixtureGenerator::default().generate_with_rng(&mut seeded(2), false));
    let verdicts = cross_check(&cases);
    let agreeing = verdicts.iter().filter(|v| v.agrees()).count();
    assert_eq!(
        summarize(&verdicts),
        format!("{agreeing}/14 fixtures agree with the reference validator")
    );
}
