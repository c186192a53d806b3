// Run with: cargo fuzz run fuzz_generate_seeded
// Checks the boundary cases keep their shape for any seed.
#![no_main]

use arbitrary::Arbitrary;
use email_fixtures::FixtureGenerator;
use email_fixtures::domain::Category;
use libfuzzer_sys::fuzz_target;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Arbitrary, Debug)]
struct Input {
    seed: u64,
    include_unicode: bool,
}

fuzz_target!(|input: Input| {
    let mut rng = StdRng::seed_from_u64(input.seed);
    let Ok(cases) = FixtureGenerator::default().generate_with_rng(&mut rng, input.include_unicode)
    else {
        panic!("default retry policy exhausted for seed {}", input.seed);
    };

    assert_eq!(cases.len(), 14 + usize::from(input.include_unicode));
    for case in &cases {
        match case.category {
            Category::MaximumLength => {
                assert_eq!(case.local_part().map(str::len), Some(64));
                assert!(case.address.len() <= 254);
            }
            Category::LocalPartTooLong => assert_eq!(case.local_part().map(str::len), Some(65)),
            Category::DomainLabelTooLong => assert_eq!(case.address.len(), "user@.com".len() + 64),
            _ => assert_eq!(Some(case.address.as_str()), case.category.literal()),
        }
    }
});
