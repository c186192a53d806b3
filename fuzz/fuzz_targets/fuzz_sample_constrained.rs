// Run with: cargo fuzz run fuzz_sample_constrained
// Arbitrary alphabets (including empty and non-ASCII) must never panic,
// and small retry budgets must end in an error rather than a hang.
#![no_main]

use arbitrary::Arbitrary;
use email_fixtures::sampling::{RetryPolicy, SamplingError, has_hyphen_free_edges, sample_constrained};
use libfuzzer_sys::fuzz_target;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Arbitrary, Debug)]
struct Input {
    seed: u64,
    alphabet: String,
    length: u8,
    max_attempts: u8,
}

fuzz_target!(|input: Input| {
    let mut rng = StdRng::seed_from_u64(input.seed);
    let length = usize::from(input.length);
    let policy = RetryPolicy::new(u32::from(input.max_attempts));

    match sample_constrained(&mut rng, &input.alphabet, length, has_hyphen_free_edges, policy) {
        Ok(s) => {
            assert_eq!(s.chars().count(), length);
            assert!(has_hyphen_free_edges(&s));
            assert!(s.chars().all(|c| input.alphabet.contains(c)));
        }
        Err(SamplingError::EmptyAlphabet { .. }) => assert!(input.alphabet.is_empty()),
        Err(SamplingError::Exhausted { attempts, .. }) => {
            assert_eq!(attempts, u32::from(input.max_attempts))
        }
    }
});
