use std::fmt::{self, Debug, Formatter};

use rand::Rng;

use crate::domain::{Category, TestCase};
use crate::sampling::{
    self, DOMAIN_LABEL_ALPHABET, LOCAL_PART_ALPHABET, RetryPolicy, SamplingError,
};
use crate::utils;

pub const MAX_LOCAL_PART_LEN: usize = 64;
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_ADDRESS_LEN: usize = 254;

#[derive(thiserror::Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("failed to generate the {category:?} case")]
    Exhausted {
        category: Category,
        #[source]
        source: SamplingError,
    },
}

impl Debug for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// Builds the ordered fixture list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGenerator {
    policy: RetryPolicy,
}

impl FixtureGenerator {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Generates the fixtures with the thread-local RNG.
    pub fn generate(&self, include_unicode: bool) -> Result<Vec<TestCase>, GenerationError> {
        self.generate_with_rng(&mut rand::thread_rng(), include_unicode)
    }

    /// Generates the fixtures with a caller-supplied RNG. Seed it for reproducible output.
    #[tracing::instrument(name = "Generating email fixtures", skip(self, rng))]
    pub fn generate_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        include_unicode: bool,
    ) -> Result<Vec<TestCase>, GenerationError> {
        let categories = Category::ALWAYS
            .into_iter()
            .chain(include_unicode.then_some(Category::NonAscii));

        let mut cases = Vec::with_capacity(Category::ALWAYS.len() + 1);
        for category in categories {
            let case = match TestCase::literal(category) {
                Some(case) => case,
                None => {
                    let address = self
                        .random_address(rng, category)
                        .map_err(|source| GenerationError::Exhausted { category, source })?;
                    TestCase::new(category, address)
                }
            };
            cases.push(case);
        }

        tracing::debug!(count = cases.len(), "generated email fixtures");
        Ok(cases)
    }

    fn random_address<R: Rng>(
        &self,
        rng: &mut R,
        category: Category,
    ) -> Result<String, SamplingError> {
        match category {
            Category::MaximumLength => self.maximum_length_address(rng),
            Category::LocalPartTooLong => {
                let local = sampling::sample_constrained(
                    rng,
                    LOCAL_PART_ALPHABET,
                    MAX_LOCAL_PART_LEN + 1,
                    |_| true,
                    self.policy,
                )?;
                Ok(format!("{local}@domain.com"))
            }
            Category::DomainLabelTooLong => {
                // Only the length may be wrong.
                let label = sampling::sample_constrained(
                    rng,
                    DOMAIN_LABEL_ALPHABET,
                    MAX_LABEL_LEN + 1,
                    sampling::has_hyphen_free_edges,
                    self.policy,
                )?;
                Ok(format!("user@{label}.com"))
            }
            other => Ok(other.literal().unwrap_or_default().to_string()),
        }
    }

    fn maximum_length_address<R: Rng>(&self, rng: &mut R) -> Result<String, SamplingError> {
        let local = sampling::sample_constrained(
            rng,
            LOCAL_PART_ALPHABET,
            MAX_LOCAL_PART_LEN,
            sampling::is_dot_atom_shaped,
            self.policy,
        )?;
        // `local@domain` must fit in the total budget.
        let domain = self.fill_domain(rng, MAX_ADDRESS_LEN - local.len() - 1)?;
        Ok(format!("{local}@{domain}"))
    }

    /// Builds a domain of at most `budget` characters out of labels of at most
    /// 63 characters, each followed by a reserved `.` slot.
    pub fn fill_domain<R: Rng>(&self, rng: &mut R, budget: usize) -> Result<String, SamplingError> {
        let mut remaining = budget as isize;
        let mut labels = Vec::new();
        while remaining > 0 {
            let label_len = MAX_LABEL_LEN.min((remaining - 1) as usize);
            if label_len == 0 {
                break;
            }
            let label = sampling::sample_constrained(
                rng,
                DOMAIN_LABEL_ALPHABET,
                label_len,
                sampling::has_hyphen_free_edges,
                self.policy,
            )?;
            labels.push(label);
            remaining -= label_len as isize + 1;
        }

        let mut domain = labels.join(".");
        if remaining < 0 {
            domain.truncate(budget);
        }
        Ok(domain)
    }
}

/// Generates the fixture list with the default retry policy.
pub fn generate_test_emails(include_unicode: bool) -> Result<Vec<TestCase>, GenerationError> {
    FixtureGenerator::default().generate(include_unicode)
}
