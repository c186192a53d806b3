//! Constrained random strings for the boundary-length fixtures.

use rand::Rng;

/// Characters RFC 5322 allows unquoted in a local part, excluding `.`.
pub const LOCAL_PART_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&'*+-/=?^_`{|}~";

/// Characters allowed in a domain label.
pub const DOMAIN_LABEL_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SamplingError {
    #[error("cannot draw {length} characters from an empty alphabet")]
    EmptyAlphabet { length: usize },

    #[error("no acceptable string of length {length} after {attempts} attempts")]
    Exhausted { length: usize, attempts: u32 },
}

/// How many whole strings the rejection loop may draw before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

/// Draws `length` characters uniformly, with replacement, from `alphabet`.
pub fn sample<R>(rng: &mut R, alphabet: &[char], length: usize) -> Result<String, SamplingError>
where
    R: Rng,
{
    if alphabet.is_empty() && length > 0 {
        return Err(SamplingError::EmptyAlphabet { length });
    }
    Ok(std::iter::repeat_with(|| alphabet[rng.gen_range(0..alphabet.len())])
        .take(length)
        .collect())
}

/// Rejection sampling: draws whole strings until `accept` returns true.
///
/// Gives up with [`SamplingError::Exhausted`] after `policy.max_attempts`
/// draws. A policy of zero attempts always fails.
pub fn sample_constrained<R, F>(
    rng: &mut R,
    alphabet: &str,
    length: usize,
    accept: F,
    policy: RetryPolicy,
) -> Result<String, SamplingError>
where
    R: Rng,
    F: Fn(&str) -> bool,
{
    let alphabet: Vec<char> = alphabet.chars().collect();
    for attempt in 1..=policy.max_attempts {
        let candidate = sample(rng, &alphabet, length)?;
        if accept(&candidate) {
            if attempt > 1 {
                tracing::trace!(attempt, length, "accepted resampled string");
            }
            return Ok(candidate);
        }
    }
    Err(SamplingError::Exhausted {
        length,
        attempts: policy.max_attempts,
    })
}

/// No leading or trailing `.` and no `..`.
pub fn is_dot_atom_shaped(s: &str) -> bool {
    !s.starts_with('.') && !s.ends_with('.') && !s.contains("..")
}

/// No leading or trailing `-`.
pub fn has_hyphen_free_edges(s: &str) -> bool {
    !s.starts_with('-') && !s.ends_with('-')
}
