//! Runs fixtures through the `validator` crate's email check and compares the
//! outcome with the declared label. Labels are never changed by this.

use validator::ValidateEmail;

use crate::domain::{TestCase, Validity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// 1-based position in the fixture list.
    pub index: usize,
    pub address: String,
    pub declared: Validity,
    pub accepted: bool,
}

impl Verdict {
    /// Contextual cases agree with either outcome.
    pub fn agrees(&self) -> bool {
        match self.declared {
            Validity::Contextual => true,
            Validity::Valid => self.accepted,
            Validity::Invalid => !self.accepted,
        }
    }
}

pub fn cross_check(cases: &[TestCase]) -> Vec<Verdict> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let verdict = Verdict {
                index: i + 1,
                address: case.address.clone(),
                declared: case.validity,
                accepted: case.address.as_str().validate_email(),
            };
            if !verdict.agrees() {
                tracing::warn!(
                    index = verdict.index,
                    address = %verdict.address,
                    declared = %verdict.declared,
                    accepted = verdict.accepted,
                    "reference validator disagrees with fixture label"
                );
            }
            verdict
        })
        .collect()
}

/// One-line summary such as `13/14 fixtures agree with the reference validator`.
pub fn summarize(verdicts: &[Verdict]) -> String {
    let agreeing = verdicts.iter().filter(|v| v.agrees()).count();
    format!(
        "{agreeing}/{} fixtures agree with the reference validator",
        verdicts.len()
    )
}
