use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Label the fixture author attaches to an address.
///
/// `Contextual` is for cases whose outcome depends on what the consuming
/// validator supports (internationalized addresses). It is never collapsed
/// into `Valid` here; use [`Validity::expected_valid`] when a boolean is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid,
    Contextual,
}

impl Validity {
    /// The boolean label as asserted by the fixture author.
    pub fn expected_valid(self) -> bool {
        match self {
            Validity::Valid | Validity::Contextual => true,
            Validity::Invalid => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Validity::Valid => "Valid",
            Validity::Invalid => "Invalid",
            Validity::Contextual => "Contextual",
        }
    }
}

impl Display for Validity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
