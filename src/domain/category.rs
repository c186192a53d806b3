use serde::Serialize;

use super::Validity;

/// One row of the fixture table, in the order the generator emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Minimal,
    TypicalWithSubdomainAndTag,
    MaximumLength,
    MissingSeparator,
    MultipleSeparators,
    LeadingDotInLocalPart,
    TrailingDotInLocalPart,
    ConsecutiveDotsInLocalPart,
    LeadingHyphenInDomainLabel,
    LocalPartTooLong,
    DomainLabelTooLong,
    Empty,
    SurroundingWhitespace,
    DisallowedDomainCharacter,
    NonAscii,
}

impl Category {
    /// Categories emitted on every call, in order.
    pub const ALWAYS: [Category; 14] = [
        Category::Minimal,
        Category::TypicalWithSubdomainAndTag,
        Category::MaximumLength,
        Category::MissingSeparator,
        Category::MultipleSeparators,
        Category::LeadingDotInLocalPart,
        Category::TrailingDotInLocalPart,
        Category::ConsecutiveDotsInLocalPart,
        Category::LeadingHyphenInDomainLabel,
        Category::LocalPartTooLong,
        Category::DomainLabelTooLong,
        Category::Empty,
        Category::SurroundingWhitespace,
        Category::DisallowedDomainCharacter,
    ];

    pub fn validity(self) -> Validity {
        match self {
            Category::Minimal | Category::TypicalWithSubdomainAndTag | Category::MaximumLength => {
                Validity::Valid
            }
            Category::NonAscii => Validity::Contextual,
            _ => Validity::Invalid,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Minimal => "Positive: minimal length (short valid address)",
            Category::TypicalWithSubdomainAndTag => "Positive: typical length with subdomain and tag",
            Category::MaximumLength => {
                "Positive: maximum length (64 local, 63 per label, ~254 total)"
            }
            Category::MissingSeparator => "Negative: no @",
            Category::MultipleSeparators => "Negative: more than one @",
            Category::LeadingDotInLocalPart => "Negative: dot at the start of the local part",
            Category::TrailingDotInLocalPart => "Negative: dot at the end of the local part",
            Category::ConsecutiveDotsInLocalPart => "Negative: two consecutive dots in the local part",
            Category::LeadingHyphenInDomainLabel => "Negative: hyphen at the start of a domain label",
            Category::LocalPartTooLong => "Negative: 65 characters in the local part (limit is 64)",
            Category::DomainLabelTooLong => "Negative: 64 characters in a domain label (limit is 63)",
            Category::Empty => "Negative: empty input",
            Category::SurroundingWhitespace => "Negative: leading and trailing whitespace",
            Category::DisallowedDomainCharacter => "Negative: disallowed character in domain (/)",
            Category::NonAscii => {
                "Positive/Negative: Unicode address (RFC 6531, depends on validator support)"
            }
        }
    }

    /// The fixed address for categories that are not randomized.
    pub fn literal(self) -> Option<&'static str> {
        match self {
            Category::Minimal => Some("a@a.ru"),
            Category::TypicalWithSubdomainAndTag => Some("user.example+tag@subdomain.domain.com"),
            Category::MissingSeparator => Some("user.example.com"),
            Category::MultipleSeparators => Some("user@domain@com"),
            Category::LeadingDotInLocalPart => Some(".user@domain.com"),
            Category::TrailingDotInLocalPart => Some("user.@domain.com"),
            Category::ConsecutiveDotsInLocalPart => Some("user..name@domain.com"),
            Category::LeadingHyphenInDomainLabel => Some("user@-domain.com"),
            Category::Empty => Some(""),
            Category::SurroundingWhitespace => Some(" user@domain.com "),
            Category::DisallowedDomainCharacter => Some("user@domain/com"),
            Category::NonAscii => Some("пользователь@домен.рф"),
            Category::MaximumLength | Category::LocalPartTooLong | Category::DomainLabelTooLong => {
                None
            }
        }
    }

    pub fn is_randomized(self) -> bool {
        self.literal().is_none()
    }
}
