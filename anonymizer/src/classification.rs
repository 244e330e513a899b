//! "What kind of sensitive data does this pattern describe?"
//!
//! `regex:` rules declare the shape of the data they protect. The declared
//! pattern text is looked up in a fixed table; the field's actual value is never
//! inspected and no pattern is ever compiled or executed.

use std::fmt;

use crate::synthetic::FakeField;

/// PII category derived from a declared pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// US social security number.
    Ssn,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Payment card number.
    CreditCard,
    /// Postal or ZIP code.
    PostalCode,
    /// The pattern is not in the table.
    Unknown,
}

/// Known pattern texts, matched exactly.
const PATTERNS: &[(&str, Category)] = &[
    (r"^\d{3}-\d{2}-\d{4}$", Category::Ssn),
    (
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$",
        Category::Email,
    ),
    (
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$",
        Category::Email,
    ),
    (r"^\d{10}$", Category::Phone),
    (r"^\d{3}-\d{3}-\d{4}$", Category::Phone),
    (r"^\d{4}-\d{4}-\d{4}-\d{4}$", Category::CreditCard),
    (r"^\d{16}$", Category::CreditCard),
    (r"^\d{5}$", Category::PostalCode),
    (r"^\d{5}-\d{4}$", Category::PostalCode),
];

/// Maps a declared pattern to its category.
///
/// Unlisted patterns are [`Category::Unknown`]; this never fails.
pub fn classify(pattern: &str) -> Category {
    PATTERNS
        .iter()
        .find(|(known, _)| *known == pattern)
        .map_or(Category::Unknown, |(_, category)| *category)
}

impl Category {
    /// The synthetic field generated for this category, or `None` for
    /// [`Category::Unknown`].
    pub fn fake_field(self) -> Option<FakeField> {
        match self {
            Category::Ssn => Some(FakeField::Ssn),
            Category::Email => Some(FakeField::Email),
            Category::Phone => Some(FakeField::PhoneNumber),
            Category::CreditCard => Some(FakeField::CreditCardNumber),
            Category::PostalCode => Some(FakeField::Postcode),
            Category::Unknown => None,
        }
    }

    /// Lowercase label used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ssn => "ssn",
            Category::Email => "email",
            Category::Phone => "phone",
            Category::CreditCard => "credit_card",
            Category::PostalCode => "postal_code",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
