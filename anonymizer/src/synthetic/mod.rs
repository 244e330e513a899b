//! Synthetic data: the capability that produces plausible fake values.
//!
//! [`SyntheticSource`] is the seam between the masking engine and whatever
//! generates fake values. The engine only ever asks for a value of a named
//! [`FakeField`], an extension name via [`SyntheticSource::generate_named`], or a
//! bounded random integer.
//!
//! Sources are stateful (they carry a pseudo-random generator) and take
//! `&mut self`, so a source is confined to one thread. Parallel callers build
//! one source per worker.

mod words;

use std::{fmt, str::FromStr};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::MaskingError;

/// Fields every source can generate.
///
/// Parsed from the suffix of a `fake.<name>` rule. Aliases accepted by
/// [`FromStr`] are listed on each variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FakeField {
    /// Full person name (`name`).
    Name,
    /// Given name (`first_name`).
    FirstName,
    /// Family name (`last_name`).
    LastName,
    /// Email address (`email`).
    Email,
    /// Phone number (`phone_number`, `phone`).
    PhoneNumber,
    /// Social security number (`ssn`).
    Ssn,
    /// Full postal address on one line (`address`).
    Address,
    /// House number and street (`street_address`).
    StreetAddress,
    /// City name (`city`).
    City,
    /// State name (`state`).
    State,
    /// Country name (`country`).
    Country,
    /// Five digit postal code (`postcode`, `zipcode`).
    Postcode,
    /// Company name (`company`).
    Company,
    /// Job title (`job`).
    Job,
    /// Login name (`user_name`, `username`).
    UserName,
    /// IPv4 address (`ipv4`).
    Ipv4,
    /// Luhn-valid 16 digit card number (`credit_card_number`).
    CreditCardNumber,
    /// ISO-8601 calendar date (`date`).
    Date,
    /// Random UUID (`uuid4`, `uuid`).
    Uuid4,
    /// Single lowercase word (`word`).
    Word,
    /// Web URL (`url`).
    Url,
}

impl FakeField {
    /// Every supported field, in declaration order.
    pub const ALL: &'static [FakeField] = &[
        FakeField::Name,
        FakeField::FirstName,
        FakeField::LastName,
        FakeField::Email,
        FakeField::PhoneNumber,
        FakeField::Ssn,
        FakeField::Address,
        FakeField::StreetAddress,
        FakeField::City,
        FakeField::State,
        FakeField::Country,
        FakeField::Postcode,
        FakeField::Company,
        FakeField::Job,
        FakeField::UserName,
        FakeField::Ipv4,
        FakeField::CreditCardNumber,
        FakeField::Date,
        FakeField::Uuid4,
        FakeField::Word,
        FakeField::Url,
    ];

    /// Canonical rule name.
    pub fn as_str(self) -> &'static str {
        match self {
            FakeField::Name => "name",
            FakeField::FirstName => "first_name",
            FakeField::LastName => "last_name",
            FakeField::Email => "email",
            FakeField::PhoneNumber => "phone_number",
            FakeField::Ssn => "ssn",
            FakeField::Address => "address",
            FakeField::StreetAddress => "street_address",
            FakeField::City => "city",
            FakeField::State => "state",
            FakeField::Country => "country",
            FakeField::Postcode => "postcode",
            FakeField::Company => "company",
            FakeField::Job => "job",
            FakeField::UserName => "user_name",
            FakeField::Ipv4 => "ipv4",
            FakeField::CreditCardNumber => "credit_card_number",
            FakeField::Date => "date",
            FakeField::Uuid4 => "uuid4",
            FakeField::Word => "word",
            FakeField::Url => "url",
        }
    }
}

impl FromStr for FakeField {
    type Err = MaskingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let field = match name {
            "phone" => FakeField::PhoneNumber,
            "zipcode" => FakeField::Postcode,
            "username" => FakeField::UserName,
            "uuid" => FakeField::Uuid4,
            _ => {
                return FakeField::ALL
                    .iter()
                    .copied()
                    .find(|field| field.as_str() == name)
                    .ok_or_else(|| MaskingError::UnsupportedField {
                        name: name.to_string(),
                    })
            }
        };
        Ok(field)
    }
}

impl fmt::Display for FakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator of plausible fake values.
pub trait SyntheticSource {
    /// Produces a value for one of the built-in fields.
    fn generate(&mut self, field: FakeField) -> String;

    /// Produces a value for a field name outside [`FakeField`].
    ///
    /// This is the extension point for custom sources. Returning `None` makes
    /// the rule fail with [`MaskingError::UnsupportedField`].
    fn generate_named(&mut self, _name: &str) -> Option<String> {
        None
    }

    /// Uniform integer in `min..=max`. Callers guarantee `min <= max`.
    fn random_int(&mut self, min: i64, max: i64) -> i64;
}

impl<S> SyntheticSource for &mut S
where
    S: SyntheticSource + ?Sized,
{
    fn generate(&mut self, field: FakeField) -> String {
        (**self).generate(field)
    }

    fn generate_named(&mut self, name: &str) -> Option<String> {
        (**self).generate_named(name)
    }

    fn random_int(&mut self, min: i64, max: i64) -> i64 {
        (**self).random_int(min, max)
    }
}

/// Default [`SyntheticSource`] backed by a seedable [`StdRng`] and built-in
/// word lists.
#[derive(Clone, Debug)]
pub struct FakeSource {
    rng: StdRng,
}

impl FakeSource {
    /// Source seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source: equal seeds yield equal value sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.rng.gen_range(0..items.len())]
    }

    fn first_name(&mut self) -> &'static str {
        self.pick(words::FIRST_NAMES)
    }

    fn last_name(&mut self) -> &'static str {
        self.pick(words::LAST_NAMES)
    }

    fn state(&mut self) -> (&'static str, &'static str) {
        words::STATES[self.rng.gen_range(0..words::STATES.len())]
    }

    fn postcode(&mut self) -> String {
        format!("{:05}", self.rng.gen_range(501..=99_950))
    }

    fn street_address(&mut self) -> String {
        let number = self.rng.gen_range(1..=9_999);
        let street = self.pick(words::STREET_NAMES);
        let suffix = self.pick(words::STREET_SUFFIXES);
        format!("{number} {street} {suffix}")
    }

    fn ssn(&mut self) -> String {
        // Area 666 and 900-999 are never issued.
        let mut area = self.rng.gen_range(1..=899);
        if area == 666 {
            area = 665;
        }
        let group = self.rng.gen_range(1..=99);
        let serial = self.rng.gen_range(1..=9_999);
        format!("{area:03}-{group:02}-{serial:04}")
    }

    fn credit_card_number(&mut self) -> String {
        let mut digits: Vec<u32> = Vec::with_capacity(16);
        digits.push(4);
        for _ in 0..14 {
            digits.push(self.rng.gen_range(0..10));
        }
        digits.push(luhn_check_digit(&digits));
        digits
            .into_iter()
            .filter_map(|digit| char::from_digit(digit, 10))
            .collect()
    }
}

impl Default for FakeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticSource for FakeSource {
    fn generate(&mut self, field: FakeField) -> String {
        match field {
            FakeField::Name => {
                let first = self.first_name();
                let last = self.last_name();
                format!("{first} {last}")
            }
            FakeField::FirstName => self.first_name().to_string(),
            FakeField::LastName => self.last_name().to_string(),
            FakeField::Email => {
                let first = self.first_name().to_lowercase();
                let last = self.last_name().to_lowercase();
                let suffix = self.rng.gen_range(1..=99);
                let domain = self.pick(words::EMAIL_DOMAINS);
                format!("{first}.{last}{suffix}@{domain}")
            }
            FakeField::PhoneNumber => {
                let area = self.rng.gen_range(201..=989);
                let exchange = self.rng.gen_range(200..=999);
                let line = self.rng.gen_range(0..=9_999);
                format!("{area:03}-{exchange:03}-{line:04}")
            }
            FakeField::Ssn => self.ssn(),
            FakeField::Address => {
                let street = self.street_address();
                let city = self.pick(words::CITIES);
                let (_, abbr) = self.state();
                let postcode = self.postcode();
                format!("{street}, {city}, {abbr} {postcode}")
            }
            FakeField::StreetAddress => self.street_address(),
            FakeField::City => self.pick(words::CITIES).to_string(),
            FakeField::State => self.state().0.to_string(),
            FakeField::Country => self.pick(words::COUNTRIES).to_string(),
            FakeField::Postcode => self.postcode(),
            FakeField::Company => {
                let last = self.last_name();
                let suffix = self.pick(words::COMPANY_SUFFIXES);
                format!("{last} {suffix}")
            }
            FakeField::Job => self.pick(words::JOBS).to_string(),
            FakeField::UserName => {
                let first = self.first_name().to_lowercase();
                let last = self.last_name().to_lowercase();
                let suffix = self.rng.gen_range(1..=999);
                format!("{first}{last}{suffix}")
            }
            FakeField::Ipv4 => {
                let octets: [u8; 4] = self.rng.gen();
                format!(
                    "{}.{}.{}.{}",
                    octets[0], octets[1], octets[2], octets[3]
                )
            }
            FakeField::CreditCardNumber => self.credit_card_number(),
            FakeField::Date => {
                let year = self.rng.gen_range(1970..=2025);
                let month = self.rng.gen_range(1..=12);
                let day = self.rng.gen_range(1..=28);
                format!("{year:04}-{month:02}-{day:02}")
            }
            FakeField::Uuid4 => uuid::Builder::from_random_bytes(self.rng.gen())
                .into_uuid()
                .to_string(),
            FakeField::Word => self.pick(words::WORDS).to_string(),
            FakeField::Url => {
                let word = self.pick(words::WORDS);
                let tld = self.pick(words::TLDS);
                format!("https://www.{word}.{tld}/")
            }
        }
    }

    fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}

/// Check digit that makes `digits` followed by it pass the Luhn test.
fn luhn_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();
    (10 - sum % 10) % 10
}
