//! Self-validating customer field values.
//!
//! # Responsibility
//! - Wrap each raw customer field in an immutable, typed value.
//! - Reject malformed input at construction with a fixed constraint message.
//!
//! # Invariants
//! - A constructed value always satisfies its validation rule.
//! - Values compare by their canonical form only.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";
pub const BIRTHDAY_MONTH_CONSTRAINTS: &str =
    "Birthday month should be an integer from 1 to 12, and it should not be blank";
pub const REWARD_CONSTRAINTS: &str =
    "Reward points can take any NON-NEGATIVE values, and it should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

/// Prefix rendered in front of reward points for display.
pub const REWARD_DECORATION: &str = "\u{1F381}";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9](-?[A-Za-z0-9])*\.)*[A-Za-z0-9](-?[A-Za-z0-9])+$",
    )
    .expect("valid email regex")
});
static BIRTHDAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}$").expect("valid birthday month regex"));
static REWARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S.*$").expect("valid reward regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Field-level validation failure.
///
/// Display output is the fixed constraint message of the rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Phone,
    Email,
    BirthdayMonth,
    Reward,
    Tag,
}

impl FieldError {
    /// Returns the human-readable constraint for the rejected field.
    pub fn constraint(&self) -> &'static str {
        match self {
            Self::Name => NAME_CONSTRAINTS,
            Self::Phone => PHONE_CONSTRAINTS,
            Self::Email => EMAIL_CONSTRAINTS,
            Self::BirthdayMonth => BIRTHDAY_MONTH_CONSTRAINTS,
            Self::Reward => REWARD_CONSTRAINTS,
            Self::Tag => TAG_CONSTRAINTS,
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.constraint())
    }
}

impl Error for FieldError {}

/// Customer full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if !NAME_RE.is_match(raw) {
            return Err(FieldError::Name);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated name tokens used by keyword search.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Customer phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if !PHONE_RE.is_match(raw) {
            return Err(FieldError::Phone);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Customer email address in `local@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if !EMAIL_RE.is_match(raw) {
            return Err(FieldError::Email);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Month of birth, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayMonth(u8);

impl BirthdayMonth {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if !BIRTHDAY_MONTH_RE.is_match(raw) {
            return Err(FieldError::BirthdayMonth);
        }
        let month: u8 = raw.parse().map_err(|_| FieldError::BirthdayMonth)?;
        Self::from_month(month)
    }

    pub fn from_month(month: u8) -> Result<Self, FieldError> {
        if !(1..=12).contains(&month) {
            return Err(FieldError::BirthdayMonth);
        }
        Ok(Self(month))
    }

    pub fn month(self) -> u8 {
        self.0
    }
}

/// Non-negative loyalty reward points.
///
/// Parsing accepts any integer text (sign and leading zeros included) and
/// keeps the canonical decimal form only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reward(u32);

impl Reward {
    /// Largest representable balance; matches a signed 32-bit point counter.
    pub const MAX_POINTS: u32 = i32::MAX as u32;

    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if !REWARD_RE.is_match(raw) {
            return Err(FieldError::Reward);
        }
        let points: i64 = raw.parse().map_err(|_| FieldError::Reward)?;
        if points < 0 || points > i64::from(Self::MAX_POINTS) {
            return Err(FieldError::Reward);
        }
        Ok(Self(points as u32))
    }

    pub fn from_points(points: u32) -> Result<Self, FieldError> {
        if points > Self::MAX_POINTS {
            return Err(FieldError::Reward);
        }
        Ok(Self(points))
    }

    pub fn points(self) -> u32 {
        self.0
    }

    /// Adds points; `None` when the result exceeds [`Reward::MAX_POINTS`].
    pub fn checked_add(self, delta: u32) -> Option<Self> {
        self.0
            .checked_add(delta)
            .filter(|total| *total <= Self::MAX_POINTS)
            .map(Self)
    }

    /// Removes points, stopping at zero.
    pub fn saturating_sub(self, delta: u32) -> Self {
        Self(self.0.saturating_sub(delta))
    }

    /// Decorated form shown to users, e.g. `🎁 4200`.
    pub fn display_value(self) -> String {
        format!("{REWARD_DECORATION} {}", self.0)
    }
}

/// Free-form alphanumeric label attached to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if !TAG_RE.is_match(raw) {
            return Err(FieldError::Tag);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

display_as_str!(Name, Phone, Email, BirthdayMonth, Reward, Tag);
