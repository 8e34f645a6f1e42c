use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const NUMERIC_PASSWORD_CHARS: &str = "1234567890";
pub const LOWER_PASSWORD_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_PASSWORD_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const NO_LIMITS_STRING: &str = "There are no restrictions on the contents of the password.";

/// Opaque identifier naming a password restriction policy.
///
/// Two ids are reserved: `-1` for the login-password policy and `-2` for the
/// policy applied to passwords migrated from older installations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestrictionId(String);

impl RestrictionId {
    pub const LOGIN: &'static str = "-1";
    pub const MIGRATED: &'static str = "-2";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn login() -> Self {
        Self(Self::LOGIN.to_string())
    }

    pub fn migrated() -> Self {
        Self(Self::MIGRATED.to_string())
    }

    /// Mint a fresh random id for a newly created policy.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let raw: String = (0..16)
            .map(|_| {
                let nibble: u8 = rng.random_range(0..16);
                char::from_digit(u32::from(nibble), 16).unwrap_or('0')
            })
            .collect();
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The reserved policies cannot be deleted.
    pub fn is_builtin(&self) -> bool {
        self.0 == Self::LOGIN || self.0 == Self::MIGRATED
    }
}

impl fmt::Display for RestrictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RestrictionId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for RestrictionId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A named ruleset constraining the shape of generated and stored passwords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    pub id: RestrictionId,
    pub name: String,
    pub min_numeric: u32,
    pub min_lower: u32,
    pub min_upper: u32,
    pub min_special: u32,
    pub min_length: u32,
    pub max_length: u32,
    /// The characters that count as "special" for this policy.
    pub special: String,
    /// Days a password stays valid under this policy; 0 means no expiry.
    pub lifetime: u32,
}

impl Restriction {
    /// Check a password against the policy: length within bounds and every
    /// per-class minimum met. A character in `special` counts for both its
    /// base class and the special quota.
    pub fn verify(&self, password: &str) -> bool {
        let length = password.chars().count() as u32;
        if length < self.min_length || length > self.max_length {
            return false;
        }
        self.meets_character_requirements(password)
    }

    fn meets_character_requirements(&self, password: &str) -> bool {
        let (mut lower, mut upper, mut numeric, mut special) = (0u32, 0u32, 0u32, 0u32);

        for c in password.chars() {
            if LOWER_PASSWORD_CHARS.contains(c) {
                lower += 1;
            } else if UPPER_PASSWORD_CHARS.contains(c) {
                upper += 1;
            } else if NUMERIC_PASSWORD_CHARS.contains(c) {
                numeric += 1;
            }
            if self.special.contains(c) {
                special += 1;
            }
        }

        special >= self.min_special
            && numeric >= self.min_numeric
            && lower >= self.min_lower
            && upper >= self.min_upper
    }

    /// Whether the policy actually constrains anything.
    pub fn is_restrictive(&self) -> bool {
        self.min_special > 0
            || self.min_numeric > 0
            || self.min_lower > 0
            || self.min_upper > 0
            || self.min_length > self.class_minimum_total()
    }

    /// When a password set now under this policy expires, if it ever does.
    pub fn expiry_after(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        (self.lifetime > 0).then(|| from + Duration::days(i64::from(self.lifetime)))
    }

    fn class_minimum_total(&self) -> u32 {
        self.min_upper + self.min_lower + self.min_numeric + self.min_special
    }

    fn enabled_sections(&self) -> Vec<String> {
        let mut sections = Vec::new();
        if self.min_special > 0 {
            sections.push(format!(
                "{} non alpha-numeric {} from the set '{}'",
                self.min_special,
                characters_phrase(self.min_special),
                self.special
            ));
        }
        if self.min_numeric > 0 {
            sections.push(format!(
                "{} numeric {}",
                self.min_numeric,
                characters_phrase(self.min_numeric)
            ));
        }
        if self.min_lower > 0 {
            sections.push(format!(
                "{} lower case {}",
                self.min_lower,
                characters_phrase(self.min_lower)
            ));
        }
        if self.min_upper > 0 {
            sections.push(format!(
                "{} upper case {}",
                self.min_upper,
                characters_phrase(self.min_upper)
            ));
        }
        if self.min_length > self.class_minimum_total() {
            sections.push(format!(
                "{} {} in total",
                self.min_length,
                characters_phrase(self.min_length)
            ));
        }
        sections
    }
}

fn characters_phrase(count: u32) -> &'static str {
    if count == 1 { "character" } else { "characters" }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = self.enabled_sections();
        if sections.is_empty() {
            return f.write_str(NO_LIMITS_STRING);
        }

        let count = sections.len();
        write!(f, "The password must have at least ")?;
        for section in &sections[..count - 1] {
            write!(f, "{section}, ")?;
        }
        if count > 1 {
            write!(f, "and ")?;
        }
        write!(f, "{}", sections[count - 1])?;
        if count > 1 {
            write!(f, ", and")?;
        }
        write!(f, " at most {} characters in total", self.max_length)
    }
}
