//! Self-validating field values.
//!
//! Every field a user can type is parsed into one of these newtypes before it
//! reaches a command, so the rest of the crate never sees an invalid id, code
//! or date:
//!
//! - [`TutorialId`]: letters, digits and spaces, starting with a letter or digit
//! - [`ModuleCode`]: 2-4 letters, 4 digits, optional trailing letter (`CS2103T`)
//! - [`TutorialDate`]: `YYYY-MM-DD`, and a real calendar date
//! - [`StudentId`]: `A`, 7 digits, a letter (`A0123456X`)
//!
//! Values serialize as plain strings and are re-validated on deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid tutorial id '{0}': tutorial ids should only contain letters, digits and spaces, and must not be blank")]
    TutorialId(String),

    #[error("Invalid module code '{0}': module codes should be 2-4 letters, then 4 digits, then an optional letter (e.g. CS2103T)")]
    ModuleCode(String),

    #[error("Invalid date '{0}': dates should be in the format YYYY-MM-DD")]
    DateFormat(String),

    #[error("Invalid date '{0}': not a real calendar date")]
    DateOutOfRange(String),

    #[error("Invalid student id '{0}': student ids should be 'A', 7 digits and a letter (e.g. A0123456X)")]
    StudentId(String),
}

macro_rules! string_value {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Identifies a tutorial. The only key used for "same tutorial" checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TutorialId(String);

impl FromStr for TutorialId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphanumeric()
                    && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == ' ')
            }
            None => false,
        };
        if !valid {
            return Err(ValidationError::TutorialId(s.to_string()));
        }
        Ok(TutorialId(trimmed.to_string()))
    }
}

string_value!(TutorialId);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleCode(String);

impl FromStr for ModuleCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if !is_module_code(&code) {
            return Err(ValidationError::ModuleCode(s.to_string()));
        }
        Ok(ModuleCode(code))
    }
}

string_value!(ModuleCode);

fn is_module_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if !(2..=4).contains(&letters) {
        return false;
    }
    let rest = &bytes[letters..];
    if rest.len() < 4 || !rest[..4].iter().all(u8::is_ascii_digit) {
        return false;
    }
    match &rest[4..] {
        [] => true,
        [suffix] => suffix.is_ascii_uppercase(),
        _ => false,
    }
}

/// A tutorial's calendar date, kept in its `YYYY-MM-DD` text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TutorialDate(String);

const DATE_FORMAT: &str = "%Y-%m-%d";

impl TutorialDate {
    pub fn to_naive_date(&self) -> NaiveDate {
        // Validated on construction.
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).unwrap_or_default()
    }
}

impl FromStr for TutorialDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = s.trim();
        // chrono accepts unpadded fields, so the shape is checked separately.
        let shaped = date.len() == 10
            && date.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(ValidationError::DateFormat(s.to_string()));
        }
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| ValidationError::DateOutOfRange(s.to_string()))?;
        Ok(TutorialDate(date.to_string()))
    }
}

string_value!(TutorialDate);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl FromStr for StudentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_uppercase();
        let bytes = id.as_bytes();
        let valid = bytes.len() == 9
            && bytes[0] == b'A'
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_uppercase();
        if !valid {
            return Err(ValidationError::StudentId(s.to_string()));
        }
        Ok(StudentId(id))
    }
}

string_value!(StudentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutorial_id_accepts_letters_digits_and_spaces() {
        assert!("C101".parse::<TutorialId>().is_ok());
        assert!("Tutorial 3".parse::<TutorialId>().is_ok());
        assert_eq!("  T01 ".parse::<TutorialId>().unwrap().as_str(), "T01");
    }

    #[test]
    fn tutorial_id_rejects_blank_and_symbols() {
        assert!("".parse::<TutorialId>().is_err());
        assert!("   ".parse::<TutorialId>().is_err());
        assert!("T-01".parse::<TutorialId>().is_err());
        assert!("T01!".parse::<TutorialId>().is_err());
    }

    #[test]
    fn module_code_is_upper_cased() {
        let code: ModuleCode = "cs2103t".parse().unwrap();
        assert_eq!(code.as_str(), "CS2103T");
    }

    #[test]
    fn module_code_shapes() {
        for ok in ["CS2103", "CS2103T", "MA1521", "GEQ1000", "ABCD1234X"] {
            assert!(ok.parse::<ModuleCode>().is_ok(), "{} should be valid", ok);
        }
        for bad in ["C2103", "ABCDE1234", "CS210", "CS21034", "CS2103TX", "2103CS", ""] {
            assert!(bad.parse::<ModuleCode>().is_err(), "{} should be invalid", bad);
        }
    }

    #[test]
    fn non_ascii_letters_are_not_upper_cased_into_shape() {
        assert_eq!(
            "ßs2103".parse::<ModuleCode>(),
            Err(ValidationError::ModuleCode("ßs2103".into()))
        );
        assert!("ﬀ2103".parse::<ModuleCode>().is_err());
        assert!("a0123456ß".parse::<StudentId>().is_err());
    }

    #[test]
    fn date_requires_shape_and_real_calendar_day() {
        assert!("2025-01-10".parse::<TutorialDate>().is_ok());
        assert!("2024-02-29".parse::<TutorialDate>().is_ok());

        assert_eq!(
            "2025-1-10".parse::<TutorialDate>(),
            Err(ValidationError::DateFormat("2025-1-10".into()))
        );
        assert_eq!(
            "2025-02-30".parse::<TutorialDate>(),
            Err(ValidationError::DateOutOfRange("2025-02-30".into()))
        );
        assert!("2023-02-29".parse::<TutorialDate>().is_err());
        assert!("10/01/2025".parse::<TutorialDate>().is_err());
    }

    #[test]
    fn date_exposes_naive_date() {
        let date: TutorialDate = "2025-03-10".parse().unwrap();
        assert_eq!(
            date.to_naive_date(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn student_id_shape() {
        assert_eq!(
            "a0123456x".parse::<StudentId>().unwrap().as_str(),
            "A0123456X"
        );
        assert!("B0123456X".parse::<StudentId>().is_err());
        assert!("A012345X".parse::<StudentId>().is_err());
        assert!("A01234567".parse::<StudentId>().is_err());
    }

    #[test]
    fn values_revalidate_when_deserialized() {
        let ok: ModuleCode = serde_json::from_str("\"CS2103T\"").unwrap();
        assert_eq!(ok.as_str(), "CS2103T");
        assert!(serde_json::from_str::<TutorialDate>("\"2025-13-01\"").is_err());
    }

    #[test]
    fn validation_messages_name_the_field() {
        let err = "x".parse::<StudentId>().unwrap_err();
        assert!(err.to_string().contains("student id"));
    }
}
