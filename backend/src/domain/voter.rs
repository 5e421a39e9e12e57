//! Electoral roll data model.
//!
//! Records are created and updated only by the external ingestion pipeline;
//! this system reads them and never mutates them. `(area_code, voter_no)`
//! uniquely identifies a record.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors raised when constructing voter-scoped values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoterValidationError {
    MissingAreaCode,
    InvalidAreaCode,
    UnknownGender,
}

impl fmt::Display for VoterValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAreaCode => write!(f, "missing area_code"),
            Self::InvalidAreaCode => write!(f, "area_code must be a non-negative integer"),
            Self::UnknownGender => {
                write!(f, "gender must be one of male, female, or hijra")
            }
        }
    }
}

impl std::error::Error for VoterValidationError {}

/// Registered gender of a voter.
///
/// The electoral roll records exactly three values. The API accepts either
/// the canonical snake_case token or the Bengali literal the ingestion
/// pipeline stores; responses use the canonical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Dataset literal: পুরুষ
    #[serde(alias = "পুরুষ")]
    Male,
    /// Dataset literal: মহিলা
    #[serde(alias = "মহিলা")]
    Female,
    /// Dataset literal: হিজড়া
    #[serde(alias = "হিজড়া")]
    Hijra,
}

impl Gender {
    /// Literal stored in the `gender` column by the ingestion pipeline.
    pub const fn as_db_str(self) -> &'static str {
        match self {
            Self::Male => "পুরুষ",
            Self::Female => "মহিলা",
            Self::Hijra => "হিজড়া",
        }
    }

    /// Parse either the API token or the dataset literal.
    pub fn parse(value: &str) -> Result<Self, VoterValidationError> {
        match value.trim() {
            "male" | "পুরুষ" => Ok(Self::Male),
            "female" | "মহিলা" => Ok(Self::Female),
            "hijra" | "হিজড়া" => Ok(Self::Hijra),
            _ => Err(VoterValidationError::UnknownGender),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// Electoral area identifier.
///
/// Required for every search; scopes voters to one electoral area and is not
/// globally unique on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AreaCode(i32);

impl AreaCode {
    /// Validate and construct an [`AreaCode`] from user-supplied text.
    ///
    /// Blank input is reported as missing so callers can refuse the request
    /// before the store is consulted.
    pub fn parse(value: &str) -> Result<Self, VoterValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(VoterValidationError::MissingAreaCode);
        }
        trimmed
            .parse::<i32>()
            .ok()
            .filter(|code| *code >= 0)
            .map(Self)
            .ok_or(VoterValidationError::InvalidAreaCode)
    }

    /// Construct from an already-typed store value.
    pub const fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// Access the underlying integer.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the electoral roll.
///
/// Optional detail columns serialise as explicit JSON `null` when absent;
/// a missing optional column never fails row mapping. JSON field names are
/// camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoterRecord {
    /// Serial number within the printed roll.
    pub serial_no: String,
    /// Voter number, unique within an area code.
    pub voter_no: String,
    pub name: String,
    pub father: String,
    pub mother: String,
    pub gender: Gender,
    /// Date of birth as recorded in the roll (opaque text, e.g. DD/MM/YYYY).
    pub date_of_birth: String,
    pub area_code: AreaCode,
    pub profession: Option<String>,
    pub address: Option<String>,
    pub area_name: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub city_corp: Option<String>,
    pub ward_union: Option<String>,
    pub union_ward: Option<String>,
    pub post_office: Option<String>,
    pub postcode: Option<String>,
    pub region: Option<String>,
    pub polling_center: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("male", Gender::Male)]
    #[case("পুরুষ", Gender::Male)]
    #[case("female", Gender::Female)]
    #[case("মহিলা", Gender::Female)]
    #[case("hijra", Gender::Hijra)]
    #[case("হিজড়া", Gender::Hijra)]
    #[case("  male  ", Gender::Male)]
    fn gender_parse_accepts_tokens_and_dataset_literals(
        #[case] input: &str,
        #[case] expected: Gender,
    ) {
        assert_eq!(Gender::parse(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("unknown")]
    #[case("MALE")]
    fn gender_parse_rejects_values_outside_the_enum(#[case] input: &str) {
        assert_eq!(
            Gender::parse(input),
            Err(VoterValidationError::UnknownGender)
        );
    }

    #[test]
    fn gender_deserialises_dataset_literal_via_alias() {
        let gender: Gender = serde_json::from_str("\"পুরুষ\"").expect("gender JSON");
        assert_eq!(gender, Gender::Male);
        assert_eq!(serde_json::to_string(&gender).expect("token"), "\"male\"");
    }

    #[rstest]
    #[case("2797", 2797)]
    #[case(" 2797 ", 2797)]
    #[case("0", 0)]
    fn area_code_parse_accepts_digits(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(AreaCode::parse(input), Ok(AreaCode::from_i32(expected)));
    }

    #[rstest]
    #[case("", VoterValidationError::MissingAreaCode)]
    #[case("   ", VoterValidationError::MissingAreaCode)]
    #[case("27a97", VoterValidationError::InvalidAreaCode)]
    #[case("-5", VoterValidationError::InvalidAreaCode)]
    #[case("99999999999", VoterValidationError::InvalidAreaCode)]
    fn area_code_parse_rejects_bad_input(
        #[case] input: &str,
        #[case] expected: VoterValidationError,
    ) {
        assert_eq!(AreaCode::parse(input), Err(expected));
    }

    #[test]
    fn voter_record_serialises_absent_optionals_as_null() {
        let record = VoterRecord {
            serial_no: "1".into(),
            voter_no: "110000000001".into(),
            name: "রহিম উদ্দিন".into(),
            father: "করিম উদ্দিন".into(),
            mother: "রহিমা বেগম".into(),
            gender: Gender::Male,
            date_of_birth: "01/01/1990".into(),
            area_code: AreaCode::from_i32(2797),
            profession: None,
            address: None,
            area_name: None,
            district: None,
            upazila: None,
            city_corp: None,
            ward_union: None,
            union_ward: None,
            post_office: None,
            postcode: None,
            region: None,
            polling_center: None,
        };

        let value = serde_json::to_value(&record).expect("record JSON");
        assert_eq!(value.get("serialNo"), Some(&serde_json::json!("1")));
        assert_eq!(value.get("gender"), Some(&serde_json::json!("male")));
        // Absent optionals are present as explicit null, never dropped.
        assert_eq!(value.get("address"), Some(&serde_json::Value::Null));
        assert_eq!(value.get("pollingCenter"), Some(&serde_json::Value::Null));
    }
}
