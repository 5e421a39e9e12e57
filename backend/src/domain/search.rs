//! Search request validation and result-shaping policy.
//!
//! A [`SearchRequest`] is ephemeral: constructed from raw inbound parameters,
//! validated here, consumed by a [`crate::domain::ports::VoterQuery`]
//! implementation, and discarded with the response. Validation failures mean
//! the store is never consulted.

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use super::error::Error;
use super::voter::{AreaCode, Gender, VoterValidationError};

/// Default hard cap on rows returned per search.
///
/// The canonical bound; deployments that want the historical wide page set
/// `result_limit` in configuration instead of editing this constant.
pub const DEFAULT_RESULT_LIMIT: u32 = 20;

/// Columns eligible for the optional case-insensitive OR-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Name,
    Father,
    Mother,
    DateOfBirth,
}

impl FilterField {
    /// Default field set: the narrow name-or-father variant.
    pub const DEFAULT: &'static [Self] = &[Self::Name, Self::Father];
}

/// Result-shaping knobs for the query executor.
///
/// Both knobs come from configuration; see [`crate::config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    result_limit: u32,
    filter_fields: Vec<FilterField>,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LIMIT, FilterField::DEFAULT.to_vec())
    }
}

impl SearchPolicy {
    /// Build a policy from configured values.
    ///
    /// An empty field set falls back to [`FilterField::DEFAULT`] so a
    /// misconfigured deployment still filters on names rather than matching
    /// nothing. Duplicate fields are collapsed, first occurrence wins.
    pub fn new(result_limit: u32, filter_fields: Vec<FilterField>) -> Self {
        let mut fields: Vec<FilterField> = Vec::with_capacity(filter_fields.len());
        for field in filter_fields {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        if fields.is_empty() {
            fields = FilterField::DEFAULT.to_vec();
        }
        Self {
            result_limit,
            filter_fields: fields,
        }
    }

    /// Hard cap applied to every search.
    pub fn result_limit(&self) -> u32 {
        self.result_limit
    }

    /// Fields participating in the OR-filter, in predicate order.
    pub fn filter_fields(&self) -> &[FilterField] {
        &self.filter_fields
    }
}

/// Validated search inputs, one per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    area_code: AreaCode,
    gender: Gender,
    name_filter: Option<String>,
}

impl SearchRequest {
    /// Validate raw inbound parameters.
    ///
    /// Required fields are checked here with field-level details in the
    /// error payload; the optional filter is trimmed and normalised so a
    /// whitespace-only value behaves as absent.
    pub fn from_params(
        area_code: Option<&str>,
        gender: Option<&str>,
        name_filter: Option<&str>,
    ) -> Result<Self, Error> {
        let area_raw = area_code.map(str::trim).filter(|v| !v.is_empty());
        let Some(area_raw) = area_raw else {
            return Err(missing_field(VoterValidationError::MissingAreaCode, "area_code"));
        };
        let parsed_area = AreaCode::parse(area_raw)
            .map_err(|err| invalid_value(err, "area_code", area_raw))?;

        let gender_raw = gender.map(str::trim).filter(|v| !v.is_empty());
        let Some(gender_raw) = gender_raw else {
            return Err(
                Error::invalid_request("missing gender").with_details(json!({
                    "field": "gender",
                    "code": "missing_field",
                })),
            );
        };
        let parsed_gender =
            Gender::parse(gender_raw).map_err(|err| invalid_value(err, "gender", gender_raw))?;

        Ok(Self::new(
            parsed_area,
            parsed_gender,
            name_filter.map(ToOwned::to_owned),
        ))
    }

    /// Assemble a request from already-typed parts.
    ///
    /// The filter is normalised the same way as in [`Self::from_params`].
    pub fn new(area_code: AreaCode, gender: Gender, name_filter: Option<String>) -> Self {
        let name_filter = name_filter
            .map(|f| f.trim().to_owned())
            .filter(|f| !f.is_empty());
        Self {
            area_code,
            gender,
            name_filter,
        }
    }

    /// Electoral area the search is scoped to.
    pub const fn area_code(&self) -> AreaCode {
        self.area_code
    }

    /// Gender predicate, always present.
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Optional free-text substring filter, trimmed and non-empty.
    pub fn name_filter(&self) -> Option<&str> {
        self.name_filter.as_deref()
    }
}

fn missing_field(err: VoterValidationError, field: &str) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

fn invalid_value(err: VoterValidationError, field: &str, value: &str) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_value",
    }))
}

/// Case-insensitive literal substring test.
///
/// This is the in-memory counterpart of the ILIKE predicate the Diesel
/// adapter emits; wildcard characters in `needle` have no special meaning.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    fn detail_field(error: &Error) -> Option<&str> {
        error
            .details
            .as_ref()
            .and_then(|d| d.get("field"))
            .and_then(Value::as_str)
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn missing_area_code_is_rejected_with_field_detail(#[case] area: Option<&str>) {
        let err = SearchRequest::from_params(area, Some("male"), None)
            .expect_err("missing area_code must fail validation");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "missing area_code");
        assert_eq!(detail_field(&err), Some("area_code"));
    }

    #[rstest]
    #[case(Some("27x97"))]
    #[case(Some("-1"))]
    fn malformed_area_code_is_rejected(#[case] area: Option<&str>) {
        let err = SearchRequest::from_params(area, Some("male"), None)
            .expect_err("malformed area_code must fail validation");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(detail_field(&err), Some("area_code"));
    }

    #[rstest]
    #[case(None, "missing gender")]
    #[case(Some("other"), "gender must be one of male, female, or hijra")]
    fn missing_or_unknown_gender_is_rejected(
        #[case] gender: Option<&str>,
        #[case] expected_message: &str,
    ) {
        let err = SearchRequest::from_params(Some("2797"), gender, None)
            .expect_err("bad gender must fail validation");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, expected_message);
        assert_eq!(detail_field(&err), Some("gender"));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  "), None)]
    #[case(Some(" রহিম "), Some("রহিম"))]
    fn name_filter_is_trimmed_and_normalised(
        #[case] filter: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let request = SearchRequest::from_params(Some("2797"), Some("পুরুষ"), filter)
            .expect("valid request");
        assert_eq!(request.name_filter(), expected);
        assert_eq!(request.area_code(), AreaCode::from_i32(2797));
        assert_eq!(request.gender(), Gender::Male);
    }

    #[test]
    fn policy_collapses_duplicates_and_keeps_order() {
        let policy = SearchPolicy::new(
            50,
            vec![
                FilterField::Father,
                FilterField::Name,
                FilterField::Father,
                FilterField::DateOfBirth,
            ],
        );
        assert_eq!(policy.result_limit(), 50);
        assert_eq!(
            policy.filter_fields(),
            &[
                FilterField::Father,
                FilterField::Name,
                FilterField::DateOfBirth
            ]
        );
    }

    #[test]
    fn empty_policy_field_set_falls_back_to_default() {
        let policy = SearchPolicy::new(DEFAULT_RESULT_LIMIT, Vec::new());
        assert_eq!(policy.filter_fields(), FilterField::DEFAULT);
    }

    #[rstest]
    #[case("আব্দুর রহিম", "রহিম", true)]
    #[case("Abdur Rahim", "rahim", true)]
    #[case("Abdur Rahim", "RAHIM", true)]
    #[case("আব্দুর রহিম", "করিম", false)]
    // Wildcards are literal characters, not metacharacters.
    #[case("আব্দুর রহিম", "%", false)]
    #[case("100% cotton", "%", true)]
    fn substring_test_is_case_insensitive_and_literal(
        #[case] haystack: &str,
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(contains_case_insensitive(haystack, needle), expected);
    }
}
