//! Student profile field types and form state.
//!
//! Every categorical field is a closed enum whose serialized form is the
//! literal token the prediction service expects. `FormState` tracks presence
//! with `Option` so that an explicit zero (siblings, scores) is distinct from
//! "not yet set".

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use thiserror::Error;

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    #[serde(rename = "male")]
    #[strum(serialize = "male")]
    Male,
    #[serde(rename = "female")]
    #[strum(serialize = "female")]
    Female,
}

/// Ethnic group bucket used by the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum EthnicGroup {
    #[serde(rename = "group A")]
    #[strum(serialize = "group A")]
    GroupA,
    #[serde(rename = "group B")]
    #[strum(serialize = "group B")]
    GroupB,
    #[serde(rename = "group C")]
    #[strum(serialize = "group C")]
    GroupC,
    #[serde(rename = "group D")]
    #[strum(serialize = "group D")]
    GroupD,
    #[serde(rename = "group E")]
    #[strum(serialize = "group E")]
    GroupE,
}

/// Highest parental education level.
///
/// The `some_highschool` token is underscore-separated while the others are
/// space-separated. That inconsistency is part of the service contract, not
/// ours to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ParentEduc {
    #[serde(rename = "some_highschool")]
    #[strum(serialize = "some_highschool")]
    SomeHighSchool,
    #[serde(rename = "high school")]
    #[strum(serialize = "high school")]
    HighSchool,
    #[serde(rename = "some college")]
    #[strum(serialize = "some college")]
    SomeCollege,
    #[serde(rename = "associate's degree")]
    #[strum(serialize = "associate's degree")]
    AssociatesDegree,
    #[serde(rename = "bachelor's degree")]
    #[strum(serialize = "bachelor's degree")]
    BachelorsDegree,
    #[serde(rename = "master's degree")]
    #[strum(serialize = "master's degree")]
    MastersDegree,
}

/// School lunch plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LunchType {
    #[serde(rename = "standard")]
    #[strum(serialize = "standard")]
    Standard,
    #[serde(rename = "free/reduced")]
    #[strum(serialize = "free/reduced")]
    FreeReduced,
}

/// Test preparation course status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TestPrep {
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    None,
    #[serde(rename = "completed")]
    #[strum(serialize = "completed")]
    Completed,
}

/// Parents' marital status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ParentMaritalStatus {
    #[serde(rename = "married")]
    #[strum(serialize = "married")]
    Married,
    #[serde(rename = "single")]
    #[strum(serialize = "single")]
    Single,
    #[serde(rename = "widowed")]
    #[strum(serialize = "widowed")]
    Widowed,
    #[serde(rename = "divorced")]
    #[strum(serialize = "divorced")]
    Divorced,
}

/// How often the student practices a sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PracticeSport {
    #[serde(rename = "never")]
    #[strum(serialize = "never")]
    Never,
    #[serde(rename = "sometimes")]
    #[strum(serialize = "sometimes")]
    Sometimes,
    #[serde(rename = "regularly")]
    #[strum(serialize = "regularly")]
    Regularly,
}

/// Whether the student is the first child in the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum IsFirstChild {
    #[serde(rename = "yes")]
    #[strum(serialize = "yes")]
    Yes,
    #[serde(rename = "no")]
    #[strum(serialize = "no")]
    No,
}

/// Means of transport to school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TransportMeans {
    #[serde(rename = "schoolbus")]
    #[strum(serialize = "schoolbus")]
    Schoolbus,
    #[serde(rename = "private")]
    #[strum(serialize = "private")]
    Private,
}

/// Weekly self-study hours bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum WklyStudyHours {
    #[serde(rename = "less than 5hrs")]
    #[strum(serialize = "less than 5hrs")]
    LessThan5,
    #[serde(rename = "between 5 and 10hrs")]
    #[strum(serialize = "between 5 and 10hrs")]
    Between5And10,
    #[serde(rename = "more than 10hrs")]
    #[strum(serialize = "more than 10hrs")]
    MoreThan10,
}

/// The 13 field names, in wire order.
pub const FIELD_NAMES: [&str; 13] = [
    "gender",
    "ethnic_group",
    "parent_educ",
    "lunch_type",
    "test_prep",
    "parent_marital_status",
    "practice_sport",
    "is_first_child",
    "nr_siblings",
    "transport_means",
    "wkly_study_hours",
    "math_score",
    "writing_score",
];

/// Upper bound for `nr_siblings`.
pub const MAX_SIBLINGS: u8 = 7;
/// Upper bound for `math_score` and `writing_score`.
pub const MAX_SCORE: u8 = 100;

/// A field-level update failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field name is not one of the 13 known fields.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The raw value is not in the field's domain.
    #[error("invalid value '{value}' for {field} (expected {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// A partially-filled student profile.
///
/// Fields are `None` until set. Completeness is "every field is `Some`";
/// zero is a valid value for the numeric fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub gender: Option<Gender>,
    pub ethnic_group: Option<EthnicGroup>,
    pub parent_educ: Option<ParentEduc>,
    pub lunch_type: Option<LunchType>,
    pub test_prep: Option<TestPrep>,
    pub parent_marital_status: Option<ParentMaritalStatus>,
    pub practice_sport: Option<PracticeSport>,
    pub is_first_child: Option<IsFirstChild>,
    pub nr_siblings: Option<u8>,
    pub transport_means: Option<TransportMeans>,
    pub wkly_study_hours: Option<WklyStudyHours>,
    pub math_score: Option<u8>,
    pub writing_score: Option<u8>,
}

impl FormState {
    /// Set a single field from its wire name and a raw string value.
    ///
    /// No cross-field validation; a valid value always succeeds and
    /// overwrites any previous value.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), FieldError> {
        match name {
            "gender" => self.gender = Some(parse_token("gender", raw, "male|female")?),
            "ethnic_group" => {
                self.ethnic_group = Some(parse_token(
                    "ethnic_group",
                    raw,
                    "group A|group B|group C|group D|group E",
                )?)
            }
            "parent_educ" => {
                self.parent_educ = Some(parse_token(
                    "parent_educ",
                    raw,
                    "some_highschool|high school|some college|associate's degree|bachelor's degree|master's degree",
                )?)
            }
            "lunch_type" => {
                self.lunch_type = Some(parse_token("lunch_type", raw, "standard|free/reduced")?)
            }
            "test_prep" => self.test_prep = Some(parse_token("test_prep", raw, "none|completed")?),
            "parent_marital_status" => {
                self.parent_marital_status = Some(parse_token(
                    "parent_marital_status",
                    raw,
                    "married|single|widowed|divorced",
                )?)
            }
            "practice_sport" => {
                self.practice_sport =
                    Some(parse_token("practice_sport", raw, "never|sometimes|regularly")?)
            }
            "is_first_child" => {
                self.is_first_child = Some(parse_token("is_first_child", raw, "yes|no")?)
            }
            "nr_siblings" => {
                self.nr_siblings =
                    Some(parse_bounded("nr_siblings", raw, MAX_SIBLINGS, "an integer 0-7")?)
            }
            "transport_means" => {
                self.transport_means =
                    Some(parse_token("transport_means", raw, "schoolbus|private")?)
            }
            "wkly_study_hours" => {
                self.wkly_study_hours = Some(parse_token(
                    "wkly_study_hours",
                    raw,
                    "less than 5hrs|between 5 and 10hrs|more than 10hrs",
                )?)
            }
            "math_score" => {
                self.math_score =
                    Some(parse_bounded("math_score", raw, MAX_SCORE, "an integer 0-100")?)
            }
            "writing_score" => {
                self.writing_score =
                    Some(parse_bounded("writing_score", raw, MAX_SCORE, "an integer 0-100")?)
            }
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Names of fields that are still unset, in wire order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.ethnic_group.is_none() {
            missing.push("ethnic_group");
        }
        if self.parent_educ.is_none() {
            missing.push("parent_educ");
        }
        if self.lunch_type.is_none() {
            missing.push("lunch_type");
        }
        if self.test_prep.is_none() {
            missing.push("test_prep");
        }
        if self.parent_marital_status.is_none() {
            missing.push("parent_marital_status");
        }
        if self.practice_sport.is_none() {
            missing.push("practice_sport");
        }
        if self.is_first_child.is_none() {
            missing.push("is_first_child");
        }
        if self.nr_siblings.is_none() {
            missing.push("nr_siblings");
        }
        if self.transport_means.is_none() {
            missing.push("transport_means");
        }
        if self.wkly_study_hours.is_none() {
            missing.push("wkly_study_hours");
        }
        if self.math_score.is_none() {
            missing.push("math_score");
        }
        if self.writing_score.is_none() {
            missing.push("writing_score");
        }
        missing
    }

    /// True iff every field is set.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Convert into a submittable record, naming every missing field on failure.
    pub fn complete(&self) -> Result<StudentRecord, IncompleteForm> {
        let (
            Some(gender),
            Some(ethnic_group),
            Some(parent_educ),
            Some(lunch_type),
            Some(test_prep),
            Some(parent_marital_status),
            Some(practice_sport),
            Some(is_first_child),
            Some(nr_siblings),
            Some(transport_means),
            Some(wkly_study_hours),
            Some(math_score),
            Some(writing_score),
        ) = (
            self.gender,
            self.ethnic_group,
            self.parent_educ,
            self.lunch_type,
            self.test_prep,
            self.parent_marital_status,
            self.practice_sport,
            self.is_first_child,
            self.nr_siblings,
            self.transport_means,
            self.wkly_study_hours,
            self.math_score,
            self.writing_score,
        )
        else {
            return Err(IncompleteForm {
                missing: self.missing_fields(),
            });
        };

        Ok(StudentRecord {
            gender,
            ethnic_group,
            parent_educ,
            lunch_type,
            test_prep,
            parent_marital_status,
            practice_sport,
            is_first_child,
            nr_siblings,
            transport_means,
            wkly_study_hours,
            math_score,
            writing_score,
        })
    }
}

fn parse_token<T>(field: &'static str, raw: &str, expected: &'static str) -> Result<T, FieldError>
where
    T: FromStr,
{
    raw.trim().parse::<T>().map_err(|_| FieldError::InvalidValue {
        field,
        value: raw.trim().to_string(),
        expected,
    })
}

fn parse_bounded(
    field: &'static str,
    raw: &str,
    max: u8,
    expected: &'static str,
) -> Result<u8, FieldError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| FieldError::InvalidValue {
            field,
            value: raw.trim().to_string(),
            expected,
        })
}

/// A fully-populated, range-checked student profile.
///
/// Field names and enum tokens serialize directly to the prediction
/// service's JSON contract, in wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub gender: Gender,
    pub ethnic_group: EthnicGroup,
    pub parent_educ: ParentEduc,
    pub lunch_type: LunchType,
    pub test_prep: TestPrep,
    pub parent_marital_status: ParentMaritalStatus,
    pub practice_sport: PracticeSport,
    pub is_first_child: IsFirstChild,
    pub nr_siblings: u8,
    pub transport_means: TransportMeans,
    pub wkly_study_hours: WklyStudyHours,
    pub math_score: u8,
    pub writing_score: u8,
}

/// The form cannot be submitted because fields are unset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record is incomplete, missing: {}", missing.join(", "))]
pub struct IncompleteForm {
    /// Unset field names, in wire order.
    pub missing: Vec<&'static str>,
}

/// A fully-populated record for tests.
#[cfg(test)]
pub(crate) fn sample_record() -> StudentRecord {
    StudentRecord {
        gender: Gender::Female,
        ethnic_group: EthnicGroup::GroupC,
        parent_educ: ParentEduc::BachelorsDegree,
        lunch_type: LunchType::Standard,
        test_prep: TestPrep::None,
        parent_marital_status: ParentMaritalStatus::Married,
        practice_sport: PracticeSport::Sometimes,
        is_first_child: IsFirstChild::Yes,
        nr_siblings: 1,
        transport_means: TransportMeans::Schoolbus,
        wkly_study_hours: WklyStudyHours::Between5And10,
        math_score: 72,
        writing_score: 70,
    }
}
