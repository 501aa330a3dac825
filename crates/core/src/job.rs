//! The canonical job-posting entity and its field vocabularies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::ExternalId;

/// How the listing is sourced. Informational; the core does not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    External,
    Internal,
}

/// Civil-service grade band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Aa,
    Ao,
    Eo,
    Heo,
    Seo,
    #[serde(rename = "grade_7")]
    Grade7,
    #[serde(rename = "grade_6")]
    Grade6,
    Scs,
}

/// Contract type of the assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentType {
    Permanent,
    FixedTerm,
    Loan,
    Secondment,
}

/// Where the work is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLocation {
    OfficeBased,
    Hybrid,
    Remote,
}

/// Working-time arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingPattern {
    FullTime,
    PartTime,
    JobShare,
    FlexibleWorking,
    CompressedHours,
}

/// Professional classification of the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    Policy,
    Digital,
    Operational,
    Finance,
    Legal,
    Hr,
    Commercial,
    Analysis,
    Other,
}

/// A structured place entry. Schema-validated on the way in; the content is
/// otherwise opaque to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub town_name: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// The canonical persisted job posting.
///
/// Always fully populated: every required field holds a validated,
/// normalized value. Construct via [`crate::validate_full`] or
/// [`crate::merge_partial`], never by hand outside tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Server-assigned surrogate key.
    pub id: Uuid,
    /// Starts at 1, bumped on every successful Replace/PartialUpdate.
    /// Informational only; not an optimistic-concurrency token.
    pub version: u32,
    pub external_id: ExternalId,
    pub approach: Approach,
    pub title: String,
    pub description: String,
    pub organisation: String,
    pub location: Vec<Location>,
    pub grade: Grade,
    pub assignment_type: AssignmentType,
    pub work_location: Vec<WorkLocation>,
    pub working_pattern: Vec<WorkingPattern>,
    pub personal_spec: String,
    pub apply_detail: String,
    pub date_posted: DateTime<Utc>,
    pub date_closing: DateTime<Utc>,
    pub profession: Profession,
    pub recruitment_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<serde_json::Value>,
}

impl JobRecord {
    /// Project this record back into a draft, for re-validation after a merge.
    pub fn to_draft(&self) -> JobDraft {
        JobDraft {
            external_id: self.external_id.as_str().to_string(),
            approach: self.approach,
            title: self.title.clone(),
            description: self.description.clone(),
            organisation: self.organisation.clone(),
            location: self.location.clone(),
            grade: self.grade,
            assignment_type: self.assignment_type,
            work_location: self.work_location.clone(),
            working_pattern: self.working_pattern.clone(),
            personal_spec: self.personal_spec.clone(),
            apply_detail: self.apply_detail.clone(),
            date_posted: self.date_posted,
            date_closing: self.date_closing,
            profession: self.profession,
            recruitment_email: self.recruitment_email.clone(),
            summary: self.summary.clone(),
            benefits: self.benefits.clone(),
            apply_url: self.apply_url.clone(),
            salary: self.salary.clone(),
        }
    }
}

/// A fully-populated candidate record as supplied by Create/Replace callers.
///
/// Enum membership and timestamp shape are enforced by deserialization;
/// emptiness, cross-field, and identifier checks happen in
/// [`crate::validate_full`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobDraft {
    /// May be omitted on Replace, where the path supplies the identifier.
    #[serde(default)]
    pub external_id: String,
    pub approach: Approach,
    pub title: String,
    pub description: String,
    pub organisation: String,
    pub location: Vec<Location>,
    pub grade: Grade,
    pub assignment_type: AssignmentType,
    pub work_location: Vec<WorkLocation>,
    pub working_pattern: Vec<WorkingPattern>,
    pub personal_spec: String,
    pub apply_detail: String,
    pub date_posted: DateTime<Utc>,
    pub date_closing: DateTime<Utc>,
    pub profession: Profession,
    pub recruitment_email: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub salary: Option<serde_json::Value>,
}
