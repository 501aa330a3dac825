//! Sparse-patch merge for partial updates.
//!
//! A [`JobPatch`] distinguishes *absent* fields (left untouched) from fields
//! explicitly set to `null` (cleared, for nullable fields; rejected, for
//! required ones) via a double-`Option` representation: the outer `Option` is
//! presence in the payload, the inner one is the JSON value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{DomainError, DomainResult};
use crate::id::ExternalId;
use crate::job::{
    Approach, AssignmentType, Grade, JobRecord, Location, Profession, WorkLocation, WorkingPattern,
};
use crate::validate::validate_full;

/// Marks a field as present, whatever its value. Combined with
/// `#[serde(default)]` this yields `None` = absent, `Some(None)` = null,
/// `Some(Some(v))` = value.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A sparse patch payload: only the fields to change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobPatch {
    #[serde(default, deserialize_with = "present")]
    pub external_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub approach: Option<Option<Approach>>,
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub organisation: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub location: Option<Option<Vec<Location>>>,
    #[serde(default, deserialize_with = "present")]
    pub grade: Option<Option<Grade>>,
    #[serde(default, deserialize_with = "present")]
    pub assignment_type: Option<Option<AssignmentType>>,
    #[serde(default, deserialize_with = "present")]
    pub work_location: Option<Option<Vec<WorkLocation>>>,
    #[serde(default, deserialize_with = "present")]
    pub working_pattern: Option<Option<Vec<WorkingPattern>>>,
    #[serde(default, deserialize_with = "present")]
    pub personal_spec: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub apply_detail: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub date_posted: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "present")]
    pub date_closing: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "present")]
    pub profession: Option<Option<Profession>>,
    #[serde(default, deserialize_with = "present")]
    pub recruitment_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub summary: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub benefits: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub apply_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<Option<serde_json::Value>>,
}

impl JobPatch {
    /// Whether the patch carries an identifier differing from `current`.
    /// An explicit `null` identifier counts as an attempted mutation too.
    pub fn external_id_conflicts_with(&self, current: &ExternalId) -> Option<String> {
        match &self.external_id {
            None => None,
            Some(None) => Some("null".to_string()),
            Some(Some(token)) => {
                let token = ExternalId::new(token.as_str());
                (token != *current).then(|| token.as_str().to_string())
            }
        }
    }
}

/// Merge a sparse patch into an existing record.
///
/// The identifier is a protected field: a patch identifier differing from
/// `existing.external_id` fails with [`DomainError::IdentifierMismatch`]
/// before anything else is looked at. Explicit `null` on a required field is
/// a validation failure. The merged result re-runs the full shape and
/// cross-field checks, since a patch can make previously-consistent fields
/// inconsistent (e.g. a new `dateClosing` before the unpatched `datePosted`).
///
/// `id`, `version`, and `external_id` are carried over from `existing`
/// untouched; bumping the version on a successful write is the caller's job.
pub fn merge_partial(existing: &JobRecord, patch: JobPatch) -> DomainResult<JobRecord> {
    if let Some(found) = patch.external_id_conflicts_with(&existing.external_id) {
        return Err(DomainError::identifier_mismatch(
            existing.external_id.as_str(),
            found,
        ));
    }

    let mut draft = existing.to_draft();
    let mut nulled: Vec<String> = Vec::new();

    apply(&mut draft.approach, patch.approach, "approach", &mut nulled);
    apply(&mut draft.title, patch.title, "title", &mut nulled);
    apply(&mut draft.description, patch.description, "description", &mut nulled);
    apply(&mut draft.organisation, patch.organisation, "organisation", &mut nulled);
    apply(&mut draft.location, patch.location, "location", &mut nulled);
    apply(&mut draft.grade, patch.grade, "grade", &mut nulled);
    apply(&mut draft.assignment_type, patch.assignment_type, "assignmentType", &mut nulled);
    apply(&mut draft.work_location, patch.work_location, "workLocation", &mut nulled);
    apply(&mut draft.working_pattern, patch.working_pattern, "workingPattern", &mut nulled);
    apply(&mut draft.personal_spec, patch.personal_spec, "personalSpec", &mut nulled);
    apply(&mut draft.apply_detail, patch.apply_detail, "applyDetail", &mut nulled);
    apply(&mut draft.date_posted, patch.date_posted, "datePosted", &mut nulled);
    apply(&mut draft.date_closing, patch.date_closing, "dateClosing", &mut nulled);
    apply(&mut draft.profession, patch.profession, "profession", &mut nulled);
    apply(&mut draft.recruitment_email, patch.recruitment_email, "recruitmentEmail", &mut nulled);

    // Nullable fields: explicit null clears.
    if let Some(v) = patch.summary {
        draft.summary = v;
    }
    if let Some(v) = patch.benefits {
        draft.benefits = v;
    }
    if let Some(v) = patch.apply_url {
        draft.apply_url = v;
    }
    if let Some(v) = patch.salary {
        draft.salary = v;
    }

    if !nulled.is_empty() {
        return Err(DomainError::Validation { fields: nulled });
    }

    let merged = validate_full(draft)?;
    Ok(JobRecord {
        id: existing.id,
        version: existing.version,
        external_id: existing.external_id.clone(),
        ..merged
    })
}

/// Required field: a present value overwrites, an explicit null is recorded
/// as a violation, absence leaves the existing value alone.
fn apply<T>(slot: &mut T, patched: Option<Option<T>>, field: &str, nulled: &mut Vec<String>) {
    match patched {
        None => {}
        Some(None) => nulled.push(field.to_string()),
        Some(Some(value)) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::draft;
    use proptest::prelude::*;
    use serde_json::json;

    fn existing() -> JobRecord {
        validate_full(draft("ext-1")).unwrap()
    }

    fn patch_from(value: serde_json::Value) -> JobPatch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_patch_leaves_record_unchanged() {
        let record = existing();
        let merged = merge_partial(&record, JobPatch::default()).unwrap();
        assert_eq!(merged, record);
    }

    #[test]
    fn patched_field_overwrites_only_that_field() {
        let record = existing();
        let merged = merge_partial(&record, patch_from(json!({"title": "B"}))).unwrap();

        assert_eq!(merged.title, "B");
        assert_eq!(
            JobRecord { title: record.title.clone(), ..merged },
            record
        );
    }

    #[test]
    fn matching_identifier_in_patch_is_accepted() {
        let record = existing();
        let merged =
            merge_partial(&record, patch_from(json!({"externalId": "ext-1", "title": "B"})))
                .unwrap();
        assert_eq!(merged.external_id.as_str(), "ext-1");
        assert_eq!(merged.title, "B");
    }

    #[test]
    fn divergent_identifier_is_an_immutability_violation() {
        let record = existing();
        let err = merge_partial(&record, patch_from(json!({"externalId": "other-id"}))).unwrap_err();
        assert_eq!(
            err,
            DomainError::IdentifierMismatch {
                expected: "ext-1".to_string(),
                found: "other-id".to_string(),
            }
        );
    }

    #[test]
    fn null_identifier_is_an_immutability_violation() {
        let record = existing();
        let err = merge_partial(&record, patch_from(json!({"externalId": null}))).unwrap_err();
        assert!(matches!(err, DomainError::IdentifierMismatch { .. }));
    }

    #[test]
    fn null_on_required_field_is_rejected() {
        let record = existing();
        let err = merge_partial(&record, patch_from(json!({"title": null}))).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation { fields: vec!["title".to_string()] }
        );
    }

    #[test]
    fn null_on_nullable_field_clears_it() {
        let mut record = existing();
        record.summary = Some("Old summary".to_string());

        let merged = merge_partial(&record, patch_from(json!({"summary": null}))).unwrap();
        assert_eq!(merged.summary, None);

        let merged = merge_partial(&record, patch_from(json!({"summary": "New"}))).unwrap();
        assert_eq!(merged.summary, Some("New".to_string()));
    }

    #[test]
    fn patched_closing_date_is_checked_against_unpatched_posting_date() {
        let mut record = existing();
        record.date_posted = "2025-02-01T00:00:00Z".parse().unwrap();
        record.date_closing = "2025-03-01T00:00:00Z".parse().unwrap();

        let err = merge_partial(
            &record,
            patch_from(json!({"dateClosing": "2025-01-01T00:00:00Z"})),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation { fields: vec!["dateClosing".to_string()] }
        );
    }

    #[test]
    fn empty_string_on_required_field_is_rejected() {
        let record = existing();
        let err = merge_partial(&record, patch_from(json!({"organisation": "   "}))).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation { fields: vec!["organisation".to_string()] }
        );
    }

    #[test]
    fn unknown_patch_fields_are_rejected_at_deserialization() {
        let result: Result<JobPatch, _> = serde_json::from_value(json!({"titel": "B"}));
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn title_patch_preserves_every_other_field(title in "[a-zA-Z][a-zA-Z ]{0,39}") {
            let record = existing();
            let merged = merge_partial(&record, patch_from(json!({"title": title.clone()}))).unwrap();

            prop_assert_eq!(merged.title.as_str(), title.trim());
            prop_assert_eq!(JobRecord { title: record.title.clone(), ..merged }, record);
        }

        #[test]
        fn merge_is_idempotent_for_summary_patches(summary in proptest::option::of("[a-zA-Z ]{1,20}")) {
            let record = existing();
            let patch = json!({"summary": summary});
            let once = merge_partial(&record, patch_from(patch.clone())).unwrap();
            let twice = merge_partial(&once, patch_from(patch)).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
