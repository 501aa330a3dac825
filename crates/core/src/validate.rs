//! Full-candidate validation and normalization.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::id::ExternalId;
use crate::job::{JobDraft, JobRecord, Location, WorkLocation, WorkingPattern};

/// Validate a fully-populated candidate and produce the normalized record.
///
/// All offending fields are collected into a single
/// [`DomainError::Validation`], reported under their wire (camelCase) names.
/// On success the record is normalized: strings trimmed, empty optionals
/// collapsed to `None`, enum sets de-duplicated, and a fresh surrogate id
/// assigned with `version = 1` (callers replacing an existing record carry
/// over the stored id/version afterwards).
pub fn validate_full(draft: JobDraft) -> DomainResult<JobRecord> {
    let mut fields: Vec<String> = Vec::new();

    let external_id = ExternalId::new(draft.external_id);

    let title = required_text("title", draft.title, &mut fields);
    let description = required_text("description", draft.description, &mut fields);
    let organisation = required_text("organisation", draft.organisation, &mut fields);
    let location = normalize_locations(draft.location, &mut fields);
    let work_location = required_set("workLocation", draft.work_location, &mut fields);
    let working_pattern = required_set("workingPattern", draft.working_pattern, &mut fields);
    let personal_spec = required_text("personalSpec", draft.personal_spec, &mut fields);
    let apply_detail = required_text("applyDetail", draft.apply_detail, &mut fields);

    let recruitment_email = draft.recruitment_email.trim().to_string();
    if !is_email_shaped(&recruitment_email) {
        fields.push("recruitmentEmail".to_string());
    }

    if draft.date_closing < draft.date_posted {
        fields.push("dateClosing".to_string());
    }

    if !external_id.is_valid() {
        fields.push("externalId".to_string());
    }

    if !fields.is_empty() {
        return Err(DomainError::Validation { fields });
    }

    Ok(JobRecord {
        id: Uuid::now_v7(),
        version: 1,
        external_id,
        approach: draft.approach,
        title,
        description,
        organisation,
        location,
        grade: draft.grade,
        assignment_type: draft.assignment_type,
        work_location,
        working_pattern,
        personal_spec,
        apply_detail,
        date_posted: draft.date_posted,
        date_closing: draft.date_closing,
        profession: draft.profession,
        recruitment_email,
        summary: optional_text(draft.summary),
        benefits: optional_text(draft.benefits),
        apply_url: optional_text(draft.apply_url),
        salary: draft.salary,
    })
}

fn required_text(field: &str, value: String, fields: &mut Vec<String>) -> String {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        fields.push(field.to_string());
    }
    trimmed
}

/// Nullable free-text: an empty or whitespace-only value is equivalent to
/// absent.
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_locations(locations: Vec<Location>, fields: &mut Vec<String>) -> Vec<Location> {
    let normalized: Vec<Location> = locations
        .into_iter()
        .map(|l| Location {
            town_name: l.town_name.trim().to_string(),
            region: l.region.trim().to_string(),
            latitude: l.latitude,
            longitude: l.longitude,
        })
        .collect();

    if normalized.is_empty()
        || normalized
            .iter()
            .any(|l| l.town_name.is_empty() || l.region.is_empty())
    {
        fields.push("location".to_string());
    }
    normalized
}

/// Ordered set semantics: duplicates dropped, first occurrence wins.
fn required_set<T: Copy + PartialEq>(field: &str, values: Vec<T>, fields: &mut Vec<String>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    if out.is_empty() {
        fields.push(field.to_string());
    }
    out
}

/// Minimal email shape check: exactly one `@`, non-empty local part, and a
/// dotted domain with no whitespace. Deliverability is not our concern.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::draft;

    #[test]
    fn valid_draft_is_normalized() {
        let mut d = draft("ext-1");
        d.title = "  Backend Engineer  ".to_string();
        d.summary = Some("   ".to_string());
        d.work_location = vec![WorkLocation::Hybrid, WorkLocation::Hybrid];

        let record = validate_full(d).unwrap();
        assert_eq!(record.title, "Backend Engineer");
        assert_eq!(record.summary, None);
        assert_eq!(record.work_location, vec![WorkLocation::Hybrid]);
        assert_eq!(record.version, 1);
        assert_eq!(record.external_id.as_str(), "ext-1");
    }

    #[test]
    fn empty_required_fields_are_all_reported() {
        let mut d = draft("ext-1");
        d.title = "   ".to_string();
        d.personal_spec = String::new();

        let err = validate_full(d).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["title".to_string(), "personalSpec".to_string()]
            }
        );
    }

    #[test]
    fn closing_before_posting_names_date_closing() {
        let mut d = draft("ext-1");
        d.date_posted = "2025-02-01T00:00:00Z".parse().unwrap();
        d.date_closing = "2025-01-01T00:00:00Z".parse().unwrap();

        let err = validate_full(d).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["dateClosing".to_string()]
            }
        );
    }

    #[test]
    fn closing_equal_to_posting_is_accepted() {
        let mut d = draft("ext-1");
        d.date_posted = "2025-01-01T00:00:00Z".parse().unwrap();
        d.date_closing = d.date_posted;
        assert!(validate_full(d).is_ok());
    }

    #[test]
    fn blank_external_id_is_rejected() {
        let err = validate_full(draft("   ")).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["externalId".to_string()]
            }
        );
    }

    #[test]
    fn empty_location_list_is_rejected() {
        let mut d = draft("ext-1");
        d.location.clear();
        let err = validate_full(d).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["location".to_string()]
            }
        );
    }

    #[test]
    fn email_shape_check() {
        for good in ["jobs@example.com", "a.b+c@sub.example.co.uk"] {
            assert!(is_email_shaped(good), "{good}");
        }
        for bad in ["", "jobs", "@example.com", "jobs@", "jobs@example", "a b@x.com", "jobs@exa mple.com", "jobs@example..com"] {
            assert!(!is_email_shaped(bad), "{bad}");
        }
    }
}
