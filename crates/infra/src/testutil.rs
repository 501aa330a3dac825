//! Shared test helpers.

use chrono::{Duration, Utc};

use jobboard_core::{
    Approach, AssignmentType, Grade, JobDraft, Location, Profession, WorkLocation, WorkingPattern,
};

/// A valid, fully-populated draft posting.
pub(crate) fn draft(external_id: &str) -> JobDraft {
    let now = Utc::now();
    JobDraft {
        external_id: external_id.to_string(),
        approach: Approach::External,
        title: "Backend Engineer".to_string(),
        description: "Build APIs".to_string(),
        organisation: "Cabinet Office".to_string(),
        location: vec![Location {
            town_name: "London".to_string(),
            region: "London".to_string(),
            latitude: Some(51.5),
            longitude: Some(-0.1),
        }],
        grade: Grade::Grade7,
        assignment_type: AssignmentType::Permanent,
        work_location: vec![WorkLocation::OfficeBased],
        working_pattern: vec![WorkingPattern::FullTime],
        personal_spec: "Experienced engineer".to_string(),
        apply_detail: "Send CV".to_string(),
        date_posted: now,
        date_closing: now + Duration::days(7),
        profession: Profession::Policy,
        recruitment_email: "jobs@example.com".to_string(),
        summary: None,
        benefits: None,
        apply_url: None,
        salary: None,
    }
}
