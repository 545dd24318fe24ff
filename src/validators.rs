// Input validation for create and status-update payloads. Create checks
// collect every violation into one message so a client sees the full list
// in a single round trip.
use thiserror::Error;

use crate::error::ApiError;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.0)
    }
}

/// Validates a new job listing. Title, company and apply link are required
/// and must not be blank after trimming; lengths are capped per field; the
/// apply link must look like an http(s) URL.
pub fn validate_create_job(
    title: Option<&str>,
    company: Option<&str>,
    location: Option<&str>,
    apply_link: Option<&str>,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if is_blank(title) {
        errors.push("Title is required");
    }
    if is_blank(company) {
        errors.push("Company name is required");
    }
    if is_blank(apply_link) {
        errors.push("Apply link is required");
    }

    if exceeds(title, 200) {
        errors.push("Title cannot exceed 200 characters");
    }
    if exceeds(company, 100) {
        errors.push("Company name cannot exceed 100 characters");
    }
    if exceeds(location, 100) {
        errors.push("Location cannot exceed 100 characters");
    }
    if exceeds(apply_link, 500) {
        errors.push("Apply link cannot exceed 500 characters");
    }

    if let Some(link) = present(apply_link) {
        if !is_valid_url(link) {
            errors.push("Apply link must be a valid URL");
        }
    }

    collect(errors)
}

/// Validates a new news item. Title and summary are required; the source
/// link is optional but checked for shape and length when present.
pub fn validate_create_news(
    title: Option<&str>,
    summary: Option<&str>,
    source_link: Option<&str>,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if is_blank(title) {
        errors.push("Title is required");
    }
    if is_blank(summary) {
        errors.push("Summary is required");
    }

    if exceeds(title, 300) {
        errors.push("Title cannot exceed 300 characters");
    }
    if exceeds(summary, 1000) {
        errors.push("Summary cannot exceed 1000 characters");
    }
    if exceeds(source_link, 500) {
        errors.push("Source link cannot exceed 500 characters");
    }

    if let Some(link) = present(source_link) {
        if !is_valid_url(link) {
            errors.push("Source link must be a valid URL");
        }
    }

    collect(errors)
}

/// Validates a status-update payload against the resource's allowed set and
/// returns the accepted value.
pub fn validate_update_status<'a>(
    status: Option<&'a str>,
    allowed: &[&str],
) -> Result<&'a str, ValidationError> {
    let value = match present(status) {
        Some(v) => v,
        None => return Err(ValidationError("Status is required".to_string())),
    };

    if !allowed.contains(&value) {
        return Err(ValidationError(format!(
            "Invalid status. Must be: {}",
            allowed.join(", ")
        )));
    }

    Ok(value)
}

fn collect(errors: Vec<&str>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(errors.join(", ")))
    }
}

/// Treats an empty string like an absent field.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Length in characters, checked only when the field is present.
fn exceeds(value: Option<&str>, max: usize) -> bool {
    present(value).map_or(false, |v| v.chars().count() > max)
}

fn is_valid_url(value: &str) -> bool {
    value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .map_or(false, |rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_job_collects_all_required_errors() {
        let err = validate_create_job(None, None, None, None).unwrap_err();
        assert_eq!(
            err.0,
            "Title is required, Company name is required, Apply link is required"
        );
    }

    #[test]
    fn create_job_whitespace_is_blank() {
        let err = validate_create_job(Some("   "), Some("acme"), None, Some("https://a.co"))
            .unwrap_err();
        assert_eq!(err.0, "Title is required");
    }

    #[test]
    fn create_job_length_caps() {
        let long_title = "x".repeat(201);
        let err =
            validate_create_job(Some(&long_title), Some("acme"), None, Some("https://a.co"))
                .unwrap_err();
        assert_eq!(err.0, "Title cannot exceed 200 characters");
    }

    #[test]
    fn create_job_rejects_non_http_link() {
        let err = validate_create_job(Some("T"), Some("C"), None, Some("ftp://files"))
            .unwrap_err();
        assert_eq!(err.0, "Apply link must be a valid URL");
    }

    #[test]
    fn create_job_rejects_scheme_without_host() {
        let err =
            validate_create_job(Some("T"), Some("C"), None, Some("https://")).unwrap_err();
        assert_eq!(err.0, "Apply link must be a valid URL");
    }

    #[test]
    fn create_job_accepts_valid_payload() {
        assert!(validate_create_job(
            Some("Engineer"),
            Some("Acme"),
            Some("Berlin"),
            Some("https://acme.dev/jobs/1"),
        )
        .is_ok());
    }

    #[test]
    fn create_job_aggregates_mixed_errors() {
        let long_location = "x".repeat(101);
        let err = validate_create_job(None, Some("acme"), Some(&long_location), Some("nope"))
            .unwrap_err();
        assert_eq!(
            err.0,
            "Title is required, Location cannot exceed 100 characters, \
             Apply link must be a valid URL"
        );
    }

    #[test]
    fn create_news_requires_title_and_summary() {
        let err = validate_create_news(None, None, None).unwrap_err();
        assert_eq!(err.0, "Title is required, Summary is required");
    }

    #[test]
    fn create_news_link_is_optional() {
        assert!(validate_create_news(Some("T"), Some("S"), None).is_ok());
    }

    #[test]
    fn create_news_checks_link_when_present() {
        let err = validate_create_news(Some("T"), Some("S"), Some("not-a-url")).unwrap_err();
        assert_eq!(err.0, "Source link must be a valid URL");
    }

    #[test]
    fn status_missing_or_empty_is_required() {
        let allowed = &["active", "expired", "closed"];
        assert_eq!(
            validate_update_status(None, allowed).unwrap_err().0,
            "Status is required"
        );
        assert_eq!(
            validate_update_status(Some(""), allowed).unwrap_err().0,
            "Status is required"
        );
    }

    #[test]
    fn status_outside_allowed_set_rejected() {
        let err = validate_update_status(Some("bogus"), &["active", "expired", "closed"])
            .unwrap_err();
        assert_eq!(err.0, "Invalid status. Must be: active, expired, closed");
    }

    #[test]
    fn status_member_returns_value() {
        let status = validate_update_status(Some("expired"), &["active", "expired", "closed"]);
        assert_eq!(status, Ok("expired"));
    }
}
