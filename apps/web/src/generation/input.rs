//! Submission input and the required-field check that runs before any network call.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::llm_client::Credential;

/// One of the user-editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ApiKey,
    JobDescription,
    Qualifications,
    CurrentResume,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::ApiKey => "API key",
            Field::JobDescription => "job description",
            Field::Qualifications => "qualifications",
            Field::CurrentResume => "current resume",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which fields a deployment treats as mandatory.
///
/// API key, job description and current resume are always required.
/// Qualifications are optional unless the stricter variant is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredFields {
    pub qualifications: bool,
}

impl RequiredFields {
    pub fn fields(self) -> Vec<Field> {
        let mut fields = vec![Field::ApiKey, Field::JobDescription];
        if self.qualifications {
            fields.push(Field::Qualifications);
        }
        fields.push(Field::CurrentResume);
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields (missing: {})", join_labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything one submission needs. Built from the form state on trigger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionInput {
    pub credential: Credential,
    pub job_description: String,
    pub qualifications: String,
    pub current_resume: String,
}

impl SubmissionInput {
    fn is_blank(&self, field: Field) -> bool {
        match field {
            Field::ApiKey => self.credential.is_blank(),
            Field::JobDescription => self.job_description.trim().is_empty(),
            Field::Qualifications => self.qualifications.trim().is_empty(),
            Field::CurrentResume => self.current_resume.trim().is_empty(),
        }
    }

    /// Checks that every mandatory field is present. Pure: the same input
    /// always yields the same verdict.
    pub fn validate(&self, required: RequiredFields) -> Result<(), ValidationError> {
        let missing: Vec<Field> = required
            .fields()
            .into_iter()
            .filter(|&f| self.is_blank(f))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    pub fn has_qualifications(&self) -> bool {
        !self.is_blank(Field::Qualifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionInput {
        SubmissionInput {
            credential: Credential::new("sk-test"),
            job_description: "Senior Rust Engineer".to_string(),
            qualifications: "8 years of systems work".to_string(),
            current_resume: "Jane Doe — Engineer".to_string(),
        }
    }

    #[test]
    fn test_missing_credential_is_rejected() {
        let input = SubmissionInput {
            credential: Credential::default(),
            job_description: "X".to_string(),
            qualifications: String::new(),
            current_resume: "Y".to_string(),
        };
        let err = input.validate(RequiredFields::default()).unwrap_err();
        assert_eq!(err.missing, vec![Field::ApiKey]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (missing: API key)"
        );
    }

    #[test]
    fn test_qualifications_optional_by_default() {
        let mut input = filled();
        input.qualifications.clear();
        assert!(input.validate(RequiredFields::default()).is_ok());
        assert!(!input.has_qualifications());
    }

    #[test]
    fn test_strict_variant_requires_qualifications() {
        let mut input = filled();
        input.qualifications.clear();
        let err = input
            .validate(RequiredFields {
                qualifications: true,
            })
            .unwrap_err();
        assert_eq!(err.missing, vec![Field::Qualifications]);
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut input = filled();
        input.job_description = "   \n\t".to_string();
        input.current_resume = " ".to_string();
        let err = input.validate(RequiredFields::default()).unwrap_err();
        assert_eq!(err.missing, vec![Field::JobDescription, Field::CurrentResume]);
    }

    #[test]
    fn test_all_missing_listed_in_form_order() {
        let err = SubmissionInput::default()
            .validate(RequiredFields {
                qualifications: true,
            })
            .unwrap_err();
        assert_eq!(
            err.missing,
            vec![
                Field::ApiKey,
                Field::JobDescription,
                Field::Qualifications,
                Field::CurrentResume
            ]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut input = filled();
        input.credential = Credential::default();
        let first = input.validate(RequiredFields::default());
        let second = input.validate(RequiredFields::default());
        assert_eq!(first, second);

        let ok = filled();
        assert_eq!(
            ok.validate(RequiredFields::default()),
            ok.validate(RequiredFields::default())
        );
    }
}
