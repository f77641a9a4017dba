//! Admission domain enums and validation.
//!
//! Defines the submission status, admission track (jalur), and admission
//! wave (gelombang) enumerations plus the field validation helpers used by
//! the db and api layers.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Submission status
// ---------------------------------------------------------------------------

/// Workflow status of an admission submission.
///
/// `Pending` is the initial state. Transitions are deliberately unguarded:
/// an admin may set any status from any status, including back to
/// `Pending`. This matches the portal's observable behaviour and is a
/// documented non-invariant, not an oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Reviewed,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Parse a status string from the database or a request body.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::Validation(format!(
                "Invalid submission status '{s}'. Must be one of: pending, reviewed, approved, rejected"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

// ---------------------------------------------------------------------------
// Admission track (jalur)
// ---------------------------------------------------------------------------

/// Admission track selected by the applicant. Immutable after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jalur {
    Reguler,
    Prestasi,
}

impl Jalur {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "reguler" => Ok(Self::Reguler),
            "prestasi" => Ok(Self::Prestasi),
            _ => Err(CoreError::Validation(format!(
                "Invalid jalur '{s}'. Must be one of: reguler, prestasi"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reguler => "reguler",
            Self::Prestasi => "prestasi",
        }
    }
}

// ---------------------------------------------------------------------------
// Admission wave (gelombang)
// ---------------------------------------------------------------------------

/// Admission wave selected by the applicant. Immutable after submission.
/// Fee-discount policy per wave is handled outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gelombang {
    #[serde(rename = "gelombang-1")]
    Gelombang1,
    #[serde(rename = "gelombang-2")]
    Gelombang2,
    #[serde(rename = "gelombang-3")]
    Gelombang3,
}

impl Gelombang {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "gelombang-1" => Ok(Self::Gelombang1),
            "gelombang-2" => Ok(Self::Gelombang2),
            "gelombang-3" => Ok(Self::Gelombang3),
            _ => Err(CoreError::Validation(format!(
                "Invalid gelombang '{s}'. Must be one of: gelombang-1, gelombang-2, gelombang-3"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gelombang1 => "gelombang-1",
            Self::Gelombang2 => "gelombang-2",
            Self::Gelombang3 => "gelombang-3",
        }
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate the applicant's full name. The only field that is mandatory at
/// submission time.
pub fn validate_nama_lengkap(nama: &str) -> Result<(), CoreError> {
    if nama.trim().is_empty() {
        return Err(CoreError::Validation(
            "nama_lengkap must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional email address. Empty/absent is fine; a present
/// value must be a syntactically valid address.
pub fn validate_email(email: &Option<String>) -> Result<(), CoreError> {
    match email.as_deref() {
        None | Some("") => Ok(()),
        Some(value) if value.validate_email() => Ok(()),
        Some(value) => Err(CoreError::Validation(format!(
            "Invalid email address '{value}'"
        ))),
    }
}
