//! Admission submission models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spmb_core::admission::{Gelombang, Jalur};
use spmb_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/* --------------------------------------------------------------------------
   Submissions
   -------------------------------------------------------------------------- */

/// A row from the `submissions` table.
///
/// The full record is what the public status lookup returns (the portal's
/// observable behaviour; see DESIGN.md for the exposure note).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub registration_number: String,

    pub nama_lengkap: String,
    pub tempat_lahir: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub jenis_kelamin: Option<String>,
    pub alamat: Option<String>,
    pub telepon: Option<String>,
    pub email: Option<String>,

    pub nama_ayah: Option<String>,
    pub pekerjaan_ayah: Option<String>,
    pub nama_ibu: Option<String>,
    pub pekerjaan_ibu: Option<String>,
    pub telepon_wali: Option<String>,

    pub asal_sekolah: Option<String>,
    pub alamat_sekolah: Option<String>,
    pub prestasi: Option<String>,

    pub jalur_pendaftaran: String,
    pub gelombang_pendaftaran: String,

    pub status: String,
    pub notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<Timestamp>,

    pub created_at: Timestamp,
}

/// DTO for creating a new submission from the completed admission form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmission {
    pub nama_lengkap: String,
    pub tempat_lahir: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub jenis_kelamin: Option<String>,
    pub alamat: Option<String>,
    pub telepon: Option<String>,
    pub email: Option<String>,

    pub nama_ayah: Option<String>,
    pub pekerjaan_ayah: Option<String>,
    pub nama_ibu: Option<String>,
    pub pekerjaan_ibu: Option<String>,
    pub telepon_wali: Option<String>,

    pub asal_sekolah: Option<String>,
    pub alamat_sekolah: Option<String>,
    pub prestasi: Option<String>,

    pub jalur_pendaftaran: Jalur,
    pub gelombang_pendaftaran: Gelombang,
}

/// DTO for the admin review update. `status` stays a string here and is
/// validated against the status enum in the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubmissionReview {
    pub status: Option<String>,
    pub notes: Option<String>,
    pub reviewed_by: Option<String>,
}

/* --------------------------------------------------------------------------
   Filters and aggregates
   -------------------------------------------------------------------------- */

/// Filter applied to both the submission listing and its derived stats.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionFilter {
    pub status: Option<String>,
    pub jalur: Option<String>,
    /// Case-insensitive substring match over name, email, and
    /// registration number.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Derived status counts over a filtered submission set (aggregate query
/// result, never persisted).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubmissionStats {
    pub total: i64,
    pub pending: i64,
    pub reviewed: i64,
    pub approved: i64,
    pub rejected: i64,
}
