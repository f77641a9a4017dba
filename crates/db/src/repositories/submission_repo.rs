//! Repository for the `submissions` table.
//!
//! Owns registration-number issuance: candidate numbers are generated from
//! the highest sequence already stored for the year, and the unique index
//! on `LOWER(registration_number)` is the source of truth. A concurrent
//! insert that loses the race is retried with a fresh candidate, bounded
//! by [`MAX_GENERATION_ATTEMPTS`].

use chrono::{Datelike, Utc};
use sqlx::PgPool;
use spmb_core::admission::{validate_email, validate_nama_lengkap};
use spmb_core::error::CoreError;
use spmb_core::registration::{
    format_registration_number, next_sequence, MAX_GENERATION_ATTEMPTS, REGISTRATION_PREFIX,
};
use spmb_core::types::DbId;

use crate::models::submission::{
    CreateSubmission, Submission, SubmissionFilter, SubmissionStats, UpdateSubmissionReview,
};
use crate::{clamp_limit, clamp_offset};

/// Column list for `submissions` queries.
const COLUMNS: &str = "\
    id, registration_number, nama_lengkap, tempat_lahir, tanggal_lahir, \
    jenis_kelamin, alamat, telepon, email, nama_ayah, pekerjaan_ayah, \
    nama_ibu, pekerjaan_ibu, telepon_wali, asal_sekolah, alamat_sekolah, \
    prestasi, jalur_pendaftaran, gelombang_pendaftaran, status, notes, \
    reviewed_by, reviewed_at, created_at";

/// Shared WHERE clause for `list` and `stats`, so the derived counts always
/// describe exactly the filtered set being listed.
const FILTER_CLAUSE: &str = "\
    ($1::TEXT IS NULL OR status = $1) \
    AND ($2::TEXT IS NULL OR jalur_pendaftaran = $2) \
    AND ($3::TEXT IS NULL \
         OR nama_lengkap ILIKE '%' || $3 || '%' \
         OR email ILIKE '%' || $3 || '%' \
         OR registration_number ILIKE '%' || $3 || '%')";

/// Provides CRUD operations and registration-number issuance for
/// admission submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Persist a new submission with a freshly issued registration number.
    ///
    /// Status starts at `pending`; `created_at` is stamped by the store.
    /// Fails with a validation error when the full name is blank, and with
    /// an internal error when candidate generation keeps colliding past
    /// the attempt bound.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, CoreError> {
        validate_nama_lengkap(&input.nama_lengkap)?;
        validate_email(&input.email)?;

        let year = Utc::now().year();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let highest = Self::highest_sequence(pool, year)
                .await
                .map_err(|e| CoreError::Internal(e.to_string()))?;
            let number = format_registration_number(year, next_sequence(highest));

            match Self::insert(pool, &number, input).await {
                Ok(submission) => return Ok(submission),
                Err(err) if is_unique_violation(&err) => {
                    tracing::warn!(
                        attempt,
                        registration_number = %number,
                        "Registration number collision, regenerating"
                    );
                }
                Err(err) => return Err(CoreError::Internal(err.to_string())),
            }
        }

        Err(CoreError::Internal(format!(
            "Could not issue a unique registration number after {MAX_GENERATION_ATTEMPTS} attempts"
        )))
    }

    /// Highest sequence value already issued for a year, if any.
    async fn highest_sequence(pool: &PgPool, year: i32) -> Result<Option<u32>, sqlx::Error> {
        let prefix = format!("{REGISTRATION_PREFIX}-{year:04}-%");
        let max: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(SPLIT_PART(registration_number, '-', 3)::BIGINT) \
             FROM submissions \
             WHERE registration_number LIKE $1",
        )
        .bind(&prefix)
        .fetch_one(pool)
        .await?;

        Ok(max.map(|n| n as u32))
    }

    async fn insert(
        pool: &PgPool,
        registration_number: &str,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions \
                (registration_number, nama_lengkap, tempat_lahir, tanggal_lahir, \
                 jenis_kelamin, alamat, telepon, email, nama_ayah, pekerjaan_ayah, \
                 nama_ibu, pekerjaan_ibu, telepon_wali, asal_sekolah, alamat_sekolah, \
                 prestasi, jalur_pendaftaran, gelombang_pendaftaran) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                     $15, $16, $17, $18) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(registration_number)
            .bind(&input.nama_lengkap)
            .bind(&input.tempat_lahir)
            .bind(input.tanggal_lahir)
            .bind(&input.jenis_kelamin)
            .bind(&input.alamat)
            .bind(&input.telepon)
            .bind(&input.email)
            .bind(&input.nama_ayah)
            .bind(&input.pekerjaan_ayah)
            .bind(&input.nama_ibu)
            .bind(&input.pekerjaan_ibu)
            .bind(&input.telepon_wali)
            .bind(&input.asal_sekolah)
            .bind(&input.alamat_sekolah)
            .bind(&input.prestasi)
            .bind(input.jalur_pendaftaran.as_str())
            .bind(input.gelombang_pendaftaran.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a submission by registration number, case-insensitive exact
    /// match. This is the public status-lookup path.
    pub async fn find_by_registration_number(
        pool: &PgPool,
        registration_number: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions \
             WHERE LOWER(registration_number) = LOWER($1)"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(registration_number)
            .fetch_optional(pool)
            .await
    }

    /// List submissions matching the filter, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions \
             WHERE {FILTER_CLAUSE} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&filter.status)
            .bind(&filter.jalur)
            .bind(&filter.search)
            .bind(clamp_limit(filter.limit))
            .bind(clamp_offset(filter.offset))
            .fetch_all(pool)
            .await
    }

    /// Derived status counts over the same filtered set as [`Self::list`]
    /// (pagination excluded).
    pub async fn stats(
        pool: &PgPool,
        filter: &SubmissionFilter,
    ) -> Result<SubmissionStats, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                    COUNT(*) FILTER (WHERE status = 'reviewed') AS reviewed, \
                    COUNT(*) FILTER (WHERE status = 'approved') AS approved, \
                    COUNT(*) FILTER (WHERE status = 'rejected') AS rejected \
             FROM submissions \
             WHERE {FILTER_CLAUSE}"
        );
        sqlx::query_as::<_, SubmissionStats>(&query)
            .bind(&filter.status)
            .bind(&filter.jalur)
            .bind(&filter.search)
            .fetch_one(pool)
            .await
    }

    /// Apply an admin review update: status, notes, and reviewer are
    /// patched; `reviewed_at` is stamped exactly once, on the first
    /// transition away from `pending`, and never overwritten afterwards.
    ///
    /// Repeating the same update is safe; transitions are deliberately
    /// unguarded (any status to any status).
    pub async fn update_review(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubmissionReview,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET \
                status = COALESCE($1, status), \
                notes = COALESCE($2, notes), \
                reviewed_by = COALESCE($3, reviewed_by), \
                reviewed_at = CASE \
                    WHEN reviewed_at IS NULL AND COALESCE($1, status) <> 'pending' \
                    THEN now() \
                    ELSE reviewed_at \
                END \
             WHERE id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(&input.reviewed_by)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

/// Whether a sqlx error is a PostgreSQL unique constraint violation
/// (error code 23505).
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
