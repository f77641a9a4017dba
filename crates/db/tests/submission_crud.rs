//! Repository-level tests for the submission store: registration-number
//! issuance, case-insensitive lookup, review updates, and derived stats.

use assert_matches::assert_matches;
use chrono::{Datelike, Utc};
use sqlx::PgPool;
use spmb_core::admission::{Gelombang, Jalur};
use spmb_core::error::CoreError;
use spmb_core::registration::is_valid_registration_number;
use spmb_db::models::submission::{CreateSubmission, SubmissionFilter, UpdateSubmissionReview};
use spmb_db::repositories::SubmissionRepo;

fn minimal_submission(nama: &str) -> CreateSubmission {
    CreateSubmission {
        nama_lengkap: nama.to_string(),
        tempat_lahir: None,
        tanggal_lahir: None,
        jenis_kelamin: None,
        alamat: None,
        telepon: None,
        email: None,
        nama_ayah: None,
        pekerjaan_ayah: None,
        nama_ibu: None,
        pekerjaan_ibu: None,
        telepon_wali: None,
        asal_sekolah: None,
        alamat_sekolah: None,
        prestasi: None,
        jalur_pendaftaran: Jalur::Reguler,
        gelombang_pendaftaran: Gelombang::Gelombang1,
    }
}

// ---------------------------------------------------------------------------
// Creation and registration numbers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_issues_well_formed_pending_submission(pool: PgPool) {
    let created = SubmissionRepo::create(&pool, &minimal_submission("Ahmad Fauzi Ramadhan"))
        .await
        .unwrap();

    assert!(is_valid_registration_number(&created.registration_number));
    assert_eq!(created.status, "pending");
    assert!(created.reviewed_at.is_none());
    assert!(created.reviewed_by.is_none());

    let year = Utc::now().year();
    assert!(created
        .registration_number
        .starts_with(&format!("SPMB-{year}-")));
}

#[sqlx::test(migrations = "./migrations")]
async fn registration_numbers_are_unique_across_creates(pool: PgPool) {
    let mut seen = std::collections::HashSet::new();
    for i in 0..10 {
        let created = SubmissionRepo::create(&pool, &minimal_submission(&format!("Siswa {i}")))
            .await
            .unwrap();
        assert!(
            seen.insert(created.registration_number.clone()),
            "duplicate registration number issued: {}",
            created.registration_number
        );
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_rejects_blank_name(pool: PgPool) {
    let err = SubmissionRepo::create(&pool, &minimal_submission(""))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    let err = SubmissionRepo::create(&pool, &minimal_submission("   "))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn lookup_is_case_insensitive_and_idempotent(pool: PgPool) {
    let created = SubmissionRepo::create(&pool, &minimal_submission("Siti Rahma"))
        .await
        .unwrap();

    let exact = SubmissionRepo::find_by_registration_number(&pool, &created.registration_number)
        .await
        .unwrap()
        .expect("exact-case lookup must match");
    let lower = SubmissionRepo::find_by_registration_number(
        &pool,
        &created.registration_number.to_lowercase(),
    )
    .await
    .unwrap()
    .expect("lower-case lookup must match");

    assert_eq!(exact.id, created.id);
    assert_eq!(lower.id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn lookup_of_unissued_number_returns_none(pool: PgPool) {
    let found = SubmissionRepo::find_by_registration_number(&pool, "SPMB-2025-9999")
        .await
        .unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Review updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn first_review_transition_stamps_reviewed_at_once(pool: PgPool) {
    let created = SubmissionRepo::create(&pool, &minimal_submission("Budi Hartono"))
        .await
        .unwrap();

    let reviewed = SubmissionRepo::update_review(
        &pool,
        created.id,
        &UpdateSubmissionReview {
            status: Some("reviewed".to_string()),
            notes: Some("Berkas lengkap".to_string()),
            reviewed_by: Some("admin1".to_string()),
        },
    )
    .await
    .unwrap();

    let stamped_at = reviewed.reviewed_at.expect("first review must stamp reviewed_at");
    assert_eq!(reviewed.reviewed_by.as_deref(), Some("admin1"));

    // A later transition keeps the original stamp.
    let approved = SubmissionRepo::update_review(
        &pool,
        created.id,
        &UpdateSubmissionReview {
            status: Some("approved".to_string()),
            notes: None,
            reviewed_by: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(approved.status, "approved");
    assert_eq!(approved.reviewed_at, Some(stamped_at));
    assert_eq!(approved.notes.as_deref(), Some("Berkas lengkap"));
}

#[sqlx::test(migrations = "./migrations")]
async fn status_may_move_backwards(pool: PgPool) {
    // Transitions are deliberately unguarded: approved back to pending
    // must succeed.
    let created = SubmissionRepo::create(&pool, &minimal_submission("Dewi Lestari"))
        .await
        .unwrap();

    SubmissionRepo::update_review(
        &pool,
        created.id,
        &UpdateSubmissionReview {
            status: Some("approved".to_string()),
            notes: None,
            reviewed_by: Some("admin1".to_string()),
        },
    )
    .await
    .unwrap();

    let reverted = SubmissionRepo::update_review(
        &pool,
        created.id,
        &UpdateSubmissionReview {
            status: Some("pending".to_string()),
            notes: None,
            reviewed_by: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(reverted.status, "pending");
    // The historical review stamp survives the revert.
    assert!(reverted.reviewed_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn repeating_the_same_update_is_idempotent(pool: PgPool) {
    let created = SubmissionRepo::create(&pool, &minimal_submission("Rina Wulandari"))
        .await
        .unwrap();

    let update = UpdateSubmissionReview {
        status: Some("rejected".to_string()),
        notes: Some("Kuota penuh".to_string()),
        reviewed_by: Some("admin2".to_string()),
    };

    let first = SubmissionRepo::update_review(&pool, created.id, &update).await.unwrap();
    let second = SubmissionRepo::update_review(&pool, created.id, &update).await.unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.notes, second.notes);
    assert_eq!(first.reviewed_by, second.reviewed_by);
    assert_eq!(first.reviewed_at, second.reviewed_at);
}

// ---------------------------------------------------------------------------
// Listing and stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_and_stats_agree(pool: PgPool) {
    for (nama, jalur) in [
        ("Andi Pratama", Jalur::Reguler),
        ("Citra Ayu", Jalur::Prestasi),
        ("Eko Saputra", Jalur::Reguler),
    ] {
        let mut input = minimal_submission(nama);
        input.jalur_pendaftaran = jalur;
        SubmissionRepo::create(&pool, &input).await.unwrap();
    }

    let reguler = SubmissionFilter {
        jalur: Some("reguler".to_string()),
        ..Default::default()
    };

    let listed = SubmissionRepo::list(&pool, &reguler).await.unwrap();
    let stats = SubmissionRepo::stats(&pool, &reguler).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.approved, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_matches_name_email_and_registration_number(pool: PgPool) {
    let mut input = minimal_submission("Ahmad Fauzi Ramadhan");
    input.email = Some("fauzi@example.com".to_string());
    let created = SubmissionRepo::create(&pool, &input).await.unwrap();
    SubmissionRepo::create(&pool, &minimal_submission("Lina Marlina")).await.unwrap();

    for term in ["fauzi", "FAUZI@example", &created.registration_number.to_lowercase()] {
        let filter = SubmissionFilter {
            search: Some(term.to_string()),
            ..Default::default()
        };
        let listed = SubmissionRepo::list(&pool, &filter).await.unwrap();
        assert_eq!(listed.len(), 1, "search term '{term}' should match exactly one row");
        assert_eq!(listed[0].id, created.id);
    }
}
