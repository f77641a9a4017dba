//! Integration tests for the admission submission workflow: creation,
//! listing with stats, and the admin review update.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;
use spmb_core::registration::is_valid_registration_number;

fn full_payload(nama: &str) -> serde_json::Value {
    json!({
        "nama_lengkap": nama,
        "tempat_lahir": "Bandung",
        "tanggal_lahir": "2010-04-17",
        "jenis_kelamin": "L",
        "alamat": "Jl. Merdeka No. 10, Bandung",
        "telepon": "081234567890",
        "email": "fauzi@example.com",
        "nama_ayah": "Budi Santoso",
        "pekerjaan_ayah": "Wiraswasta",
        "nama_ibu": "Siti Aminah",
        "pekerjaan_ibu": "Guru",
        "telepon_wali": "081298765432",
        "asal_sekolah": "SDN 1 Bandung",
        "alamat_sekolah": "Jl. Asia Afrika No. 5",
        "prestasi": "Juara 1 OSN Matematika",
        "jalur_pendaftaran": "reguler",
        "gelombang_pendaftaran": "gelombang-1"
    })
}

// ---------------------------------------------------------------------------
// Test: end-to-end submit -> lookup -> approve -> lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_lifecycle_end_to_end(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Submit the completed form.
    let response = post_json(
        app.clone(),
        "/api/v1/submissions",
        full_payload("Ahmad Fauzi Ramadhan"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["success"], true);

    let registration_number = created["data"]["registration_number"]
        .as_str()
        .expect("registration_number must be a string")
        .to_string();
    assert!(
        is_valid_registration_number(&registration_number),
        "got {registration_number}"
    );
    let id = created["data"]["id"].as_i64().unwrap();

    // Public lookup shows the fresh submission as pending.
    let response = get(
        app.clone(),
        &format!("/api/v1/submissions/lookup/{registration_number}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let looked_up = body_json(response).await;
    assert_eq!(looked_up["data"]["found"], true);
    assert_eq!(looked_up["data"]["submission"]["status"], "pending");
    assert!(looked_up["data"]["submission"]["reviewed_at"].is_null());

    // Admin approves with notes.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/submissions/{id}"),
        json!({ "status": "approved", "notes": "OK", "reviewed_by": "admin1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Lookup reflects the review.
    let response = get(
        app.clone(),
        &format!("/api/v1/submissions/lookup/{registration_number}"),
    )
    .await;
    let looked_up = body_json(response).await;
    let submission = &looked_up["data"]["submission"];
    assert_eq!(submission["status"], "approved");
    assert_eq!(submission["notes"], "OK");
    assert_eq!(submission["reviewed_by"], "admin1");
    assert!(!submission["reviewed_at"].is_null());
}

// ---------------------------------------------------------------------------
// Test: creation validates the mandatory full name
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_name_is_rejected_without_losing_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/submissions", full_payload("   ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("nama_lengkap"));
}

// ---------------------------------------------------------------------------
// Test: listing carries derived stats over the filtered set
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_includes_stats_for_the_filtered_set(pool: PgPool) {
    let app = common::build_test_app(pool);

    for nama in ["Andi Pratama", "Citra Ayu", "Eko Saputra"] {
        let response = post_json(app.clone(), "/api/v1/submissions", full_payload(nama)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/submissions?status=pending").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["submissions"].as_array().unwrap().len(), 3);
    assert_eq!(data["stats"]["total"], 3);
    assert_eq!(data["stats"]["pending"], 3);
    assert_eq!(data["stats"]["approved"], 0);

    // Search narrows both the rows and the stats.
    let response = get(app, "/api/v1/submissions?search=citra").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["submissions"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["stats"]["total"], 1);
}

// ---------------------------------------------------------------------------
// Test: transitions are unguarded, approved -> pending included
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn approved_submission_may_return_to_pending(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/submissions", full_payload("Dewi Lestari")).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/submissions/{id}"),
        json!({ "status": "approved", "reviewed_by": "admin1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Moving backwards must be allowed, not rejected.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/submissions/{id}"),
        json!({ "status": "pending" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "pending");
}

// ---------------------------------------------------------------------------
// Test: reviewed_at is stamped once and survives later transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn reviewed_at_is_set_once(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/submissions", full_payload("Rina Wulandari")).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/submissions/{id}"),
        json!({ "status": "reviewed", "reviewed_by": "admin1" }),
    )
    .await;
    let first = body_json(response).await;
    let stamped_at = first["data"]["reviewed_at"]
        .as_str()
        .expect("first review must stamp reviewed_at")
        .to_string();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/submissions/{id}"),
        json!({ "status": "approved" }),
    )
    .await;
    let second = body_json(response).await;
    assert_eq!(second["data"]["reviewed_at"], stamped_at.as_str());
}

// ---------------------------------------------------------------------------
// Test: invalid status strings and unknown ids are rejected cleanly
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_status_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/submissions", full_payload("Budi Hartono")).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/submissions/{id}"),
        json!({ "status": "done", "reviewed_by": "admin1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updating_an_unknown_submission_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_json(
        app,
        "/api/v1/submissions/999999",
        json!({ "status": "approved", "reviewed_by": "admin1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: first review without a reviewer is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn first_review_requires_a_reviewer(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/submissions", full_payload("Lina Marlina")).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/submissions/{id}"),
        json!({ "status": "approved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"]
        .as_str()
        .unwrap()
        .contains("reviewed_by"));
}
