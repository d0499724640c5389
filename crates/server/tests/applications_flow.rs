use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::{app_with_store, build_app, get, post_form, FailingStore};

#[tokio::test]
async fn test_submit_application_with_resume() -> anyhow::Result<()> {
    let (_, app) = build_app();
    let (status, body) = post_form(
        &app,
        "/applications",
        &[("jobId", "job-1"), ("userId", "u-1"), ("cover-letter", "Hire me"), ("phone", "555-0100")],
        true,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Application submitted successfully");
    let app_rec = &body["application"];
    assert_eq!(app_rec["jobId"], "job-1");
    assert_eq!(app_rec["userId"], "u-1");
    assert_eq!(app_rec["coverLetter"], "Hire me");
    assert_eq!(app_rec["phone"], "555-0100");
    assert_eq!(app_rec["resumeUrl"], "placeholder-resume-url.pdf");
    assert_eq!(app_rec["status"], "pending");
    assert!(app_rec["appliedAt"].is_string());
    assert!(app_rec["id"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_application_is_rejected() -> anyhow::Result<()> {
    let (_, app) = build_app();
    let fields = [("jobId", "job-1"), ("userId", "u-1"), ("cover-letter", "Hi"), ("phone", "1")];
    assert_eq!(post_form(&app, "/applications", &fields, false).await?.0, StatusCode::OK);

    let (status, body) = post_form(&app, "/applications", &fields, false).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "You have already applied to this job"}));

    // a different user may still apply to the same job
    let other = [("jobId", "job-1"), ("userId", "u-2"), ("cover-letter", "Hi"), ("phone", "1")];
    assert_eq!(post_form(&app, "/applications", &other, false).await?.0, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_anonymous_applicants_share_one_slot_per_job() -> anyhow::Result<()> {
    let (_, app) = build_app();
    let fields = [("jobId", "job-9"), ("cover-letter", "Hi"), ("phone", "1")];
    let (status, body) = post_form(&app, "/applications", &fields, false).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["application"]["userId"], "anonymous");

    let (status, _) = post_form(&app, "/applications", &fields, false).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_missing_form_fields() -> anyhow::Result<()> {
    let (_, app) = build_app();
    let (status, body) = post_form(&app, "/applications", &[("jobId", "job-1"), ("phone", "1")], true).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");

    let (status, body) = post_form(&app, "/applications", &[("jobId", ""), ("cover-letter", "x"), ("phone", "1")], false).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");
    Ok(())
}

#[tokio::test]
async fn test_non_multipart_body_is_bad_request() -> anyhow::Result<()> {
    let (_, app) = build_app();
    let (status, body) = support::post_json(&app, "/applications", &json!({"jobId": "j"})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    Ok(())
}

#[tokio::test]
async fn test_list_applications_with_filters() -> anyhow::Result<()> {
    let (_, app) = build_app();
    for (job, user) in [("j1", "u1"), ("j1", "u2"), ("j2", "u1")] {
        let fields = [("jobId", job), ("userId", user), ("coverLetter", "c"), ("phone", "p")];
        assert_eq!(post_form(&app, "/applications", &fields, false).await?.0, StatusCode::OK);
    }

    let count = |body: &serde_json::Value| body["applications"].as_array().map(Vec::len).unwrap_or(0);

    let (status, body) = get(&app, "/applications").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(count(&body), 3);

    let (_, body) = get(&app, "/applications?jobId=j1").await?;
    assert_eq!(count(&body), 2);

    let (_, body) = get(&app, "/api/applications?userId=u1&jobId=j2").await?;
    assert_eq!(count(&body), 1);
    assert_eq!(body["applications"][0]["jobId"], "j2");

    let (_, body) = get(&app, "/applications?userId=").await?;
    assert_eq!(count(&body), 3);
    Ok(())
}

#[tokio::test]
async fn test_storage_failure_on_submit() -> anyhow::Result<()> {
    let app = app_with_store(Arc::new(FailingStore));
    let fields = [("jobId", "j"), ("cover-letter", "c"), ("phone", "p")];
    let (status, body) = post_form(&app, "/applications", &fields, false).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "message": "Failed to submit application"}));
    Ok(())
}

#[tokio::test]
async fn test_malformed_query_gets_envelope() -> anyhow::Result<()> {
    let (_, app) = build_app();
    let (status, body) = get(&app, "/applications?jobId=a&jobId=b").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "Invalid query string"}));
    Ok(())
}
