use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

use configs::AppConfig;

struct TestApp {
    base_url: String,
    data_dir: std::path::PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let data_dir = std::env::temp_dir().join(format!("jobboard-e2e-{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.data_dir = data_dir.to_string_lossy().into_owned();
    cfg.normalize_and_validate()?;

    let app = server::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, data_dir })
}

#[tokio::test]
async fn e2e_job_board_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);

    // signup + signin
    let email = format!("e2e_{}@example.com", Uuid::new_v4());
    let resp = client
        .post(format!("{}/api/auth", app.base_url))
        .json(&json!({"action": "signup", "userData": {"email": email, "password": "Passw0rd", "name": "E2E", "type": "employer"}}))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body["user"]["type"], "employer");

    let resp = client
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({"email": email, "password": "Passw0rd"}))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);

    // post a job, then fetch it
    let resp = client
        .post(format!("{}/jobs", app.base_url))
        .json(&json!({"title": "QA Intern", "company": "Acme", "location": "Remote"}))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let body: Value = resp.json().await?;
    let job_id = body["job"]["id"].as_str().unwrap_or_default().to_string();
    assert!(!job_id.is_empty());

    let resp = client.get(format!("{}/jobs/{}", app.base_url, job_id)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);

    let resp = client.get(format!("{}/jobs/{}", app.base_url, Uuid::new_v4())).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NOT_FOUND);

    // apply with a resume part
    let form = reqwest::multipart::Form::new()
        .text("jobId", job_id.clone())
        .text("userId", "applicant-1")
        .text("cover-letter", "Keen to test things")
        .text("phone", "555-0199")
        .part("resume", reqwest::multipart::Part::bytes(b"%PDF-1.4".to_vec()).file_name("cv.pdf"));
    let resp = client.post(format!("{}/applications", app.base_url)).multipart(form).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body["application"]["status"], "pending");

    // data landed on disk as pretty JSON documents
    let jobs_doc: Value = serde_json::from_str(&std::fs::read_to_string(app.data_dir.join("jobs.json"))?)?;
    assert_eq!(jobs_doc["jobs"][0]["id"], job_id.as_str());
    let apps_doc: Value = serde_json::from_str(&std::fs::read_to_string(app.data_dir.join("applications.json"))?)?;
    assert_eq!(apps_doc["applications"].as_array().map(Vec::len), Some(1));

    let resp = client.get(format!("{}/applications?jobId={}", app.base_url, job_id)).send().await?;
    let body: Value = resp.json().await?;
    assert_eq!(body["applications"].as_array().map(Vec::len), Some(1));
    Ok(())
}
