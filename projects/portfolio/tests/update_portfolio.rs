use projects_portfolio::config::PortfolioConfig;
use projects_portfolio::pipeline::{run, RunError, RunOutcome};
use projects_portfolio::splice::{DocumentUpdate, UpdateDocumentError};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEMPLATE: &str = r#"<html>
<body>
    <section id="projects">
        <div class="grid grid-cols-1 gap-4">
            <!-- BEGIN projects -->
            <p>Loading projects...</p>
            <!-- END projects -->
        </div>
    </section>
</body>
</html>
"#;

fn repo_json(server: &MockServer, name: &str, fork: bool, updated_at: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": null,
        "homepage": null,
        "html_url": format!("https://github.com/someone/{name}"),
        "fork": fork,
        "updated_at": updated_at,
        "topics": [],
        "languages_url": format!("{}/repos/someone/{name}/languages", server.uri()),
    })
}

async fn mount_listing(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/users/someone/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_languages(server: &MockServer, name: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/someone/{name}/languages")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json"))
        .mount(server)
        .await;
}

fn setup(server: &MockServer) -> (TempDir, PortfolioConfig) {
    let temp = TempDir::new().unwrap();
    let output_path = temp.path().join("index.html");
    std::fs::write(&output_path, TEMPLATE).unwrap();

    let config = PortfolioConfig {
        account: "someone".to_string(),
        output_path,
        api_base: server.uri(),
        ..Default::default()
    };
    (temp, config)
}

#[tokio::test]
async fn test_single_repository_end_to_end() {
    let server = MockServer::start().await;
    let mut task_manager = repo_json(&server, "task-manager-api", false, "2024-04-10T08:00:00Z");
    task_manager["description"] = serde_json::json!("A simple API");
    task_manager["topics"] = serde_json::json!(["api"]);
    mount_listing(&server, serde_json::json!([task_manager])).await;
    mount_languages(&server, "task-manager-api", r#"{"Python": 4200}"#).await;

    let (_temp, config) = setup(&server);
    let report = run(&config).await.unwrap();

    assert_eq!(report.repository_count, 1);
    assert_eq!(report.language_failures, 0);
    assert_eq!(
        report.outcome,
        RunOutcome::Written {
            path: config.output_path.clone(),
            update: DocumentUpdate::Rewritten,
        }
    );

    let html = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(html.contains(r#"data-category="tools""#));
    assert!(html.contains(r#"<a href="https://github.com/someone/task-manager-api""#));
    assert!(html.contains(">CODE</a>"));
    assert!(html.contains(">Python &bull; api</span>"));
    assert!(!html.contains("Loading projects..."));
    assert!(html.starts_with("<html>\n<body>\n    <section id=\"projects\">"));
    assert!(html.ends_with("            <!-- END projects -->\n        </div>\n    </section>\n</body>\n</html>\n"));
}

#[tokio::test]
async fn test_forks_are_skipped_and_newest_comes_first() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        serde_json::json!([
            repo_json(&server, "older-game", false, "2023-01-01T00:00:00Z"),
            repo_json(&server, "someone-elses-fork", true, "2024-12-01T00:00:00Z"),
            repo_json(&server, "newer-clinic", false, "2024-06-01T00:00:00Z"),
        ]),
    )
    .await;
    mount_languages(&server, "older-game", "{}").await;
    mount_languages(&server, "newer-clinic", "{}").await;

    let (_temp, config) = setup(&server);
    let report = run(&config).await.unwrap();
    assert_eq!(report.repository_count, 2);

    let html = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(!html.contains("someone elses fork"));
    let newer = html.find("newer clinic").unwrap();
    let older = html.find("older game").unwrap();
    assert!(newer < older);
    assert!(html.contains(r#"data-category="web""#));
    assert!(html.contains(r#"data-category="games""#));
}

#[tokio::test]
async fn test_language_failure_only_affects_that_repository() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        serde_json::json!([
            repo_json(&server, "expense-tracker", false, "2024-02-01T00:00:00Z"),
            repo_json(&server, "inventory-system", false, "2024-01-01T00:00:00Z"),
        ]),
    )
    .await;
    // no languages mock for expense-tracker: the mock server answers 404
    mount_languages(&server, "inventory-system", r#"{"Java": 10}"#).await;

    let (_temp, config) = setup(&server);
    let report = run(&config).await.unwrap();

    assert_eq!(report.repository_count, 2);
    assert_eq!(report.language_failures, 1);

    let html = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(html.contains(">Code Repository</span>"));
    assert!(html.contains(">Java</span>"));
}

#[tokio::test]
async fn test_second_run_leaves_document_identical() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        serde_json::json!([repo_json(&server, "unity-runner", false, "2024-02-01T00:00:00Z")]),
    )
    .await;
    mount_languages(&server, "unity-runner", r#"{"C#": 99, "ShaderLab": 3}"#).await;

    let (_temp, config) = setup(&server);
    run(&config).await.unwrap();
    let first = std::fs::read_to_string(&config.output_path).unwrap();

    let report = run(&config).await.unwrap();
    let second = std::fs::read_to_string(&config.output_path).unwrap();

    assert_eq!(first, second);
    assert!(matches!(
        report.outcome,
        RunOutcome::Written {
            update: DocumentUpdate::Unchanged,
            ..
        }
    ));
}

#[tokio::test]
async fn test_listing_failure_is_reported_and_document_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/someone/repos"))
        .respond_with(ResponseTemplate::new(403).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let (_temp, config) = setup(&server);
    let err = run(&config).await.unwrap_err();

    assert!(matches!(err, RunError::FetchRepositories { .. }));
    assert_eq!(std::fs::read_to_string(&config.output_path).unwrap(), TEMPLATE);
}

#[tokio::test]
async fn test_only_forks_means_no_repositories() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        serde_json::json!([repo_json(&server, "upstream-copy", true, "2024-02-01T00:00:00Z")]),
    )
    .await;

    let (_temp, config) = setup(&server);
    let err = run(&config).await.unwrap_err();

    assert!(matches!(err, RunError::NoRepositories { ref account } if account == "someone"));
    assert_eq!(std::fs::read_to_string(&config.output_path).unwrap(), TEMPLATE);
}

#[tokio::test]
async fn test_missing_marker_leaves_document_untouched() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        serde_json::json!([repo_json(&server, "qr-attendance", false, "2024-02-01T00:00:00Z")]),
    )
    .await;
    mount_languages(&server, "qr-attendance", "{}").await;

    let (_temp, config) = setup(&server);
    let without_end = TEMPLATE.replace("<!-- END projects -->", "");
    std::fs::write(&config.output_path, &without_end).unwrap();

    let err = run(&config).await.unwrap_err();

    assert!(matches!(
        err,
        RunError::UpdateDocument {
            source: UpdateDocumentError::MarkerNotFound { .. }
        }
    ));
    assert_eq!(std::fs::read_to_string(&config.output_path).unwrap(), without_end);
}

#[tokio::test]
async fn test_dry_run_renders_without_writing() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        serde_json::json!([repo_json(&server, "restful-posts", false, "2024-02-01T00:00:00Z")]),
    )
    .await;
    mount_languages(&server, "restful-posts", r#"{"TypeScript": 1}"#).await;

    let (_temp, mut config) = setup(&server);
    config.dry_run = true;
    let report = run(&config).await.unwrap();

    match report.outcome {
        RunOutcome::DryRun { cards } => {
            assert!(cards.contains(">restful posts</h3>"));
            assert!(cards.contains(r#"data-category="tools""#));
        }
        other => panic!("expected dry run, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&config.output_path).unwrap(), TEMPLATE);
}
