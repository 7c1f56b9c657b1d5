//! Requests as the server receives them

mod common;

use serde_json::Value;

use codereview::{ApiClient, ClientError, CodeFile, Pending, Services};

async fn echoed<T>(pending: Pending<T>) -> Value {
    pending.cast::<Value>().await.unwrap()
}

async fn all_dashboard_requests(services: &Services, days: Option<i64>) -> Vec<Value> {
    let d = &services.dashboard;
    vec![
        echoed(d.dashboard(days)).await,
        echoed(d.team_metrics("abc", days)).await,
        echoed(d.repository_metrics("xyz", days)).await,
        echoed(d.security_report(days)).await,
        echoed(d.quality_trends(days)).await,
    ]
}

#[tokio::test]
async fn test_dashboard_operations_default_to_thirty_days() {
    let services = common::echo_services().await;

    for request in all_dashboard_requests(&services, None).await {
        assert_eq!(request["method"], "GET");
        assert_eq!(request["query"], "days=30", "{}", request["path"]);
    }
}

#[tokio::test]
async fn test_dashboard_operations_pass_days_through() {
    let services = common::echo_services().await;

    for days in [0, 1, 90, -3] {
        let expected = format!("days={}", days);
        for request in all_dashboard_requests(&services, Some(days)).await {
            assert_eq!(request["query"], expected.as_str(), "{}", request["path"]);
        }
    }
}

#[tokio::test]
async fn test_dashboard_paths() {
    let services = common::echo_services().await;

    let paths: Vec<Value> = all_dashboard_requests(&services, None)
        .await
        .into_iter()
        .map(|r| r["path"].clone())
        .collect();

    assert_eq!(
        paths,
        vec![
            "/api/v1/metrics/dashboard",
            "/api/v1/metrics/team/abc/metrics",
            "/api/v1/metrics/repository/xyz/metrics",
            "/api/v1/metrics/security/report",
            "/api/v1/metrics/quality/trends",
        ]
    );
}

#[tokio::test]
async fn test_analyze_code_posts_files_verbatim() {
    let services = common::echo_services().await;

    let request = echoed(
        services
            .analysis
            .analyze_code(vec![CodeFile::new("a.py", "x=1")]),
    )
    .await;

    assert_eq!(request["method"], "POST");
    assert_eq!(request["path"], "/api/v1/analysis/analyze");
    assert_eq!(request["query"], Value::Null);
    assert_eq!(request["body"], r#"{"files":[{"path":"a.py","content":"x=1"}]}"#);
}

#[tokio::test]
async fn test_get_analysis_path() {
    let services = common::echo_services().await;

    let request = echoed(services.analysis.get_analysis("123")).await;

    assert_eq!(request["method"], "GET");
    assert_eq!(request["path"], "/api/v1/analysis/analysis/123");
    assert_eq!(request["body"], "");
}

#[tokio::test]
async fn test_json_content_type_on_every_request() {
    let services = common::echo_services().await;

    let get = echoed(services.dashboard.dashboard(None)).await;
    let post = echoed(services.analysis.analyze_code(Vec::new())).await;

    assert_eq!(get["content_type"], "application/json");
    assert_eq!(post["content_type"], "application/json");
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let services = common::echo_services().await;

    let (a, b) = tokio::join!(
        echoed(services.dashboard.security_report(Some(7))),
        echoed(services.analysis.get_analysis("42")),
    );

    assert_eq!(a["path"], "/api/v1/metrics/security/report");
    assert_eq!(b["path"], "/api/v1/analysis/analysis/42");
}

#[tokio::test]
async fn test_malformed_base_url_fails_on_first_request() {
    let client = ApiClient::with_base_url("localhost without scheme").unwrap();
    let services = Services::new(client);

    let err = services.dashboard.dashboard(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
}

#[tokio::test]
async fn test_connection_failure_propagates() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::with_base_url(&format!("http://{}/api/v1", addr)).unwrap();
    let err = Services::new(client)
        .analysis
        .get_analysis("1")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Request(_)));
    assert_eq!(err.status(), None);
}
