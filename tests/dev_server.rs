//! Client, pages and shell against the development server

mod common;

use codereview::{layout, pages, route, ClientError, CodeFile, Page, PageContext};

#[tokio::test]
async fn test_typed_metrics() {
    let server = common::DevServer::start().await;
    let services = server.services();

    let dashboard = services.dashboard.dashboard(None).await.unwrap();
    assert_eq!(dashboard.period, "last_30_days");
    assert_eq!(dashboard.summary.issues_found, 250);

    let team = services.dashboard.team_metrics("abc", Some(7)).await.unwrap();
    assert_eq!(team.team_id, "abc");

    let repo = services.dashboard.repository_metrics("xyz", None).await.unwrap();
    assert_eq!(repo.repository_id, "xyz");

    let report = services.dashboard.security_report(Some(0)).await.unwrap();
    assert_eq!(report.period, "last_0_days");

    let trends = services.dashboard.quality_trends(Some(-1)).await.unwrap();
    assert_eq!(trends.period, "last_-1_days");
}

#[tokio::test]
async fn test_analysis_round() {
    let server = common::DevServer::start().await;
    let services = server.services();

    let result = services
        .analysis
        .analyze_code(vec![CodeFile::new("a.py", "x=1")])
        .await
        .unwrap();
    assert_eq!(result.status, "completed");
    assert!(result.analysis_id.starts_with("analysis_"));
    assert_eq!(result.summary["total_issues"], 0);

    let fetched = services
        .analysis
        .get_analysis(&result.analysis_id)
        .await
        .unwrap();
    assert_eq!(fetched.analysis_id, result.analysis_id);

    let batch = services
        .analysis
        .analyze_batch(vec![vec![CodeFile::new("a.py", "x=1")]])
        .await
        .unwrap();
    assert_eq!(batch.status, "queued");
    assert_eq!(batch.jobs.len(), 1);
    assert_eq!(batch.jobs[0].files, 1);
}

#[tokio::test]
async fn test_non_success_status_propagates() {
    let server = common::DevServer::start().await;

    let err = server
        .services()
        .analysis
        .analyze_code(Vec::new())
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("No files provided"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_each_path_renders_its_page() {
    let server = common::DevServer::start().await;
    let services = server.services();
    let ctx = PageContext::default();

    let expected = [
        ("/", Page::Dashboard, "Total reviews"),
        ("/repositories", Page::Repositories, "Quality scores recorded"),
        ("/security", Page::Security, "Total issues"),
        ("/settings", Page::Settings, "API base URL"),
    ];

    for (path, page, marker) in expected {
        assert_eq!(route(path), Some(page));

        let content = pages::render(page, &services, &ctx).await.unwrap();
        assert!(content.starts_with(page.title()), "{}", content);
        assert!(content.contains(marker), "{}", content);

        for (_, other, other_marker) in expected {
            if other != page {
                assert!(!content.contains(other_marker), "{} rendered {}", path, other);
            }
        }

        let shell = layout::render(Some(page), &content);
        assert!(shell.contains(layout::BRAND));
        assert!(shell.ends_with(&content));
    }
}

#[tokio::test]
async fn test_repositories_page_with_repository() {
    let server = common::DevServer::start().await;
    let ctx = PageContext {
        days: Some(14),
        repository: Some("web-app".to_string()),
    };

    let content = pages::render(Page::Repositories, &server.services(), &ctx)
        .await
        .unwrap();

    assert!(content.contains("Repositories (last_14_days)"));
    assert!(content.contains("Repository web-app"));
    assert!(content.contains("No metrics recorded"));
}
