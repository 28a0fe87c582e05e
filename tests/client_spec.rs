//! `LogbookClient` against live servers on ephemeral ports.

use std::path::Path;

use axum::http::StatusCode;
use axum::{routing::get, Router};
use cpb_logbook::api::{create_router, AppState};
use cpb_logbook::assets::AssetLoader;
use cpb_logbook::client::{ClientError, LogbookClient};

/// Serve `app` on 127.0.0.1 and return its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{}", addr)
}

async fn spawn_logbook() -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("logbook");
    spawn(create_router(AppState::new(AssetLoader::new(root)))).await
}

mod against_logbook {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let client = LogbookClient::new(spawn_logbook().await);

        assert_eq!(client.health().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn selection_follows_page_navigation() {
        let url = spawn_logbook().await;
        let client = LogbookClient::new(format!("{}/", url));

        assert_eq!(client.selection().await.unwrap().slug, "sequence");

        reqwest::get(format!("{}/phases/notes", url))
            .await
            .unwrap()
            .error_for_status()
            .unwrap();

        let selection = client.selection().await.unwrap();
        assert_eq!(selection.slug, "notes");
        assert_eq!(selection.label, "Additional Notes");
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = LogbookClient::new(format!("http://{}", addr));

        assert!(matches!(client.health().await, Err(ClientError::Http(_))));
    }
}

mod status_mapping {
    use super::*;

    #[tokio::test]
    async fn not_found_maps_to_not_found() {
        let url = spawn(Router::new()).await;
        let client = LogbookClient::new(url);

        assert!(matches!(
            client.selection().await,
            Err(ClientError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn other_failures_map_to_server_error() {
        let app = Router::new().route(
            "/api/v1/health",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error") }),
        );
        let client = LogbookClient::new(spawn(app).await);

        match client.health().await {
            Err(ClientError::Server { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "Internal server error");
            }
            other => panic!("expected server error, got {:?}", other),
        }
    }
}
