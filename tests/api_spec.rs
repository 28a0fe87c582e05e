use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use axum_test::TestServer;
use cpb_logbook::api::{create_router, AppState};
use cpb_logbook::assets::AssetLoader;
use cpb_logbook::models::*;

fn shipped_assets() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("logbook")
}

fn setup_with(root: impl Into<PathBuf>) -> TestServer {
    let state = AppState::new(AssetLoader::new(root));
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn setup() -> TestServer {
    setup_with(shipped_assets())
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn startup_shows_sequence_analysis() {
        let server = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h2>Sequence-Based Analysis 🧬</h2>"));
        assert!(html.contains("prefetch SRR11266556"));
        assert!(html.contains(
            "<li class=\"active\"><a href=\"/phases/sequence\">Phase 1: Sequence-Based Analysis</a></li>"
        ));
    }

    #[tokio::test]
    async fn selecting_notes_shows_only_notes() {
        let server = setup();

        let response = server
            .get("/")
            .add_query_param("phase", "Additional Notes")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h2>Additional Note ❗</h2>"));
        assert!(html.contains("pkill -9 -f spades"));
        assert!(html.contains("systemctl --user stop docker-desktop"));
        assert!(!html.contains("spades.py --only-assembler"));
        assert!(!html.contains("jellyfish count"));
        assert!(!html.contains("Download Gzip Bash Script"));
    }

    #[tokio::test]
    async fn selection_persists_between_requests() {
        let server = setup();

        server.get("/phases/docking").await.assert_status_ok();
        let response = server.get("/").await;

        let html = response.text();
        assert!(html.contains("Molecular Docking &amp; Dynamics Simulation 🖥️🧪"));
        assert!(html.contains("https://github.com/log-md/logmd"));
    }

    #[tokio::test]
    async fn invalid_label_is_rejected_and_selection_kept() {
        let server = setup();
        server.get("/phases/structure").await.assert_status_ok();

        let response = server.get("/").add_query_param("phase", "Phase 9").await;

        response.assert_status_bad_request();
        assert!(response.text().contains("Invalid selection"));

        let html = server.get("/").await.text();
        assert!(html.contains("<h2>Structure-Based Analysis ⚛</h2>"));
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let server = setup();
        server.get("/phases/phase-9").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn page_renders_when_assets_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        let server = setup_with(dir.path());

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("gzip.sh is unavailable: file not found"));
        assert!(html.contains("CPB.png is unavailable: file not found"));
        assert!(html.contains("conda install -c bioconda braker3"));
    }
}

mod downloads {
    use super::*;

    #[tokio::test]
    async fn gzip_script_is_served_as_shell_script() {
        let server = setup();

        let response = server.get("/assets/gzip.sh").await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/x-sh");
        assert_eq!(
            response.header("content-disposition"),
            "attachment; filename=\"gzip.sh\""
        );
        let on_disk = std::fs::read(shipped_assets().join("gzip.sh")).unwrap();
        assert_eq!(response.as_bytes().as_ref(), on_disk.as_slice());
    }

    #[tokio::test]
    async fn python_script_keeps_declared_type() {
        let server = setup();

        let response = server.get("/assets/genome_estimate.py").await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/x-sh");
    }

    #[tokio::test]
    async fn downloads_reflect_current_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fastp.sh"), b"echo one\n").unwrap();
        let server = setup_with(dir.path());

        let first = server.get("/assets/fastp.sh").await;
        std::fs::write(dir.path().join("fastp.sh"), b"echo two\n").unwrap();
        let second = server.get("/assets/fastp.sh").await;

        assert_eq!(first.text(), "echo one\n");
        assert_eq!(second.text(), "echo two\n");
    }

    #[tokio::test]
    async fn missing_script_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let server = setup_with(dir.path());

        let response = server.get("/assets/run_longstitch.sh").await;

        response.assert_status_not_found();
        assert_eq!(response.text(), "File not found: run_longstitch.sh");
    }

    #[tokio::test]
    async fn uncatalogued_file_is_not_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"private").unwrap();
        let server = setup_with(dir.path());

        server.get("/assets/notes.txt").await.assert_status_not_found();
    }
}

mod phases_api {
    use super::*;

    #[tokio::test]
    async fn lists_phases_in_menu_order() {
        let server = setup();

        let response = server.get("/api/v1/phases").await;

        response.assert_status_ok();
        let phases: Vec<PhaseSummary> = response.json();
        let labels: Vec<_> = phases.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Phase 1: Sequence-Based Analysis",
                "Phase 2: Structure-Based Analysis",
                "Phase 3: Molecular Docking & Dynamics Simulation",
                "Additional Notes",
            ]
        );
    }

    #[tokio::test]
    async fn returns_blocks_for_phase() {
        let server = setup();

        let response = server.get("/api/v1/phases/structure").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["slug"], "structure");
        let blocks = body["blocks"].as_array().unwrap();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[1]["kind"], "link");
        assert_eq!(
            blocks[1]["value"]["url"],
            "https://bioinformatics.sdstate.edu/idep/"
        );
    }

    #[tokio::test]
    async fn unknown_phase_is_not_found() {
        let server = setup();
        server
            .get("/api/v1/phases/wet-lab")
            .await
            .assert_status_not_found();
    }
}

mod selection_api {
    use super::*;

    #[tokio::test]
    async fn defaults_to_first_phase() {
        let server = setup();

        let selection: PhaseSummary = server.get("/api/v1/selection").await.json();

        assert_eq!(selection.slug, "sequence");
    }

    #[tokio::test]
    async fn put_replaces_selection() {
        let server = setup();

        let response = server
            .put("/api/v1/selection")
            .json(&SelectionInput {
                label: "Additional Notes".to_string(),
            })
            .await;

        response.assert_status_ok();
        let selection: PhaseSummary = server.get("/api/v1/selection").await.json();
        assert_eq!(selection.label, "Additional Notes");
    }

    #[tokio::test]
    async fn put_rejects_unknown_label() {
        let server = setup();

        let response = server
            .put("/api/v1/selection")
            .json(&SelectionInput {
                label: "notes".to_string(),
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let selection: PhaseSummary = server.get("/api/v1/selection").await.json();
        assert_eq!(selection.slug, "sequence");
    }
}

#[tokio::test]
async fn health_check() {
    let server = setup();

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}
