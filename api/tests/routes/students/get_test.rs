#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use sheets::MemoryStore;
    use tower::ServiceExt;

    use crate::helpers::{body_json, config_with, config_without, make_test_app, test_config};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn get() -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri("/api/get-students")
            .body(AxumBody::empty())
            .unwrap()
    }

    fn roster() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new().with_rows(
            "Students!A:E",
            vec![
                row(&["Reg", "Name", "Password", "Batch", "Year"]),
                row(&["101", "Bob"]),
                row(&["", "NoReg"]),
                row(&[" 102 ", " Carol ", "secret", "B", "2nd"]),
                row(&["103", "   "]),
            ],
        ))
    }

    #[tokio::test]
    async fn returns_students_with_defaults() {
        let store = roster();
        let app = make_test_app(store.clone(), test_config());

        let response = app.oneshot(get()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "students": [
                    { "reg": "101", "name": "Bob", "password": "101", "batch": "A", "year": "1st" },
                    { "reg": "102", "name": "Carol", "password": "secret", "batch": "B", "year": "2nd" }
                ],
                "total": 2
            })
        );
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn header_row_is_always_skipped() {
        let store = Arc::new(MemoryStore::new().with_rows(
            "Students!A:E",
            vec![row(&["201", "Dana"]), row(&["202", "Eve"])],
        ));
        // The attendance header policy does not apply to the roster.
        let app = make_test_app(store, config_with(&[("ATTENDANCE_HEADER_POLICY", "detect")]));

        let json = body_json(app.oneshot(get()).await.unwrap()).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["students"][0]["reg"], "202");
    }

    #[tokio::test]
    async fn empty_sheet_gives_no_students() {
        let app = make_test_app(Arc::new(MemoryStore::new()), test_config());

        let response = app.oneshot(get()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "students": [], "total": 0 }));
    }

    #[tokio::test]
    async fn store_failure_returns_500_with_empty_list() {
        let store = Arc::new(MemoryStore::failing("Requested entity was not found."));
        let app = make_test_app(store, test_config());

        let response = app.oneshot(get()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Requested entity was not found.", "students": [] })
        );
    }

    #[tokio::test]
    async fn missing_spreadsheet_id_is_reported() {
        let store = roster();
        let app = make_test_app(store.clone(), config_without("SPREADSHEET_ID"));

        let response = app.oneshot(get()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing spreadsheet ID", "students": [] })
        );
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn put_is_not_allowed() {
        let app = make_test_app(roster(), test_config());

        let req = Request::builder()
            .method("PUT")
            .uri("/.netlify/functions/get-students")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
    }

    #[tokio::test]
    async fn head_is_not_allowed() {
        let store = roster();
        let app = make_test_app(store.clone(), test_config());

        let req = Request::builder()
            .method("HEAD")
            .uri("/api/get-students")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(store.calls(), 0);
    }
}
