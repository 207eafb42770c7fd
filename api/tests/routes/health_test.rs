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

    use crate::helpers::{body_json, config_without, make_test_app};

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        for uri in ["/api/health", "/.netlify/functions/health"] {
            let store = Arc::new(MemoryStore::new());
            // Health does not depend on the sheet being configured.
            let app = make_test_app(store.clone(), config_without("SPREADSHEET_ID"));

            let req = Request::builder()
                .method("GET")
                .uri(uri)
                .body(AxumBody::empty())
                .unwrap();

            let response = app.oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_json(response).await, json!({ "status": "ok" }));
            assert_eq!(store.calls(), 0);
        }
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let app = make_test_app(Arc::new(MemoryStore::new()), config_without("SPREADSHEET_ID"));

        let req = Request::builder()
            .method("GET")
            .uri("/api/get-grades")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
