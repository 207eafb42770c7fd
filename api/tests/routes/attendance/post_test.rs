#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use chrono::DateTime;
    use serde_json::{Value, json};
    use sheets::MemoryStore;
    use tower::ServiceExt;

    use crate::helpers::{body_json, config_without, make_test_app, test_config};

    fn post(body: impl Into<AxumBody>) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/api/save-attendance")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn entry(student_id: &str, period: Value) -> Value {
        json!({
            "date": "2024-01-01",
            "studentId": student_id,
            "studentName": "Alice",
            "period": period,
            "status": "Present",
            "faculty": "F1",
            "course": "C1"
        })
    }

    fn batch(records: Value) -> AxumBody {
        AxumBody::from(json!({ "records": records }).to_string())
    }

    #[tokio::test]
    async fn appends_one_row_per_entry() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let response = app
            .oneshot(post(batch(json!([entry("S1", json!(1)), entry("S2", json!("2"))]))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "message": "Saved 2 attendance records",
                "updatedRange": "Attendance!A1:H2"
            })
        );

        let rows = store.rows("Attendance!A:H").await;
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0][..7],
            ["2024-01-01", "S1", "Alice", "1", "Present", "F1", "C1"]
        );
        assert_eq!(rows[1][1], "S2");
        assert_eq!(rows[1][3], "2");
    }

    #[tokio::test]
    async fn batch_shares_one_iso_timestamp() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let records: Vec<Value> = (1..=3).map(|p| entry("S1", json!(p))).collect();
        let response = app.oneshot(post(batch(json!(records)))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let rows = store.rows("Attendance!A:H").await;
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r[7] == rows[0][7]));
        assert!(rows[0][7].ends_with('Z'), "{}", rows[0][7]);
        assert!(DateTime::parse_from_rfc3339(&rows[0][7]).is_ok());
    }

    #[tokio::test]
    async fn empty_batch_is_saved_as_zero_records() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let response = app.oneshot(post(batch(json!([])))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "message": "Saved 0 attendance records" })
        );
        assert_eq!(store.calls(), 1);
        assert!(store.rows("Attendance!A:H").await.is_empty());
    }

    #[tokio::test]
    async fn unparseable_body_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let response = app.oneshot(post("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid request body" }));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn non_array_records_are_rejected_without_touching_the_sheet() {
        for records in [json!("S1 present"), json!({ "0": entry("S1", json!(1)) }), Value::Null] {
            let store = Arc::new(MemoryStore::new());
            let app = make_test_app(store.clone(), test_config());

            let response = app.oneshot(post(batch(records.clone()))).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{records}");
            assert_eq!(body_json(response).await, json!({ "error": "Invalid records data" }));
            assert_eq!(store.calls(), 0);
        }
    }

    #[tokio::test]
    async fn missing_records_field_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let response = app.oneshot(post("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid records data");
    }

    #[tokio::test]
    async fn incomplete_entry_names_its_index() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let mut broken = entry("S2", json!(1));
        broken.as_object_mut().unwrap().remove("course");

        let response = app
            .oneshot(post(batch(json!([entry("S1", json!(1)), broken]))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = body_json(response).await["error"].as_str().unwrap().to_string();
        assert!(error.starts_with("Invalid record at index 1: "), "{error}");
        assert!(error.contains("course"), "{error}");
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn empty_identity_fields_are_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let response = app
            .oneshot(post(batch(json!([entry("", json!(1))]))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid record at index 0: studentId must not be empty" })
        );
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn missing_key_is_a_configuration_error() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), config_without("GOOGLE_PRIVATE_KEY"));

        let response = app
            .oneshot(post(batch(json!([entry("S1", json!(1))]))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Missing private key" }));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn body_is_checked_before_configuration() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), config_without("SPREADSHEET_ID"));

        let response = app.oneshot(post(batch(json!("nope")))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid records data");
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let store = Arc::new(MemoryStore::failing("Quota exceeded"));
        let app = make_test_app(store.clone(), test_config());

        let response = app
            .oneshot(post(batch(json!([entry("S1", json!(1))]))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Quota exceeded" }));
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn get_is_not_allowed() {
        let store = Arc::new(MemoryStore::new());
        let app = make_test_app(store.clone(), test_config());

        let req = Request::builder()
            .method("GET")
            .uri("/api/save-attendance")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn options_allows_post() {
        let app = make_test_app(Arc::new(MemoryStore::new()), test_config());

        let req = Request::builder()
            .method("OPTIONS")
            .uri("/.netlify/functions/save-attendance")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");

        let methods = response.headers()["access-control-allow-methods"]
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("POST"), "{methods}");
        assert!(!methods.contains("GET"), "{methods}");
    }
}
