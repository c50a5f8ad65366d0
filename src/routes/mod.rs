//! Router assembly.

mod common;
mod person;

pub use common::common_routes;
pub use person::person_routes;

use axum::Router;

use crate::state::AppState;

/// Full application router: common/demo routes at the root, the Person
/// resource under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", person_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Person;
    use crate::store::MemStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState {
            store: Arc::new(MemStore::new()),
            database_url: String::new(),
        };
        app(state)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn list_is_empty_before_any_create() {
        let response = test_app().oneshot(get("/api/person")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn create_assigns_id_and_points_at_the_new_resource() {
        let router = test_app();
        let response = router
            .clone()
            .oneshot(json("POST", "/api/person", serde_json::json!({"Name": "Ana"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/api/person/1"
        );
        let created = body_json(response).await;
        assert_eq!(created, serde_json::json!({"Id": 1, "Name": "Ana"}));

        let response = router.oneshot(get("/api/person/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Id": 1, "Name": "Ana"})
        );
    }

    #[tokio::test]
    async fn create_ignores_a_caller_supplied_id() {
        let router = test_app();
        let response = router
            .oneshot(json(
                "POST",
                "/api/person",
                serde_json::json!({"Id": 42, "Name": "Ana"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["Id"], 1);
    }

    #[tokio::test]
    async fn get_and_delete_of_an_absent_id_return_not_found() {
        let router = test_app();
        let response = router.clone().oneshot(get("/api/person/5")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router.oneshot(delete("/api/person/5")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn second_delete_of_the_same_id_returns_not_found() {
        let router = test_app();
        router
            .clone()
            .oneshot(json("POST", "/api/person", serde_json::json!({"Name": "Ana"})))
            .await
            .unwrap();

        let first = router.clone().oneshot(delete("/api/person/1")).await.unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = router.oneshot(delete("/api/person/1")).await.unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_with_mismatched_ids_is_rejected_and_changes_nothing() {
        let router = test_app();
        router
            .clone()
            .oneshot(json("POST", "/api/person", serde_json::json!({"Name": "Ana"})))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(json(
                "PUT",
                "/api/person/1",
                serde_json::json!({"Id": 2, "Name": "Mallory"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = router.oneshot(get("/api/person/1")).await.unwrap();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Id": 1, "Name": "Ana"})
        );
    }

    #[tokio::test]
    async fn update_of_an_absent_id_returns_not_found() {
        let router = test_app();
        let response = router
            .oneshot(json(
                "PUT",
                "/api/person/9",
                serde_json::json!({"Id": 9, "Name": "Ghost"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_update_get_round_trip() {
        let router = test_app();
        let response = router
            .clone()
            .oneshot(json("POST", "/api/person", serde_json::json!({"Name": "Ana"})))
            .await
            .unwrap();
        let created: Person = serde_json::from_value(body_json(response).await).unwrap();

        let uri = format!("/api/person/{}", created.id);
        let response = router
            .clone()
            .oneshot(json(
                "PUT",
                &uri,
                serde_json::json!({"Id": created.id, "Name": "Ana Maria"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router.oneshot(get(&uri)).await.unwrap();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Id": created.id, "Name": "Ana Maria"})
        );
    }

    // The full lifecycle from the service contract: create, read, replace,
    // read, delete, read.
    #[tokio::test]
    async fn person_lifecycle_end_to_end() {
        let router = test_app();

        let response = router
            .clone()
            .oneshot(json("POST", "/api/person", serde_json::json!({"Name": "Ana"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Id": 1, "Name": "Ana"})
        );

        let response = router.clone().oneshot(get("/api/person/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Id": 1, "Name": "Ana"})
        );

        let response = router
            .clone()
            .oneshot(json(
                "PUT",
                "/api/person/1",
                serde_json::json!({"Id": 1, "Name": "Ana Maria"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router.clone().oneshot(get("/api/person/1")).await.unwrap();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Id": 1, "Name": "Ana Maria"})
        );

        let response = router.clone().oneshot(delete("/api/person/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router.oneshot(get("/api/person/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn weather_forecast_returns_five_days() {
        let response = test_app().oneshot(get("/weatherforecast")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        let days = value.as_array().unwrap();
        assert_eq!(days.len(), 5);
        for day in days {
            let c = day["temperatureC"].as_i64().unwrap();
            assert!((-20..55).contains(&c));
            assert!(day["summary"].is_string());
        }
    }
}
