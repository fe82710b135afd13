//! 路由模块

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// 创建服务路由
///
/// 只有两个路径；其余请求由路由器默认返回 404。
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/data", get(handlers::data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use common::config::{AppConfig, DatabaseConfig};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Router wired to a database address nothing listens on.
    fn test_router() -> Router {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: DatabaseConfig {
                host: "127.0.0.1".to_string(),
                port: 9,
                username: "jimmy".to_string(),
                password: "dzu7$2".to_string(),
                database: "db".to_string(),
            },
        };
        router().with_state(AppState::new(config))
    }

    async fn body_string(body: Body) -> String {
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn home_returns_the_welcome_message() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = body_string(response.into_body()).await;
        assert_eq!(body, "Welcome to the Flask App!");
    }

    #[tokio::test]
    async fn unknown_paths_return_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn data_returns_500_when_the_database_is_unreachable() {
        let response = test_router()
            .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "DATABASE_CONNECTION_ERROR");
    }

    #[tokio::test]
    async fn repeated_data_calls_do_not_accumulate_connections() {
        // Each request opens and releases its own connection; a sequence of
        // calls must all complete rather than exhausting sockets or hanging.
        let app = test_router();
        for _ in 0..20 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
