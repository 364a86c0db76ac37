use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::Config, error::ServerError, routes::create_app};

/// Bind the listener. The address stays held for as long as the returned
/// listener lives.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serve `app` on `listener` until the process is terminated
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Build the routes, bind and serve. Route table errors surface before the
/// socket is opened; a bind error means nothing is served.
pub async fn start(config: &Config) -> Result<(), ServerError> {
    let app = create_app(config)?;
    let listener = bind(&config.server_address()).await?;

    if config.reload {
        info!("Reload requested; restarts on change are left to external tooling (e.g. cargo watch)");
    }
    info!("🚀 Server running on http://{}", config.server_address());
    if config.docs_enabled {
        info!("📚 Swagger UI available at http://{}/docs", config.server_address());
    }

    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use tokio::task::JoinSet;

    async fn spawn_server() -> SocketAddr {
        let listener = bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = create_app(&Config::default()).unwrap();
        tokio::spawn(serve(listener, app));
        addr
    }

    #[tokio::test]
    async fn bind_fails_when_address_is_taken() {
        let first = bind("127.0.0.1:0").await.unwrap();
        let addr = first.local_addr().unwrap().to_string();

        let err = bind(&addr).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { addr: ref a, .. } if *a == addr));

        // the first listener is unaffected
        assert_eq!(first.local_addr().unwrap().to_string(), addr);
    }

    #[tokio::test]
    async fn start_returns_bind_error_instead_of_serving() {
        let held = bind("127.0.0.1:0").await.unwrap();
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: held.local_addr().unwrap().port(),
            ..Config::default()
        };

        let err = start(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }

    #[tokio::test]
    async fn serves_over_tcp() {
        let addr = spawn_server().await;
        let client = reqwest::Client::new();

        let response = client.get(format!("http://{addr}/")).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.text().await.unwrap(),
            r#"{"message":"SnapChef backend is running"}"#
        );

        let response = client.delete(format!("http://{addr}/")).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_do_not_mix_responses() {
        let addr = spawn_server().await;
        let client = reqwest::Client::new();
        let mut requests = JoinSet::new();

        for i in 0..32 {
            let path = if i % 2 == 0 { "/" } else { "/api/v1/health" };
            let client = client.clone();
            requests.spawn(async move {
                let response = client
                    .get(format!("http://{addr}{path}"))
                    .send()
                    .await
                    .unwrap();
                let status = response.status();
                let body: Value = response.json().await.unwrap();
                (path, status, body)
            });
        }

        let mut completed = 0;
        while let Some(result) = requests.join_next().await {
            let (path, status, body) = result.unwrap();
            assert_eq!(status, reqwest::StatusCode::OK);
            let expected = if path == "/" {
                json!({ "message": "SnapChef backend is running" })
            } else {
                json!({ "status": "ok" })
            };
            assert_eq!(body, expected);
            completed += 1;
        }
        assert_eq!(completed, 32);
    }
}
