use std::future::Future;
use std::sync::Arc;

use roster_store::{InMemoryStudentStore, StudentStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Roster HTTP server.
pub struct RosterServer {
    config: ServerConfig,
    store: Arc<dyn StudentStore>,
}

impl RosterServer {
    /// Create a server with a fresh in-memory store built from the
    /// configured policies.
    pub fn new(config: ServerConfig) -> Self {
        let store = InMemoryStudentStore::with_policies(config.id_policy, config.update_policy);
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn StudentStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn StudentStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.store)))
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            %addr,
            id_policy = %self.config.id_policy,
            update_policy = %self.config.update_policy,
            "roster server listening"
        );
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("roster server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_store::{IdPolicy, UpdatePolicy};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[test]
    fn server_construction() {
        let server = RosterServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert!(server.store().is_empty().unwrap());
    }

    #[tokio::test]
    async fn router_serves_the_shared_store() {
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use roster_store::StudentDraft;
        use tower::util::ServiceExt;

        let server = RosterServer::new(ServerConfig::default());
        server.store().insert(StudentDraft::new("Ann", "CS")).unwrap();

        let response = server
            .router()
            .oneshot(Request::builder().uri("/students/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn serves_over_tcp_until_shutdown() {
        let config = ServerConfig {
            id_policy: IdPolicy::Monotonic,
            update_policy: UpdatePolicy::InPlace,
            ..ServerConfig::default()
        };
        let server = RosterServer::new(config);
        let store = Arc::clone(server.store());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_on(listener, async move {
            let _ = rx.await;
        }));

        let body = r#"{"name":"Ann","program":"CS"}"#;
        let response = raw_request(
            addr,
            &format!(
                "POST /students HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            ),
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains(r#""id":1"#), "{response}");
        assert_eq!(store.len().unwrap(), 1);

        let response = raw_request(
            addr,
            "GET /nowhere HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 404"), "{response}");

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
