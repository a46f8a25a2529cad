//! Shared harness: runs the real router on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use activities::database::ActivityStore;
use activities::web;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct TestServer {
    pub addr: SocketAddr,
    pub store: ActivityStore,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Seeded catalog, static files from a directory that does not exist.
    pub async fn start() -> Self {
        Self::start_with(ActivityStore::seeded(), "does-not-exist").await
    }

    pub async fn start_with(store: ActivityStore, static_dir: impl AsRef<Path>) -> Self {
        let app = web::router(store.clone(), static_dir);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            store,
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build client")
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}
