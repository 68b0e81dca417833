//! Shared test utilities for integration tests.
//!
//! Provides temporary file setup and an API server bound to an ephemeral
//! port.

#![allow(dead_code)]

use anyhow::Result;
use devtoolkit::infrastructure::config::DiffSettings;
use devtoolkit::infrastructure::server;
use std::net::SocketAddr;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Integration test context providing shared resources.
pub struct IntegrationTestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl IntegrationTestContext {
    /// Creates a new test context.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Creates a test file with given content.
    pub fn create_test_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Handle to an API server running in the background.
pub struct TestServer {
    /// Address the server listens on.
    pub addr: SocketAddr,
    handle: tokio::task::JoinHandle<Result<()>>,
}

impl TestServer {
    /// Starts the API on `127.0.0.1:0` with the given limits.
    pub async fn start(limits: DiffSettings) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(server::serve(listener, server::router(limits)));
        Ok(Self { addr, handle })
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
