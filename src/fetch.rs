use crate::error::LoadError;

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Source of site resources. Implementations never serve cached content.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, path: &str) -> Result<String, LoadError>;
}

fn has_scheme(path: &str) -> bool {
    path.contains("://")
}

/// Site-relative paths resolved against an HTTP(S) origin.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    origin: String,
}

impl HttpFetcher {

    pub fn new(origin: impl Into<String>) -> Self {
        Self { origin: origin.into() }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if has_scheme(path) {
            return path.to_string();
        }
        format!(
            "{origin}/{path}",
            origin = self.origin.trim_end_matches('/'),
            path = path.trim_start_matches('/')
        )
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let response = minreq::get(&url)
            .with_header("Cache-Control", "no-store")
            .with_header("Pragma", "no-cache")
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(LoadError::Status(response.status_code));
        }

        Ok(response.as_str()?.to_string())
    }
}

/// Site checked out on disk; `/data/default.json` maps to `{root}/data/default.json`.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn file_path(&self, path: &str) -> PathBuf {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.root.join(path.trim_start_matches('/'))
    }
}

impl Fetcher for DirectoryFetcher {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        if has_scheme(path) {
            return Err(LoadError::Network(format!("{path} is not a site path")));
        }

        let file = self.file_path(path);
        log::debug!("reading {}", file.display());

        std::fs::read_to_string(&file).map_err(|error| match error.kind() {
            ErrorKind::NotFound => LoadError::Status(404),
            _ => LoadError::from(error),
        })
    }
}

#[derive(Debug, Clone)]
enum Resource {
    Body(String),
    Status(i32),
    Unreachable(String),
}

/// In-memory resources for previews and tests. Unknown paths answer 404.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, Resource>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, path: &str, body: impl Into<String>) -> Self {
        self.resources.insert(path.to_string(), Resource::Body(body.into()));
        self
    }

    #[must_use]
    pub fn with_status(mut self, path: &str, status: i32) -> Self {
        self.resources.insert(path.to_string(), Resource::Status(status));
        self
    }

    #[must_use]
    pub fn with_unreachable(mut self, path: &str, reason: &str) -> Self {
        self.resources.insert(path.to_string(), Resource::Unreachable(reason.to_string()));
        self
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Fetcher for MemoryFetcher {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.to_string());
        }

        match self.resources.get(path) {
            Some(Resource::Body(body)) => Ok(body.clone()),
            Some(Resource::Status(status)) => Err(LoadError::Status(*status)),
            Some(Resource::Unreachable(reason)) => Err(LoadError::Network(reason.clone())),
            None => Err(LoadError::Status(404)),
        }
    }
}
