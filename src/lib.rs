pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod models;
pub mod ordered_map;
pub mod populator;
pub mod prelude;
pub mod search_engine;
pub mod session;
pub mod ui;
pub mod widgets;

pub use application::{Application, PageEvent};
pub use config::SiteConfig;
pub use error::LoadError;
pub use fetch::{DirectoryFetcher, Fetcher, HttpFetcher, MemoryFetcher};
pub use models::ProductRecord;
pub use search_engine::{LoadLatch, ProductIndex, SearchResults};
