use crate::error::LoadError;
use crate::fetch::Fetcher;
use crate::models::{Feed, ProductRecord};

use std::cell::{Cell, Ref, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// One-shot guard against repeated feed loads within a page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadLatch {
    #[default]
    NotRequested,
    Requested,
}

#[derive(Debug, Default)]
struct IndexState {
    records: RefCell<Vec<ProductRecord>>,
    latch: Cell<LoadLatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub records: Vec<ProductRecord>,
    /// Set when this query found the index empty and claimed the load latch.
    pub load_requested: bool,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shared, append-only record list. Clones are handles onto the same list.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    state: Rc<IndexState>,
}

/// Fetches and flattens a feed without touching any index.
pub fn fetch_records(fetcher: &dyn Fetcher, path: &str) -> Result<Vec<ProductRecord>, LoadError> {
    let body = fetcher.fetch(path)?;
    Ok(Feed::parse(&body)?.records())
}

impl ProductIndex {

    fn normalize_query(text: &str) -> String {
        text.trim().to_lowercase()
    }

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index pre-populated by a collaborating page component.
    #[must_use]
    pub fn with_seed(records: Vec<ProductRecord>) -> Self {
        let index = Self::new();
        index.append(records);
        index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.records.borrow().is_empty()
    }

    #[must_use]
    pub fn records(&self) -> Ref<'_, Vec<ProductRecord>> {
        self.state.records.borrow()
    }

    #[must_use]
    pub fn latch(&self) -> LoadLatch {
        self.state.latch.get()
    }

    /// Claims the load latch. Only the first caller in a session gets `true`.
    pub fn request_load(&self) -> bool {
        let first = self.state.latch.get() == LoadLatch::NotRequested;
        self.state.latch.set(LoadLatch::Requested);
        first
    }

    /// Appends without deduplicating and returns how many records were added.
    pub fn append(&self, records: Vec<ProductRecord>) -> usize {
        let count = records.len();
        self.state.records.borrow_mut().extend(records);
        count
    }

    /// Blocking fetch and append. On error the index is left as it was.
    pub fn load(&self, fetcher: &dyn Fetcher, path: &str) -> Result<usize, LoadError> {
        let records = fetch_records(fetcher, path)?;
        Ok(self.append(records))
    }

    /// Case-insensitive substring match over title, author and seller, in insertion
    /// order, one record per dedup key, stopping after `max_candidates` matches.
    #[must_use]
    pub fn query(&self, text: &str, max_candidates: usize) -> SearchResults {
        let needle = Self::normalize_query(text);
        if needle.is_empty() {
            return SearchResults::default();
        }

        let load_requested = self.is_empty()
            && self.latch() == LoadLatch::NotRequested
            && self.request_load();

        let records = self.state.records.borrow();
        let mut matches = Vec::new();
        let mut seen = HashSet::new();

        for record in records.iter() {
            if matches.len() >= max_candidates {
                break;
            }
            if record.matches(&needle) && seen.insert(record.dedup_key()) {
                matches.push(record.clone());
            }
        }

        SearchResults { records: matches, load_requested }
    }
}
