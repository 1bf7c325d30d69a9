use super::config::{IncludeSlot, SiteConfig};
use super::controllers::{HomeController, IncludesController, OutsideClickController, SearchController};
use super::dom::{Document, NodeId};
use super::error::LoadError;
use super::fetch::Fetcher;
use super::models::{Feed, ProductRecord};
use super::search_engine::fetch_records;
use super::session::Session;
use super::ui::Ui;

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinSet;

/// Everything that can happen to a page after it loads.
#[derive(Debug)]
pub enum PageEvent {
    /// Raised by the header's search box with the free text typed so far.
    Search(String),
    Click(NodeId),
    IndexLoaded { path: String, result: Result<Vec<ProductRecord>, LoadError> },
    HomeFeedLoaded { path: String, result: Result<Feed, LoadError> },
    FragmentLoaded { slot: IncludeSlot, result: Result<String, LoadError> },
}

/// One page session: the document, its shared state, and the single-threaded loop
/// driving both. Fetches run on the runtime's blocking pool and come back as events,
/// so every handler runs on the thread that owns the page.
pub struct Application {
    session: Session,
    ui: Ui,
    location: String,
    fetcher: Arc<dyn Fetcher>,
    jobs: JoinSet<PageEvent>,
    queue: VecDeque<PageEvent>,
    runtime: Runtime,
    search: SearchController,
    home: HomeController,
    includes: IncludesController,
}

impl Application {

    pub fn new(
        config: SiteConfig,
        document: Document,
        location: &str,
        fetcher: Arc<dyn Fetcher>,
        seed: Vec<ProductRecord>,
    ) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().build()?;
        let ui = Ui::new(document, config.home.container_id.clone());
        let includes = IncludesController::new(config.includes.clone());
        let session = Session::new(config, seed);

        Ok(Self {
            search: SearchController::new(session.clone()),
            home: HomeController::new(session.clone()),
            includes,
            session,
            ui,
            location: location.to_string(),
            fetcher,
            runtime,
            jobs: JoinSet::new(),
            queue: VecDeque::new(),
        })
    }

    /// Page-load sequence: request include fragments, then either render the home
    /// page and pre-warm the index, or load the index if nothing seeded it. Only
    /// home-page entry claims the load latch.
    pub fn activate(&mut self) {
        for slot in self.includes.pending(&self.ui) {
            self.spawn_fragment_load(slot);
        }

        if self.home.is_eligible(&self.location) {
            self.spawn_home_load();
            self.session.index().request_load();
            self.spawn_index_load();
        } else if self.session.index().is_empty() {
            self.spawn_index_load();
        }
    }

    pub fn search(&mut self, text: &str) {
        self.queue.push_back(PageEvent::Search(text.to_string()));
    }

    pub fn click(&mut self, target: NodeId) {
        self.queue.push_back(PageEvent::Click(target));
    }

    #[must_use]
    pub fn pending_fetches(&self) -> usize {
        self.jobs.len()
    }

    /// Next event in arrival order: finished fetches first, then queued page events,
    /// then blocks on whatever is still in flight. `None` once the page is idle.
    fn next_event(&mut self) -> Option<PageEvent> {
        loop {
            let finished = match self.jobs.try_join_next() {
                Some(finished) => finished,
                None => {
                    if let Some(event) = self.queue.pop_front() {
                        return Some(event);
                    }
                    if self.jobs.is_empty() {
                        return None;
                    }
                    self.runtime.block_on(self.jobs.join_next())?
                }
            };

            match finished {
                Ok(event) => return Some(event),
                Err(error) => log::warn!("background fetch failed to complete: {error}"),
            }
        }
    }

    /// Handles one event, waiting for in-flight fetches if nothing else is queued.
    /// Returns `false` once the page is idle.
    pub fn step(&mut self) -> bool {
        match self.next_event() {
            Some(event) => {
                self.handle(event);
                true
            }
            None => false,
        }
    }

    pub fn run_until_idle(&mut self) {
        while self.step() {}
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn ui(&self) -> &Ui {
        &self.ui
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        self.ui.document()
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.ui.into_document()
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce() -> PageEvent + Send + 'static,
    {
        let _runtime = self.runtime.enter();
        self.jobs.spawn_blocking(job);
    }

    fn spawn_index_load(&mut self) {
        let fetcher = Arc::clone(&self.fetcher);
        let path = self.session.feed_path().to_string();
        self.spawn(move || {
            let result = fetch_records(fetcher.as_ref(), &path);
            PageEvent::IndexLoaded { path, result }
        });
    }

    fn spawn_home_load(&mut self) {
        let fetcher = Arc::clone(&self.fetcher);
        let path = self.session.feed_path().to_string();
        self.spawn(move || {
            let result = fetcher.fetch(&path).and_then(|body| Feed::parse(&body));
            PageEvent::HomeFeedLoaded { path, result }
        });
    }

    fn spawn_fragment_load(&mut self, slot: IncludeSlot) {
        let fetcher = Arc::clone(&self.fetcher);
        self.spawn(move || {
            let result = fetcher.fetch(&slot.path);
            PageEvent::FragmentLoaded { slot, result }
        });
    }

    fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::Search(text) => {
                let results = self.search.handle(&mut self.ui, &text);
                log::debug!("search {text:?}: {} match(es)", results.records.len());
                if results.load_requested {
                    self.spawn_index_load();
                }
            }
            PageEvent::Click(target) => {
                OutsideClickController::handle(&mut self.ui, target);
            }
            PageEvent::IndexLoaded { path, result } => match result {
                Ok(records) => {
                    let count = self.session.index().append(records);
                    log::debug!("loaded {count} product(s) from {path}");
                }
                Err(error) => log::warn!("product feed {path} failed to load: {error}"),
            },
            PageEvent::HomeFeedLoaded { path, result } => match self.home.render(&mut self.ui, result) {
                Ok(Some(sections)) => log::debug!("rendered {sections} home section(s) from {path}"),
                Ok(None) => log::debug!("home page has no content container"),
                Err(error) => log::warn!("home loader failed for {path}: {error}"),
            },
            PageEvent::FragmentLoaded { slot, result } => match result {
                Ok(html) => {
                    if !IncludesController::apply(&mut self.ui, &slot, &html) {
                        log::debug!("placeholder #{} disappeared before {} arrived", slot.container_id, slot.path);
                    }
                }
                Err(error) => log::debug!("include {} skipped: {error}", slot.path),
            },
        }
    }
}
