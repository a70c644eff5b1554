//! Loading coordinator shared by all texture requests.
//!
//! Callers report `item_start`/`item_end`/`item_error` per URL and get back
//! the lifecycle events to act on. `Completed` is emitted exactly once, when
//! every started item has ended (successfully or not) for the first time.

use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    Started {
        url: String,
        loaded: usize,
        total: usize,
    },
    Progress {
        url: String,
        loaded: usize,
        total: usize,
    },
    Error {
        url: String,
    },
    Completed,
}

pub type LoadEvents = SmallVec<[LoadEvent; 2]>;

#[derive(Debug)]
pub struct LoadingManager {
    items: FnvHashMap<String, ItemState>,
    loaded: usize,
    total: usize,
    phase: LoadPhase,
}

impl Default for LoadingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingManager {
    pub fn new() -> Self {
        Self {
            items: FnvHashMap::default(),
            loaded: 0,
            total: 0,
            phase: LoadPhase::Idle,
        }
    }

    #[inline]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[inline]
    pub fn counts(&self) -> (usize, usize) {
        (self.loaded, self.total)
    }

    pub fn item_state(&self, url: &str) -> Option<ItemState> {
        self.items.get(url).copied()
    }

    pub fn failed_count(&self) -> usize {
        self.items
            .values()
            .filter(|s| **s == ItemState::Failed)
            .count()
    }

    /// Register a request. Starting the same URL twice is ignored.
    pub fn item_start(&mut self, url: &str) -> LoadEvents {
        let mut out = LoadEvents::new();
        if self.items.contains_key(url) {
            return out;
        }
        self.items.insert(url.to_string(), ItemState::Pending);
        self.total += 1;
        if self.phase == LoadPhase::Idle {
            self.phase = LoadPhase::Loading;
            out.push(LoadEvent::Started {
                url: url.to_string(),
                loaded: self.loaded,
                total: self.total,
            });
        }
        out
    }

    pub fn item_end(&mut self, url: &str) -> LoadEvents {
        self.finish(url, ItemState::Loaded)
    }

    /// A failed item still counts towards completion.
    pub fn item_error(&mut self, url: &str) -> LoadEvents {
        self.finish(url, ItemState::Failed)
    }

    fn finish(&mut self, url: &str, state: ItemState) -> LoadEvents {
        let mut out = LoadEvents::new();
        match self.items.get_mut(url) {
            Some(s) if *s == ItemState::Pending => *s = state,
            _ => return out,
        }
        if state == ItemState::Failed {
            out.push(LoadEvent::Error {
                url: url.to_string(),
            });
        }
        self.loaded += 1;
        out.push(LoadEvent::Progress {
            url: url.to_string(),
            loaded: self.loaded,
            total: self.total,
        });
        if self.loaded == self.total && self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Complete;
            out.push(LoadEvent::Completed);
        }
        out
    }
}
