//! Crawl frontier: the FIFO visit queue plus visited-set bookkeeping.
//! One instance is owned by each crawl; it is never shared between crawls.

use std::collections::{HashSet, VecDeque};

use url::Url;

/// Outcome of offering a URL to the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueue {
    /// The URL was appended to the queue.
    Added,
    /// The URL was already visited or already waiting in the queue.
    Duplicate,
    /// The queue is at capacity; the URL was dropped.
    Full,
}

/// Breadth-first frontier with a hard queue capacity. Overflow candidates
/// are dropped rather than queued, and a URL that has ever been visited is
/// never accepted again.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<Url>,
    queued: HashSet<String>,
    visited: HashSet<String>,
    capacity: usize,
}

impl Frontier {
    /// Create an empty frontier holding at most `capacity` waiting URLs.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            capacity,
        }
    }

    /// Offer a URL for a future visit. Duplicates and overflow are dropped;
    /// the returned value says which, so callers can narrate at trace level.
    pub fn offer(&mut self, url: Url) -> Enqueue {
        let key = url.as_str();
        if self.visited.contains(key) || self.queued.contains(key) {
            return Enqueue::Duplicate;
        }
        if self.queue.len() >= self.capacity {
            return Enqueue::Full;
        }
        self.queued.insert(key.to_string());
        self.queue.push_back(url);
        Enqueue::Added
    }

    /// Next URL in arrival order.
    pub fn pop(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        self.queued.remove(url.as_str());
        Some(url)
    }

    /// Record a URL as visited. Returns false when it already was.
    pub fn mark_visited(&mut self, url: &Url) -> bool {
        self.visited.insert(url.as_str().to_string())
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    /// Number of URLs waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of URLs marked visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
