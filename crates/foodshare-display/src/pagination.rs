//! Paged event table.

use foodshare_client::{EventApi, Result};
use foodshare_model::Event;
use serde::Serialize;
use tracing::debug;

/// Rows shown per table page.
pub const DEFAULT_PER_PAGE: u64 = 5;

/// Fixed-size paging over a server-side event list. Pages are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Paginator {
    /// A page size of zero is treated as one.
    pub fn new(per_page: u64) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn page_count(&self, count: u64) -> u64 {
        count.div_ceil(self.per_page)
    }

    pub fn offset(&self, page: u64) -> u64 {
        page * self.per_page
    }
}

/// A row of the event table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub start_date: String,
    pub end_date: String,
    pub comuna: String,
    pub sector: String,
    pub food_type: String,
    pub description: String,
    pub name: String,
    /// First image of the event.
    pub image_url: Option<String>,
}

impl EventRow {
    pub fn from_event(event: &Event, base_url: &str) -> Self {
        Self {
            start_date: event.start_date.clone(),
            end_date: event.end_date.clone(),
            comuna: event.comuna.clone(),
            sector: event.sector.clone(),
            food_type: event.food_type.clone(),
            description: event.description.clone(),
            name: event.name.clone(),
            image_url: event.images.first().map(|image| image.url(base_url)),
        }
    }
}

/// The event list with its current page.
#[derive(Debug, Clone)]
pub struct EventTable {
    paginator: Paginator,
    count: u64,
    current_page: u64,
    events: Vec<Event>,
}

impl EventTable {
    /// Load the first page.
    pub fn load<A>(api: &A, paginator: Paginator) -> Result<Self>
    where
        A: EventApi + ?Sized,
    {
        let page = api.events(Some(paginator.per_page()), 0)?;
        Ok(Self {
            paginator,
            count: page.count,
            current_page: 0,
            events: page.data,
        })
    }

    /// Switch to `page`, fetching it from the backend.
    ///
    /// Returns `false` without fetching when `page` is already shown or
    /// does not exist.
    pub fn select_page<A>(&mut self, api: &A, page: u64) -> Result<bool>
    where
        A: EventApi + ?Sized,
    {
        if page == self.current_page || page >= self.page_count() {
            return Ok(false);
        }
        let offset = self.paginator.offset(page);
        let fetched = api.events(Some(self.paginator.per_page()), offset)?;
        debug!(page, offset, rows = fetched.data.len(), "page loaded");
        self.count = fetched.count;
        self.events = fetched.data;
        self.current_page = page;
        Ok(true)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn page_count(&self) -> u64 {
        self.paginator.page_count(self.count)
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Event behind a row of the current page.
    pub fn event_at(&self, row: usize) -> Option<&Event> {
        self.events.get(row)
    }

    pub fn rows(&self, base_url: &str) -> Vec<EventRow> {
        self.events
            .iter()
            .map(|event| EventRow::from_event(event, base_url))
            .collect()
    }
}
