//! Single event views: the detail modal, latest-event rows and deep links.

use foodshare_client::{EventApi, Result};
use foodshare_model::Event;
use serde::Serialize;
use tracing::debug;

/// Rows in the latest-events panel.
pub const DEFAULT_LATEST_COUNT: u64 = 5;

/// Query parameter carrying the id of the event to open.
pub const EVENT_ID_PARAM: &str = "event-id";

const EVENT_LIST_PAGE: &str = "templates/eventList.html";

/// A social link as shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinkView {
    pub label: String,
    pub url: String,
}

/// Everything the detail modal shows for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetail {
    pub id: u64,
    pub region: String,
    pub comuna: String,
    pub sector: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub social_links: Vec<SocialLinkView>,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub food_type: String,
    pub image_urls: Vec<String>,
}

impl EventDetail {
    pub fn from_event(event: &Event, base_url: &str) -> Self {
        Self {
            id: event.id,
            region: event.region.clone(),
            comuna: event.comuna.clone(),
            sector: event.sector.clone(),
            name: event.name.clone(),
            email: event.email.clone(),
            phone: event.phone.clone(),
            social_links: event
                .social_networks
                .iter()
                .map(|link| SocialLinkView {
                    label: capitalize(&link.network),
                    url: link.url.clone(),
                })
                .collect(),
            start_date: event.start_date.clone(),
            end_date: event.end_date.clone(),
            description: event.description.clone(),
            food_type: event.food_type.clone(),
            image_urls: event
                .images
                .iter()
                .map(|image| image.url(base_url))
                .collect(),
        }
    }
}

/// A row of the latest-events panel on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortraitRow {
    pub start_date: String,
    pub end_date: String,
    pub comuna: String,
    pub sector: String,
    pub food_type: String,
    pub image_url: Option<String>,
}

impl PortraitRow {
    pub fn from_event(event: &Event, base_url: &str) -> Self {
        Self {
            start_date: event.start_date.clone(),
            end_date: event.end_date.clone(),
            comuna: event.comuna.clone(),
            sector: event.sector.clone(),
            food_type: event.food_type.clone(),
            image_url: event.images.first().map(|image| image.url(base_url)),
        }
    }
}

/// The `count` most recently registered events.
pub fn latest_events<A>(api: &A, base_url: &str, count: u64) -> Result<Vec<PortraitRow>>
where
    A: EventApi + ?Sized,
{
    let page = api.events(Some(count), 0)?;
    Ok(page
        .data
        .iter()
        .map(|event| PortraitRow::from_event(event, base_url))
        .collect())
}

/// Upper-case the first character.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Link to the event list page opened on one event.
pub fn event_link(base_url: &str, id: u64) -> String {
    format!(
        "{}/{EVENT_LIST_PAGE}?{EVENT_ID_PARAM}={id}",
        base_url.trim_end_matches('/')
    )
}

/// Read the event id from a query string, with or without the leading `?`.
///
/// Absent, non-numeric and zero ids yield `None`.
pub fn parse_event_id(query: &str) -> Option<u64> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let (_, value) = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == EVENT_ID_PARAM)?;
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(id),
    }
}

/// Detail view of the event named in `query`, if any.
pub fn event_from_query<A>(api: &A, base_url: &str, query: &str) -> Result<Option<EventDetail>>
where
    A: EventApi + ?Sized,
{
    let Some(id) = parse_event_id(query) else {
        return Ok(None);
    };
    let event = api.event(id)?;
    if event.is_none() {
        debug!(id, "event not found");
    }
    Ok(event.map(|event| EventDetail::from_event(&event, base_url)))
}
