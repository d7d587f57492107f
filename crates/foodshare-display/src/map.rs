//! Image map: one marker per comuna with uploaded images.
//!
//! Comuna names in the event store and in the coordinate dataset are typed
//! by different people, so they are reconciled with [`find_similar`] rather
//! than compared for equality.

use std::thread;

use foodshare_client::{EventApi, Result, join_scoped};
use foodshare_match::{DEFAULT_THRESHOLD, find_similar};
use foodshare_model::{ComunaCoordinates, ComunaImageCount, Event};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::detail::event_link;

/// Map placement and matching settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    /// Minimum similarity for a comuna name to match a dataset entry.
    pub threshold: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: -33.45,
            center_lng: -70.666_666_7,
            zoom: 4,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub comuna: String,
    pub lat: f64,
    pub lng: f64,
    pub image_count: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

/// Card shown in a marker popup for one event of the comuna.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupCard {
    pub title: String,
    pub image_urls: Vec<String>,
    pub sector: String,
    pub food_type: String,
    pub start_date: String,
    pub link: String,
}

/// Marker tooltip, e.g. `"Putre: 3 imágenes"`.
pub fn marker_title(comuna: &str, image_count: u64) -> String {
    let noun = if image_count > 1 { "imágenes" } else { "imagen" };
    format!("{comuna}: {image_count} {noun}")
}

/// Place each comuna's image count on the coordinate of the first dataset
/// entry similar enough to its name. Comunas without a match are skipped.
pub fn build_markers(
    coordinates: &[ComunaCoordinates],
    counts: &[ComunaImageCount],
    threshold: f64,
) -> Vec<Marker> {
    counts
        .iter()
        .filter_map(|ComunaImageCount(comuna, image_count)| {
            let Some(place) = find_similar(comuna, coordinates, |c| c.name.as_str(), threshold)
            else {
                warn!(comuna = %comuna, "no coordinates for comuna, marker skipped");
                return None;
            };
            debug!(comuna = %comuna, matched = %place.name, "comuna placed");
            Some(Marker {
                comuna: comuna.clone(),
                lat: place.lat,
                lng: place.lng,
                image_count: *image_count,
                title: marker_title(comuna, *image_count),
            })
        })
        .collect()
}

/// Fetch the coordinate dataset and image counts together and build the map.
pub fn load_map<A>(api: &A, config: &MapConfig) -> Result<MapView>
where
    A: EventApi + ?Sized,
{
    let (coordinates, counts) = thread::scope(|scope| {
        let coordinates = scope.spawn(|| api.comuna_coordinates());
        let counts = api.image_count_per_comuna();
        (join_scoped(coordinates), counts)
    });
    let coordinates = coordinates?;
    let counts = counts?;
    Ok(MapView {
        center: (config.center_lat, config.center_lng),
        zoom: config.zoom,
        markers: build_markers(&coordinates, &counts, config.threshold),
    })
}

/// One numbered card per event of a comuna, linking back to the event list.
pub fn popup_cards(comuna: &str, events: &[Event], base_url: &str) -> Vec<PopupCard> {
    events
        .iter()
        .enumerate()
        .map(|(idx, event)| PopupCard {
            title: format!("{comuna} - {}", idx + 1),
            image_urls: event
                .images
                .iter()
                .map(|image| image.url(base_url))
                .collect(),
            sector: event.sector.clone(),
            food_type: event.food_type.clone(),
            start_date: event.start_date.clone(),
            link: event_link(base_url, event.id),
        })
        .collect()
}

/// Popup cards for the events of a marker's comuna.
pub fn load_popup<A>(api: &A, comuna: &str, base_url: &str) -> Result<Vec<PopupCard>>
where
    A: EventApi + ?Sized,
{
    let events = api.events_of_comuna(comuna)?;
    Ok(popup_cards(comuna, &events, base_url))
}
