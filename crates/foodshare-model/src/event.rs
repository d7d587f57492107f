//! Registered events as returned by the query endpoint.

use serde::{Deserialize, Serialize};

/// An image stored for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventImage {
    pub basepath: String,
    #[serde(rename = "image-path")]
    pub image_path: String,
}

impl EventImage {
    /// Absolute URL of the image under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.basepath.trim_matches('/'),
            self.image_path.trim_start_matches('/')
        )
    }
}

/// A social network link informed for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(rename = "social-network")]
    pub network: String,
    pub url: String,
}

/// A registered event. Read-only on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "event-id")]
    pub id: u64,
    pub region: String,
    pub comuna: String,
    pub sector: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "dia-hora-inicio")]
    pub start_date: String,
    #[serde(rename = "dia-hora-termino")]
    pub end_date: String,
    #[serde(rename = "descripcion-evento")]
    pub description: String,
    #[serde(rename = "tipo-comida")]
    pub food_type: String,
    #[serde(rename = "foto-comida")]
    pub images: Vec<EventImage>,
    #[serde(rename = "red-social")]
    pub social_networks: Vec<SocialLink>,
}

/// A page of events plus the total number of events stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPage {
    pub count: u64,
    #[serde(default)]
    pub data: Vec<Event>,
}
