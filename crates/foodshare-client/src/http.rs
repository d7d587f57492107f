//! [`EventApi`] over blocking HTTP.

use std::time::Duration;

use foodshare_model::{
    ComunaCoordinates, ComunaImageCount, DayCount, Event, EventPage, EventSubmission,
    FoodTypeCount, MonthDaypartCounts, RegionsAndComunas, SubmissionOutcome,
};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::api::EventApi;
use crate::endpoint::{COORDINATES_PATH, Query, REGISTER_PATH, join, parse_base_url};
use crate::error::{ApiError, Result};
use crate::multipart::{FormPart, form_parts, image_mime};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the CGI backend.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn query<T: DeserializeOwned>(&self, query: &Query) -> Result<T> {
        let url = query.url(&self.base_url)?;
        self.get_json(url, query.kind())
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url, endpoint: &str) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent())
            .header(ACCEPT, "application/json")
            .send()?;
        decode(response, endpoint)
    }

    fn registration_form(submission: &EventSubmission) -> Result<Form> {
        let mut form = Form::new();
        for part in form_parts(submission)? {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    path,
                } => {
                    let bytes = std::fs::read(&path).map_err(|source| ApiError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    let mime = image_mime(&file_name);
                    let part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

fn user_agent() -> String {
    format!("foodshare/{}", env!("CARGO_PKG_VERSION"))
}

fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!(endpoint, status = status.as_u16(), "request failed");
        return Err(ApiError::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text()?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

impl EventApi for HttpApi {
    fn regions_and_comunas(&self) -> Result<RegionsAndComunas> {
        self.query(&Query::RegionsAndComunas)
    }

    fn food_types(&self) -> Result<Vec<String>> {
        self.query(&Query::FoodTypes)
    }

    fn social_networks(&self) -> Result<Vec<String>> {
        self.query(&Query::SocialNetworks)
    }

    fn events(&self, limit: Option<u64>, offset: u64) -> Result<EventPage> {
        self.query(&Query::Events { limit, offset })
    }

    fn event(&self, id: u64) -> Result<Option<Event>> {
        let page: EventPage = self.query(&Query::Event { id })?;
        Ok(page.data.into_iter().next())
    }

    fn image_count_per_comuna(&self) -> Result<Vec<ComunaImageCount>> {
        self.query(&Query::ComunaImages)
    }

    fn events_of_comuna(&self, comuna: &str) -> Result<Vec<Event>> {
        let page: EventPage = self.query(&Query::EventsOfComuna {
            comuna: comuna.to_string(),
        })?;
        Ok(page.data)
    }

    fn events_per_day(&self) -> Result<Vec<DayCount>> {
        self.query(&Query::EventsPerDay)
    }

    fn events_per_food_type(&self) -> Result<Vec<FoodTypeCount>> {
        self.query(&Query::EventsPerFoodType)
    }

    fn events_by_month_and_daypart(&self) -> Result<MonthDaypartCounts> {
        self.query(&Query::EventsByMonthAndDaypart)
    }

    fn comuna_coordinates(&self) -> Result<Vec<ComunaCoordinates>> {
        let url = join(&self.base_url, COORDINATES_PATH)?;
        self.get_json(url, "coordinates")
    }

    fn register(&self, submission: &EventSubmission) -> Result<SubmissionOutcome> {
        let url = join(&self.base_url, REGISTER_PATH)?;
        let form = Self::registration_form(submission)?;
        debug!(%url, "POST registration");
        let response = self
            .client
            .post(url)
            .header(USER_AGENT, user_agent())
            .multipart(form)
            .send()?;
        let outcome: SubmissionOutcome = decode(response, "register")?;
        for field in outcome.response().unknown_fields() {
            warn!(field, "registration response has an unknown field");
        }
        Ok(outcome)
    }
}
