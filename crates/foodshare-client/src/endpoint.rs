//! Backend endpoints and URL construction.

use url::Url;

use crate::error::{ApiError, Result};

/// Query script, relative to the base URL.
pub const QUERY_PATH: &str = "cgi-bin/dataAPI.py";
/// Registration script, relative to the base URL.
pub const REGISTER_PATH: &str = "cgi-bin/register_event.py";
/// Static comuna coordinate dataset, relative to the base URL.
pub const COORDINATES_PATH: &str = "static/json/chile.json";

/// A read request to the query endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    RegionsAndComunas,
    FoodTypes,
    SocialNetworks,
    Events { limit: Option<u64>, offset: u64 },
    Event { id: u64 },
    ComunaImages,
    EventsOfComuna { comuna: String },
    EventsPerDay,
    EventsPerFoodType,
    EventsByMonthAndDaypart,
}

impl Query {
    /// Value of the `type` parameter.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RegionsAndComunas => "regions-comunas",
            Self::FoodTypes => "food-types",
            Self::SocialNetworks => "social-networks",
            Self::Events { .. } => "events",
            Self::Event { .. } => "event",
            Self::ComunaImages => "comunas-images",
            Self::EventsOfComuna { .. } => "events-comuna",
            Self::EventsPerDay => "events-per-day",
            Self::EventsPerFoodType => "events-per-food-type",
            Self::EventsByMonthAndDaypart => "events-month-daypart",
        }
    }

    /// Query parameters, `type` first. Zero offsets and absent limits are
    /// left out.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("type", self.kind().to_string())];
        match self {
            Self::Events { limit, offset } => {
                if let Some(limit) = limit {
                    params.push(("limit", limit.to_string()));
                }
                if *offset > 0 {
                    params.push(("offset", offset.to_string()));
                }
            }
            Self::Event { id } => params.push(("id", id.to_string())),
            Self::EventsOfComuna { comuna } => params.push(("comuna", comuna.clone())),
            _ => {}
        }
        params
    }

    /// Full request URL under `base`.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = join(base, QUERY_PATH)?;
        url.query_pairs_mut().extend_pairs(self.params());
        Ok(url)
    }
}

/// Parse a base URL so relative paths join below it, even when it was
/// given without a trailing slash.
pub fn parse_base_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|source| ApiError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Join a relative path below `base`.
pub fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(|source| ApiError::InvalidUrl {
        url: format!("{base}{path}"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_query_omits_defaults() {
        let base = parse_base_url("http://localhost:8000").unwrap();
        let url = Query::Events {
            limit: Some(5),
            offset: 0,
        }
        .url(&base)
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/cgi-bin/dataAPI.py?type=events&limit=5"
        );
    }

    #[test]
    fn comuna_is_encoded() {
        let base = parse_base_url("http://example.cl/app").unwrap();
        let url = Query::EventsOfComuna {
            comuna: "Viña del Mar".into(),
        }
        .url(&base)
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://example.cl/app/cgi-bin/dataAPI.py?type=events-comuna&comuna=Vi%C3%B1a+del+Mar"
        );
    }

    #[test]
    fn invalid_base_is_reported() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
