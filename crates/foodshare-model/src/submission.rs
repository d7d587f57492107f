//! The record a user submits through the registration form.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::FieldName;

/// A file chosen in an image input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    /// File name as reported by the file picker.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Where the bytes are read from when the form is sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl ImageUpload {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            source: None,
        }
    }

    /// Describe a file on disk, reading only its metadata.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            size: metadata.len(),
            source: Some(path.to_path_buf()),
        })
    }
}

/// URL typed into the input of one social network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialNetworkInput {
    pub network: String,
    pub url: String,
}

impl SocialNetworkInput {
    pub fn new(network: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            url: url.into(),
        }
    }
}

/// Values of every input of the form.
///
/// Image slots may be empty (`None`) when an input was added but no file was
/// chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSubmission {
    pub region: String,
    pub comuna: String,
    pub sector: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub food_type: String,
    pub images: Vec<Option<ImageUpload>>,
    pub social_networks: Vec<SocialNetworkInput>,
}

impl EventSubmission {
    /// Text value of a singular field; `None` for list fields.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Region => &self.region,
            FieldName::Comuna => &self.comuna,
            FieldName::Sector => &self.sector,
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::StartDate => &self.start_date,
            FieldName::EndDate => &self.end_date,
            FieldName::Description => &self.description,
            FieldName::FoodType => &self.food_type,
            FieldName::Images | FieldName::SocialNetworks => return None,
        };
        Some(value)
    }

    /// Mutable text value of a singular field; `None` for list fields.
    pub fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match field {
            FieldName::Region => &mut self.region,
            FieldName::Comuna => &mut self.comuna,
            FieldName::Sector => &mut self.sector,
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::StartDate => &mut self.start_date,
            FieldName::EndDate => &mut self.end_date,
            FieldName::Description => &mut self.description,
            FieldName::FoodType => &mut self.food_type,
            FieldName::Images | FieldName::SocialNetworks => return None,
        };
        Some(value)
    }

    /// `(wire name, value)` pairs of the singular fields, in form order.
    pub fn text_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| self.text(field).map(|value| (field.as_str(), value)))
    }
}
