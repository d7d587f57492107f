//! Submission drafts stored as TOML.
//!
//! ```toml
//! region = "Valparaíso"
//! comuna = "Viña del Mar"
//! nombre = "Junta de vecinos"
//! email = "junta@example.cl"
//! dia-hora-inicio = "2024-03-01 12:00"
//! dia-hora-termino = "2024-03-01 15:00"
//! tipo-comida = "Vegana"
//! images = ["fotos/plato.jpg"]
//!
//! [[social]]
//! network = "instagram"
//! url = "https://instagram.com/junta"
//! ```
//!
//! Image paths are relative to the draft; an empty entry is an image input
//! with no file chosen.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use foodshare_model::{EventSubmission, ImageUpload, SocialNetworkInput};
use serde::Deserialize;
use tracing::debug;

use crate::logging::redact_value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Draft {
    pub region: String,
    pub comuna: String,
    pub sector: String,
    #[serde(alias = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(alias = "celular")]
    pub phone: String,
    #[serde(alias = "dia-hora-inicio")]
    pub start_date: String,
    #[serde(alias = "dia-hora-termino")]
    pub end_date: String,
    #[serde(alias = "descripcion-evento")]
    pub description: String,
    #[serde(alias = "tipo-comida")]
    pub food_type: String,
    pub images: Vec<PathBuf>,
    pub social: Vec<SocialNetworkInput>,
}

impl Draft {
    /// Turn the draft into a submission, reading image sizes from disk.
    pub fn into_submission(self, base_dir: &Path) -> Result<EventSubmission> {
        let images = self
            .images
            .iter()
            .map(|path| {
                if path.as_os_str().is_empty() {
                    return Ok(None);
                }
                let path = base_dir.join(path);
                ImageUpload::from_path(&path)
                    .map(Some)
                    .with_context(|| format!("read image {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(EventSubmission {
            region: self.region,
            comuna: self.comuna,
            sector: self.sector,
            name: self.name,
            email: self.email,
            phone: self.phone,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            food_type: self.food_type,
            images,
            social_networks: self.social,
        })
    }
}

/// Read a draft file into a submission.
pub fn load_submission(path: &Path) -> Result<EventSubmission> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read draft {}", path.display()))?;
    let draft: Draft =
        toml::from_str(&content).with_context(|| format!("parse draft {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let submission = draft.into_submission(base_dir)?;
    debug!(
        path = %path.display(),
        name = redact_value(&submission.name),
        email = redact_value(&submission.email),
        images = submission.images.len(),
        "draft loaded"
    );
    Ok(submission)
}
