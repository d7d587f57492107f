//! Layout of the registration form body.

use std::path::PathBuf;

use foodshare_model::{EventSubmission, FieldName};

use crate::error::{ApiError, Result};

/// One part of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        path: PathBuf,
    },
}

impl FormPart {
    fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Parts of the registration request, in form order.
///
/// Text inputs use their wire names. Every chosen image is a file part
/// named `foto-comida`; empty image slots are skipped. Each social network
/// link is sent as `red-social` and again under its network id.
pub fn form_parts(submission: &EventSubmission) -> Result<Vec<FormPart>> {
    let mut parts: Vec<FormPart> = submission
        .text_fields()
        .map(|(name, value)| FormPart::text(name, value))
        .collect();

    for image in submission.images.iter().flatten() {
        let Some(path) = image.source.clone() else {
            return Err(ApiError::MissingImageSource {
                name: image.name.clone(),
            });
        };
        parts.push(FormPart::File {
            name: FieldName::Images.as_str().to_string(),
            file_name: image.name.clone(),
            path,
        });
    }

    for input in &submission.social_networks {
        parts.push(FormPart::text(FieldName::SocialNetworks.as_str(), &input.url));
        parts.push(FormPart::text(&input.network, &input.url));
    }
    Ok(parts)
}

/// MIME type announced for an uploaded image.
pub fn image_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use foodshare_model::{ImageUpload, SocialNetworkInput};

    use super::*;

    #[test]
    fn parts_follow_form_layout() {
        let submission = EventSubmission {
            name: "Ana".into(),
            images: vec![
                Some(ImageUpload {
                    source: Some(PathBuf::from("/tmp/plato.jpg")),
                    ..ImageUpload::new("plato.jpg", 6000)
                }),
                None,
            ],
            social_networks: vec![SocialNetworkInput::new(
                "instagram",
                "https://instagram.com/ana",
            )],
            ..EventSubmission::default()
        };
        let parts = form_parts(&submission).unwrap();
        let names: Vec<&str> = parts.iter().map(FormPart::name).collect();

        assert_eq!(
            names,
            [
                "region",
                "comuna",
                "sector",
                "nombre",
                "email",
                "celular",
                "dia-hora-inicio",
                "dia-hora-termino",
                "descripcion-evento",
                "tipo-comida",
                "foto-comida",
                "red-social",
                "instagram"
            ]
        );
        assert_eq!(parts[3], FormPart::text("nombre", "Ana"));
    }

    #[test]
    fn image_without_file_is_an_error() {
        let submission = EventSubmission {
            images: vec![Some(ImageUpload::new("plato.jpg", 6000))],
            ..EventSubmission::default()
        };
        assert!(matches!(
            form_parts(&submission),
            Err(ApiError::MissingImageSource { .. })
        ));
    }

    #[test]
    fn mime_by_extension() {
        assert_eq!(image_mime("A.PNG"), "image/png");
        assert_eq!(image_mime("a.jpeg"), "image/jpeg");
        assert_eq!(image_mime("a.gif"), "application/octet-stream");
    }
}
