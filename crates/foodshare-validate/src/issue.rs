//! Validation issue types.
//!
//! Each variant carries only the data its message needs. The `Display`
//! text is the message shown under the offending input.

use foodshare_model::FieldName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted image size in bytes.
pub const MIN_IMAGE_SIZE: u64 = 5_000;
/// Maximum accepted image size in bytes.
pub const MAX_IMAGE_SIZE: u64 = 2_000_000;

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Issue {
    // Location
    #[error("Debe seleccionar una región.")]
    RegionMissing,
    #[error("La región seleccionada no es una opción válida.")]
    RegionUnknown { region: String },
    #[error("Debe seleccionar una comuna.")]
    ComunaMissing,
    /// The comuna cannot be judged because its region was rejected.
    #[error("Chequear región.")]
    RegionRejected,
    #[error("La comuna seleccionada no es una opción válida.")]
    ComunaUnknown { region: String, comuna: String },

    // Free text
    #[error("Largo máximo de caracteres excedido.")]
    TooLong {
        field: FieldName,
        length: usize,
        max: usize,
    },

    // Contact
    #[error("Debe ingresar un nombre de contacto.")]
    NameMissing,
    #[error("Al menos 3 caracteres, máximo 200.")]
    NameLength { length: usize },
    #[error("Debe ingresar un email.")]
    EmailMissing,
    #[error("Formato de email no válido.")]
    EmailFormat,
    #[error("Número de celular no válido, ver ejemplo.")]
    PhoneFormat,

    // Schedule
    #[error("Debe ingresar la fecha de inicio del evento.")]
    StartDateMissing,
    #[error("Debe ingresar la fecha de término del evento.")]
    EndDateMissing,
    #[error("Formato incorrecto, ver ejemplo.")]
    DateFormat { field: FieldName, value: String },
    /// The end date cannot be judged because the start date was rejected.
    #[error("Chequear la fecha de inicio.")]
    StartDateRejected,
    #[error("El término debe ser después del inicio del evento.")]
    DatesNotOrdered,

    // Food type
    #[error("Debe seleccionar un tipo de comida.")]
    FoodTypeMissing,
    #[error("El tipo seleccionado no es válido.")]
    FoodTypeUnknown { food_type: String },

    // Images
    #[error("Debe subir una imagen.")]
    ImageMissing,
    #[error("El nombre del archivo no puede ser vacío.")]
    ImageNameEmpty,
    #[error("Extensión del archivo debe ser (.jpg .jpeg .png).")]
    ImageExtension { name: String },
    #[error(
        "El tamaño del archivo debe estar entre {min} KB y {max} MB.",
        min = MIN_IMAGE_SIZE / 1_000,
        max = MAX_IMAGE_SIZE / 1_000_000
    )]
    ImageSize { name: String, size: u64 },

    // Social networks
    #[error("Debe ingresar una URL.")]
    UrlMissing,
    #[error("URL proporcionada no es válida (Ejemplo: https://www.{network}.com/user1234).")]
    UrlInvalid { network: String },
    #[error("URL debe comenzar con https:// o http://")]
    UrlScheme { scheme: String },
    #[error("URL no se corresponde con la red social seleccionada")]
    UrlHost { network: String, host: String },
    #[error("URL no contiene path (https://www.{network}.com/path)")]
    UrlPath { network: String },
    #[error("Máximo un link por tipo de red social.")]
    NetworkRepeated { network: String },
}

impl Issue {
    /// The field the issue is reported on.
    pub fn field(&self) -> FieldName {
        match self {
            Self::RegionMissing | Self::RegionUnknown { .. } => FieldName::Region,
            Self::ComunaMissing | Self::RegionRejected | Self::ComunaUnknown { .. } => {
                FieldName::Comuna
            }
            Self::TooLong { field, .. } | Self::DateFormat { field, .. } => *field,
            Self::NameMissing | Self::NameLength { .. } => FieldName::Name,
            Self::EmailMissing | Self::EmailFormat => FieldName::Email,
            Self::PhoneFormat => FieldName::Phone,
            Self::StartDateMissing => FieldName::StartDate,
            Self::EndDateMissing | Self::StartDateRejected | Self::DatesNotOrdered => {
                FieldName::EndDate
            }
            Self::FoodTypeMissing | Self::FoodTypeUnknown { .. } => FieldName::FoodType,
            Self::ImageMissing
            | Self::ImageNameEmpty
            | Self::ImageExtension { .. }
            | Self::ImageSize { .. } => FieldName::Images,
            Self::UrlMissing
            | Self::UrlInvalid { .. }
            | Self::UrlScheme { .. }
            | Self::UrlHost { .. }
            | Self::UrlPath { .. }
            | Self::NetworkRepeated { .. } => FieldName::SocialNetworks,
        }
    }

    /// Stable identifier for logs and machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RegionMissing => "region.missing",
            Self::RegionUnknown { .. } => "region.unknown",
            Self::ComunaMissing => "comuna.missing",
            Self::RegionRejected => "comuna.region_rejected",
            Self::ComunaUnknown { .. } => "comuna.unknown",
            Self::TooLong { .. } => "text.too_long",
            Self::NameMissing => "name.missing",
            Self::NameLength { .. } => "name.length",
            Self::EmailMissing => "email.missing",
            Self::EmailFormat => "email.format",
            Self::PhoneFormat => "phone.format",
            Self::StartDateMissing => "start_date.missing",
            Self::EndDateMissing => "end_date.missing",
            Self::DateFormat { .. } => "date.format",
            Self::StartDateRejected => "end_date.start_rejected",
            Self::DatesNotOrdered => "end_date.not_after_start",
            Self::FoodTypeMissing => "food_type.missing",
            Self::FoodTypeUnknown { .. } => "food_type.unknown",
            Self::ImageMissing => "image.missing",
            Self::ImageNameEmpty => "image.name_empty",
            Self::ImageExtension { .. } => "image.extension",
            Self::ImageSize { .. } => "image.size",
            Self::UrlMissing => "url.missing",
            Self::UrlInvalid { .. } => "url.invalid",
            Self::UrlScheme { .. } => "url.scheme",
            Self::UrlHost { .. } => "url.host",
            Self::UrlPath { .. } => "url.path",
            Self::NetworkRepeated { .. } => "url.network_repeated",
        }
    }

    /// Message shown under the input.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
