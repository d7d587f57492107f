//! Form fields of the event registration form.
//!
//! Every input of the form is identified by a [`FieldName`]. The wire name
//! (`as_str`) is the `name` attribute used by the registration endpoint and
//! the keys of its per-field response.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// An input of the event registration form.
///
/// Declaration order is the order inputs appear in the form, and is the
/// tie-break order used when fields are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldName {
    Region,
    Comuna,
    Sector,
    Name,
    Email,
    Phone,
    StartDate,
    EndDate,
    Description,
    FoodType,
    Images,
    SocialNetworks,
}

impl FieldName {
    /// All fields, in form order.
    pub const ALL: [FieldName; 12] = [
        FieldName::Region,
        FieldName::Comuna,
        FieldName::Sector,
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::StartDate,
        FieldName::EndDate,
        FieldName::Description,
        FieldName::FoodType,
        FieldName::Images,
        FieldName::SocialNetworks,
    ];

    /// Name of the input as sent to and returned by the backend.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Comuna => "comuna",
            Self::Sector => "sector",
            Self::Name => "nombre",
            Self::Email => "email",
            Self::Phone => "celular",
            Self::StartDate => "dia-hora-inicio",
            Self::EndDate => "dia-hora-termino",
            Self::Description => "descripcion-evento",
            Self::FoodType => "tipo-comida",
            Self::Images => "foto-comida",
            Self::SocialNetworks => "red-social",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Region => "Región",
            Self::Comuna => "Comuna",
            Self::Sector => "Sector",
            Self::Name => "Nombre",
            Self::Email => "Email",
            Self::Phone => "Celular",
            Self::StartDate => "Día y hora de inicio",
            Self::EndDate => "Día y hora de término",
            Self::Description => "Descripción",
            Self::FoodType => "Tipo de comida",
            Self::Images => "Fotos",
            Self::SocialNetworks => "Redes sociales",
        }
    }

    /// Whether the input holds a list of values (one state per entry).
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::Images | Self::SocialNetworks)
    }

    /// Whether a value must be supplied.
    ///
    /// Social network inputs are only required once the user added them,
    /// so the list itself is optional.
    pub const fn is_required(&self) -> bool {
        !matches!(
            self,
            Self::Sector | Self::Phone | Self::Description | Self::SocialNetworks
        )
    }

    /// Inclusive character-length bounds for free-text fields.
    pub const fn length_bounds(&self) -> Option<(usize, usize)> {
        match self {
            Self::Sector => Some((0, 100)),
            Self::Name => Some((3, 200)),
            Self::Description => Some((0, 1000)),
            _ => None,
        }
    }

    /// Field whose verdict this field depends on.
    pub const fn depends_on(&self) -> Option<FieldName> {
        match self {
            Self::Comuna => Some(Self::Region),
            Self::EndDate => Some(Self::StartDate),
            _ => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

impl TryFrom<String> for FieldName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.as_str().to_string()
    }
}

/// Validity state of a single input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FieldState {
    /// Not validated since the form was built or reset.
    #[default]
    Untested,
    Valid,
    Invalid { message: String },
}

impl FieldState {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_untested(&self) -> bool {
        matches!(self, Self::Untested)
    }

    /// Message shown under the input; empty unless invalid.
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message } => message,
            _ => "",
        }
    }

    /// Build a state from a `[valid, message]` pair.
    pub fn from_verdict(valid: bool, message: &str) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::invalid(message)
        }
    }
}
