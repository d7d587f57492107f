//! Error types for form operations.

use foodshare_client::ApiError;
use foodshare_model::FieldName;
use thiserror::Error;

use crate::SubmitPhase;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("a form holds at most {max} images")]
    ImageSlotLimit { max: usize },

    #[error("there is no image input {index}")]
    NoSuchImageSlot { index: usize },

    #[error("unknown social network {0}")]
    UnknownNetwork(String),

    #[error("social network {0} has more than one input")]
    DuplicateNetwork(String),

    #[error("no input was added for social network {0}")]
    NetworkNotAdded(String),

    #[error("{0} holds a list; edit its entries instead")]
    ListField(FieldName),

    #[error("cannot {action} while the form is {phase:?}")]
    OutOfPhase {
        action: &'static str,
        phase: SubmitPhase,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, FormError>;
