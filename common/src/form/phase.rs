use crate::error::FormError;
use crate::receipt::Receipt;

/// Where the form is in its lifecycle.
///
/// `Editing` → `Submitting` → `Submitted` or back to `Editing` with an
/// error. `Submitted` only leaves through an explicit close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing { error: Option<FormError> },
    Submitting,
    Submitted(Receipt),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Editing { error: None }
    }
}

impl Phase {
    pub fn is_editing(&self) -> bool {
        matches!(self, Phase::Editing { .. })
    }

    pub fn error(&self) -> Option<&FormError> {
        match self {
            Phase::Editing { error } => error.as_ref(),
            _ => None,
        }
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            Phase::Submitted(receipt) => Some(receipt),
            _ => None,
        }
    }
}
