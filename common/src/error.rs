use thiserror::Error;

/// Errors shown to the requester. `Display` is the inline message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Email must be a valid LNMIIT email address (@lnmiit.ac.in)")]
    InvalidEmail,

    #[error("Mobile number must be exactly 10 digits")]
    InvalidMobile,

    /// Transport failure on the submission call. `detail` is for logs only.
    #[error("Failed to submit the form. Please check your connection and try again.")]
    Submission { detail: String },
}

/// Errors while turning the catalog export into item names.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
}
