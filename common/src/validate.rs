//! Client-side checks run before a request may be submitted.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::FormError;
use crate::model::request::IssueRequest;

/// Institutional domain every requester email must end with.
pub const EMAIL_SUFFIX: &str = "@lnmiit.ac.in";

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is valid"));

pub fn is_institutional_email(email: &str) -> bool {
    email.trim().ends_with(EMAIL_SUFFIX)
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// Runs both checks, email first, and reports the first failure.
pub fn validate(request: &IssueRequest) -> Result<(), FormError> {
    if !is_institutional_email(&request.email) {
        return Err(FormError::InvalidEmail);
    }
    if !is_valid_mobile(&request.mobile) {
        return Err(FormError::InvalidMobile);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::variant::FormVariant;

    fn request(email: &str, mobile: &str) -> IssueRequest {
        let mut request = IssueRequest::empty(FormVariant::Store);
        request.email = email.to_string();
        request.mobile = mobile.to_string();
        request
    }

    #[test]
    fn email_must_end_with_institute_domain() {
        assert!(is_institutional_email("asha@lnmiit.ac.in"));
        assert!(is_institutional_email(" asha@lnmiit.ac.in "));
        assert!(!is_institutional_email("asha@gmail.com"));
        assert!(!is_institutional_email("asha@lnmiit.ac.in.evil.com"));
        assert!(!is_institutional_email(""));
    }

    #[test]
    fn mobile_must_be_ten_digits() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432101"));
        assert!(!is_valid_mobile("98765x3210"));
        assert!(!is_valid_mobile("+919876543"));
        assert!(!is_valid_mobile(" 9876543210"));
        assert!(!is_valid_mobile("٩٨٧٦٥٤٣٢١٠"));
    }

    #[test]
    fn email_is_reported_before_mobile() {
        assert_eq!(validate(&request("a@gmail.com", "12")), Err(FormError::InvalidEmail));
        assert_eq!(
            validate(&request("a@lnmiit.ac.in", "12")),
            Err(FormError::InvalidMobile)
        );
        assert_eq!(validate(&request("a@lnmiit.ac.in", "9876543210")), Ok(()));
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Email must be a valid LNMIIT email address (@lnmiit.ac.in)"
        );
    }
}
