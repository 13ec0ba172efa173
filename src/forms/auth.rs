//! Admin sign-in form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::EmailAddress;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub access_key: String,
}

/// Sign-in data that passed validation.
pub struct SignInPayload {
    pub email: EmailAddress,
    pub access_key: String,
}

impl TryFrom<SignInForm> for SignInPayload {
    type Error = FormError;

    fn try_from(form: SignInForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let email = EmailAddress::new(form.email).map_err(|_| FormError::InvalidEmail)?;
        Ok(Self {
            email,
            access_key: form.access_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_form() {
        let payload = SignInPayload::try_from(SignInForm {
            email: "Admin@ToolsVault.dev".to_string(),
            access_key: "key".to_string(),
        })
        .unwrap();
        assert_eq!(payload.email.as_str(), "admin@toolsvault.dev");
    }

    #[test]
    fn rejects_bad_email_and_empty_key() {
        let result = SignInPayload::try_from(SignInForm {
            email: "nope".to_string(),
            access_key: String::new(),
        });
        assert!(matches!(result, Err(FormError::Validation(_))));
    }
}
