//! Admin sign-in.

use sha2::{Digest, Sha256};

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::session::SessionUser;
use crate::forms::auth::{SignInForm, SignInPayload};
use crate::services::{ServiceError, ServiceResult};

/// Validates the form and checks the access key against `access_key`.
pub fn sign_in(form: SignInForm, access_key: &str) -> ServiceResult<SessionUser> {
    let payload = SignInPayload::try_from(form)?;

    if access_key.is_empty() || !keys_match(&payload.access_key, access_key) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(SessionUser::new(
        payload.email,
        vec![SERVICE_ADMIN_ROLE.to_string()],
    ))
}

/// Compares SHA-256 digests byte by byte without an early exit, so the time
/// taken does not depend on where the keys differ or on their lengths.
fn keys_match(candidate: &str, expected: &str) -> bool {
    let candidate = Sha256::digest(candidate.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    candidate
        .iter()
        .zip(expected.iter())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
