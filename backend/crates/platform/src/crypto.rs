//! Single-use tokens for email verification and password reset.

use rand::RngCore;

/// Random bytes behind each token. Hex encoding doubles the length.
pub const TOKEN_BYTES: usize = 32;

/// Fresh token: [`TOKEN_BYTES`] from the thread RNG, lowercase hex.
pub fn random_hex_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compare a submitted token with a stored one without short-circuiting
/// on the first differing byte.
pub fn constant_time_eq(stored: &[u8], submitted: &[u8]) -> bool {
    stored.len() == submitted.len()
        && stored
            .iter()
            .zip(submitted)
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}
