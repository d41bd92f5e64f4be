//! Random password generation

use rand::Rng;

use crate::error::{VaultError, VaultResult};

/// Characters generated passwords draw from
pub const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;

/// Generate a password of `length` characters drawn uniformly from [`CHARSET`]
pub fn generate_password(length: usize) -> VaultResult<String> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(VaultError::Validation(format!(
            "Password length must be between {} and {}, got {}",
            MIN_LENGTH, MAX_LENGTH, length
        )));
    }

    let mut rng = rand::thread_rng();
    Ok((0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect())
}
