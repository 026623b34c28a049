// ABOUTME: Shared utility functions for Folio
// ABOUTME: Random nonces and upload filename sanitation

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::validation::MAX_IMAGE_NAME_LENGTH;

lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.-]").unwrap();
}

/// Fallback used when nothing survives sanitation
const FALLBACK_FILENAME: &str = "image";

/// Length of the random prefix put in front of stored uploads
pub const NONCE_LENGTH: usize = 8;

/// Generate a random alphanumeric nonce of the given length
pub fn generate_nonce(len: usize) -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Reduce a client-supplied filename to something safe to join onto a directory.
///
/// Non-ASCII characters are dropped, path separators and whitespace become `_`,
/// anything outside `[A-Za-z0-9_.-]` is removed and leading/trailing dots and
/// underscores are trimmed.
pub fn sanitize_filename(name: &str) -> String {
    let ascii: String = name.chars().filter(|c| c.is_ascii()).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sanitized filename with a random nonce in front, used for stored uploads.
///
/// Long names keep their tail so the extension survives and the result fits
/// the image name column.
pub fn prefixed_filename(original: &str) -> String {
    let sanitized = sanitize_filename(original);
    let budget = MAX_IMAGE_NAME_LENGTH - NONCE_LENGTH;

    let tail = if sanitized.len() > budget {
        let cut = &sanitized[sanitized.len() - budget..];
        match cut.trim_start_matches(|c| c == '.' || c == '_') {
            "" => FALLBACK_FILENAME,
            rest => rest,
        }
    } else {
        sanitized.as_str()
    };

    format!("{}{}", generate_nonce(NONCE_LENGTH), tail)
}
