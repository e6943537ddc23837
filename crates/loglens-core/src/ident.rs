//! Content-addressed record identifiers.

use sha1::{Digest, Sha1};

/// Derives the identifier for a raw log line.
///
/// The identifier is the SHA-1 digest of the UTF-8 bytes of `content`,
/// rendered as lowercase hex. The digest is used for stable addressing, not
/// security: identical lines always map to the same identifier, and
/// collisions are not actively resolved.
#[must_use]
pub fn record_id(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
