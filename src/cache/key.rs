//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key for a dashboard section.
///
/// The key is the section name followed by a SHA-256 of the sorted
/// parameters, so parameter order never changes the key.
pub fn cache_key(section: &str, params: &[(&str, &str)]) -> String {
    let mut hasher = Sha256::new();

    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort_by_key(|(k, _)| *k);

    for (k, v) in sorted_params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    let digest = format!("{:x}", hasher.finalize());
    format!("{}:{}", section, &digest[..16])
}
