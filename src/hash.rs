//! BLAKE3 fingerprints for catalog snapshots

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Hex digits kept by [`short_fingerprint`]
const SHORT_LEN: usize = 12;

/// Calculate BLAKE3 hash of an in-memory snapshot
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{}{}", HASH_PREFIX, blake3::hash(bytes).to_hex())
}

/// Abbreviated fingerprint for display (`blake3:0123456789ab`)
pub fn short_fingerprint(hash: &str) -> String {
    let hex = hash.strip_prefix(HASH_PREFIX).unwrap_or(hash);
    let end = hex
        .char_indices()
        .nth(SHORT_LEN)
        .map_or(hex.len(), |(idx, _)| idx);
    format!("{}{}", HASH_PREFIX, &hex[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes_deterministic() {
        let a = hash_bytes(b"[]");
        let b = hash_bytes(b"[]");
        assert_eq!(a, b);
        assert!(a.starts_with(HASH_PREFIX));
        assert_ne!(a, hash_bytes(b"[ ]"));
    }

    #[test]
    fn test_short_fingerprint() {
        let full = hash_bytes(b"catalog");
        let short = short_fingerprint(&full);
        assert_eq!(short.len(), HASH_PREFIX.len() + SHORT_LEN);
        assert!(full.starts_with(&short));
        assert_eq!(short_fingerprint("blake3:abc"), "blake3:abc");
    }
}
