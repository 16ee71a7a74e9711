//! Token comparison shared across Linkshelf crates
//!
//! Both sides are hashed with SHA-256 so the comparison always runs over
//! fixed-length digests, and the digests are compared in constant time.

use sha2::{Digest, Sha256};

/// Check a presented bearer token against the configured one.
pub fn token_matches(candidate: &str, expected: &str) -> bool {
    let candidate_hash = Sha256::digest(candidate.as_bytes());
    let expected_hash = Sha256::digest(expected.as_bytes());

    // Constant-time comparison to prevent timing attacks
    let mut result = 0u8;
    for (a, b) in candidate_hash.iter().zip(expected_hash.iter()) {
        result |= a ^ b;
    }
    result == 0
}
