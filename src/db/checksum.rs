//! Checksum calculation for uploaded-document deduplication.

use sha2::{Digest, Sha256};

/// SHA-256 checksum of raw document bytes, hex-encoded.
///
/// Two uploads with the same checksum are the same document; the ingestion
/// layer uses this to avoid re-extracting text for duplicates.
pub fn document_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
