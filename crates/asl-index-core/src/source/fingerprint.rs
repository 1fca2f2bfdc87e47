use sha2::{Digest, Sha256};

use crate::report::model::SourceInfo;

/// Downloaded script bytes plus their decoded text.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    /// Decoded text; invalid UTF-8 sequences are replaced.
    pub text: String,

    /// Size of the downloaded bytes.
    pub size_bytes: u64,

    /// Hex-encoded SHA-256 of the downloaded bytes.
    pub sha256: String,
}

impl ScriptSource {
    /// Decode `bytes` and compute their identity.
    ///
    /// The fingerprint covers the raw bytes, so two downloads that decode
    /// to the same text but differ in invalid sequences stay distinct.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);

        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
            size_bytes: bytes.len() as u64,
            sha256: hex::encode(digest),
        }
    }

    pub fn info(&self) -> SourceInfo {
        SourceInfo {
            size_bytes: self.size_bytes,
            sha256: self.sha256.clone(),
        }
    }
}
