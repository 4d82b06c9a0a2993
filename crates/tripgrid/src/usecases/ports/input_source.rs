use std::path::Path;

use tripgrid_domain::Fingerprint;

use super::errors::SourceError;

/// Raw input text together with the digest of the bytes it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub raw: String,
    pub fingerprint: Fingerprint,
}

impl SourceDocument {
    /// Decodes `bytes` as UTF-8 and fingerprints them.
    pub fn decode(path: &Path, bytes: Vec<u8>) -> Result<Self, SourceError> {
        let fingerprint = Fingerprint::of_bytes(&bytes);
        let raw = String::from_utf8(bytes).map_err(|e| SourceError::Encoding {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })?;
        Ok(Self { raw, fingerprint })
    }

    pub fn byte_len(&self) -> usize {
        self.raw.len()
    }
}

pub trait InputSource {
    fn read(&self, path: &Path) -> Result<SourceDocument, SourceError>;
}
