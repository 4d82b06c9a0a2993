use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

/// Lowercase hex SHA-256 digest of the exact input bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub const ALGORITHM: &'static str = "sha256";

    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            Fingerprint::of_bytes(b"").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            Fingerprint::of_bytes(b"abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let raw = b"0\nA\n0\n";
        assert_eq!(Fingerprint::of_bytes(raw), Fingerprint::of_bytes(raw));
    }

    #[test]
    fn test_line_endings_change_fingerprint() {
        assert_ne!(
            Fingerprint::of_bytes(b"0\nA\n0\n"),
            Fingerprint::of_bytes(b"0\r\nA\r\n0\r\n")
        );
        assert_ne!(
            Fingerprint::of_bytes(b"0\nA\n0"),
            Fingerprint::of_bytes(b"0\nA\n0 ")
        );
    }

    #[test]
    fn test_hex_shape() {
        let fp = Fingerprint::of_bytes(b"anything");
        assert_eq!(fp.as_str().len(), 64);
        assert!(fp.as_str().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(fp.to_string(), fp.as_str());
    }
}
