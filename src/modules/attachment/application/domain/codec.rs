//! Binary-as-text convention for blob columns: `\x` followed by lower-case hex.

/// Literal backslash + `x`, as the column type prints binary values.
pub const HEX_PREFIX: &str = "\\x";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Stored file is corrupt: {0}")]
pub struct DecodeError(String);

pub fn encode(bytes: &[u8]) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(bytes))
}

/// Accepts text with or without the prefix.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = text.strip_prefix(HEX_PREFIX).unwrap_or(text);
    hex::decode(digits).map_err(|e| DecodeError(e.to_string()))
}

/// Content type recognised from leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Pdf,
    Png,
    Jpeg,
    Gif,
    Svg,
    OctetStream,
}

impl MimeType {
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(b"%PDF") {
            MimeType::Pdf
        } else if bytes.starts_with(b"\x89PNG") {
            MimeType::Png
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            MimeType::Jpeg
        } else if bytes.starts_with(b"GIF") {
            MimeType::Gif
        } else if skip_whitespace(bytes).starts_with(b"<svg") {
            MimeType::Svg
        } else {
            MimeType::OctetStream
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            MimeType::Pdf => "application/pdf",
            MimeType::Png => "image/png",
            MimeType::Jpeg => "image/jpeg",
            MimeType::Gif => "image/gif",
            MimeType::Svg => "image/svg+xml",
            MimeType::OctetStream => "application/octet-stream",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MimeType::Pdf => "pdf",
            MimeType::Png => "png",
            MimeType::Jpeg => "jpg",
            MimeType::Gif => "gif",
            MimeType::Svg => "svg",
            MimeType::OctetStream => "bin",
        }
    }
}

fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_prefix_and_lower_case_hex() {
        assert_eq!(encode(&[0xDE, 0xAD, 0x01]), "\\xdead01");
        assert_eq!(encode(&[]), "\\x");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let samples: [&[u8]; 3] = [b"", b"hello", &[0x00, 0xFF, 0x10, 0x89]];
        for bytes in samples {
            assert_eq!(decode(&encode(bytes)).unwrap(), bytes);
        }
    }

    #[test]
    fn test_decode_accepts_missing_prefix_and_upper_case() {
        assert_eq!(decode("CAFE").unwrap(), vec![0xCA, 0xFE]);
    }

    #[test]
    fn test_decode_rejects_invalid_hex() {
        assert!(decode("\\xzz").is_err());
        assert!(decode("\\xabc").is_err());
    }

    #[test]
    fn test_sniff_known_signatures() {
        assert_eq!(MimeType::sniff(b"\x89PNG\r\n\x1a\n"), MimeType::Png);
        assert_eq!(MimeType::sniff(b"%PDF-1.7"), MimeType::Pdf);
        assert_eq!(MimeType::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), MimeType::Jpeg);
        assert_eq!(MimeType::sniff(b"GIF89a"), MimeType::Gif);
        assert_eq!(MimeType::sniff(b"  <svg xmlns=\"\"/>"), MimeType::Svg);
    }

    #[test]
    fn test_sniff_falls_back_to_octet_stream() {
        let mime = MimeType::sniff(b"PK\x03\x04");
        assert_eq!(mime, MimeType::OctetStream);
        assert_eq!(mime.content_type(), "application/octet-stream");
        assert_eq!(MimeType::sniff(b""), MimeType::OctetStream);
    }
}
