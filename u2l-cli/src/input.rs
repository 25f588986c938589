//! Decoding of file and stdin input
//!
//! Encodings are named by their WHATWG labels (`utf-8`, `windows-1252`, `latin1`, `utf-16le`,
//! ...). `AUTO` looks for a byte-order mark and otherwise requires the bytes to be valid UTF-8.

use crate::cli::AUTO_ENCODING;
use encoding_rs::{Encoding, UTF_8};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    UnknownEncoding(String),
    AutoDetectFailed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownEncoding(label) => write!(f, "unknown encoding '{label}'"),
            InputError::AutoDetectFailed => write!(
                f,
                "could not auto-detect the input encoding; please pass --input-encoding"
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// How input bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEncoding {
    Auto,
    Fixed(&'static Encoding),
}

impl Default for InputEncoding {
    fn default() -> Self {
        InputEncoding::Fixed(UTF_8)
    }
}

impl FromStr for InputEncoding {
    type Err = InputError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.eq_ignore_ascii_case(AUTO_ENCODING) {
            return Ok(InputEncoding::Auto);
        }
        Encoding::for_label(label.trim().as_bytes())
            .map(InputEncoding::Fixed)
            .ok_or_else(|| InputError::UnknownEncoding(label.to_string()))
    }
}

impl InputEncoding {
    pub fn decode(&self, bytes: &[u8]) -> Result<String, InputError> {
        match self {
            InputEncoding::Auto => match Encoding::for_bom(bytes) {
                Some((encoding, bom_length)) => {
                    debug!("detected {} byte-order mark", encoding.name());
                    let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
                    Ok(text.into_owned())
                }
                None => std::str::from_utf8(bytes)
                    .map(str::to_owned)
                    .map_err(|_| InputError::AutoDetectFailed),
            },
            InputEncoding::Fixed(encoding) => {
                // A byte-order mark takes precedence over the requested encoding.
                let (text, used, had_errors) = encoding.decode(bytes);
                if had_errors {
                    warn!(
                        "input is not valid {}; invalid sequences were replaced",
                        used.name()
                    );
                }
                Ok(text.into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels() {
        assert_eq!("AUTO".parse::<InputEncoding>(), Ok(InputEncoding::Auto));
        assert_eq!("auto".parse::<InputEncoding>(), Ok(InputEncoding::Auto));
        assert_eq!(
            "latin1".parse::<InputEncoding>(),
            Ok(InputEncoding::Fixed(encoding_rs::WINDOWS_1252))
        );
        assert_eq!("UTF-8".parse::<InputEncoding>(), Ok(InputEncoding::Fixed(UTF_8)));
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "no-such-enc".parse::<InputEncoding>().unwrap_err();
        assert_eq!(err, InputError::UnknownEncoding("no-such-enc".to_string()));
        assert!(err.to_string().contains("unknown encoding"));
    }

    #[test]
    fn decodes_fixed_encoding() {
        let encoding: InputEncoding = "cp1252".parse().unwrap();
        assert_eq!(encoding.decode(b"caf\xe9").unwrap(), "café");
    }

    #[test]
    fn auto_uses_byte_order_mark() {
        let bytes = [0xFF, 0xFE, b'e', 0x00, 0xE9, 0x00];
        assert_eq!(InputEncoding::Auto.decode(&bytes).unwrap(), "eé");
        assert_eq!(
            InputEncoding::Auto.decode(b"\xEF\xBB\xBFcaf\xC3\xA9").unwrap(),
            "café"
        );
    }

    #[test]
    fn auto_accepts_plain_utf8() {
        assert_eq!(InputEncoding::Auto.decode("résumé".as_bytes()).unwrap(), "résumé");
    }

    #[test]
    fn auto_fails_on_other_bytes() {
        assert_eq!(
            InputEncoding::Auto.decode(b"caf\xe9"),
            Err(InputError::AutoDetectFailed)
        );
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        assert_eq!(
            InputEncoding::default().decode(b"a\xffb").unwrap(),
            "a\u{FFFD}b"
        );
    }
}
