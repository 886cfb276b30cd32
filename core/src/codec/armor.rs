//! Standard base64 armor for carrying ciphertext bytes over text transports.
//! The services never apply it themselves.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{GatewayError, Result};

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(GatewayError::codec("empty armored ciphertext"));
    }
    STANDARD
        .decode(text)
        .map_err(|e| GatewayError::codec(format!("invalid base64: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_is_standard_base64() {
        assert_eq!(encode(b"fhe"), "Zmhl");
        assert_eq!(decode("Zmhl").unwrap(), b"fhe");
        assert_eq!(encode(&[0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(decode(""), Err(GatewayError::Codec(_))));
        assert!(matches!(decode("not-base64-or-empty-bytes"), Err(GatewayError::Codec(_))));
        assert!(matches!(decode("Zmh"), Err(GatewayError::Codec(_))));
    }
}
