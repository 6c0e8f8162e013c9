// Copyright (C) 2020-2025  The Blockhouse Technology Limited (TBTL).
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public
// License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Create the signing input for a `JWS`, given its encoded header and payload.
///
/// The signing input is constructed by concatenating the header and payload by
/// the `.` character, i.e. `<header>.<payload>`, as defined [here].
///
/// [here]: https://www.rfc-editor.org/rfc/rfc7515.html#section-5.1
pub fn construct_jws_payload(header: &str, payload: &str) -> String {
    format!("{header}.{payload}")
}

/// Returns the `base64url`-encoded string of the given `input`, **without
/// padding** (RFC 4648, Section 5).
pub fn base64_url_encode<T: AsRef<[u8]>>(input: T) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decodes the given `payload` as the `base64url`-encoded string **without
/// padding** into bytes.
pub fn base64_url_decode<T: AsRef<[u8]>>(payload: T) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_url_round_trip() {
        let inputs: &[&[u8]] = &[
            b"",
            b"f",
            b"fo",
            b"foo",
            b"foob",
            b"fooba",
            b"foobar",
            &[0x00, 0xff, 0xfe, 0x01],
            b"{\"alg\":\"RS512\"}",
        ];

        for input in inputs {
            let encoded = base64_url_encode(input);
            assert!(!encoded.contains('='));
            assert!(!encoded.contains('+'));
            assert!(!encoded.contains('/'));
            assert_eq!(&base64_url_decode(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn base64_url_decode_rejects_invalid_input() {
        assert!(base64_url_decode("not base64url!").is_err());
        assert!(base64_url_decode("a").is_err());
    }

    #[test]
    fn jws_payload_construction() {
        assert_eq!(construct_jws_payload("aGVhZGVy", "cGF5bG9hZA"), "aGVhZGVy.cGF5bG9hZA");
    }
}
