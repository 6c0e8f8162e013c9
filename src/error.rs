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

/// Error while loading a private key from the XML certificate container.
///
/// All variants are fatal for the given input; none of them represent a
/// transient condition worth retrying.
#[derive(strum_macros::Display, Debug, PartialEq, Eq, Clone)]
pub enum CertificateError {
    /// The container is not parseable XML at all.
    #[strum(to_string = "Certificate container is not valid XML")]
    MalformedXml,
    /// No `privateKey` element anywhere in the document.
    #[strum(to_string = "Missing <privateKey> element in certificate container")]
    MissingPrivateKeyNode,
    /// The `encodied` element is absent, or empty after trimming.
    #[strum(to_string = "Missing or empty <encodied> element in <privateKey>")]
    MissingEncodedKey,
    /// The SHA-512 digest of the supplied password does not match the stored
    /// `clave` digest.
    #[strum(to_string = "Private key password does not match the stored digest")]
    InvalidPassword,
    /// The `encodied` text is neither valid standard base64 nor a
    /// comma-separated byte list, or it decodes to nothing.
    #[strum(to_string = "Key material is neither valid base64 nor a byte list")]
    InvalidKeyEncoding,
}

impl bherror::BhError for CertificateError {}

/// Error while producing or verifying an RS512 JWS.
#[derive(strum_macros::Display, Debug, PartialEq, Eq, Clone)]
pub enum SignerError {
    /// The crypto backend rejected the PEM private or public key.
    #[strum(to_string = "Unable to load key from PEM")]
    KeyLoadFailed,
    /// The crypto backend failed while signing or verifying.
    #[strum(to_string = "RS512 signature operation failed")]
    SignatureFailed,
    /// A compact JWS did not have the `header.payload.signature` shape, or a
    /// segment was not valid base64url.
    #[strum(to_string = "Malformed compact JWS")]
    MalformedJws,
}

impl bherror::BhError for SignerError {}
