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

use bherror::{traits::ForeignError as _, Error, Result};
use openssl::{
    hash::MessageDigest,
    pkey::{PKey, Private, Public},
    sign::{Signer as OpensslSigner, Verifier as OpensslVerifier},
};
use serde::Serialize;

use crate::{
    certificate::Certificate,
    error::{CertificateError, SignerError},
    utils::{base64_url_decode, base64_url_encode, construct_jws_payload},
};

/// JWS `"alg"` header parameter value for digital signature algorithm
/// **RSASSA-PKCS1-v1_5 using SHA-512**, as specified in [RFC7518].
///
/// [RFC7518]: https://datatracker.ietf.org/doc/html/rfc7518#section-3.1
pub const SIGNING_ALG_RS512: &str = "RS512";

/// The JOSE header embedded in every produced JWS.
///
/// Serialization must stay byte-stable: the encoded header is part of the
/// signing input, so any change to the field set or order invalidates
/// previously produced signatures.
#[derive(Serialize)]
struct JoseHeader {
    alg: &'static str,
}

/// Signer producing JWS Compact Serializations with the `RS512` algorithm
/// (RSASSA-PKCS1-v1_5 using the SHA-512 hash function).
///
/// The payload is treated as an opaque byte string and embedded verbatim; the
/// caller is responsible for it being the JSON they intend to sign. RS512
/// signatures are deterministic, so signing the same payload with the same
/// key always yields the same compact JWS.
#[derive(Debug)]
pub struct Rs512Signer {
    private_key: PKey<Private>,
}

impl Rs512Signer {
    /// Create an `RS512` signer from a private key in the PEM format, either
    /// PKCS#1 or PKCS#8.
    pub fn from_private_key_pem(private_key_pem: &[u8]) -> Result<Self, SignerError> {
        let private_key = PKey::private_key_from_pem(private_key_pem)
            .foreign_err(|| SignerError::KeyLoadFailed)?;

        Ok(Self { private_key })
    }

    /// Sign `payload_json`, returning the JWS Compact Serialization
    /// `base64url(header).base64url(payload).base64url(signature)`.
    pub fn sign(&self, payload_json: &str) -> Result<String, SignerError> {
        let header = serde_json::to_string(&JoseHeader {
            alg: SIGNING_ALG_RS512,
        })
        .foreign_err(|| SignerError::SignatureFailed)?;

        let signing_input =
            construct_jws_payload(&base64_url_encode(header), &base64_url_encode(payload_json));

        let signature = self.sign_raw(signing_input.as_bytes())?;

        Ok(format!("{signing_input}.{}", base64_url_encode(signature)))
    }

    /// Produce a raw RS512 signature over `message`.
    fn sign_raw(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        let mut signer = OpensslSigner::new(MessageDigest::sha512(), &self.private_key)
            .foreign_err(|| SignerError::SignatureFailed)?;

        signer
            .sign_oneshot_to_vec(message)
            .foreign_err(|| SignerError::SignatureFailed)
    }
}

/// Verifier for `RS512` JWS Compact Serializations.
#[derive(Default)]
pub struct Rs512Verifier;

impl Rs512Verifier {
    /// Verify the signature of `compact_jws` against the given PEM public
    /// key.
    ///
    /// Returns `Ok(true)` if the signature is valid for the embedded signing
    /// input, `Ok(false)` if it is well-formed but does not verify, and
    /// `Err(_)` if the JWS is not in compact form or the backend fails.
    pub fn verify(&self, compact_jws: &str, public_key_pem: &[u8]) -> Result<bool, SignerError> {
        let public_key = PKey::<Public>::public_key_from_pem(public_key_pem)
            .foreign_err(|| SignerError::KeyLoadFailed)?;

        let (signing_input, signature) = split_compact_jws(compact_jws)?;

        let mut verifier = OpensslVerifier::new(MessageDigest::sha512(), &public_key)
            .foreign_err(|| SignerError::SignatureFailed)?;

        verifier
            .verify_oneshot(&signature, signing_input.as_bytes())
            .foreign_err(|| SignerError::SignatureFailed)
    }
}

/// Split a compact JWS into its signing input (`header.payload`, verbatim)
/// and decoded signature bytes.
fn split_compact_jws(compact_jws: &str) -> Result<(&str, Vec<u8>), SignerError> {
    let (signing_input, signature_b64) = compact_jws
        .rsplit_once('.')
        .ok_or_else(|| Error::root(SignerError::MalformedJws))?;

    if signing_input.matches('.').count() != 1 {
        return Err(Error::root(SignerError::MalformedJws));
    }

    let signature =
        base64_url_decode(signature_b64).foreign_err(|| SignerError::MalformedJws)?;

    Ok((signing_input, signature))
}

/// Signer over an MH XML certificate container, composing [`Certificate`] and
/// [`Rs512Signer`].
///
/// Loading the container and signing keep their separate error families:
/// construction surfaces [`CertificateError`] kinds, signing surfaces
/// [`SignerError`] kinds.
#[derive(Debug)]
pub struct DteSigner {
    certificate: Certificate,
}

impl DteSigner {
    /// Load the private key from the XML certificate container, verifying
    /// `password` against the stored digest if present.
    pub fn from_certificate_xml(
        xml_content: &str,
        password: &str,
    ) -> Result<Self, CertificateError> {
        Ok(Self {
            certificate: Certificate::from_xml(xml_content, password)?,
        })
    }

    /// The certificate loaded from the container.
    pub fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    /// Sign `payload_json` with the certificate's key, returning the compact
    /// JWS.
    pub fn sign(&self, payload_json: &str) -> Result<String, SignerError> {
        let signer =
            Rs512Signer::from_private_key_pem(self.certificate.private_key_pem().as_bytes())?;

        signer.sign(payload_json)
    }
}
