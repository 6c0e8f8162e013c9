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

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! This crate signs DTE (electronic tax document) payloads as [JSON Web
//! Signatures (JWS)][1] in Compact Serialization, using the `RS512` algorithm
//! and the XML "digital certificate" containers issued by the tax authority.
//!
//! [1]: https://datatracker.ietf.org/doc/html/rfc7515
//!
//! # Details
//!
//! The authority does not hand out standard PKCS#12/PEM files; it issues an
//! XML container whose `privateKey` element carries the DER key material
//! (base64 or a comma-separated byte list) together with a SHA-512 digest of
//! the key password. [`Certificate`] parses and validates that container and
//! converts the key into a regular PEM block. [`Rs512Signer`] then produces
//! the compact JWS over an already-serialized JSON payload, which is embedded
//! byte-for-byte. [`DteSigner`] composes the two for the common case;
//! [`Rs512Verifier`] checks produced tokens against the corresponding public
//! key.
//!
//! Every fallible operation returns a [`bherror::Result`] carrying a
//! [`CertificateError`] or [`SignerError`] kind; see the enum docs for the
//! exact failure taxonomy.
//!
//! # Examples
//!
//! ## Sign a payload with a key from an XML container
//!
//! ```
//! use bh_dte_signer::{DteSigner, Rs512Verifier};
//! use base64::{engine::general_purpose::STANDARD, Engine as _};
//!
//! // An authority-issued container would be read from disk; construct an
//! // equivalent one around a fresh key for the sake of the example.
//! let key = openssl::pkey::PKey::from_rsa(openssl::rsa::Rsa::generate(2048).unwrap()).unwrap();
//! let container = format!(
//!     "<CertificadoMH><privateKey>\
//!      <clave>{}</clave>\
//!      <encodied>{}</encodied>\
//!      <format>PKCS8</format>\
//!      </privateKey></CertificadoMH>",
//!     hex::encode(openssl::sha::sha512(b"hunter2")),
//!     STANDARD.encode(key.private_key_to_pkcs8().unwrap()),
//! );
//!
//! // Load the certificate and sign a payload.
//! let signer = DteSigner::from_certificate_xml(&container, "hunter2").unwrap();
//! let jws = signer.sign(r#"{"identificacion":{"version":3}}"#).unwrap();
//!
//! // The result verifies against the public counterpart of the key.
//! let public_pem = key.public_key_to_pem().unwrap();
//! assert!(Rs512Verifier.verify(&jws, &public_pem).unwrap());
//! ```

mod certificate;
mod error;
mod signer;
mod utils;

pub use certificate::*;
pub use error::*;
pub use signer::*;
pub use utils::*;
