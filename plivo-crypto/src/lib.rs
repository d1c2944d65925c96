//! Validation of inbound webhook requests.
//!
//! The platform signs every callback it makes: it takes the full URL it
//! requested, appends each POST field name and value sorted by name with no
//! separator, computes HMAC-SHA1 keyed by the account auth token and sends
//! the base64 digest in the [`SIGNATURE_HEADER`] header. [`validate_request`]
//! recomputes that digest and compares it with the one presented.
//!
//! ```rust
//! use plivo_crypto::{compute_signature, validate_request};
//!
//! let uri = "https://example.com/hook";
//! let fields = [("To", "1000"), ("CallStatus", "completed")];
//! let signature = compute_signature("s3cr3t", uri, fields)?;
//! assert!(validate_request(uri, fields, &signature, "s3cr3t"));
//! assert!(!validate_request(uri, fields, &signature, "s3cr3T"));
//! # Ok::<(), plivo_crypto::SignatureError>(())
//! ```

#![deny(unsafe_code)]

#[macro_use]
mod sha;
mod signature;

pub use signature::{
    RequestValidator, SIGNATURE_HEADER, SignatureError, canonical_message, compute_signature,
    validate_request,
};
