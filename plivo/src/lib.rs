//! # plivo — helper library for the Plivo telephony platform
//!
//! Three focused sub-crates wired together here for convenience:
//!
//! | Sub-crate      | Role                                                  |
//! |----------------|-------------------------------------------------------|
//! | `plivo-xml`    | Build and render RESTXML call-flow documents          |
//! | `plivo-crypto` | Validate the signature on inbound webhook requests    |
//! | `plivo-rest`   | Authenticated REST API requests over a transport      |
//!
//! ## Quick start: answering a webhook
//!
//! ```rust
//! use plivo::xml::{Dial, Response, Speak, Verb};
//! use plivo::crypto::validate_request;
//!
//! fn answer(uri: &str, fields: &[(&str, &str)], signature: &str, token: &str) -> Option<String> {
//!     if !validate_request(uri, fields.iter().copied(), signature, token) {
//!         return None; // respond with 403
//!     }
//!     let mut doc = Response::new().into_element().ok()?;
//!     doc.add(Speak::new("Connecting you now")).ok()?;
//!     doc.add(Dial::new().number("1000,1001")).ok()?;
//!     Some(doc.to_xml())
//! }
//! # assert!(answer("https://example.com/answer", &[], "bad", "token").is_none());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`plivo_xml`]: elements, verbs, grammar and rendering.
pub use plivo_xml as xml;

/// Re-export of [`plivo_crypto`]: request signature validation.
pub use plivo_crypto as crypto;

/// Re-export of [`plivo_rest`]: REST client and transport trait.
pub use plivo_rest as rest;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use plivo_xml::{Element, MarkupError, Tag, Verb};
pub use plivo_crypto::{RequestValidator, SIGNATURE_HEADER, validate_request};
pub use plivo_rest::{Config, RestClient, RestError, Transport};
