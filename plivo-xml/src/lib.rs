//! Builder for RESTXML, the call-flow markup a webhook returns to the
//! telephony platform.
//!
//! A document is a tree of [`Element`]s rooted at a `Response`. Every verb
//! (`Speak`, `Dial`, `GetDigits`, …) has a typed builder implementing
//! [`Verb`], and every append is checked against the parent's containment
//! grammar, so an invalid tree can never be built.
//!
//! # Quick start
//!
//! ```rust
//! use plivo_xml::{Dial, GetDigits, HttpMethod, Language, Response, Speak, Verb};
//!
//! let mut doc = Response::new().into_element()?;
//! doc.add(Speak::new("Welcome").language(Language::English))?;
//! doc.add(GetDigits::new().action("https://example.com/menu").method(HttpMethod::Post).num_digits(1))?
//!    .add(Speak::new("Press 1 for sales"))?;
//! doc.add(Dial::new().number("1000, 1001"))?;
//!
//! let xml = doc.to_xml();
//! assert!(xml.starts_with("<Response><Speak language=\"en\">Welcome</Speak>"));
//! # Ok::<(), plivo_xml::MarkupError>(())
//! ```

#![deny(unsafe_code)]

mod element;
mod errors;
mod serialize;
pub mod verbs;

pub use element::{Attributes, Element, Tag};
pub use errors::MarkupError;
pub use serialize::{CONTENT_TYPE, XML_DECLARATION};
pub use verbs::{
    Conference, Dial, GetDigits, Hangup, HttpMethod, Language, Number, Play, PreAnswer, Record,
    RecordSession, Redirect, Reject, RejectReason, Response, ScheduleHangup, Sms, Speak, Verb, Wait,
};
