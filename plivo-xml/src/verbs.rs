//! Typed RESTXML verbs.
//!
//! Each verb is a plain struct whose fields map 1:1 onto the element's wire
//! attributes. Enum-constrained parameters are Rust enums, so a verb built
//! through its typed setters is valid by construction; the string-keyed
//! [`Verb::param`] path validates names and values as it goes and rejects
//! anything it does not recognize.

use std::fmt;
use std::str::FromStr;

use crate::element::{Attributes, Element, Tag};
use crate::errors::MarkupError;

// ─── Verb trait ──────────────────────────────────────────────────────────────

/// A RESTXML instruction that can be turned into an [`Element`].
pub trait Verb: Sized {
    /// The tag of the element this verb builds.
    const TAG: Tag;

    /// Wire attributes, with unset options omitted.
    fn attributes(&self) -> Attributes;

    /// Literal body text, for verbs that carry one.
    fn body(&self) -> Option<&str> {
        None
    }

    /// Set one parameter by its wire name, parsing and validating `value`.
    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError>;

    /// Chaining form of [`Verb::set_param`].
    fn param(mut self, name: &str, value: &str) -> Result<Self, MarkupError> {
        self.set_param(name, value)?;
        Ok(self)
    }

    /// Apply several `(name, value)` parameters, stopping at the first error.
    fn params<'a, I>(mut self, params: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in params {
            self.set_param(name, value)?;
        }
        Ok(self)
    }

    /// Build the element.
    fn into_element(self) -> Result<Element, MarkupError> {
        let text = self.body().map(str::to_owned);
        Ok(Element::new(Self::TAG, self.attributes(), text))
    }
}

// ─── Constrained literals ────────────────────────────────────────────────────

macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, param = $param:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every accepted wire literal.
            pub const ALLOWED: &'static [&'static str] = &[$($lit),+];

            /// The wire literal.
            pub const fn as_str(self) -> &'static str {
                match self { $( Self::$variant => $lit ),+ }
            }

            /// Parse `value`, reporting failures against `parameter`.
            pub fn parse(parameter: &'static str, value: &str) -> Result<Self, MarkupError> {
                match value {
                    $( $lit => Ok(Self::$variant), )+
                    _ => Err(MarkupError::InvalidParameter {
                        parameter,
                        value: value.to_owned(),
                        allowed: Self::ALLOWED,
                    }),
                }
            }
        }

        impl FromStr for $name {
            type Err = MarkupError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse($param, s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum! {
    /// Text-to-speech language for [`Speak`].
    Language, param = "language" {
        English => "en",
        Spanish => "es",
        French  => "fr",
        German  => "de",
    }
}

literal_enum! {
    /// HTTP method used when the platform calls back into an `action` URL.
    HttpMethod, param = "method" {
        Get  => "GET",
        Post => "POST",
    }
}

literal_enum! {
    /// Why an incoming call is refused by [`Reject`].
    RejectReason, param = "reason" {
        Rejected => "rejected",
        Busy     => "busy",
    }
}

// ─── helpers ─────────────────────────────────────────────────────────────────

fn put<V: ToString>(attrs: &mut Attributes, name: &str, value: Option<V>) {
    if let Some(v) = value {
        attrs.insert(name.to_owned(), v.to_string());
    }
}

fn parse_u32(parameter: &'static str, value: &str) -> Result<u32, MarkupError> {
    value.trim().parse().map_err(|_| MarkupError::InvalidParameter {
        parameter,
        value: value.to_owned(),
        allowed: &[],
    })
}

fn parse_bool(parameter: &'static str, value: &str) -> Result<bool, MarkupError> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(MarkupError::InvalidParameter {
            parameter,
            value: value.to_owned(),
            allowed: &["true", "false"],
        }),
    }
}

fn unknown(verb: Tag, name: &str) -> MarkupError {
    MarkupError::UnknownParameter { verb, parameter: name.to_owned() }
}

// ─── Response ────────────────────────────────────────────────────────────────

/// Document root. The only element rendered without a parent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub version: Option<String>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl Verb for Response {
    const TAG: Tag = Tag::Response;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "version", self.version.as_ref());
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "version" => self.version = Some(value.to_owned()),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Speak ───────────────────────────────────────────────────────────────────

/// Read `text` to the caller with text-to-speech.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Speak {
    pub text:       String,
    pub voice:      Option<String>,
    pub language:   Option<Language>,
    /// Rendered as `loop`.
    pub loop_count: Option<u32>,
}

impl Speak {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), voice: None, language: None, loop_count: None }
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn loop_count(mut self, n: u32) -> Self {
        self.loop_count = Some(n);
        self
    }
}

impl Verb for Speak {
    const TAG: Tag = Tag::Speak;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "voice", self.voice.as_ref());
        put(&mut a, "language", self.language);
        put(&mut a, "loop", self.loop_count);
        a
    }

    fn body(&self) -> Option<&str> {
        Some(&self.text)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "voice"    => self.voice = Some(value.to_owned()),
            "language" => self.language = Some(Language::parse("language", value)?),
            "loop"     => self.loop_count = Some(parse_u32("loop", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Play ────────────────────────────────────────────────────────────────────

/// Play the audio file at `url`. The file must be served with a correct MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    pub url:        String,
    pub loop_count: Option<u32>,
}

impl Play {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), loop_count: None }
    }

    pub fn loop_count(mut self, n: u32) -> Self {
        self.loop_count = Some(n);
        self
    }
}

impl Verb for Play {
    const TAG: Tag = Tag::Play;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "loop", self.loop_count);
        a
    }

    fn body(&self) -> Option<&str> {
        Some(&self.url)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "loop" => self.loop_count = Some(parse_u32("loop", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Wait ────────────────────────────────────────────────────────────────────

/// Pause call processing for `length` seconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wait {
    pub length: Option<u32>,
}

impl Wait {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, seconds: u32) -> Self {
        self.length = Some(seconds);
        self
    }
}

impl Verb for Wait {
    const TAG: Tag = Tag::Wait;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "length", self.length);
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "length" => self.length = Some(parse_u32("length", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Redirect ────────────────────────────────────────────────────────────────

/// Continue the call flow with the document served at `url`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Redirect {
    pub url:    Option<String>,
    pub method: Option<HttpMethod>,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), method: None }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }
}

impl Verb for Redirect {
    const TAG: Tag = Tag::Redirect;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "method", self.method);
        a
    }

    fn body(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "method" => self.method = Some(HttpMethod::parse("method", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Hangup ──────────────────────────────────────────────────────────────────

/// End the call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hangup;

impl Hangup {
    pub fn new() -> Self {
        Self
    }
}

impl Verb for Hangup {
    const TAG: Tag = Tag::Hangup;

    fn attributes(&self) -> Attributes {
        Attributes::new()
    }

    fn set_param(&mut self, name: &str, _value: &str) -> Result<(), MarkupError> {
        Err(unknown(Self::TAG, name))
    }
}

// ─── GetDigits ───────────────────────────────────────────────────────────────

/// Collect keypad input and submit it to `action`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetDigits {
    pub action:        Option<String>,
    pub method:        Option<HttpMethod>,
    pub num_digits:    Option<u32>,
    /// Seconds to wait for input.
    pub timeout:       Option<u32>,
    pub finish_on_key: Option<String>,
}

impl GetDigits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(mut self, url: impl Into<String>) -> Self {
        self.action = Some(url.into());
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn num_digits(mut self, n: u32) -> Self {
        self.num_digits = Some(n);
        self
    }

    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn finish_on_key(mut self, key: impl Into<String>) -> Self {
        self.finish_on_key = Some(key.into());
        self
    }
}

impl Verb for GetDigits {
    const TAG: Tag = Tag::GetDigits;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "action", self.action.as_ref());
        put(&mut a, "method", self.method);
        put(&mut a, "numDigits", self.num_digits);
        put(&mut a, "timeout", self.timeout);
        put(&mut a, "finishOnKey", self.finish_on_key.as_ref());
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "action"      => self.action = Some(value.to_owned()),
            "method"      => self.method = Some(HttpMethod::parse("method", value)?),
            "numDigits"   => self.num_digits = Some(parse_u32("numDigits", value)?),
            "timeout"     => self.timeout = Some(parse_u32("timeout", value)?),
            "finishOnKey" => self.finish_on_key = Some(value.to_owned()),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Number ──────────────────────────────────────────────────────────────────

/// One destination of a [`Dial`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Number {
    pub number:      String,
    /// Keys to press once the number answers.
    pub send_digits: Option<String>,
}

impl Number {
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: number.into(), send_digits: None }
    }

    pub fn send_digits(mut self, digits: impl Into<String>) -> Self {
        self.send_digits = Some(digits.into());
        self
    }
}

impl Verb for Number {
    const TAG: Tag = Tag::Number;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "sendDigits", self.send_digits.as_ref());
        a
    }

    fn body(&self) -> Option<&str> {
        Some(&self.number)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "sendDigits" => self.send_digits = Some(value.to_owned()),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Sms ─────────────────────────────────────────────────────────────────────

/// Send a text message during the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sms {
    pub message:         String,
    /// Defaults to the other party of the call when unset.
    pub to:              Option<String>,
    /// Rendered as `from`.
    pub sender:          Option<String>,
    pub action:          Option<String>,
    pub method:          Option<HttpMethod>,
    /// Requested once the message has actually been sent.
    pub status_callback: Option<String>,
}

impl Sms {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message:         message.into(),
            to:              None,
            sender:          None,
            action:          None,
            method:          None,
            status_callback: None,
        }
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn sender(mut self, from: impl Into<String>) -> Self {
        self.sender = Some(from.into());
        self
    }

    pub fn action(mut self, url: impl Into<String>) -> Self {
        self.action = Some(url.into());
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn status_callback(mut self, url: impl Into<String>) -> Self {
        self.status_callback = Some(url.into());
        self
    }
}

impl Verb for Sms {
    const TAG: Tag = Tag::Sms;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "to", self.to.as_ref());
        put(&mut a, "from", self.sender.as_ref());
        put(&mut a, "action", self.action.as_ref());
        put(&mut a, "method", self.method);
        put(&mut a, "statusCallback", self.status_callback.as_ref());
        a
    }

    fn body(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "to"             => self.to = Some(value.to_owned()),
            "from" | "sender" => self.sender = Some(value.to_owned()),
            "action"         => self.action = Some(value.to_owned()),
            "method"         => self.method = Some(HttpMethod::parse("method", value)?),
            "statusCallback" => self.status_callback = Some(value.to_owned()),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Conference ──────────────────────────────────────────────────────────────

/// Join the caller to the conference room `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conference {
    pub name:                      String,
    pub muted:                     Option<bool>,
    /// Beep when this participant enters or leaves.
    pub beep:                      Option<bool>,
    pub start_conference_on_enter: Option<bool>,
    pub end_conference_on_exit:    Option<bool>,
    /// Document executed while waiting for the conference to start.
    pub wait_url:                  Option<String>,
    pub wait_method:               Option<HttpMethod>,
}

impl Conference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:                      name.into(),
            muted:                     None,
            beep:                      None,
            start_conference_on_enter: None,
            end_conference_on_exit:    None,
            wait_url:                  None,
            wait_method:               None,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    pub fn beep(mut self, beep: bool) -> Self {
        self.beep = Some(beep);
        self
    }

    pub fn start_conference_on_enter(mut self, start: bool) -> Self {
        self.start_conference_on_enter = Some(start);
        self
    }

    pub fn end_conference_on_exit(mut self, end: bool) -> Self {
        self.end_conference_on_exit = Some(end);
        self
    }

    pub fn wait_url(mut self, url: impl Into<String>) -> Self {
        self.wait_url = Some(url.into());
        self
    }

    pub fn wait_method(mut self, method: HttpMethod) -> Self {
        self.wait_method = Some(method);
        self
    }
}

impl Verb for Conference {
    const TAG: Tag = Tag::Conference;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "muted", self.muted);
        put(&mut a, "beep", self.beep);
        put(&mut a, "startConferenceOnEnter", self.start_conference_on_enter);
        put(&mut a, "endConferenceOnExit", self.end_conference_on_exit);
        put(&mut a, "waitUrl", self.wait_url.as_ref());
        put(&mut a, "waitMethod", self.wait_method);
        a
    }

    fn body(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "muted"                  => self.muted = Some(parse_bool("muted", value)?),
            "beep"                   => self.beep = Some(parse_bool("beep", value)?),
            "startConferenceOnEnter" => {
                self.start_conference_on_enter = Some(parse_bool("startConferenceOnEnter", value)?);
            }
            "endConferenceOnExit"    => {
                self.end_conference_on_exit = Some(parse_bool("endConferenceOnExit", value)?);
            }
            "waitUrl"                => self.wait_url = Some(value.to_owned()),
            "waitMethod"             => self.wait_method = Some(HttpMethod::parse("waitMethod", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Dial ────────────────────────────────────────────────────────────────────

/// Connect the caller to another number.
///
/// `number` may be a single destination, which becomes the element's text, or
/// a comma-separated list, which becomes one nested [`Number`] per entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dial {
    pub number: Option<String>,
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
}

impl Dial {
    /// A `Dial` with no number; destinations are appended as [`Number`]s.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn action(mut self, url: impl Into<String>) -> Self {
        self.action = Some(url.into());
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }
}

impl Verb for Dial {
    const TAG: Tag = Tag::Dial;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "action", self.action.as_ref());
        put(&mut a, "method", self.method);
        a
    }

    fn body(&self) -> Option<&str> {
        self.number.as_deref()
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "action" => self.action = Some(value.to_owned()),
            "method" => self.method = Some(HttpMethod::parse("method", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }

    fn into_element(self) -> Result<Element, MarkupError> {
        let attributes = self.attributes();
        match self.number {
            Some(list) if list.contains(',') => {
                let mut dial = Element::new(Self::TAG, attributes, None);
                for entry in list.split(',') {
                    dial.add(Number::new(entry.trim()))?;
                }
                Ok(dial)
            }
            number => Ok(Element::new(Self::TAG, attributes, number)),
        }
    }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// Record the caller and submit the result to `action`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub action:     Option<String>,
    pub method:     Option<HttpMethod>,
    /// Maximum recording length in seconds.
    pub max_length: Option<u32>,
    /// Seconds of silence that end the recording.
    pub timeout:    Option<u32>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(mut self, url: impl Into<String>) -> Self {
        self.action = Some(url.into());
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn max_length(mut self, seconds: u32) -> Self {
        self.max_length = Some(seconds);
        self
    }

    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

impl Verb for Record {
    const TAG: Tag = Tag::Record;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "action", self.action.as_ref());
        put(&mut a, "method", self.method);
        put(&mut a, "maxLength", self.max_length);
        put(&mut a, "timeout", self.timeout);
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "action"    => self.action = Some(value.to_owned()),
            "method"    => self.method = Some(HttpMethod::parse("method", value)?),
            "maxLength" => self.max_length = Some(parse_u32("maxLength", value)?),
            "timeout"   => self.timeout = Some(parse_u32("timeout", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── Reject ──────────────────────────────────────────────────────────────────

/// Refuse an incoming call without answering it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reject {
    pub reason: Option<RejectReason>,
}

impl Reject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reason(mut self, reason: RejectReason) -> Self {
        self.reason = Some(reason);
        self
    }
}

impl Verb for Reject {
    const TAG: Tag = Tag::Reject;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "reason", self.reason);
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "reason" => self.reason = Some(RejectReason::parse("reason", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── RecordSession ───────────────────────────────────────────────────────────

/// Record the whole call session in the background.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSession {
    /// Prefix for the recording file name.
    pub prefix: Option<String>,
}

impl RecordSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl Verb for RecordSession {
    const TAG: Tag = Tag::RecordSession;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "prefix", self.prefix.as_ref());
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "prefix" => self.prefix = Some(value.to_owned()),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── ScheduleHangup ──────────────────────────────────────────────────────────

/// Hang the call up `time` seconds from now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScheduleHangup {
    pub time: Option<u32>,
}

impl ScheduleHangup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(mut self, seconds: u32) -> Self {
        self.time = Some(seconds);
        self
    }
}

impl Verb for ScheduleHangup {
    const TAG: Tag = Tag::ScheduleHangup;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "time", self.time);
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "time" => self.time = Some(parse_u32("time", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}

// ─── PreAnswer ───────────────────────────────────────────────────────────────

/// Answer in early-media mode and run the nested verbs before the call is
/// actually picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreAnswer {
    pub time: Option<u32>,
}

impl PreAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(mut self, seconds: u32) -> Self {
        self.time = Some(seconds);
        self
    }
}

impl Verb for PreAnswer {
    const TAG: Tag = Tag::PreAnswer;

    fn attributes(&self) -> Attributes {
        let mut a = Attributes::new();
        put(&mut a, "time", self.time);
        a
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<(), MarkupError> {
        match name {
            "time" => self.time = Some(parse_u32("time", value)?),
            _ => return Err(unknown(Self::TAG, name)),
        }
        Ok(())
    }
}
