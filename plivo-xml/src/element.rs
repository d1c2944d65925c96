//! The [`Element`] tree and the per-tag containment grammar.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::MarkupError;
use crate::verbs::Verb;

/// Attribute map of an element. Keys iterate in lexicographic order, which is
/// the order they are rendered in.
pub type Attributes = BTreeMap<String, String>;

// ─── Tag ─────────────────────────────────────────────────────────────────────

/// Identifies which verb an [`Element`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tag {
    Response,
    Speak,
    Play,
    Wait,
    Redirect,
    Hangup,
    GetDigits,
    Number,
    Sms,
    Conference,
    Dial,
    Record,
    Reject,
    RecordSession,
    ScheduleHangup,
    PreAnswer,
}

const RESPONSE_CHILDREN: &[Tag] = &[
    Tag::Speak,
    Tag::Play,
    Tag::GetDigits,
    Tag::Record,
    Tag::Dial,
    Tag::Redirect,
    Tag::Wait,
    Tag::Hangup,
    Tag::Reject,
    Tag::Sms,
    Tag::RecordSession,
    Tag::PreAnswer,
    Tag::ScheduleHangup,
    Tag::Conference,
];
const GET_DIGITS_CHILDREN: &[Tag] = &[Tag::Speak, Tag::Play, Tag::Wait];
const DIAL_CHILDREN: &[Tag] = &[Tag::Number];
const PRE_ANSWER_CHILDREN: &[Tag] = &[Tag::Play, Tag::Speak, Tag::GetDigits];

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 16] = [
        Tag::Response,
        Tag::Speak,
        Tag::Play,
        Tag::Wait,
        Tag::Redirect,
        Tag::Hangup,
        Tag::GetDigits,
        Tag::Number,
        Tag::Sms,
        Tag::Conference,
        Tag::Dial,
        Tag::Record,
        Tag::Reject,
        Tag::RecordSession,
        Tag::ScheduleHangup,
        Tag::PreAnswer,
    ];

    /// The element name written on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Response       => "Response",
            Self::Speak          => "Speak",
            Self::Play           => "Play",
            Self::Wait           => "Wait",
            Self::Redirect       => "Redirect",
            Self::Hangup         => "Hangup",
            Self::GetDigits      => "GetDigits",
            Self::Number         => "Number",
            Self::Sms            => "Sms",
            Self::Conference     => "Conference",
            Self::Dial           => "Dial",
            Self::Record         => "Record",
            Self::Reject         => "Reject",
            Self::RecordSession  => "RecordSession",
            Self::ScheduleHangup => "ScheduleHangup",
            Self::PreAnswer      => "PreAnswer",
        }
    }

    /// Tags that may be nested directly inside this one.
    ///
    /// `None` means the element is not nestable at all.
    pub const fn allowed_children(self) -> Option<&'static [Tag]> {
        match self {
            Self::Response  => Some(RESPONSE_CHILDREN),
            Self::GetDigits => Some(GET_DIGITS_CHILDREN),
            Self::Dial      => Some(DIAL_CHILDREN),
            Self::PreAnswer => Some(PRE_ANSWER_CHILDREN),
            _ => None,
        }
    }

    /// Whether `child` may be appended to an element tagged `self`.
    pub fn can_contain(self, child: Tag) -> bool {
        self.allowed_children().is_some_and(|set| set.contains(&child))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Element ─────────────────────────────────────────────────────────────────

/// A single node of a RESTXML document.
///
/// Elements are append-only: attributes and text are fixed at construction
/// and the only mutation is [`Element::append`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    tag:        Tag,
    attributes: Attributes,
    text:       Option<String>,
    children:   Vec<Element>,
}

impl Element {
    /// Create a childless element.
    pub fn new(tag: Tag, attributes: Attributes, text: Option<String>) -> Self {
        Self { tag, attributes, text, children: Vec::new() }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up one attribute by its wire name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Append `child` as the last child of `self`.
    ///
    /// Returns a mutable reference to the appended child so further children
    /// can be chained onto it.
    ///
    /// # Errors
    /// [`MarkupError::NotNestable`] if `self` accepts no children,
    /// [`MarkupError::InvalidChild`] if `child`'s tag is not accepted here.
    pub fn append(&mut self, child: Element) -> Result<&mut Element, MarkupError> {
        let Some(allowed) = self.tag.allowed_children() else {
            return Err(MarkupError::NotNestable { parent: self.tag });
        };
        if !allowed.contains(&child.tag) {
            return Err(MarkupError::InvalidChild { parent: self.tag, child: child.tag });
        }
        self.children.push(child);
        let last = self.children.len() - 1;
        Ok(&mut self.children[last])
    }

    /// Build `verb` and append it in one step.
    ///
    /// ```rust
    /// use plivo_xml::{Response, Speak, GetDigits, Verb};
    ///
    /// let mut doc = Response::new().into_element()?;
    /// doc.add(GetDigits::new().action("http://example.com/menu"))?
    ///    .add(Speak::new("Press 1 for sales"))?;
    /// assert_eq!(doc.children()[0].children().len(), 1);
    /// # Ok::<(), plivo_xml::MarkupError>(())
    /// ```
    pub fn add<V: Verb>(&mut self, verb: V) -> Result<&mut Element, MarkupError> {
        let child = verb.into_element()?;
        self.append(child)
    }
}
