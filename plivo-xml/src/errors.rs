use std::fmt;

use crate::Tag;

/// Errors raised while building a RESTXML document.
///
/// Every variant is produced synchronously at the point of misuse: either when
/// a verb is constructed or when an element is appended to a parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupError {
    /// An enum-constrained parameter got a value outside its fixed set, or a
    /// numeric/boolean parameter could not be parsed.
    InvalidParameter {
        /// Wire name of the parameter (e.g. `"language"`).
        parameter: &'static str,
        /// The rejected value, verbatim.
        value: String,
        /// Accepted literals, empty for free-form numeric/boolean parameters.
        allowed: &'static [&'static str],
    },
    /// A parameter name the verb does not recognize.
    UnknownParameter {
        /// The verb being configured.
        verb: Tag,
        /// The unrecognized name, verbatim.
        parameter: String,
    },
    /// The parent element accepts no children at all.
    NotNestable {
        /// The parent's tag.
        parent: Tag,
    },
    /// The child's tag is not in the parent's containment set.
    InvalidChild {
        /// The parent's tag.
        parent: Tag,
        /// The rejected child's tag.
        child: Tag,
    },
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { parameter, value, allowed } if allowed.is_empty() => {
                write!(f, "invalid {parameter} parameter {value:?}")
            }
            Self::InvalidParameter { parameter, value, allowed } => {
                write!(f, "invalid {parameter} parameter {value:?}, must be one of: {}", allowed.join(", "))
            }
            Self::UnknownParameter { verb, parameter } => {
                write!(f, "{verb} has no parameter named {parameter:?}")
            }
            Self::NotNestable { parent } => write!(f, "{parent} is not nestable"),
            Self::InvalidChild { parent, child } => write!(f, "{child} is not nestable inside {parent}"),
        }
    }
}

impl std::error::Error for MarkupError {}
