//! Request signature computation and validation.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use subtle::ConstantTimeEq;

/// HTTP header carrying the platform's signature of a webhook request.
pub const SIGNATURE_HEADER: &str = "X-Plivo-Signature";

// ─── SignatureError ──────────────────────────────────────────────────────────

/// Errors from [`compute_signature`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureError {
    /// The HMAC implementation refused the key.
    InvalidKey,
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "invalid HMAC key"),
        }
    }
}

impl std::error::Error for SignatureError {}

// ─── canonical message ───────────────────────────────────────────────────────

/// Build the exact string the platform signs.
///
/// `uri` is used verbatim (no normalization of case, trailing slash or query
/// string). Each POST field is appended as `name` immediately followed by
/// `value`, ordered by name and then by value in byte order.
///
/// There is no delimiter between pairs, so distinct field sets can produce
/// the same message; signers rely on this exact layout.
pub fn canonical_message<I, K, V>(uri: &str, post_vars: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = post_vars.into_iter().collect();
    pairs.sort_by(|a, b| {
        a.0.as_ref()
            .cmp(b.0.as_ref())
            .then_with(|| a.1.as_ref().cmp(b.1.as_ref()))
    });

    let mut message = String::from(uri);
    for (key, value) in &pairs {
        message.push_str(key.as_ref());
        message.push_str(value.as_ref());
    }
    message
}

/// Compute the base64 HMAC-SHA1 signature of a request, keyed by `auth_token`.
pub fn compute_signature<I, K, V>(auth_token: &str, uri: &str, post_vars: I) -> Result<String, SignatureError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let message = canonical_message(uri, post_vars);
    let digest = hmac_sha1!(auth_token.as_bytes(); message.as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    let encoded = STANDARD.encode(digest);
    Ok(encoded.trim_end_matches(['\r', '\n']).to_owned())
}

/// Check `signature` against the one computed for `uri` and `post_vars`.
///
/// Returns `false` on any mismatch; a mismatch is an expected outcome, not an
/// error. The comparison runs in constant time.
pub fn validate_request<I, K, V>(uri: &str, post_vars: I, signature: &str, auth_token: &str) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let expected = match compute_signature(auth_token, uri, post_vars) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[signature] cannot compute signature for {uri}: {e}");
            return false;
        }
    };
    let valid: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();
    if valid {
        log::debug!("[signature] accepted request for {uri}");
    } else {
        log::debug!("[signature] rejected request for {uri}");
    }
    valid
}

// ─── RequestValidator ────────────────────────────────────────────────────────

/// Account credentials bound to request validation.
///
/// ```rust
/// use std::collections::HashMap;
/// use plivo_crypto::RequestValidator;
///
/// let validator = RequestValidator::new("MAXXXXXXXXXXXXXXXXXX", "token");
/// let mut fields = HashMap::new();
/// fields.insert("Digits".to_string(), "5".to_string());
/// let sig = validator.sign("https://example.com/menu", &fields)?;
/// assert!(validator.validate("https://example.com/menu", &fields, &sig));
/// # Ok::<(), plivo_crypto::SignatureError>(())
/// ```
#[derive(Clone)]
pub struct RequestValidator {
    auth_id:    String,
    auth_token: String,
}

impl RequestValidator {
    pub fn new(auth_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self { auth_id: auth_id.into(), auth_token: auth_token.into() }
    }

    /// The account ID these credentials belong to.
    pub fn auth_id(&self) -> &str {
        &self.auth_id
    }

    /// Validate an inbound request. See [`validate_request`].
    pub fn validate<I, K, V>(&self, uri: &str, post_vars: I, expected_signature: &str) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        validate_request(uri, post_vars, expected_signature, &self.auth_token)
    }

    /// Compute the signature the platform would send for this request.
    pub fn sign<I, K, V>(&self, uri: &str, post_vars: I) -> Result<String, SignatureError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        compute_signature(&self.auth_token, uri, post_vars)
    }
}

impl fmt::Debug for RequestValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestValidator {{ auth_id: {:?}, auth_token: <redacted> }}", self.auth_id)
    }
}
