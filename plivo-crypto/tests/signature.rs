use std::collections::{BTreeMap, HashMap};

use plivo_crypto::{RequestValidator, SIGNATURE_HEADER, canonical_message, compute_signature, validate_request};

const URI: &str = "https://example.com/hook";
const SECRET: &str = "s3cr3t";
// HMAC-SHA1("s3cr3t", "https://example.com/hookCallStatuscompletedTo1000"), base64
const EXPECTED: &str = "zCoIi2NEz04dtwONEtCnyOIbVy4=";

fn fields() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("CallStatus".to_string(), "completed".to_string());
    m.insert("To".to_string(), "1000".to_string());
    m
}

#[test]
fn reproduces_reference_digest() {
    assert_eq!(
        canonical_message(URI, &fields()),
        "https://example.com/hookCallStatuscompletedTo1000",
    );
    assert_eq!(compute_signature(SECRET, URI, &fields()).unwrap(), EXPECTED);
    assert!(validate_request(URI, &fields(), EXPECTED, SECRET));
}

#[test]
fn map_type_does_not_matter() {
    let ordered: BTreeMap<&str, &str> = [("To", "1000"), ("CallStatus", "completed")].into_iter().collect();
    assert!(validate_request(URI, ordered, EXPECTED, SECRET));
}

#[test]
fn any_single_change_flips_the_verdict() {
    // field value
    let mut f = fields();
    f.insert("To".into(), "1001".into());
    assert!(!validate_request(URI, &f, EXPECTED, SECRET));

    // field name
    let mut f = fields();
    f.remove("To");
    f.insert("Tp".into(), "1000".into());
    assert!(!validate_request(URI, &f, EXPECTED, SECRET));

    // uri, including a trailing slash
    assert!(!validate_request("https://example.com/hooK", &fields(), EXPECTED, SECRET));
    assert!(!validate_request("https://example.com/hook/", &fields(), EXPECTED, SECRET));

    // secret
    assert!(!validate_request(URI, &fields(), EXPECTED, "s3cr3T"));

    // signature
    assert!(!validate_request(URI, &fields(), "zCoIi2NEz04dtwONEtCnyOIbVy4", SECRET));
    assert!(!validate_request(URI, &fields(), "", SECRET));
}

#[test]
fn query_string_is_part_of_the_message() {
    let sig = compute_signature("token", "http://example.com/answer?x=1", [("From", "1000"), ("Digits", "5")]).unwrap();
    assert_eq!(sig, "5LI0lYfCgUoz187gx+JpV6DC4Z4=");
}

#[test]
fn undelimited_pairs_can_collide() {
    let a = canonical_message(URI, [("a", "bc"), ("ab", "c")]);
    let b = canonical_message(URI, [("a", "b"), ("abc", "c")]);
    assert_eq!(a, format!("{URI}abcabc"));
    assert_eq!(b, format!("{URI}ababcc"));
    let x = canonical_message(URI, [("ab", "c")]);
    let y = canonical_message(URI, [("a", "bc")]);
    assert_eq!(x, y);
}

#[test]
fn validator_binds_credentials() {
    let v = RequestValidator::new("MAXXXXXXXXXXXXXXXXXX", SECRET);
    assert_eq!(v.auth_id(), "MAXXXXXXXXXXXXXXXXXX");
    assert_eq!(v.sign(URI, &fields()).unwrap(), EXPECTED);
    assert!(v.validate(URI, &fields(), EXPECTED));
    assert!(!RequestValidator::new("MAXXXXXXXXXXXXXXXXXX", "other").validate(URI, &fields(), EXPECTED));
}

#[test]
fn header_name() {
    assert_eq!(SIGNATURE_HEADER, "X-Plivo-Signature");
}
