/// HMAC-SHA1 over one or more byte slices concatenated, keyed by `$key`.
///
/// Evaluates to `Result<[u8; 20], hmac::digest::InvalidLength>`.
macro_rules! hmac_sha1 {
    ( $key:expr; $( $x:expr ),+ ) => {{
        use hmac::{Hmac, Mac};
        match Hmac::<sha1::Sha1>::new_from_slice($key) {
            Ok(mut mac) => {
                $( mac.update($x); )+
                let out: [u8; 20] = mac.finalize().into_bytes().into();
                Ok(out)
            }
            Err(e) => Err(e),
        }
    }};
}
