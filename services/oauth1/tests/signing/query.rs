use http::Method;
use mkmsign_core::Result;
use mkmsign_oauth1::{Credential, Params};
use pretty_assertions::assert_eq;

use super::*;

fn cred() -> Credential {
    Credential::new("ck", "cs", "tk", "ts")
}

#[test]
fn test_query_parameters_are_signed() -> Result<()> {
    let header = init_signer().authorization(&cred(), &Method::GET, "https://h/p?a=1&b=2")?;
    let fields = fields(&header);

    assert!(fields.contains(&r#"a="1""#.to_string()));
    assert!(fields.contains(&r#"b="2""#.to_string()));
    assert!(fields.contains(&r#"realm="https://h/p""#.to_string()));
    assert_eq!(signature(&header), "hFwbB3W7BM52znxWddzD6RxrAvU=");
    Ok(())
}

#[test]
fn test_query_parameters_are_normalized_in_order() {
    let mut params = Params::new("https://h/p", &cred(), NONCE.to_string(), TIMESTAMP.to_string());
    params.merge_query("b=2&a=1");

    let normalized = params.normalize();
    let a = normalized.find("a%3D1").expect("a must be normalized");
    let b = normalized.find("b%3D2").expect("b must be normalized");
    assert!(a < b);
    assert!(normalized.starts_with("a%3D1%26b%3D2%26oauth_consumer_key%3Dck"));
}

#[test]
fn test_fragments_without_equal_are_dropped() -> Result<()> {
    let signer = init_signer();

    let with_flag = signer.authorization(&cred(), &Method::GET, "https://h/p?a=1&b=2&c")?;
    let without_flag = signer.authorization(&cred(), &Method::GET, "https://h/p?a=1&b=2")?;
    assert_eq!(with_flag, without_flag);
    Ok(())
}

#[test]
fn test_query_value_with_equal_sign() -> Result<()> {
    let header = init_signer().authorization(&cred(), &Method::GET, "https://h/p?filter=a=b")?;

    assert!(fields(&header).contains(&r#"filter="a=b""#.to_string()));
    assert_eq!(signature(&header), "QxiaWvW2I1nmJ9UeKkYADt0jLE8=");
    Ok(())
}

#[test]
fn test_empty_query() -> Result<()> {
    let signer = init_signer();

    let with_mark = signer.authorization(&cred(), &Method::GET, "https://h/p?")?;
    let without_mark = signer.authorization(&cred(), &Method::GET, "https://h/p")?;
    assert_eq!(with_mark, without_mark);
    Ok(())
}
