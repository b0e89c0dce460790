use http::header::AUTHORIZATION;
use http::Method;
use mkmsign_core::{Context, Result, Signer};
use mkmsign_oauth1::{Credential, Params, StaticCredentialProvider};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_normalize_with_empty_credential() {
    let params = Params::new(
        "test.local",
        &Credential::default(),
        NONCE.to_string(),
        TIMESTAMP.to_string(),
    );

    assert_eq!(
        params.normalize(),
        "oauth_consumer_key%3D%26oauth_nonce%3DLyNoDV8MBnIrpBXtoTGefh9Vvcng5FQ1OCqB3kE5Ryk%253D%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1479036986%26oauth_token%3D%26oauth_version%3D1.0"
    );
}

#[test]
fn test_signature_without_query() -> Result<()> {
    let header = init_signer().authorization(&credential(), &Method::GET, "local.test")?;

    assert_eq!(signature(&header), "TRqCoignxlN/4FNNYClTMU/DChw=");
    assert!(fields(&header).contains(&r#"oauth_signature="TRqCoignxlN/4FNNYClTMU/DChw=""#.to_string()));
    Ok(())
}

#[test]
fn test_header_fields() -> Result<()> {
    let header = init_signer().authorization(&credential(), &Method::GET, "local.test")?;
    let mut keys: Vec<String> = fields(&header)
        .iter()
        .map(|f| f.split_once('=').map(|(k, _)| k.to_string()).unwrap_or_default())
        .collect();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_token",
            "oauth_version",
            "realm",
        ]
    );
    assert!(fields(&header).contains(&format!(r#"oauth_nonce="{NONCE}""#)));
    assert!(fields(&header).contains(&format!(r#"oauth_timestamp="{TIMESTAMP}""#)));
    Ok(())
}

#[test]
fn test_signature_is_deterministic() -> Result<()> {
    let url = "https://www.mkmapi.eu/ws/v2.0/output.json/games";

    let first = init_signer().authorization(&credential(), &Method::POST, url)?;
    let second = init_signer().authorization(&credential(), &Method::POST, url)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_signature_depends_on_method() -> Result<()> {
    let url = "https://www.mkmapi.eu/ws/v2.0/output.json/games";
    let signer = init_signer();

    let get = signer.authorization(&credential(), &Method::GET, url)?;
    let post = signer.authorization(&credential(), &Method::POST, url)?;
    assert_ne!(signature(&get), signature(&post));
    Ok(())
}

#[test]
fn test_signature_against_mkm_endpoint() -> Result<()> {
    let cred = Credential::new("ck", "cs", "tk", "ts");
    let header = init_signer().authorization(
        &cred,
        &Method::POST,
        "https://www.mkmapi.eu/ws/v2.0/output.json/games",
    )?;

    assert_eq!(signature(&header), "xoWLBWMSiSNEHc3LTKasnEBVIzM=");
    assert!(fields(&header)
        .contains(&r#"realm="https://www.mkmapi.eu/ws/v2.0/output.json/games""#.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_sign_with_signer() -> Result<()> {
    let provider = StaticCredentialProvider::from(credential());
    let signer = Signer::new(Context::new(), provider, init_signer());

    let req = http::Request::get("local.test").body(())?;
    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts).await?;

    let auth = parts.headers[AUTHORIZATION]
        .to_str()
        .expect("header must be visible ascii");
    assert_eq!(signature(auth), "TRqCoignxlN/4FNNYClTMU/DChw=");
    Ok(())
}
