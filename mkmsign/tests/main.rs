use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use log::warn;
use mkmsign::oauth1::{
    ClockSource, NonceSource, RequestSigner, StaticCredentialProvider,
};
use mkmsign::{Client, Context, Endpoint, ErrorKind, HttpSend, OutputFormat, Result, Signer, Version};
use pretty_assertions::assert_eq;

/// Records every request and answers with a fixed status.
#[derive(Debug, Clone)]
struct MockHttpSend {
    status: StatusCode,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    fn new(status: StatusCode) -> Self {
        Self {
            status,
            requests: Arc::default(),
        }
    }

    fn take(&self) -> Vec<http::Request<Bytes>> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);

        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(b"{\"game\":[]}"))?)
    }
}

#[derive(Debug)]
struct FixedNonce;

impl NonceSource for FixedNonce {
    fn nonce(&self) -> Result<String> {
        Ok("LyNoDV8MBnIrpBXtoTGefh9Vvcng5FQ1OCqB3kE5Ryk=".to_string())
    }
}

#[derive(Debug)]
struct FixedClock;

impl ClockSource for FixedClock {
    fn timestamp(&self) -> String {
        "1479036986".to_string()
    }
}

fn init_client(http: MockHttpSend, version: Version, format: OutputFormat) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(http);
    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new("ck", "cs", "tk", "ts"),
        RequestSigner::new()
            .with_nonce_source(FixedNonce)
            .with_clock_source(FixedClock),
    );

    Client::new(ctx, signer, Endpoint::Production, version, format)
}

#[test]
fn test_client_url() {
    let client = init_client(MockHttpSend::new(StatusCode::OK), Version::V1, OutputFormat::Xml);
    assert_eq!(client.base_url(), "https://www.mkmapi.eu/ws/v1.1");
    assert_eq!(client.url("/games"), "https://www.mkmapi.eu/ws/v1.1/games");

    let client = init_client(MockHttpSend::new(StatusCode::OK), Version::V2, OutputFormat::Json);
    assert_eq!(
        client.url("/games"),
        "https://www.mkmapi.eu/ws/v2.0/output.json/games"
    );
}

#[tokio::test]
async fn test_request_is_signed() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK);
    let client = init_client(http.clone(), Version::V2, OutputFormat::Json);

    let body = client
        .request(Method::POST, "/games", Bytes::from_static(b"a=1"))
        .await?;
    assert_eq!(body, Bytes::from_static(b"{\"game\":[]}"));

    let requests = http.take();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method(), Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "https://www.mkmapi.eu/ws/v2.0/output.json/games"
    );
    assert_eq!(
        req.headers()[CONTENT_TYPE],
        "application/x-www-form-urlencoded;charset=UTF-8"
    );
    assert_eq!(req.body(), &Bytes::from_static(b"a=1"));

    let auth = req.headers()[AUTHORIZATION].to_str().unwrap();
    assert!(auth.starts_with("OAuth "));
    assert!(auth.contains(r#"oauth_signature="xoWLBWMSiSNEHc3LTKasnEBVIzM=""#));
    assert!(auth.contains(r#"realm="https://www.mkmapi.eu/ws/v2.0/output.json/games""#));
    Ok(())
}

#[tokio::test]
async fn test_request_with_query_signs_parameters() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK);
    let client = init_client(http.clone(), Version::V2, OutputFormat::Json);

    client
        .request(Method::GET, "/products/find?search=Lotus&idGame=1", Bytes::new())
        .await?;

    let requests = http.take();
    let auth = requests[0].headers()[AUTHORIZATION].to_str().unwrap();
    assert!(auth.contains(r#"search="Lotus""#));
    assert!(auth.contains(r#"idGame="1""#));
    assert!(auth.contains(r#"realm="https://www.mkmapi.eu/ws/v2.0/output.json/products/find""#));
    Ok(())
}

#[tokio::test]
async fn test_non_ok_status_is_error() {
    let http = MockHttpSend::new(StatusCode::UNAUTHORIZED);
    let client = init_client(http.clone(), Version::V2, OutputFormat::Json);

    let err = client
        .request(Method::GET, "/account", Bytes::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    assert!(err.to_string().contains("401"));
    assert_eq!(http.take().len(), 1);
}

#[tokio::test]
async fn test_created_status_is_error() {
    let client = init_client(
        MockHttpSend::new(StatusCode::CREATED),
        Version::V2,
        OutputFormat::Json,
    );

    let err = client
        .request(Method::PUT, "/stock", Bytes::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
}

#[tokio::test]
async fn test_missing_credential_is_not_sent() {
    let http = MockHttpSend::new(StatusCode::OK);
    let ctx = Context::new().with_http_send(http.clone());
    let signer = Signer::new(
        ctx.clone(),
        mkmsign::oauth1::DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );
    let client = Client::new(ctx, signer, Endpoint::Sandbox, Version::V2, OutputFormat::Json);

    let err = client
        .request(Method::GET, "/games", Bytes::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(http.take().is_empty());
}

#[tokio::test]
async fn test_sandbox_games() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();
    if env::var("MKMSIGN_TEST").ok().as_deref() != Some("on") {
        warn!("MKMSIGN_TEST is not set, skipped");
        return Ok(());
    }

    let client = mkmsign::default_client(Endpoint::Sandbox, Version::V2, OutputFormat::Json)?;
    let body = client.request(Method::GET, "/games", Bytes::new()).await?;
    assert!(!body.is_empty());
    Ok(())
}
