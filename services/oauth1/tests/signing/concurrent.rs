use std::sync::Arc;
use std::thread;

use http::Method;
use mkmsign_oauth1::RequestSigner;

use super::*;

#[test]
fn test_parallel_signing_is_consistent() {
    let signer = Arc::new(init_signer());
    let expected = signer
        .authorization(&credential(), &Method::GET, "local.test")
        .expect("signing must succeed");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let signer = signer.clone();
            thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        signer
                            .authorization(&credential(), &Method::GET, "local.test")
                            .expect("signing must succeed")
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for header in handle.join().expect("thread must not panic") {
            assert_eq!(header, expected);
        }
    }
}

#[test]
fn test_parallel_signing_draws_distinct_nonces() {
    let signer = Arc::new(RequestSigner::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let signer = signer.clone();
            thread::spawn(move || {
                signer
                    .authorization(&credential(), &Method::GET, "https://h/p")
                    .expect("signing must succeed")
            })
        })
        .collect();

    let mut nonces: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread must not panic"))
        .map(|header| {
            fields(&header)
                .into_iter()
                .find(|f| f.starts_with("oauth_nonce="))
                .expect("header must carry oauth_nonce")
        })
        .collect();
    nonces.sort();
    nonces.dedup();
    assert_eq!(nonces.len(), 4);
}
