//! Shared helpers for integration tests.

#![allow(dead_code)]

use aws_clients::client::ServiceClient;
use aws_clients::mocks::{MockResponse, MockTransport, TestFixtures};
use std::sync::Arc;

/// Client of type `C` over a mock transport answering with `responses`.
pub fn client_with<C: ServiceClient>(responses: Vec<MockResponse>) -> (C, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::with_responses(responses));
    let client = TestFixtures::client::<C>(transport.clone()).unwrap();
    (client, transport)
}

/// Client of type `C` whose transport always answers `response`.
pub fn client_always<C: ServiceClient>(response: MockResponse) -> (C, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::with_default(response));
    let client = TestFixtures::client::<C>(transport.clone()).unwrap();
    (client, transport)
}
