//! Test utilities for workflow tests.
//!
//! This module provides a scripted gateway and session helpers.

use postcraft_core::TopicCatalog;
use postcraft_interface::SessionStore;
use postcraft_storage::InMemorySessionStore;
use postcraft_workflow::{ContentWorkflow, SessionHandle, WorkflowSettings};
use std::sync::Arc;

pub mod mock_gateway;

#[allow(unused_imports)]
pub use mock_gateway::{MockGateway, MockResponse};

/// Domain used by every test workflow.
pub const TEST_DOMAIN: &str = "myblogname.com";

/// Build a workflow over the bundled catalog and the given gateway.
pub fn workflow(gateway: Arc<MockGateway>) -> ContentWorkflow {
    let settings = WorkflowSettings::builder()
        .blog_domain(TEST_DOMAIN)
        .generation_model("test/generation")
        .translation_model("test/translation")
        .build()
        .expect("Failed to build test settings");
    ContentWorkflow::new(
        gateway,
        TopicCatalog::bundled().expect("Bundled catalog must load"),
        settings,
    )
}

/// Fresh in-memory session.
pub fn session() -> SessionHandle {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    SessionHandle::new(store, "test-session").expect("Failed to create test session")
}

/// Five well-formed ideas as the model would return them.
pub fn five_ideas_json() -> String {
    r#"[
  {"title": "VPNs Demystified", "summary": "What a VPN really does.", "slug": "vpns-demystified"},
  {"title": "Tunnels, Not Magic", "summary": "How encryption tunnels work.", "slug": "tunnels-not-magic"},
  {"title": "Public Wi-Fi Safety", "summary": "Why a VPN helps on the road.", "slug": "public-wifi-safety"},
  {"title": "Choosing a Provider", "summary": "What to look for in a VPN.", "slug": "choosing-a-vpn-provider"},
  {"title": "VPN Myths", "summary": "Common misconceptions.", "slug": "vpn-myths"}
]"#
    .to_string()
}
