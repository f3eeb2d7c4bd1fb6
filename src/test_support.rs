//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::time::Duration;

use crate::core::resource::Resource;
use crate::retrieval::provider::{ResourceProvider, RetrievalError};

/// Build a record with the fields the filter tests care about.
pub fn resource(id: &str, title: &str, category: &str, open_now: bool, is_virtual: bool) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        summary: String::new(),
        category: category.to_string(),
        location: String::new(),
        open_now,
        is_virtual,
    }
}

/// A small fixed store covering every filter dimension.
pub fn sample_store() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".to_string(),
            title: "Math Tutoring".to_string(),
            summary: "Drop-in help with calculus and algebra".to_string(),
            category: "Academic".to_string(),
            location: "Library 2F".to_string(),
            open_now: true,
            is_virtual: false,
        },
        Resource {
            id: "2".to_string(),
            title: "Counseling".to_string(),
            summary: "Confidential one-on-one sessions".to_string(),
            category: "Wellness".to_string(),
            location: "Health Centre".to_string(),
            open_now: false,
            is_virtual: true,
        },
        Resource {
            id: "3".to_string(),
            title: "Tech Help Desk".to_string(),
            summary: "Laptop and account support".to_string(),
            category: "Tech".to_string(),
            location: "Online".to_string(),
            open_now: true,
            is_virtual: true,
        },
    ]
}

/// A scripted provider for loader tests.
///
/// The source reference selects the behavior:
/// - `"slow"` anywhere in the reference: sleep before resolving, so a
///   later request can finish first;
/// - `"fail"` anywhere in the reference: resolve to a network error;
/// - anything else: resolve immediately.
///
/// Successful fetches return a single record whose `id` is the source
/// reference, so tests can tell which request produced a committed store.
pub struct ScriptedProvider {
    pub delay: Duration,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(50),
        }
    }
}

#[async_trait]
impl ResourceProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, source: &str) -> Result<Vec<Resource>, RetrievalError> {
        if source.contains("slow") {
            tokio::time::sleep(self.delay).await;
        }
        if source.contains("fail") {
            return Err(RetrievalError::Network("scripted failure".to_string()));
        }
        Ok(vec![resource(source, source, "Tech", true, false)])
    }
}
