//! Cloud identity stubs

use akeyless_provider::auth::{CloudIdError, CloudIdentities, CloudIdentity};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Returns a fixed cloud id and counts how often it was asked
#[derive(Clone, Default)]
pub struct FixedIdentity {
    pub value: String,
    pub calls: Arc<AtomicUsize>,
}

impl FixedIdentity {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CloudIdentity for FixedIdentity {
    async fn cloud_id(&self) -> Result<String, CloudIdError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.value.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Always fails to produce a cloud id
pub struct FailingIdentity;

#[async_trait]
impl CloudIdentity for FailingIdentity {
    async fn cloud_id(&self) -> Result<String, CloudIdError> {
        Err(CloudIdError::Credentials("no credentials in test".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Identities that never reach a real cloud
pub fn stub_identities(aws: FixedIdentity, azure: FixedIdentity) -> CloudIdentities {
    CloudIdentities::new(Box::new(aws), Box::new(azure))
}
