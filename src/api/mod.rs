//! Remote presentation API.
//!
//! [`SlidesApi`] is the seam between this crate and Google Slides: one call to
//! fetch a presentation, one call to apply a batch of mutations. The service is
//! generic over it so tests can run against an in-memory implementation.

mod auth;
mod google;
mod tree;

pub use auth::{fetch_access_token, ServiceAccountKey, SLIDES_SCOPE};
pub use google::GoogleSlides;
pub use tree::*;

use crate::error::Result;
use crate::model::Mutation;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Acknowledgement of an accepted batch update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAck {
    #[serde(default)]
    pub presentation_id: String,
    /// One reply per submitted request
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
}

/// Operations this crate needs from the presentation service.
pub trait SlidesApi: Send + Sync + 'static {
    /// Fetch a presentation tree.
    fn get_presentation(
        &self,
        document_id: &str,
    ) -> impl Future<Output = Result<Presentation>> + Send;

    /// Apply all mutations in a single batch.
    fn batch_update(
        &self,
        document_id: &str,
        requests: &[Mutation],
    ) -> impl Future<Output = Result<BatchAck>> + Send;
}
