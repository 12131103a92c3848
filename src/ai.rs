//! AI generation — the capability behind the evolution workflow.
//!
//! DESIGN
//! ======
//! The `GeneratorClient` enum dispatches to whichever image backend is wired
//! in. Today that is only the mock, which waits out a fixed delay and hands
//! back bundled placeholder art, but the evolve dialog talks to the enum, so
//! swapping in a real diffusion backend adds a variant rather than a rewrite.
//! The error type already covers what a real backend would report; the state
//! machine's Failed phase is reachable through it.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the mock pretends to generate for in the browser.
pub const MOCK_GENERATION_DELAY: Duration = Duration::from_secs(3);
/// Art the mock hands back for every request.
pub const MOCK_GENERATED_IMAGE: &str = "/placeholder.svg";

/// Everything a backend gets to steer generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub nft_id: String,
    pub nft_name: String,
    /// Tags already on the NFT, for style continuity.
    pub base_tags: Vec<String>,
    /// Tags the user entered to steer this evolution.
    pub evolve_tags: Vec<String>,
}

/// A finished generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

/// Why generation failed. The display text feeds the workflow's failure
/// screen directly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("generation backend error: {0}")]
    Backend(String),
    #[error("generation timed out")]
    Timeout,
}

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

#[derive(Clone, Debug)]
pub enum GeneratorClient {
    Mock(MockGenerator),
}

impl GeneratorClient {
    /// The mock backend used by the demo build.
    #[must_use]
    pub fn mock() -> Self {
        Self::Mock(MockGenerator)
    }

    /// Generate evolved art for one NFT.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] when the backend rejects or times out.
    /// The mock backend never does.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GeneratedImage, GenerateError> {
        match self {
            Self::Mock(m) => m.generate(request).await,
        }
    }
}

/// Stand-in backend: fixed delay, bundled placeholder art, never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockGenerator;

impl MockGenerator {
    #[allow(clippy::unused_async)] // native builds skip the delay
    pub async fn generate(
        &self,
        _request: &GenerateRequest,
    ) -> Result<GeneratedImage, GenerateError> {
        // Off the browser there is no event loop to wait on, so the delay
        // only exists in CSR builds.
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(MOCK_GENERATION_DELAY).await;

        Ok(GeneratedImage {
            url: MOCK_GENERATED_IMAGE.to_owned(),
        })
    }
}
