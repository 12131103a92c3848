//! Evolution workflow state — the session driving the evolve dialog.
//!
//! DESIGN
//! ======
//! The workflow is a small state machine over one owned NFT:
//!
//! ```text
//! Idle -> Generating -> Decision -> (kept | auctioned)
//!              |
//!              +-> Failed -> Idle (retry)
//! ```
//!
//! Generation runs as a spawned task that reports back later. Every session
//! carries an epoch taken from a counter that bumps on open and close, and
//! the completion callbacks only apply when their epoch still matches the
//! live session. A task started against a dialog that has since been closed,
//! or reopened for another NFT, lands in a no-op instead of mutating the
//! wrong session.

#[cfg(test)]
#[path = "evolution_test.rs"]
mod evolution_test;

use super::catalog::NftRecord;

/// Where the evolution session currently stands.
///
/// The generated image and the failure message live inside their variants,
/// so a session cannot hold a result without being in the state that owns it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EvolvePhase {
    /// Waiting for the user to enter tags and start generation.
    #[default]
    Idle,
    /// A generation task is in flight. No cancel control is offered; closing
    /// the dialog discards the session instead.
    Generating,
    /// Generation finished; the user decides to keep or auction the result.
    Decision { image: String },
    /// Generation failed; the user may retry from Idle.
    Failed { message: String },
}

/// One open evolution session over a single owned NFT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolveSession {
    /// Snapshot of the NFT being evolved, for display and for the commit.
    pub nft: NftRecord,
    /// Identity of this session; completions carrying another epoch are stale.
    pub epoch: u64,
    /// Raw text from the tag field, parsed on demand by [`parse_tags`].
    pub tags_input: String,
    pub phase: EvolvePhase,
}

/// What the user chose to do with a finished evolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Kept,
    Auctioned,
}

/// Everything the catalog needs to commit a finished evolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolveOutcome {
    pub nft_id: String,
    pub nft_name: String,
    pub image: String,
    /// Tags parsed from the session's input field.
    pub tags: Vec<String>,
    pub disposition: Disposition,
}

/// App-level evolution state: at most one session open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvolutionState {
    /// Monotonic session counter. Bumped on every open and close so that no
    /// two sessions ever share an epoch.
    pub epoch: u64,
    pub session: Option<EvolveSession>,
}

impl EvolutionState {
    /// Open a fresh Idle session for `nft`, replacing any session in flight.
    pub fn open(&mut self, nft: NftRecord) {
        self.epoch += 1;
        self.session = Some(EvolveSession {
            nft,
            epoch: self.epoch,
            tags_input: String::new(),
            phase: EvolvePhase::Idle,
        });
    }

    /// Discard the session, from any phase. Bumps the epoch so that in-flight
    /// generation tasks become stale.
    pub fn close(&mut self) {
        self.epoch += 1;
        self.session = None;
    }

    /// Overwrite the session's tag field. No-op without an open session.
    pub fn set_tags_input(&mut self, value: String) {
        if let Some(session) = self.session.as_mut() {
            session.tags_input = value;
        }
    }

    /// Move an Idle session into Generating.
    ///
    /// Returns the session epoch the spawned task must hand back to
    /// [`complete_generation`] or [`fail_generation`]. Returns `None` when
    /// there is no session or it is not Idle.
    pub fn begin(&mut self) -> Option<u64> {
        let session = self.session.as_mut()?;
        if session.phase != EvolvePhase::Idle {
            return None;
        }
        session.phase = EvolvePhase::Generating;
        Some(session.epoch)
    }

    /// Deliver a generated image into the session that started the task.
    ///
    /// Applies only while the live session is Generating and its epoch matches
    /// `epoch`. Returns `true` when the session moved to Decision.
    pub fn complete_generation(&mut self, epoch: u64, image: &str) -> bool {
        let Some(session) = self.live_generating(epoch) else {
            return false;
        };
        session.phase = EvolvePhase::Decision {
            image: image.to_owned(),
        };
        true
    }

    /// Deliver a generation failure into the session that started the task.
    ///
    /// Gated exactly like [`complete_generation`]. Returns `true` when the
    /// session moved to Failed.
    pub fn fail_generation(&mut self, epoch: u64, message: &str) -> bool {
        let Some(session) = self.live_generating(epoch) else {
            return false;
        };
        session.phase = EvolvePhase::Failed {
            message: message.to_owned(),
        };
        true
    }

    /// Return a Failed session to Idle, keeping the entered tags.
    pub fn retry(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !matches!(session.phase, EvolvePhase::Failed { .. }) {
            return false;
        }
        session.phase = EvolvePhase::Idle;
        true
    }

    /// Resolve a Decision session as kept and close it.
    pub fn keep(&mut self) -> Option<EvolveOutcome> {
        self.resolve(Disposition::Kept)
    }

    /// Resolve a Decision session as sent to auction and close it.
    pub fn auction(&mut self) -> Option<EvolveOutcome> {
        self.resolve(Disposition::Auctioned)
    }

    fn resolve(&mut self, disposition: Disposition) -> Option<EvolveOutcome> {
        let session = self.session.as_ref()?;
        let EvolvePhase::Decision { image } = &session.phase else {
            return None;
        };
        let outcome = EvolveOutcome {
            nft_id: session.nft.id.clone(),
            nft_name: session.nft.name.clone(),
            image: image.clone(),
            tags: parse_tags(&session.tags_input),
            disposition,
        };
        self.close();
        Some(outcome)
    }

    fn live_generating(&mut self, epoch: u64) -> Option<&mut EvolveSession> {
        self.session
            .as_mut()
            .filter(|s| s.epoch == epoch && s.phase == EvolvePhase::Generating)
    }
}

/// Split a comma-separated tag field into clean lowercase tags.
///
/// Blank segments are dropped, so `"glowing, , Mechanical"` yields
/// `["glowing", "mechanical"]`.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
