//! Generation results tied to one browsing session.
//!
//! Each call takes a ticket stamped with the current epoch. Resetting the
//! session bumps the epoch, so results from calls that were in flight at the
//! time are dropped instead of landing in the new session. Only the most
//! recent accepted batch is kept.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::stub::MockImageGenerator;
use super::types::{GenerateRequest, GenerateResponse, GeneratedImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
}

#[derive(Default)]
pub struct GenerationSession {
    epoch: AtomicU64,
    latest: Mutex<Option<Vec<GeneratedImage>>>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> GenerationTicket {
        GenerationTicket {
            epoch: self.epoch.load(Ordering::SeqCst),
        }
    }

    pub fn is_current(&self, ticket: &GenerationTicket) -> bool {
        self.epoch.load(Ordering::SeqCst) == ticket.epoch
    }

    /// Makes `images` the latest batch if `ticket` belongs to the current
    /// session, replacing the previous one.
    ///
    /// Returns `None` for stale tickets.
    pub fn accept(
        &self,
        ticket: GenerationTicket,
        images: Vec<GeneratedImage>,
    ) -> Option<Vec<GeneratedImage>> {
        let mut latest = self.latest.lock();
        if !self.is_current(&ticket) {
            tracing::debug!(
                ticket_epoch = ticket.epoch,
                "Discarding generation result from a previous session"
            );
            return None;
        }
        *latest = Some(images.clone());
        Some(images)
    }

    /// Runs one generation and records it unless the session was reset
    /// while it was in flight.
    pub async fn run(
        &self,
        generator: &MockImageGenerator,
        request: &GenerateRequest,
    ) -> Option<GenerateResponse> {
        let ticket = self.begin();
        let response = generator.generate(request).await;
        self.accept(ticket, response.images)
            .map(|images| GenerateResponse { images })
    }

    pub fn reset(&self) {
        let mut latest = self.latest.lock();
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *latest = None;
    }

    pub fn latest(&self) -> Option<Vec<GeneratedImage>> {
        self.latest.lock().clone()
    }
}
