//! Stand-in for the image generation model.
//!
//! Waits a fixed delay, then returns gallery images rotated by call count so
//! consecutive generations look different. It never fails.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use uuid::Uuid;

use crate::config::GenerationConfig;

use super::types::{dimensions_for, GenerateRequest, GenerateResponse, GeneratedImage};

/// Rotation step between consecutive calls.
const ROTATION_STRIDE: usize = 3;

pub struct MockImageGenerator {
    gallery: Vec<String>,
    delay: Duration,
    default_count: u32,
    max_count: u32,
    default_aspect_ratio: String,
    calls: AtomicUsize,
}

impl MockImageGenerator {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            gallery: config.gallery.clone(),
            delay: Duration::from_millis(config.delay_ms),
            default_count: config.default_count,
            max_count: config.max_count,
            default_aspect_ratio: config.default_aspect_ratio.clone(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completed generations.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn generate(&self, request: &GenerateRequest) -> GenerateResponse {
        tokio::time::sleep(self.delay).await;

        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let ratio = request
            .aspect_ratio
            .as_deref()
            .unwrap_or(&self.default_aspect_ratio);
        let dims = dimensions_for(ratio);
        let count = match request.count {
            None | Some(0) => self.default_count,
            Some(n) => n.min(self.max_count),
        };

        let images = if self.gallery.is_empty() {
            Vec::new()
        } else {
            let len = self.gallery.len();
            let offset = (call * ROTATION_STRIDE) % len;
            let batch = Uuid::new_v4().simple().to_string();
            (0..count as usize)
                .map(|i| GeneratedImage {
                    id: format!("gen-{batch}-{i}"),
                    url: self.gallery[(offset + i) % len].clone(),
                    prompt: request.enhanced_prompt.clone(),
                    width: dims.width,
                    height: dims.height,
                })
                .collect()
        };

        tracing::info!(
            call,
            count = images.len(),
            aspect_ratio = %ratio,
            quality = ?request.quality,
            "Mock generation complete"
        );

        GenerateResponse { images }
    }
}
