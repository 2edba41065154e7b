use egui::Color32;
use std::time::{SystemTime, UNIX_EPOCH};

/// Produces opaque random fill colors for new shapes (xorshift32).
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    state: u32,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl ColorGenerator {
    /// Deterministic generator, mainly for tests. A zero seed is bumped to 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seeds from the system clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(0x9E37_79B9);
        Self::new(nanos)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    pub fn next_color(&mut self) -> Color32 {
        let [r, g, b, _] = self.next_u32().to_le_bytes();
        Color32::from_rgb(r, g, b)
    }
}
