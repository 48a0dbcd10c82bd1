use crate::foundation::error::{FaceError, FaceResult};

/// Frame duration used when the caller does not supply one.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 1000;

/// Longest representable frame duration. GIF stores delays as u16 centiseconds.
pub const MAX_FRAME_DURATION_MS: u32 = u16::MAX as u32 * 10;

/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_DIM: u32 = 4096;

/// Most frames one animation may hold. Every frame is buffered until the GIF is encoded.
pub const MAX_SEEDS: usize = 64;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> FaceResult<Self> {
        if width == 0 || height == 0 {
            return Err(FaceError::catalog("canvas width/height must be > 0"));
        }
        if width > MAX_CANVAS_DIM || height > MAX_CANVAS_DIM {
            return Err(FaceError::catalog(format!(
                "canvas too large: {width}x{height} (max {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM})"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Per-frame display time, validated to `1..=MAX_FRAME_DURATION_MS` milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameDuration(u32);

impl FrameDuration {
    /// Validate a caller-supplied duration. Out-of-range values are rejected, never clamped.
    pub fn new(ms: i64) -> FaceResult<Self> {
        if ms <= 0 {
            return Err(FaceError::invalid_duration(format!(
                "duration must be a positive number of milliseconds, got {ms}"
            )));
        }
        if ms > i64::from(MAX_FRAME_DURATION_MS) {
            return Err(FaceError::invalid_duration(format!(
                "duration {ms}ms exceeds the maximum of {MAX_FRAME_DURATION_MS}ms"
            )));
        }
        Ok(Self(ms as u32))
    }

    pub fn as_millis(self) -> u32 {
        self.0
    }

    /// Delay in the GIF's native unit: nearest centisecond, never below one.
    ///
    /// Rounds rather than truncates so the stored delay is within 5ms of the request (15ms
    /// plays as 20ms, not 10ms); the floor keeps players from substituting their own default.
    pub fn as_centis(self) -> u16 {
        ((self.0 + 5) / 10).clamp(1, u32::from(u16::MAX)) as u16
    }
}

impl Default for FrameDuration {
    fn default() -> Self {
        Self(DEFAULT_FRAME_DURATION_MS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
