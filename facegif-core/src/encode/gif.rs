use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::raster::FrameRGBA;

/// MIME type of the bytes produced by [`GifSink`].
pub const GIF_CONTENT_TYPE: &str = "image/gif";

/// NeuQuant speed handed to the encoder (1 = slowest/best, 30 = fastest).
const QUANTIZE_SPEED: i32 = 10;

/// Collects frames and encodes them as an infinitely looping animated GIF on `end`.
///
/// Every frame gets the configured delay. Fully transparent pixels stay transparent; the encoder
/// disposes each frame to background so earlier faces never show through later ones.
#[derive(Default)]
pub struct GifSink {
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
    bytes: Option<Vec<u8>>,
}

impl GifSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoded GIF bytes; `None` until `end` succeeded.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Take the encoded GIF.
    pub fn into_bytes(self) -> FaceResult<Vec<u8>> {
        self.bytes
            .ok_or_else(|| FaceError::render("gif sink was not finished"))
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> FaceResult<()> {
        if cfg.frame_count == 0 {
            return Err(FaceError::invalid_seed_list("nothing to animate"));
        }
        self.frames.clear();
        self.frames.reserve(cfg.frame_count as usize);
        self.bytes = None;
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FaceResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| FaceError::render("push_frame called before begin"))?;
        if idx.0 != self.frames.len() as u64 {
            return Err(FaceError::render(format!(
                "frame {} pushed out of order (expected {})",
                idx.0,
                self.frames.len()
            )));
        }
        if frame.width != cfg.canvas.width || frame.height != cfg.canvas.height {
            return Err(FaceError::render(format!(
                "frame {} is {}x{}, expected {}x{}",
                idx.0, frame.width, frame.height, cfg.canvas.width, cfg.canvas.height
            )));
        }
        if frame.data.len() != cfg.canvas.pixel_count() * 4 {
            return Err(FaceError::render(format!(
                "frame {} carries {} bytes, expected {}",
                idx.0,
                frame.data.len(),
                cfg.canvas.pixel_count() * 4
            )));
        }

        let rgba = frame.clone().into_rgba_image()?;
        // Quantize the delay up front so the encoder stores exactly `as_centis`.
        let delay_ms = u32::from(cfg.frame_duration.as_centis()) * 10;
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        self.frames.push(Frame::from_parts(rgba, 0, 0, delay));
        Ok(())
    }

    fn end(&mut self) -> FaceResult<()> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| FaceError::render("end called before begin"))?;
        if self.frames.len() as u64 != cfg.frame_count {
            return Err(FaceError::render(format!(
                "expected {} frames, got {}",
                cfg.frame_count,
                self.frames.len()
            )));
        }

        let mut out = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut out, QUANTIZE_SPEED);
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| FaceError::render(format!("set gif repeat: {e}")))?;
            for frame in self.frames.drain(..) {
                encoder
                    .encode_frame(frame)
                    .map_err(|e| FaceError::render(format!("encode gif frame: {e}")))?;
            }
        }

        tracing::debug!(
            frames = cfg.frame_count,
            bytes = out.len(),
            "encoded animated gif"
        );
        self.bytes = Some(out);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
