//! Parsing of caller-supplied request values.
//!
//! Front-ends hand raw strings (query parameters, CLI flags) to these helpers; the renderer
//! re-validates everything it receives, so skipping them never produces a degraded image.

use crate::{
    catalog::model::ComponentCatalog,
    face::mapper::{FaceDescriptor, map_all},
    foundation::core::{FrameDuration, MAX_SEEDS},
    foundation::error::{FaceError, FaceResult},
};

/// Split a comma-separated seed list.
///
/// Entries are trimmed and kept in order, empty ones included (`"a,,b"` is three frames, the
/// middle one the face of `""`). The list is an [`FaceError::InvalidSeedList`] when its first
/// entry is empty or it holds more than [`MAX_SEEDS`] entries.
pub fn parse_seed_list(raw: &str) -> FaceResult<Vec<String>> {
    let seeds: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    if seeds.first().is_none_or(String::is_empty) {
        return Err(FaceError::invalid_seed_list(
            "'seeds' must be a comma-separated list starting with a non-empty entry",
        ));
    }
    check_seed_count(seeds.len())?;
    Ok(seeds)
}

fn check_seed_count(n: usize) -> FaceResult<()> {
    if n > MAX_SEEDS {
        return Err(FaceError::invalid_seed_list(format!(
            "too many seeds: {n} (max {MAX_SEEDS})"
        )));
    }
    Ok(())
}

/// Parse an optional per-frame duration in milliseconds; absent means the default (1000ms).
pub fn parse_duration(raw: Option<&str>) -> FaceResult<FrameDuration> {
    let Some(raw) = raw else {
        return Ok(FrameDuration::default());
    };
    let ms: i64 = raw.trim().parse().map_err(|_| {
        FaceError::invalid_duration(format!("'{raw}' is not an integer number of milliseconds"))
    })?;
    FrameDuration::new(ms)
}

/// Ordered faces plus the display time of each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationRequest {
    descriptors: Vec<FaceDescriptor>,
    duration: FrameDuration,
}

impl AnimationRequest {
    /// Validate descriptors and a raw duration. Fails before any rendering work.
    pub fn new(descriptors: Vec<FaceDescriptor>, duration_ms: i64) -> FaceResult<Self> {
        if descriptors.is_empty() {
            return Err(FaceError::invalid_seed_list("nothing to animate: no seeds"));
        }
        check_seed_count(descriptors.len())?;
        let duration = FrameDuration::new(duration_ms)?;
        Ok(Self {
            descriptors,
            duration,
        })
    }

    /// Build a request from raw `seeds` / `duration` strings as received from a query string.
    pub fn from_query(
        seeds: &str,
        duration: Option<&str>,
        catalog: &ComponentCatalog,
    ) -> FaceResult<Self> {
        let seeds = parse_seed_list(seeds)?;
        let duration = parse_duration(duration)?;
        Ok(Self {
            descriptors: map_all(&seeds, catalog),
            duration,
        })
    }

    /// Faces in frame order.
    pub fn descriptors(&self) -> &[FaceDescriptor] {
        &self.descriptors
    }

    /// Display time of every frame.
    pub fn duration(&self) -> FrameDuration {
        self.duration
    }
}

#[cfg(test)]
#[path = "../tests/unit/request.rs"]
mod tests;
