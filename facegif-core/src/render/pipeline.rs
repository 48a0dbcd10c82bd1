use std::collections::HashMap;

use crate::{
    catalog::model::ComponentCatalog,
    encode::gif::GifSink,
    encode::sink::{FrameSink, SinkConfig},
    face::mapper::{FaceDescriptor, map_all},
    foundation::core::FrameIndex,
    foundation::error::FaceResult,
    render::compose::compose_svg,
    render::raster::{FrameRGBA, parse_svg, rasterize_svg},
    request::AnimationRequest,
};

/// Render one face to a premultiplied frame of the catalog's canvas size.
pub fn render_frame(
    descriptor: &FaceDescriptor,
    catalog: &ComponentCatalog,
) -> FaceResult<FrameRGBA> {
    let svg = compose_svg(descriptor, catalog)?;
    let tree = parse_svg(svg.as_bytes())?;
    rasterize_svg(&tree, catalog.canvas())
}

/// Render every face in order. Repeated descriptors are rasterized once.
pub fn render_frames(
    descriptors: &[FaceDescriptor],
    catalog: &ComponentCatalog,
) -> FaceResult<Vec<FrameRGBA>> {
    let mut memo: HashMap<&FaceDescriptor, FrameRGBA> = HashMap::new();
    let mut out = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let frame = match memo.get(descriptor) {
            Some(frame) => frame.clone(),
            None => {
                let frame = render_frame(descriptor, catalog)?;
                memo.insert(descriptor, frame.clone());
                frame
            }
        };
        out.push(frame);
    }
    Ok(out)
}

/// Render a validated request into `sink`, one frame per descriptor.
#[tracing::instrument(
    skip_all,
    fields(frames = req.descriptors().len(), duration_ms = req.duration().as_millis())
)]
pub fn render_into(
    req: &AnimationRequest,
    catalog: &ComponentCatalog,
    sink: &mut dyn FrameSink,
) -> FaceResult<()> {
    // Render everything before the sink sees a frame: a failure never leaves partial output.
    let frames = render_frames(req.descriptors(), catalog)?;

    sink.begin(SinkConfig {
        canvas: catalog.canvas(),
        frame_duration: req.duration(),
        frame_count: frames.len() as u64,
    })?;
    for (i, frame) in frames.iter().enumerate() {
        sink.push_frame(FrameIndex(i as u64), frame)?;
    }
    sink.end()
}

/// Render faces into an infinitely looping animated GIF, `duration_ms` per frame.
///
/// Zero descriptors fail with `InvalidSeedList`; a non-positive or unrepresentable duration fails
/// with `InvalidDuration`. Both checks run before any rendering.
pub fn render(
    descriptors: &[FaceDescriptor],
    duration_ms: i64,
    catalog: &ComponentCatalog,
) -> FaceResult<Vec<u8>> {
    let req = AnimationRequest::new(descriptors.to_vec(), duration_ms)?;
    render_request(&req, catalog)
}

/// Render a validated request into GIF bytes.
pub fn render_request(req: &AnimationRequest, catalog: &ComponentCatalog) -> FaceResult<Vec<u8>> {
    let mut sink = GifSink::new();
    render_into(req, catalog, &mut sink)?;
    sink.into_bytes()
}

/// Map `seeds` and render them: the whole seed-list-to-GIF path.
pub fn animate<S: AsRef<str>>(
    seeds: &[S],
    duration_ms: i64,
    catalog: &ComponentCatalog,
) -> FaceResult<Vec<u8>> {
    let descriptors = map_all(seeds, catalog);
    render(&descriptors, duration_ms, catalog)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
