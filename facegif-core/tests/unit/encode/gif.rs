use std::io::Cursor;
use std::time::Duration;

use image::AnimationDecoder as _;
use image::codecs::gif::GifDecoder;

use super::*;
use crate::foundation::core::{Canvas, FrameDuration};

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: rgba.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn cfg(frame_count: u64, ms: i64) -> SinkConfig {
    SinkConfig {
        canvas: Canvas {
            width: 4,
            height: 4,
        },
        frame_duration: FrameDuration::new(ms).unwrap(),
        frame_count,
    }
}

fn decode(bytes: &[u8]) -> Vec<image::Frame> {
    GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

#[test]
fn encodes_frames_with_delay_and_infinite_loop() {
    let mut sink = GifSink::new();
    sink.begin(cfg(2, 500)).unwrap();
    sink.push_frame(FrameIndex(0), &solid(4, 4, [255, 0, 0, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &solid(4, 4, [0, 0, 255, 255]))
        .unwrap();
    sink.end().unwrap();
    let bytes = sink.into_bytes().unwrap();

    assert!(bytes.starts_with(b"GIF89a"));
    let netscape = bytes
        .windows(15)
        .find(|w| w.starts_with(b"NETSCAPE2.0"))
        .unwrap();
    assert_eq!(&netscape[11..], &[3, 1, 0, 0]);

    let frames = decode(&bytes);
    assert_eq!(frames.len(), 2);
    for f in &frames {
        assert_eq!(Duration::from(f.delay()), Duration::from_millis(500));
    }
    assert_eq!(frames[0].buffer().get_pixel(1, 1).0, [255, 0, 0, 255]);
    assert_eq!(frames[1].buffer().get_pixel(1, 1).0, [0, 0, 255, 255]);
}

#[test]
fn transparent_pixels_survive_encoding() {
    let mut frame = solid(4, 4, [0, 255, 0, 255]);
    frame.data[..4].copy_from_slice(&[0, 0, 0, 0]);

    let mut sink = GifSink::new();
    sink.begin(cfg(1, 1000)).unwrap();
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.end().unwrap();

    let frames = decode(sink.bytes().unwrap());
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].buffer().get_pixel(0, 0).0[3], 0);
    assert_eq!(frames[0].buffer().get_pixel(3, 3).0, [0, 255, 0, 255]);
}

#[test]
fn rejects_zero_frames() {
    let mut sink = GifSink::new();
    assert!(matches!(
        sink.begin(cfg(0, 1000)),
        Err(FaceError::InvalidSeedList(_))
    ));
}

#[test]
fn rejects_misuse() {
    let mut sink = GifSink::new();
    assert!(sink.push_frame(FrameIndex(0), &solid(4, 4, [0; 4])).is_err());
    assert!(sink.end().is_err());

    sink.begin(cfg(2, 1000)).unwrap();
    assert!(sink.push_frame(FrameIndex(1), &solid(4, 4, [0; 4])).is_err());
    assert!(sink.push_frame(FrameIndex(0), &solid(2, 2, [0; 4])).is_err());
    sink.push_frame(FrameIndex(0), &solid(4, 4, [0; 4])).unwrap();
    // one frame short
    assert!(sink.end().is_err());
    assert!(sink.into_bytes().is_err());
}

#[test]
fn rejects_frame_with_short_buffer() {
    let mut frame = solid(4, 4, [9, 9, 9, 255]);
    frame.data.truncate(12);

    let mut sink = GifSink::new();
    sink.begin(cfg(1, 1000)).unwrap();
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &frame),
        Err(FaceError::Render(_))
    ));
}
