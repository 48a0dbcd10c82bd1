use super::*;

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    frame.data[i..i + 4].try_into().unwrap()
}

#[test]
fn parse_svg_ok_and_err() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
    parse_svg(ok).unwrap();

    let bad = br#"<svg"#;
    assert!(parse_svg(bad).is_err());
}

#[test]
fn rasterize_keeps_uncovered_pixels_transparent() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2"><rect x="0" y="0" width="2" height="2" fill="#ff0000"/></svg>"##;
    let tree = parse_svg(svg).unwrap();
    let frame = rasterize_svg(
        &tree,
        Canvas {
            width: 4,
            height: 2,
        },
    )
    .unwrap();

    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 4 * 2 * 4);
    assert_eq!(px(&frame, 0, 0), [255, 0, 0, 255]);
    assert_eq!(px(&frame, 3, 1), [0, 0, 0, 0]);
}

#[test]
fn rasterize_scales_to_canvas() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"><rect width="2" height="2" fill="#00ff00"/></svg>"##;
    let tree = parse_svg(svg).unwrap();
    let frame = rasterize_svg(
        &tree,
        Canvas {
            width: 8,
            height: 8,
        },
    )
    .unwrap();
    assert_eq!((frame.width, frame.height), (8, 8));
    assert_eq!(px(&frame, 7, 7), [0, 255, 0, 255]);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut data = vec![64, 32, 0, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut data);
    assert_eq!(data, vec![128, 64, 0, 128, 0, 0, 0, 0, 1, 2, 3, 255]);
}

#[test]
fn into_rgba_image_converts_premultiplied_frames() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 32, 0, 128],
        premultiplied: true,
    };
    let img = frame.into_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [128, 64, 0, 128]);
}

#[test]
fn into_rgba_image_rejects_bad_buffer() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
        premultiplied: false,
    };
    assert!(matches!(
        frame.into_rgba_image(),
        Err(FaceError::Render(_))
    ));
}
