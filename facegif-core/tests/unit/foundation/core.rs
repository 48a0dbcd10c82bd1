use super::*;

#[test]
fn duration_rejects_non_positive_values() {
    for ms in [0, -5, i64::MIN] {
        let err = FrameDuration::new(ms).unwrap_err();
        assert!(matches!(err, FaceError::InvalidDuration(_)), "{ms}");
    }
}

#[test]
fn duration_rejects_unrepresentable_values() {
    assert!(FrameDuration::new(i64::from(MAX_FRAME_DURATION_MS)).is_ok());
    let err = FrameDuration::new(i64::from(MAX_FRAME_DURATION_MS) + 1).unwrap_err();
    assert!(matches!(err, FaceError::InvalidDuration(_)));
}

#[test]
fn duration_centis_round_to_nearest() {
    assert_eq!(FrameDuration::new(1000).unwrap().as_centis(), 100);
    assert_eq!(FrameDuration::new(500).unwrap().as_centis(), 50);
    assert_eq!(FrameDuration::new(44).unwrap().as_centis(), 4);
    assert_eq!(FrameDuration::new(45).unwrap().as_centis(), 5);
    assert_eq!(FrameDuration::new(15).unwrap().as_centis(), 2);
    assert_eq!(FrameDuration::new(1).unwrap().as_centis(), 1);
    assert_eq!(
        FrameDuration::new(i64::from(MAX_FRAME_DURATION_MS))
            .unwrap()
            .as_centis(),
        u16::MAX
    );
}

#[test]
fn duration_default_is_one_second() {
    assert_eq!(FrameDuration::default().as_millis(), 1000);
}

#[test]
fn canvas_bounds_are_checked() {
    assert!(Canvas::new(400, 480).is_ok());
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, MAX_CANVAS_DIM + 1).is_err());
    assert_eq!(Canvas::new(4, 3).unwrap().pixel_count(), 12);
}
