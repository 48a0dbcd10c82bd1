use super::*;
use crate::face::mapper::map;

#[test]
fn seed_list_is_split_and_trimmed() {
    assert_eq!(
        parse_seed_list(" rocket, sunset ,ocean").unwrap(),
        ["rocket", "sunset", "ocean"]
    );
    assert_eq!(parse_seed_list("solo").unwrap(), ["solo"]);
}

#[test]
fn empty_entries_after_the_first_are_kept() {
    assert_eq!(parse_seed_list("a,,a").unwrap(), ["a", "", "a"]);
    assert_eq!(parse_seed_list("a, ").unwrap(), ["a", ""]);
}

#[test]
fn empty_seed_lists_are_rejected() {
    for raw in ["", " ", ",", " , ,", ",a", " ,a,b"] {
        assert!(
            matches!(parse_seed_list(raw), Err(FaceError::InvalidSeedList(_))),
            "{raw:?}"
        );
    }
}

#[test]
fn seed_count_is_capped() {
    let at_cap = vec!["s"; MAX_SEEDS].join(",");
    assert_eq!(parse_seed_list(&at_cap).unwrap().len(), MAX_SEEDS);

    let over = vec!["s"; MAX_SEEDS + 1].join(",");
    assert!(matches!(
        parse_seed_list(&over),
        Err(FaceError::InvalidSeedList(_))
    ));

    let descriptors = vec![FaceDescriptor::from_indices(vec![0]); MAX_SEEDS + 1];
    assert!(matches!(
        AnimationRequest::new(descriptors, 1000),
        Err(FaceError::InvalidSeedList(_))
    ));
}

#[test]
fn duration_defaults_and_parses() {
    assert_eq!(parse_duration(None).unwrap().as_millis(), 1000);
    assert_eq!(parse_duration(Some("500")).unwrap().as_millis(), 500);
    assert_eq!(parse_duration(Some(" 250 ")).unwrap().as_millis(), 250);
}

#[test]
fn bad_durations_are_rejected() {
    for raw in ["0", "-5", "abc", "1.5", "", "99999999999999999999"] {
        assert!(
            matches!(parse_duration(Some(raw)), Err(FaceError::InvalidDuration(_))),
            "{raw:?}"
        );
    }
}

#[test]
fn request_validates_before_rendering() {
    assert!(matches!(
        AnimationRequest::new(vec![], 1000),
        Err(FaceError::InvalidSeedList(_))
    ));
    let one = vec![FaceDescriptor::from_indices(vec![0])];
    assert!(matches!(
        AnimationRequest::new(one.clone(), 0),
        Err(FaceError::InvalidDuration(_))
    ));
    assert!(matches!(
        AnimationRequest::new(one, -5),
        Err(FaceError::InvalidDuration(_))
    ));
}

#[test]
fn from_query_maps_seeds_in_order() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let req = AnimationRequest::from_query("a,b,c", Some("500"), &catalog).unwrap();
    assert_eq!(req.duration().as_millis(), 500);
    assert_eq!(req.descriptors().len(), 3);
    assert_eq!(req.descriptors()[0], map("a", &catalog));
    assert_eq!(req.descriptors()[2], map("c", &catalog));
}
