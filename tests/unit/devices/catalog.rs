use super::*;

#[test]
fn catalog_rows_line_up_with_enum() {
    for (idx, (platform, info)) in CATALOG.iter().enumerate() {
        assert_eq!(*platform as usize, idx);
        assert_eq!(Platform::ALL[idx], *platform);
        assert_eq!(platform.name(), info.name);
    }
}

#[test]
fn known_dimensions() {
    assert_eq!(Platform::Aplite.dims(), TargetDims::new(144, 168).unwrap());
    assert_eq!(Platform::Chalk.dims(), TargetDims::new(180, 180).unwrap());
    assert_eq!(Platform::Emery.dims(), TargetDims::new(200, 228).unwrap());
    assert_eq!(Platform::Chalk.shape(), DisplayShape::Round);
}

#[test]
fn aplite_and_basalt_share_a_display() {
    assert!(Platform::Aplite.shares_display_with(Platform::Basalt));
    assert!(Platform::Basalt.shares_display_with(Platform::Diorite));
    assert!(!Platform::Aplite.shares_display_with(Platform::Emery));
    assert!(!Platform::Chalk.shares_display_with(Platform::Aplite));
}

#[test]
fn parse_and_display_round_trip_names() {
    assert_eq!("Basalt".parse::<Platform>().unwrap(), Platform::Basalt);
    assert_eq!(" emery ".parse::<Platform>().unwrap(), Platform::Emery);
    assert_eq!(Platform::Diorite.to_string(), "diorite");

    let err = "gabbro".parse::<Platform>().unwrap_err();
    assert!(err.to_string().contains("unknown platform 'gabbro'"));
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Platform::Chalk).unwrap();
    assert_eq!(json, "\"chalk\"");
    let back: Platform = serde_json::from_str("\"aplite\"").unwrap();
    assert_eq!(back, Platform::Aplite);
}
