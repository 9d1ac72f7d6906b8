use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn mirror_retraces_curve() {
    for ease in ALL {
        let m = ease.mirror();
        for t in [0.1, 0.25, 0.5, 0.9] {
            let forward = ease.apply(t);
            let back = 1.0 - m.apply(1.0 - t);
            assert!((forward - back).abs() < 1e-12, "{ease:?} at {t}");
        }
        assert_eq!(m.mirror(), ease);
    }
}

#[test]
fn serde_uses_camel_case_tags() {
    assert_eq!(serde_json::to_string(&Ease::InOutCubic).unwrap(), "\"inOutCubic\"");
    let e: Ease = serde_json::from_str("\"outQuad\"").unwrap();
    assert_eq!(e, Ease::OutQuad);
}

#[test]
fn curves_hit_known_midpoints() {
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert_eq!(Ease::InQuad.apply(0.5), 0.25);
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    assert_eq!(Ease::InCubic.apply(0.5), 0.125);
    assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
    assert_eq!(Ease::InOutCubic.apply(0.25), 0.0625);
}
