use super::*;

fn enter() -> Animation {
    Animation {
        kind: AnimationKind::Enter,
        duration: 2.0,
        start_time: 1.0,
        ease: Ease::Linear,
        group_animation: Some(PropertyTween::between(
            PropertyMap::from([(Property::ClipWidth, 0.0.into())]),
            PropertyMap::from([(Property::ClipWidth, 100.0.into())]),
        )),
        node_animation: None,
    }
}

#[test]
fn progress_clamps_outside_window() {
    let a = enter();
    assert_eq!(a.progress_at(0.0), 0.0);
    assert_eq!(a.progress_at(1.0), 0.0);
    assert_eq!(a.progress_at(2.0), 0.5);
    assert_eq!(a.progress_at(3.0), 1.0);
    assert_eq!(a.end_time(), 3.0);
}

#[test]
fn zero_duration_completes_immediately() {
    let mut a = enter();
    a.duration = 0.0;
    assert_eq!(a.progress_at(1.0), 0.0);
    assert_eq!(a.progress_at(1.0 + 1e-9), 1.0);
}

#[test]
fn serializes_with_playback_field_names() {
    let mut a = enter();
    a.node_animation = Some(PropertyTween {
        from: None,
        to: Some(PropertyMap::from([(Property::Fill, "red".into())])),
    });
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["type"], "enter");
    assert_eq!(v["startTime"], 1.0);
    assert_eq!(v["groupAnimation"]["from"]["clipWidth"], 0.0);
    assert_eq!(v["nodeAnimation"]["to"]["fill"], "red");
    assert!(v["nodeAnimation"].get("from").is_none());

    let back: Animation = serde_json::from_value(v).unwrap();
    assert_eq!(back, a);
}

#[test]
fn morph_appear_tag_is_camel_case() {
    assert_eq!(
        serde_json::to_string(&AnimationKind::MorphAppear).unwrap(),
        "\"morphAppear\""
    );
    assert!(AnimationKind::MorphAppear.is_toggle());
    assert!(!AnimationKind::Morph.is_toggle());
}

#[test]
fn step_placement_copies_payload() {
    let step = AnimationStep {
        kind: AnimationKind::Exit,
        duration: 1.0,
        ease: Ease::InCubic,
        group: Some(PropertyTween::default()),
        node: None,
    };
    let a = step.at(4.5);
    assert_eq!(a.start_time, 4.5);
    assert_eq!(a.kind, AnimationKind::Exit);
    assert_eq!(a.group_animation, Some(PropertyTween::default()));
}
