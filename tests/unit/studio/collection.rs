use super::*;
use crate::model::bubble::{BubbleId, BubbleKind, TextBubble};

fn three() -> (PanelCollection, Vec<PanelId>) {
    let mut c = PanelCollection::default();
    let ids = c.start_generation(["a", "b", "c"], AspectRatio::Wide);
    (c, ids)
}

#[test]
fn placeholders_are_loading_without_images() {
    let (c, ids) = three();
    assert_eq!(ids.len(), 3);
    assert!(c.is_loading());
    for p in c.panels() {
        assert!(p.is_loading);
        assert!(p.image_url.is_none());
        assert_eq!(p.aspect_ratio, AspectRatio::Wide);
    }
    assert_eq!(c.get(&ids[1]).unwrap().description, "b");
}

#[test]
fn generation_results_settle_panels() {
    let (mut c, ids) = three();
    c.record_generation(&ids[0], Ok("data:image/jpeg;base64,AA".into()));
    c.record_generation(&ids[1], Err(PanelError::backend("quota")));

    let ok = c.get(&ids[0]).unwrap();
    assert!(!ok.is_loading && ok.image_url.is_some());
    let failed = c.get(&ids[1]).unwrap();
    assert!(failed.is_failed());
    assert!(c.get(&ids[2]).unwrap().is_loading);
}

#[test]
fn new_generation_gets_fresh_ids() {
    let (mut c, first) = three();
    let second = c.start_generation(["x"], AspectRatio::Square);
    assert!(!first.contains(&second[0]));
    assert_eq!(c.panels().len(), 1);
}

#[test]
fn remix_failure_keeps_previous_image() {
    let (mut c, ids) = three();
    c.record_generation(&ids[0], Ok("data:old".into()));

    assert_eq!(c.begin_remix(&ids[0]).as_deref(), Some("data:old"));
    assert!(c.get(&ids[0]).unwrap().is_loading);
    c.record_remix(&ids[0], Err(PanelError::backend("nope")));
    let p = c.get(&ids[0]).unwrap();
    assert_eq!(p.image_url.as_deref(), Some("data:old"));
    assert!(!p.is_loading);

    assert!(c.begin_remix(&ids[1]).is_none());
    assert!(c.begin_remix(&PanelId::new("missing")).is_none());
}

#[test]
fn apply_edit_replaces_image_and_bubbles() {
    let (mut c, ids) = three();
    let bubble = TextBubble::with_defaults(BubbleId::new("1"), BubbleKind::Caption);
    c.apply_edit(PanelEdit {
        panel_id: ids[2].clone(),
        image_url: "data:new".into(),
        bubbles: vec![bubble.clone()],
    })
    .unwrap();
    let p = c.get(&ids[2]).unwrap();
    assert_eq!(p.image_url.as_deref(), Some("data:new"));
    assert_eq!(p.bubbles, [bubble]);

    let err = c
        .apply_edit(PanelEdit {
            panel_id: PanelId::new("ghost"),
            image_url: String::new(),
            bubbles: Vec::new(),
        })
        .unwrap_err();
    assert!(matches!(err, PanelError::Validation(_)));
}

#[test]
fn cancel_clears_loading_everywhere() {
    let (mut c, _) = three();
    c.cancel_loading();
    assert!(!c.is_loading());
}
