use super::*;

#[test]
fn handles_parse_from_compass_names() {
    for h in ResizeHandle::ALL {
        assert_eq!(h.as_str().parse::<ResizeHandle>().unwrap(), h);
    }
    assert_eq!("SE".parse::<ResizeHandle>().unwrap(), ResizeHandle::SE);
    assert!("north".parse::<ResizeHandle>().is_err());
}

#[test]
fn handles_name_the_edges_they_move() {
    assert_eq!(ResizeHandle::E.horizontal(), Some(Edge::Max));
    assert_eq!(ResizeHandle::E.vertical(), None);
    assert_eq!(ResizeHandle::NW.horizontal(), Some(Edge::Min));
    assert_eq!(ResizeHandle::NW.vertical(), Some(Edge::Min));
    assert_eq!(ResizeHandle::S.horizontal(), None);
    assert_eq!(ResizeHandle::S.vertical(), Some(Edge::Max));
}

#[test]
fn anchors_sit_on_corners_and_midpoints() {
    let b = BubbleBox::new(10.0, 20.0, 100.0, 60.0);
    assert_eq!(ResizeHandle::NW.anchor(b), Point::new(10.0, 20.0));
    assert_eq!(ResizeHandle::SE.anchor(b), Point::new(110.0, 80.0));
    assert_eq!(ResizeHandle::N.anchor(b), Point::new(60.0, 20.0));
    assert_eq!(ResizeHandle::W.anchor(b), Point::new(10.0, 50.0));
}

#[test]
fn handles_serialize_lowercase() {
    assert_eq!(
        serde_json::to_string(&ResizeHandle::NE).unwrap(),
        "\"ne\""
    );
}
