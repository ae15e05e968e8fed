use super::*;

fn assert_point_near(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

#[test]
fn frame_height_follows_ratio() {
    assert_eq!(PreviewFrame::from_ratio(500.0, 1, 1).height, 500.0);
    assert_eq!(PreviewFrame::from_ratio(500.0, 4, 3).height, 375.0);
    assert!((PreviewFrame::from_ratio(500.0, 3, 4).height - 666.666_666_666_666_6).abs() < 1e-9);
    assert!((PreviewFrame::from_ratio(500.0, 16, 9).height - 281.25).abs() < 1e-9);
}

#[test]
fn cover_size_fits_height_for_wide_images() {
    let frame = PreviewFrame::from_ratio(500.0, 1, 1);
    let draw = frame.cover_size(Size::new(2000.0, 1000.0));
    assert_eq!(draw, Size::new(1000.0, 500.0));
}

#[test]
fn cover_size_fits_width_for_tall_images() {
    let frame = PreviewFrame::from_ratio(500.0, 16, 9);
    let draw = frame.cover_size(Size::new(1000.0, 1000.0));
    assert_eq!(draw, Size::new(500.0, 500.0));
    assert!(draw.height >= frame.height);
}

#[test]
fn identity_placement_maps_image_corners_to_frame_corners() {
    let frame = PreviewFrame::from_ratio(500.0, 1, 1);
    let a = image_placement(frame, Size::new(1000.0, 1000.0), Vec2::ZERO, 1.0, 0.0);
    assert_point_near(a * Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert_point_near(a * Point::new(1000.0, 1000.0), Point::new(500.0, 500.0));
}

#[test]
fn pan_is_applied_before_zoom() {
    let frame = PreviewFrame::from_ratio(500.0, 1, 1);
    let a = image_placement(frame, Size::new(500.0, 500.0), Vec2::new(10.0, -20.0), 2.0, 0.0);
    // The image centre lands on frame centre + pan, unscaled by zoom.
    assert_point_near(a * Point::new(250.0, 250.0), Point::new(260.0, 230.0));
    // Corners spread out by the zoom factor around that point.
    assert_point_near(a * Point::new(0.0, 0.0), Point::new(260.0 - 500.0, 230.0 - 500.0));
}

#[test]
fn rotation_turns_about_frame_centre() {
    let frame = PreviewFrame::from_ratio(500.0, 1, 1);
    let a = image_placement(frame, Size::new(500.0, 500.0), Vec2::ZERO, 1.0, 90.0);
    assert_point_near(a * Point::new(250.0, 250.0), Point::new(250.0, 250.0));
    // +90 degrees in y-down space sends the image's top-left corner to the top-right.
    assert_point_near(a * Point::new(0.0, 0.0), Point::new(500.0, 0.0));
}

#[test]
fn output_size_floors_and_never_collapses() {
    let frame = PreviewFrame::from_ratio(500.0, 16, 9);
    assert_eq!(frame.output_size(1.0), (500, 281));
    assert_eq!(frame.output_size(0.5), (250, 140));
    assert_eq!(frame.output_size(0.0001), (1, 1));
}
