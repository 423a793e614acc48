//! Integration tests for a full drag/drop cycle on the CV canvas: guides
//! while dragging, snapping on drop, overflow warnings afterwards.

use pretty_assertions::assert_eq;

use cv_canvas::canvas::{
    badge_anchor, compute_guides, dedup_guides, detect_overflow, has_guide, magnetic_snap, Axis,
    Guide, GuideKind, Page, Point, Rect, Scene,
};
use cv_canvas::{finish_drop, CanvasConfig};

fn render(guides: &[Guide]) -> String {
    guides
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A4 page, one header block and the block being dragged level with it.
/// The dragged block is also present in the sibling list, as the host
/// passes its whole object list.
#[test]
fn test_a4_drag_next_to_header() {
    let page = Page::new(595.0, 842.0);
    let header = Rect::new(100.0, 100.0, 100.0, 40.0).with_id("header");
    let moving = Rect::new(150.0, 100.0, 80.0, 40.0).with_id("summary");
    let siblings = vec![header, moving.clone()];

    let guides = compute_guides(&page, &siblings, &moving, 5.0);

    assert!(guides.iter().any(|g| g.kind == GuideKind::Center));
    insta::assert_snapshot!(render(&guides), @r"
    horizontal center @ 120
    horizontal top @ 100
    horizontal bottom @ 140
    ");
}

#[test]
fn test_page_center_on_600_by_800() {
    let page = Page::new(600.0, 800.0);
    let moving = Rect::new(250.0, 380.0, 100.0, 40.0).with_id("photo");

    let guides = compute_guides(&page, &[], &moving, 5.0);

    assert!(has_guide(&guides, Axis::Vertical, GuideKind::PageCenter));
    assert!(has_guide(&guides, Axis::Horizontal, GuideKind::PageCenter));
    assert_eq!(
        guides,
        vec![
            Guide::vertical(300.0, GuideKind::PageCenter),
            Guide::horizontal(400.0, GuideKind::PageCenter),
        ]
    );
}

#[test]
fn test_centered_blocks_share_vertical_center() {
    let page = Page::A4;
    let title = Rect::new(147.5, 40.0, 300.0, 30.0).with_id("title");
    let subtitle = Rect::new(197.5, 90.0, 200.0, 20.0).with_id("subtitle");

    let guides = compute_guides(&page, &[title], &subtitle, 0.0);
    assert!(guides.contains(&Guide::vertical(297.5, GuideKind::Center)));
    // Also dead center on the page
    assert!(guides.contains(&Guide::vertical(297.5, GuideKind::PageCenter)));
}

#[test]
fn test_column_of_blocks_reports_each_and_dedups() {
    let page = Page::A4;
    let blocks: Vec<Rect> = (0..3)
        .map(|i| Rect::new(40.0, 100.0 + 80.0 * i as f64, 200.0, 60.0).with_id(format!("b{}", i)))
        .collect();
    let moving = Rect::new(42.0, 400.0, 200.0, 60.0).with_id("new");

    let guides = compute_guides(&page, &blocks, &moving, 3.0);
    let verticals: Vec<&Guide> = guides.iter().filter(|g| g.axis == Axis::Vertical).collect();
    // center, left, right for each of the three blocks
    assert_eq!(verticals.len(), 9);

    let collapsed = dedup_guides(&guides);
    assert_eq!(
        collapsed,
        vec![
            Guide::vertical(140.0, GuideKind::Center),
            Guide::vertical(40.0, GuideKind::Left),
            Guide::vertical(240.0, GuideKind::Right),
        ]
    );
}

#[test]
fn test_overflow_boundaries() {
    let page = Page::new(600.0, 800.0);
    let elements = vec![
        Rect::new(-1.0, 10.0, 100.0, 40.0).with_id("left-out"),
        Rect::new(0.0, 10.0, 600.0, 40.0).with_id("full-width"),
        Rect::new(1.0, 60.0, 600.0, 40.0).with_id("one-over"),
    ];

    let ids: Vec<Option<&str>> = detect_overflow(&page, &elements)
        .into_iter()
        .map(|r| r.id_str())
        .collect();
    assert_eq!(ids, vec![Some("left-out"), Some("one-over")]);
    assert_eq!(
        badge_anchor(&page, &elements[2]),
        Point::new(594.0, 66.0)
    );
}

#[test]
fn test_drop_after_magnetic_snap() {
    let config = CanvasConfig::new().with_page(600.0, 800.0);
    let skills = Rect::new(40.0, 500.0, 200.0, 100.0).with_id("skills");
    let moving = Rect::new(46.0, 604.0, 200.0, 203.0).with_id("languages");

    let pulled = magnetic_snap(&moving, &[skills.clone()], config.magnetic_threshold);
    assert_eq!(pulled, Point::new(40.0, 600.0));

    let mut dropped = moving.clone();
    dropped.x = pulled.x;
    dropped.y = pulled.y;
    let result = finish_drop(&config, &[skills], &dropped);
    assert_eq!(result.position, Point::new(40.0, 600.0));
    // 600 + 200 fits exactly
    assert!(result.overflowing.is_empty());
}

#[test]
fn test_scene_round_trip_through_adapter() {
    let scene = Scene::from_json(
        r#"{
            "page": { "width": 600, "height": 800 },
            "objects": [
                { "id": "header", "left": 100, "top": 100, "width": 50, "height": 40, "scale_x": 2 },
                { "id": "photo", "left": 100, "top": 300, "width": 100, "height": 40 },
                { "id": "guide", "left": 150, "top": 0, "width": 1, "height": 800, "selectable": false }
            ]
        }"#,
    )
    .expect("scene should parse");

    let moving = scene.find("photo").expect("photo exists");
    let guides = compute_guides(&scene.page, &scene.rects(), &moving, 0.0);
    assert_eq!(
        guides,
        vec![
            Guide::vertical(150.0, GuideKind::Center),
            Guide::vertical(100.0, GuideKind::Left),
            Guide::vertical(200.0, GuideKind::Right),
        ]
    );
}
