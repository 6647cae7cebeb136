#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::fit::{Placement, covers};

fn landscape() -> FramedImage {
    FramedImage::new_placed(
        Uuid::new_v4(),
        ImageKind::Image,
        Dimensions::new(600.0, 400.0),
        Point::new(10.0, 20.0),
        &FrameConfig::default(),
    )
}

// =============================================================
// Placement defaults
// =============================================================

#[test]
fn new_placed_uses_default_border_at_position() {
    let img = landscape();
    assert_eq!(img.border_dimensions(), Dimensions::new(250.0, 250.0));
    assert_eq!(img.border_position(), Point::new(10.0, 20.0));
    assert_eq!(img.border.rotation, 0.0);
    assert_eq!(img.image_rotation, 0.0);
}

#[test]
fn new_placed_scale_is_minimum_cover() {
    let img = landscape();
    // max(250/600, 250/400)
    assert_eq!(img.scale, 0.625);
    assert_eq!(img.image_dimensions(), Dimensions::new(375.0, 250.0));
}

#[test]
fn new_placed_centres_image_and_covers() {
    let img = landscape();
    assert_eq!(img.image_offset(), Point::new(-62.5, 0.0));
    assert!(covers(&Placement::of(&img), img.border_dimensions()));
}

#[test]
fn new_placed_sticker_border_is_image() {
    let img = FramedImage::new_placed(
        Uuid::new_v4(),
        ImageKind::Sticker,
        Dimensions::new(120.0, 80.0),
        Point::ORIGIN,
        &FrameConfig::default(),
    );
    assert_eq!(img.scale, 1.0);
    assert_eq!(img.border_dimensions(), img.image_dimensions());
    assert_eq!(img.image_offset(), Point::ORIGIN);
}

#[test]
fn new_placed_ids_are_unique() {
    assert_ne!(landscape().id, landscape().id);
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn ratio_uses_intrinsic_size() {
    let mut img = landscape();
    img.scale = 3.0;
    assert_eq!(img.ratio(), 1.5);
}

// =============================================================
// apply_patch
// =============================================================

#[test]
fn apply_patch_sets_present_fields_only() {
    let mut img = landscape();
    let before = img.clone();
    img.apply_patch(&TransformPatch { x_offset: Some(-5.0), image_rotation: Some(0.25), ..Default::default() });

    assert_eq!(img.x_offset, -5.0);
    assert_eq!(img.image_rotation, 0.25);
    assert_eq!(img.y_offset, before.y_offset);
    assert_eq!(img.scale, before.scale);
    assert_eq!(img.border, before.border);
}

#[test]
fn apply_patch_maps_xy_to_border_position() {
    let mut img = landscape();
    img.apply_patch(&TransformPatch {
        x: Some(300.0),
        y: Some(40.0),
        border_width: Some(120.0),
        border_height: Some(90.0),
        border_rotation: Some(-1.0),
        ..Default::default()
    });
    assert_eq!(img.border_position(), Point::new(300.0, 40.0));
    assert_eq!(img.border_dimensions(), Dimensions::new(120.0, 90.0));
    assert_eq!(img.border.rotation, -1.0);
}

#[test]
fn apply_patch_ignores_non_finite_and_non_positive_scale() {
    let mut img = landscape();
    let before = img.clone();
    img.apply_patch(&TransformPatch {
        scale: Some(0.0),
        x_offset: Some(f64::NAN),
        image_rotation: Some(f64::INFINITY),
        ..Default::default()
    });
    assert_eq!(img, before);
}

#[test]
fn empty_patch_is_empty() {
    assert!(TransformPatch::default().is_empty());
    assert!(!TransformPatch { scale: Some(1.0), ..Default::default() }.is_empty());
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn patch_serializes_camel_case_and_skips_absent() {
    let patch = TransformPatch {
        x_offset: Some(1.5),
        border_width: Some(200.0),
        image_rotation: Some(0.5),
        ..Default::default()
    };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, json!({ "xOffset": 1.5, "borderWidth": 200.0, "imageRotation": 0.5 }));
}

#[test]
fn framed_image_deserializes_with_defaults() {
    let id = Uuid::new_v4();
    let wall = Uuid::new_v4();
    let value = json!({
        "id": id,
        "wallId": wall,
        "originalWidth": 600.0,
        "originalHeight": 400.0,
        "scale": 1.0,
        "xOffset": 0.0,
        "yOffset": 0.0,
        "imageRotation": 0.0,
        "border": { "width": 300.0, "height": 300.0, "offsetX": 5.0, "offsetY": 6.0, "rotation": 0.0 }
    });
    let img: FramedImage = serde_json::from_value(value).unwrap();
    assert_eq!(img.id, id);
    assert_eq!(img.wall_id, wall);
    assert_eq!(img.kind, ImageKind::Image);
    assert_eq!(img.frame_style, FrameStyle::None);
    assert_eq!(img.order, 0);
    assert_eq!(img.border_position(), Point::new(5.0, 6.0));
}

#[test]
fn kind_and_style_serialize_lowercase() {
    assert_eq!(serde_json::to_value(ImageKind::Sticker).unwrap(), json!("sticker"));
    assert_eq!(serde_json::to_value(FrameStyle::Border).unwrap(), json!("border"));
}
