//! 矢量资源测试
//! 验证 Material 默认样式、透明度覆盖、构建器行为与 JSON 导出

use crate::{
    Brush, Color, PathCommand, Point, StrokeCap, StrokeJoin, VectorAsset, VectorAssetBuilder,
    VectorPath,
};

fn sample_builder() -> VectorAssetBuilder {
    VectorAssetBuilder::new("sample", 24.0, 24.0, 24.0, 24.0)
}

#[test]
fn test_material_path_defaults() {
    let asset = sample_builder()
        .material_path(1.0, 1.0, |p| {
            p.move_to(0.0, 0.0).line_to(24.0, 24.0);
        })
        .build();

    let path = &asset.paths[0];
    assert_eq!(path.fill, Brush::Solid(Color::BLACK));
    assert_eq!(path.fill_alpha, 1.0);
    assert_eq!(path.stroke, None);
    assert_eq!(path.stroke_alpha, 1.0);
    assert_eq!(path.stroke_width, 1.0);
    assert_eq!(path.stroke_cap, StrokeCap::Butt);
    assert_eq!(path.stroke_join, StrokeJoin::Bevel);
    assert_eq!(path.stroke_miter, 1.0);
}

#[test]
fn test_fill_alpha_override_leaves_other_defaults() {
    let asset = sample_builder()
        .material_path(0.5, 1.0, |p| {
            p.move_to(0.0, 0.0);
        })
        .build();

    let path = &asset.paths[0];
    let expected = VectorPath {
        commands: vec![PathCommand::MoveTo(Point::new(0.0, 0.0))],
        fill_alpha: 0.5,
        ..VectorPath::default()
    };
    assert_eq!(*path, expected);
}

#[test]
fn test_default_vector_path_is_material_style() {
    let path = VectorPath::default();

    assert_eq!(path.fill, Brush::Solid(Color::BLACK));
    assert_eq!(path.stroke, None);
    assert_eq!(path.stroke_join, StrokeJoin::Bevel);
    assert_eq!(path.stroke_miter, 1.0);
    assert!(path.commands.is_empty());
}

#[test]
fn test_builder_preserves_dimensions_and_path_order() {
    let asset = VectorAssetBuilder::new("two_paths", 48.0, 48.0, 24.0, 24.0)
        .material_path(1.0, 1.0, |p| {
            p.move_to(1.0, 1.0);
        })
        .material_path(1.0, 1.0, |p| {
            p.move_to(2.0, 2.0);
        })
        .build();

    assert_eq!(asset.name, "two_paths");
    assert_eq!(asset.width, 48.0);
    assert_eq!(asset.height, 48.0);
    assert_eq!(asset.viewport_width, 24.0);
    assert_eq!(asset.viewport_height, 24.0);
    assert_eq!(asset.paths.len(), 2);
    assert_eq!(
        asset.paths[0].commands[0],
        PathCommand::MoveTo(Point::new(1.0, 1.0))
    );
    assert_eq!(
        asset.paths[1].commands[0],
        PathCommand::MoveTo(Point::new(2.0, 2.0))
    );
}

#[test]
fn test_material_path_data_parses_into_path() {
    let asset = sample_builder()
        .material_path_data(1.0, 1.0, "M2,2h20v20H2z")
        .unwrap()
        .build();

    assert_eq!(asset.paths[0].commands.len(), 5);
    assert_eq!(
        asset.paths[0].commands[0],
        PathCommand::MoveTo(Point::new(2.0, 2.0))
    );
}

#[test]
fn test_json_export_and_restore() {
    let asset = sample_builder()
        .material_path(0.5, 1.0, |p| {
            p.move_to(0.0, 0.0).line_to(24.0, 24.0).close();
        })
        .build();

    let json = asset.to_json().unwrap();
    assert!(json.contains("\"viewport_width\""));

    let restored = VectorAsset::from_json(&json).unwrap();
    assert_eq!(restored, asset);
}
