//! 路径数据解析器测试

use crate::{icons, PathBuilder, PathCommand, PathParser, Point};

#[test]
fn test_parse_matches_generated_icon() {
    // add 图标的官方路径数据应与逐调用转写的定义完全一致
    let parsed = PathParser::new("M19,13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z")
        .parse()
        .unwrap();

    assert_eq!(parsed, icons::ADD.get().paths[0].commands);
}

#[test]
fn test_implicit_command_repetition() {
    let parsed = PathParser::new("M0,0 L1,1 2,2").parse().unwrap();

    assert_eq!(
        parsed,
        vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(1.0, 1.0)),
            PathCommand::LineTo(Point::new(2.0, 2.0)),
        ]
    );
}

#[test]
fn test_implicit_moveto_repetition_becomes_lineto() {
    let parsed = PathParser::new("m5,5 5,5").parse().unwrap();

    assert_eq!(
        parsed,
        vec![
            PathCommand::MoveTo(Point::new(5.0, 5.0)),
            PathCommand::LineTo(Point::new(10.0, 10.0)),
        ]
    );
}

#[test]
fn test_smooth_cubic_reflects_previous_control() {
    let parsed = PathParser::new("M0,0C0,10 10,10 10,0S20,-10 30,0")
        .parse()
        .unwrap();

    assert_eq!(
        parsed[2],
        PathCommand::CubicTo(
            Point::new(10.0, -10.0),
            Point::new(20.0, -10.0),
            Point::new(30.0, 0.0)
        )
    );
}

#[test]
fn test_arc_with_compact_flags() {
    let parsed = PathParser::new("M0,0A5,5 0 014,4").parse().unwrap();

    assert_eq!(
        parsed[1],
        PathCommand::ArcTo {
            rx: 5.0,
            ry: 5.0,
            x_rotation: 0.0,
            large_arc: false,
            sweep: true,
            end: Point::new(4.0, 4.0),
        }
    );
}

#[test]
fn test_relative_arc() {
    let parsed = PathParser::new("M10,10a2,3 90 1,0 -4,0").parse().unwrap();

    assert_eq!(
        parsed[1],
        PathCommand::ArcTo {
            rx: 2.0,
            ry: 3.0,
            x_rotation: 90.0,
            large_arc: true,
            sweep: false,
            end: Point::new(6.0, 10.0),
        }
    );
}

#[test]
fn test_negative_and_exponent_numbers() {
    let parsed = PathParser::new("M1e1,-2.5L-3,.5").parse().unwrap();

    assert_eq!(
        parsed,
        vec![
            PathCommand::MoveTo(Point::new(10.0, -2.5)),
            PathCommand::LineTo(Point::new(-3.0, 0.5)),
        ]
    );
}

#[test]
fn test_close_then_relative_uses_subpath_start() {
    let parsed = PathParser::new("M3,18h5zl1,1").parse().unwrap();
    let mut pb = PathBuilder::new();
    pb.move_to(3.0, 18.0)
        .r_horizontal_to(5.0)
        .close()
        .r_line_to(1.0, 1.0);

    assert_eq!(parsed, pb.build());
}

#[test]
fn test_error_on_unknown_command() {
    assert!(PathParser::new("X5,5").parse().is_err());
}

#[test]
fn test_error_on_leading_number() {
    assert!(PathParser::new("5,5 L1,1").parse().is_err());
}

#[test]
fn test_error_on_missing_coordinate() {
    assert!(PathParser::new("M5").parse().is_err());
}

#[test]
fn test_error_on_number_after_close() {
    assert!(PathParser::new("M0,0h5z 5,5").parse().is_err());
}

#[test]
fn test_error_on_bad_arc_flag() {
    assert!(PathParser::new("M0,0A5,5 0 2 0 4,4").parse().is_err());
}
