//! Material 图标定义（Filled 主题）
//!
//! 按官方图标的 SVG 路径数据逐条转写的调用点，命名保持 Material 的
//! snake_case 转大写常量。所有图标都是 24x24 视口、默认样式的惰性资源。

use crate::icon::{lazy_material_icon, LazyIcon};

/// add
pub static ADD: LazyIcon = lazy_material_icon("add", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(19.0, 13.0)
            .r_horizontal_to(-6.0)
            .r_vertical_to(6.0)
            .r_horizontal_to(-2.0)
            .r_vertical_to(-6.0)
            .horizontal_to(5.0)
            .r_vertical_to(-2.0)
            .r_horizontal_to(6.0)
            .vertical_to(5.0)
            .r_horizontal_to(2.0)
            .r_vertical_to(6.0)
            .r_horizontal_to(6.0)
            .r_vertical_to(2.0)
            .close();
    })
});

/// close
pub static CLOSE: LazyIcon = lazy_material_icon("close", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(19.0, 6.41)
            .line_to(17.59, 5.0)
            .line_to(12.0, 10.59)
            .line_to(6.41, 5.0)
            .line_to(5.0, 6.41)
            .line_to(10.59, 12.0)
            .line_to(5.0, 17.59)
            .line_to(6.41, 19.0)
            .line_to(12.0, 13.41)
            .line_to(17.59, 19.0)
            .line_to(19.0, 17.59)
            .line_to(13.41, 12.0)
            .close();
    })
});

/// check
pub static CHECK: LazyIcon = lazy_material_icon("check", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(9.0, 16.17)
            .line_to(4.83, 12.0)
            .r_line_to(-1.42, 1.41)
            .line_to(9.0, 19.0)
            .line_to(21.0, 7.0)
            .r_line_to(-1.41, -1.41)
            .close();
    })
});

/// menu
pub static MENU: LazyIcon = lazy_material_icon("menu", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(3.0, 18.0)
            .r_horizontal_to(18.0)
            .r_vertical_to(-2.0)
            .horizontal_to(3.0)
            .r_vertical_to(2.0)
            .close()
            .r_move_to(0.0, -5.0)
            .r_horizontal_to(18.0)
            .r_vertical_to(-2.0)
            .horizontal_to(3.0)
            .r_vertical_to(2.0)
            .close()
            .r_move_to(0.0, -7.0)
            .r_vertical_to(2.0)
            .r_horizontal_to(18.0)
            .vertical_to(6.0)
            .horizontal_to(3.0)
            .close();
    })
});

/// arrow_back
pub static ARROW_BACK: LazyIcon = lazy_material_icon("arrow_back", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(20.0, 11.0)
            .horizontal_to(7.83)
            .r_line_to(5.59, -5.59)
            .line_to(12.0, 4.0)
            .r_line_to(-8.0, 8.0)
            .r_line_to(8.0, 8.0)
            .r_line_to(1.41, -1.41)
            .line_to(7.83, 13.0)
            .horizontal_to(20.0)
            .r_vertical_to(-2.0)
            .close();
    })
});

/// home
pub static HOME: LazyIcon = lazy_material_icon("home", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(10.0, 20.0)
            .r_vertical_to(-6.0)
            .r_horizontal_to(4.0)
            .r_vertical_to(6.0)
            .r_horizontal_to(5.0)
            .r_vertical_to(-8.0)
            .r_horizontal_to(3.0)
            .line_to(12.0, 3.0)
            .line_to(2.0, 12.0)
            .r_horizontal_to(3.0)
            .r_vertical_to(8.0)
            .close();
    })
});

/// delete
pub static DELETE: LazyIcon = lazy_material_icon("delete", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(6.0, 19.0)
            .r_cubic_to(0.0, 1.1, 0.9, 2.0, 2.0, 2.0)
            .r_horizontal_to(8.0)
            .r_cubic_to(1.1, 0.0, 2.0, -0.9, 2.0, -2.0)
            .vertical_to(7.0)
            .horizontal_to(6.0)
            .r_vertical_to(12.0)
            .close()
            .move_to(19.0, 4.0)
            .r_horizontal_to(-3.5)
            .r_line_to(-1.0, -1.0)
            .r_horizontal_to(-5.0)
            .r_line_to(-1.0, 1.0)
            .horizontal_to(5.0)
            .r_vertical_to(2.0)
            .r_horizontal_to(14.0)
            .vertical_to(4.0)
            .close();
    })
});

/// search
pub static SEARCH: LazyIcon = lazy_material_icon("search", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(15.5, 14.0)
            .r_horizontal_to(-0.79)
            .r_line_to(-0.28, -0.27)
            .cubic_to(15.41, 12.59, 16.0, 11.11, 16.0, 9.5)
            .cubic_to(16.0, 5.91, 13.09, 3.0, 9.5, 3.0)
            .reflective_cubic_to(3.0, 5.91, 3.0, 9.5)
            .reflective_cubic_to(5.91, 16.0, 9.5, 16.0)
            .r_cubic_to(1.61, 0.0, 3.09, -0.59, 4.23, -1.57)
            .r_line_to(0.27, 0.28)
            .r_vertical_to(0.79)
            .r_line_to(5.0, 4.99)
            .line_to(20.49, 19.0)
            .r_line_to(-4.99, -5.0)
            .close()
            .move_to(9.5, 14.0)
            .cubic_to(7.01, 14.0, 5.0, 11.99, 5.0, 9.5)
            .reflective_cubic_to(7.01, 5.0, 9.5, 5.0)
            .reflective_cubic_to(14.0, 7.01, 14.0, 9.5)
            .reflective_cubic_to(11.99, 14.0, 9.5, 14.0)
            .close();
    })
});

/// expand_more
pub static EXPAND_MORE: LazyIcon = lazy_material_icon("expand_more", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(16.59, 8.59)
            .line_to(12.0, 13.17)
            .line_to(7.41, 8.59)
            .line_to(6.0, 10.0)
            .r_line_to(6.0, 6.0)
            .r_line_to(6.0, -6.0)
            .close();
    })
});

/// favorite
pub static FAVORITE: LazyIcon = lazy_material_icon("favorite", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.move_to(12.0, 21.35)
            .r_line_to(-1.45, -1.32)
            .cubic_to(5.4, 15.36, 2.0, 12.28, 2.0, 8.5)
            .cubic_to(2.0, 5.42, 4.42, 3.0, 7.5, 3.0)
            .r_cubic_to(1.74, 0.0, 3.41, 0.81, 4.5, 2.09)
            .cubic_to(13.09, 3.81, 14.76, 3.0, 16.5, 3.0)
            .cubic_to(19.58, 3.0, 22.0, 5.42, 22.0, 8.5)
            .r_cubic_to(0.0, 3.78, -3.4, 6.86, -8.55, 11.54)
            .line_to(12.0, 21.35)
            .close();
    })
});

/// fiber_manual_record（实心圆点）
pub static FIBER_MANUAL_RECORD: LazyIcon = lazy_material_icon("fiber_manual_record", |b| {
    b.material_path(1.0, 1.0, |p| {
        p.add_circle(12.0, 12.0, 8.0);
    })
});
