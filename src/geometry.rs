//! 几何图形模块

use serde::{Deserialize, Serialize};

/// 2D 点
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 以 center 为中心的镜像点（用于平滑曲线的控制点反射）
    pub fn reflect(&self, center: &Point) -> Point {
        Point {
            x: 2.0 * center.x - self.x,
            y: 2.0 * center.y - self.y,
        }
    }
}
