//! 画刷与描边样式模块

use serde::{Deserialize, Serialize};

use crate::Color;

/// 画刷 - 填充或描边的颜色来源
///
/// Material 图标只用纯色，渐变等画刷留给上层渲染方扩展。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    pub const fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(Color::BLACK)
    }
}

/// 线帽样式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

impl Default for StrokeCap {
    fn default() -> Self {
        Self::Butt
    }
}

/// 线连接样式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

impl Default for StrokeJoin {
    fn default() -> Self {
        Self::Bevel
    }
}
