//! Mini Vector - 惰性矢量图标引擎
//! 支持声明式路径构建、不可变矢量资源描述、线程安全的惰性图标

mod color;
mod geometry;
mod paint;
mod parser;
mod path;
mod vector;

pub use color::Color;
pub use geometry::Point;
pub use paint::{Brush, StrokeCap, StrokeJoin};
pub use parser::PathParser;
pub use path::{PathBuilder, PathCommand};
pub use vector::{VectorAsset, VectorAssetBuilder, VectorPath};

// 图标系统
pub mod icon;
pub mod icons;

pub use icon::{lazy_material_icon, LazyIcon, MATERIAL_ICON_DIMENSION};

// 单元测试
#[cfg(test)]
mod tests;
