//! 矢量资源模块 - 不可变的可缩放图形描述
//!
//! VectorAsset 描述一幅矢量图形：名义宽高、视口坐标空间、有序的路径节点。
//! 构建完成后不再修改，可在线程间自由共享，实际像素绘制由外部渲染方负责。

use serde::{Deserialize, Serialize};

use crate::paint::{Brush, StrokeCap, StrokeJoin};
use crate::path::PathCommand;

/// 单条矢量路径 - 路径命令序列及其填充/描边样式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    pub commands: Vec<PathCommand>,
    pub fill: Brush,
    pub fill_alpha: f32,
    pub stroke: Option<Brush>,
    pub stroke_alpha: f32,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub stroke_miter: f32,
}

impl Default for VectorPath {
    /// Material 默认样式：黑色填充、无描边、全不透明、1 单位线宽
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            fill: Brush::default(),
            fill_alpha: 1.0,
            stroke: None,
            stroke_alpha: 1.0,
            stroke_width: 1.0,
            stroke_cap: StrokeCap::Butt,
            stroke_join: StrokeJoin::Bevel,
            stroke_miter: 1.0,
        }
    }
}

/// 矢量资源 - 构建后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorAsset {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub paths: Vec<VectorPath>,
}

impl VectorAsset {
    /// 导出为 JSON，供外部工具检查或渲染方消费
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

/// 矢量资源构建器
#[derive(Debug, Clone)]
pub struct VectorAssetBuilder {
    name: String,
    width: f32,
    height: f32,
    viewport_width: f32,
    viewport_height: f32,
    paths: Vec<VectorPath>,
}

impl VectorAssetBuilder {
    pub fn new(
        name: &str,
        width: f32,
        height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            viewport_width,
            viewport_height,
            paths: Vec::new(),
        }
    }

    /// 追加一条完整样式的路径
    pub fn path(
        mut self,
        fill: Brush,
        fill_alpha: f32,
        stroke: Option<Brush>,
        stroke_alpha: f32,
        stroke_width: f32,
        stroke_cap: StrokeCap,
        stroke_join: StrokeJoin,
        stroke_miter: f32,
        commands: Vec<PathCommand>,
    ) -> Self {
        self.paths.push(VectorPath {
            commands,
            fill,
            fill_alpha,
            stroke,
            stroke_alpha,
            stroke_width,
            stroke_cap,
            stroke_join,
            stroke_miter,
        });
        self
    }

    pub fn push_path(mut self, path: VectorPath) -> Self {
        self.paths.push(path);
        self
    }

    /// 完成构建，产出不可变资源
    pub fn build(self) -> VectorAsset {
        VectorAsset {
            name: self.name,
            width: self.width,
            height: self.height,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            paths: self.paths,
        }
    }
}
