//! 图标模块 - Material 默认样式与惰性图标单元
//!
//! 图标资源在首次访问时才构建，构建恰好执行一次：并发的首次访问
//! 只有一个线程执行构建，其余线程阻塞到构建完成，之后所有访问
//! 以零构建成本返回同一个缓存实例。

use once_cell::sync::OnceCell;

use crate::paint::{Brush, StrokeCap, StrokeJoin};
use crate::path::PathBuilder;
use crate::vector::{VectorAsset, VectorAssetBuilder};
use crate::Color;

/// Material 图标的标准尺寸：24x24，视口同为 24x24
pub const MATERIAL_ICON_DIMENSION: f32 = 24.0;

/// 惰性图标单元
///
/// 状态机：未初始化 -> 初始化中 -> 就绪，只发生一次。
/// 构建函数 panic 视为程序错误，不做恢复。
pub struct LazyIcon {
    cell: OnceCell<VectorAsset>,
    init: fn(VectorAssetBuilder) -> VectorAssetBuilder,
    name: &'static str,
}

impl LazyIcon {
    pub const fn new(
        name: &'static str,
        init: fn(VectorAssetBuilder) -> VectorAssetBuilder,
    ) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
            name,
        }
    }

    /// 获取图标资源，首次访问时构建并缓存
    pub fn get(&self) -> &VectorAsset {
        self.cell.get_or_init(|| {
            let builder = VectorAssetBuilder::new(
                self.name,
                MATERIAL_ICON_DIMENSION,
                MATERIAL_ICON_DIMENSION,
                MATERIAL_ICON_DIMENSION,
                MATERIAL_ICON_DIMENSION,
            );
            (self.init)(builder).build()
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 是否已完成构建（不触发构建）
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// 定义一个惰性构建的 Material 图标（24x24 视口），供生成的图标定义使用
pub const fn lazy_material_icon(
    name: &'static str,
    block: fn(VectorAssetBuilder) -> VectorAssetBuilder,
) -> LazyIcon {
    LazyIcon::new(name, block)
}

impl VectorAssetBuilder {
    /// 以 Material 默认样式追加一条路径，只有填充/描边透明度可覆盖
    pub fn material_path(
        self,
        fill_alpha: f32,
        stroke_alpha: f32,
        path_builder: impl FnOnce(&mut PathBuilder),
    ) -> Self {
        let mut pb = PathBuilder::new();
        path_builder(&mut pb);
        self.path(
            Brush::Solid(Color::BLACK),
            fill_alpha,
            None,
            stroke_alpha,
            1.0,
            StrokeCap::Butt,
            StrokeJoin::Bevel,
            1.0,
            pb.build(),
        )
    }

    /// material_path 的 SVG 路径数据版本
    pub fn material_path_data(
        self,
        fill_alpha: f32,
        stroke_alpha: f32,
        data: &str,
    ) -> Result<Self, String> {
        let mut pb = PathBuilder::new();
        pb.path_data(data)?;
        Ok(self.path(
            Brush::Solid(Color::BLACK),
            fill_alpha,
            None,
            stroke_alpha,
            1.0,
            StrokeCap::Butt,
            StrokeJoin::Bevel,
            1.0,
            pb.build(),
        ))
    }
}
