//! 路径模块 - 声明式路径命令与流式构建器

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// 路径命令（绝对坐标）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),         // 控制点, 终点
    CubicTo(Point, Point, Point), // 控制点1, 控制点2, 终点
    ArcTo {
        rx: f32,
        ry: f32,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

/// 路径构建器
///
/// 累积路径命令并跟踪当前点，相对坐标在推入时归一化为绝对坐标。
/// 平滑曲线（reflective）根据上一条曲线的控制点做镜像。
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current: Point,
    subpath_start: Point,
    last_cubic_control: Option<Point>,
    last_quad_control: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        let p = Point::new(x, y);
        self.commands.push(PathCommand::MoveTo(p));
        self.current = p;
        self.subpath_start = p;
        self.clear_controls();
        self
    }

    pub fn r_move_to(&mut self, dx: f32, dy: f32) -> &mut Self {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        self.move_to(x, y)
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        let p = Point::new(x, y);
        self.commands.push(PathCommand::LineTo(p));
        self.current = p;
        self.clear_controls();
        self
    }

    pub fn r_line_to(&mut self, dx: f32, dy: f32) -> &mut Self {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        self.line_to(x, y)
    }

    pub fn horizontal_to(&mut self, x: f32) -> &mut Self {
        let y = self.current.y;
        self.line_to(x, y)
    }

    pub fn r_horizontal_to(&mut self, dx: f32) -> &mut Self {
        let x = self.current.x + dx;
        self.horizontal_to(x)
    }

    pub fn vertical_to(&mut self, y: f32) -> &mut Self {
        let x = self.current.x;
        self.line_to(x, y)
    }

    pub fn r_vertical_to(&mut self, dy: f32) -> &mut Self {
        let y = self.current.y + dy;
        self.vertical_to(y)
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        let ctrl = Point::new(cx, cy);
        let end = Point::new(x, y);
        self.commands.push(PathCommand::QuadTo(ctrl, end));
        self.current = end;
        self.last_cubic_control = None;
        self.last_quad_control = Some(ctrl);
        self
    }

    pub fn r_quad_to(&mut self, dcx: f32, dcy: f32, dx: f32, dy: f32) -> &mut Self {
        let (ox, oy) = (self.current.x, self.current.y);
        self.quad_to(ox + dcx, oy + dcy, ox + dx, oy + dy)
    }

    /// 平滑二次曲线：控制点取上一条二次曲线控制点的镜像
    pub fn reflective_quad_to(&mut self, x: f32, y: f32) -> &mut Self {
        let ctrl = match self.last_quad_control {
            Some(c) => c.reflect(&self.current),
            None => self.current,
        };
        self.quad_to(ctrl.x, ctrl.y, x, y)
    }

    pub fn r_reflective_quad_to(&mut self, dx: f32, dy: f32) -> &mut Self {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        self.reflective_quad_to(x, y)
    }

    pub fn cubic_to(
        &mut self,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        let c1 = Point::new(c1x, c1y);
        let c2 = Point::new(c2x, c2y);
        let end = Point::new(x, y);
        self.commands.push(PathCommand::CubicTo(c1, c2, end));
        self.current = end;
        self.last_cubic_control = Some(c2);
        self.last_quad_control = None;
        self
    }

    pub fn r_cubic_to(
        &mut self,
        dc1x: f32,
        dc1y: f32,
        dc2x: f32,
        dc2y: f32,
        dx: f32,
        dy: f32,
    ) -> &mut Self {
        let (ox, oy) = (self.current.x, self.current.y);
        self.cubic_to(ox + dc1x, oy + dc1y, ox + dc2x, oy + dc2y, ox + dx, oy + dy)
    }

    /// 平滑三次曲线：第一控制点取上一条三次曲线第二控制点的镜像
    pub fn reflective_cubic_to(&mut self, c2x: f32, c2y: f32, x: f32, y: f32) -> &mut Self {
        let c1 = match self.last_cubic_control {
            Some(c) => c.reflect(&self.current),
            None => self.current,
        };
        self.cubic_to(c1.x, c1.y, c2x, c2y, x, y)
    }

    pub fn r_reflective_cubic_to(&mut self, dc2x: f32, dc2y: f32, dx: f32, dy: f32) -> &mut Self {
        let (ox, oy) = (self.current.x, self.current.y);
        self.reflective_cubic_to(ox + dc2x, oy + dc2y, ox + dx, oy + dy)
    }

    pub fn arc_to(
        &mut self,
        rx: f32,
        ry: f32,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    ) -> &mut Self {
        let end = Point::new(x, y);
        self.commands.push(PathCommand::ArcTo {
            rx,
            ry,
            x_rotation,
            large_arc,
            sweep,
            end,
        });
        self.current = end;
        self.clear_controls();
        self
    }

    pub fn r_arc_to(
        &mut self,
        rx: f32,
        ry: f32,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        dx: f32,
        dy: f32,
    ) -> &mut Self {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        self.arc_to(rx, ry, x_rotation, large_arc, sweep, x, y)
    }

    /// 闭合当前子路径，当前点回到子路径起点
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.current = self.subpath_start;
        self.clear_controls();
        self
    }

    /// 添加矩形
    pub fn add_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.move_to(x, y)
            .line_to(x + w, y)
            .line_to(x + w, y + h)
            .line_to(x, y + h)
            .close()
    }

    /// 添加椭圆
    pub fn add_oval(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) -> &mut Self {
        let k = 0.5522847498; // 贝塞尔曲线近似圆弧的系数
        let kx = k * rx;
        let ky = k * ry;

        self.move_to(cx + rx, cy);
        self.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        self.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        self.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        self.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        self.close()
    }

    /// 添加圆形
    pub fn add_circle(&mut self, cx: f32, cy: f32, r: f32) -> &mut Self {
        self.add_oval(cx, cy, r, r)
    }

    /// 追加一段 SVG 路径数据（"M19,13h-6v6..." 形式）
    pub fn path_data(&mut self, data: &str) -> Result<&mut Self, String> {
        for cmd in crate::parser::PathParser::new(data).parse()? {
            self.push(cmd);
        }
        Ok(self)
    }

    /// 直接推入一条绝对命令，同步当前点状态
    pub fn push(&mut self, cmd: PathCommand) -> &mut Self {
        match cmd {
            PathCommand::MoveTo(p) => {
                self.current = p;
                self.subpath_start = p;
                self.clear_controls();
            }
            PathCommand::LineTo(p) => {
                self.current = p;
                self.clear_controls();
            }
            PathCommand::QuadTo(ctrl, end) => {
                self.current = end;
                self.last_cubic_control = None;
                self.last_quad_control = Some(ctrl);
            }
            PathCommand::CubicTo(_, c2, end) => {
                self.current = end;
                self.last_cubic_control = Some(c2);
                self.last_quad_control = None;
            }
            PathCommand::ArcTo { end, .. } => {
                self.current = end;
                self.clear_controls();
            }
            PathCommand::Close => {
                self.current = self.subpath_start;
                self.clear_controls();
            }
        }
        self.commands.push(cmd);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// 完成构建，取出命令序列
    pub fn build(self) -> Vec<PathCommand> {
        self.commands
    }

    fn clear_controls(&mut self) {
        self.last_cubic_control = None;
        self.last_quad_control = None;
    }
}
