//! SVG 路径数据解析器
//!
//! 把 "M19,13h-6v6h-2v-6H5v-2..." 形式的路径字符串解析为绝对路径命令。
//! 支持 M/L/H/V/Q/T/C/S/A/Z 及其相对小写形式、逗号或空白分隔、
//! 命令的隐式重复（数字直接跟在参数之后）。

use crate::path::{PathBuilder, PathCommand};

/// 路径数据解析器
pub struct PathParser {
    input: Vec<char>,
    pos: usize,
}

impl PathParser {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Vec<PathCommand>, String> {
        let mut builder = PathBuilder::new();
        let mut cmd = '\0';

        loop {
            self.skip_separators();
            if self.pos >= self.input.len() {
                break;
            }

            let c = self.current_char();
            if c.is_ascii_alphabetic() {
                cmd = c;
                self.advance();
            } else if cmd == '\0' {
                return Err(format!("Path data must start with a command, got '{}'", c));
            } else {
                // 数字开头：重复上一条命令（M/m 的重复退化为 L/l）
                cmd = match cmd {
                    'M' => 'L',
                    'm' => 'l',
                    // Z 不带参数，数字跟在后面是非法输入
                    'Z' | 'z' => {
                        return Err(format!("Unexpected '{}' after close command", c));
                    }
                    other => other,
                };
            }

            self.apply(cmd, &mut builder)?;
        }

        Ok(builder.build())
    }

    fn apply(&mut self, cmd: char, b: &mut PathBuilder) -> Result<(), String> {
        match cmd {
            'M' => {
                let (x, y) = self.xy()?;
                b.move_to(x, y);
            }
            'm' => {
                let (x, y) = self.xy()?;
                b.r_move_to(x, y);
            }
            'L' => {
                let (x, y) = self.xy()?;
                b.line_to(x, y);
            }
            'l' => {
                let (x, y) = self.xy()?;
                b.r_line_to(x, y);
            }
            'H' => {
                let x = self.number()?;
                b.horizontal_to(x);
            }
            'h' => {
                let dx = self.number()?;
                b.r_horizontal_to(dx);
            }
            'V' => {
                let y = self.number()?;
                b.vertical_to(y);
            }
            'v' => {
                let dy = self.number()?;
                b.r_vertical_to(dy);
            }
            'Q' => {
                let (cx, cy) = self.xy()?;
                let (x, y) = self.xy()?;
                b.quad_to(cx, cy, x, y);
            }
            'q' => {
                let (dcx, dcy) = self.xy()?;
                let (dx, dy) = self.xy()?;
                b.r_quad_to(dcx, dcy, dx, dy);
            }
            'T' => {
                let (x, y) = self.xy()?;
                b.reflective_quad_to(x, y);
            }
            't' => {
                let (dx, dy) = self.xy()?;
                b.r_reflective_quad_to(dx, dy);
            }
            'C' => {
                let (c1x, c1y) = self.xy()?;
                let (c2x, c2y) = self.xy()?;
                let (x, y) = self.xy()?;
                b.cubic_to(c1x, c1y, c2x, c2y, x, y);
            }
            'c' => {
                let (dc1x, dc1y) = self.xy()?;
                let (dc2x, dc2y) = self.xy()?;
                let (dx, dy) = self.xy()?;
                b.r_cubic_to(dc1x, dc1y, dc2x, dc2y, dx, dy);
            }
            'S' => {
                let (c2x, c2y) = self.xy()?;
                let (x, y) = self.xy()?;
                b.reflective_cubic_to(c2x, c2y, x, y);
            }
            's' => {
                let (dc2x, dc2y) = self.xy()?;
                let (dx, dy) = self.xy()?;
                b.r_reflective_cubic_to(dc2x, dc2y, dx, dy);
            }
            'A' => {
                let (rx, ry) = self.xy()?;
                let rot = self.number()?;
                let large = self.flag()?;
                let sweep = self.flag()?;
                let (x, y) = self.xy()?;
                b.arc_to(rx, ry, rot, large, sweep, x, y);
            }
            'a' => {
                let (rx, ry) = self.xy()?;
                let rot = self.number()?;
                let large = self.flag()?;
                let sweep = self.flag()?;
                let (dx, dy) = self.xy()?;
                b.r_arc_to(rx, ry, rot, large, sweep, dx, dy);
            }
            'Z' | 'z' => {
                b.close();
            }
            _ => return Err(format!("Unknown path command '{}'", cmd)),
        }

        Ok(())
    }

    fn xy(&mut self) -> Result<(f32, f32), String> {
        Ok((self.number()?, self.number()?))
    }

    fn number(&mut self) -> Result<f32, String> {
        self.skip_separators();
        let start = self.pos;

        if self.current_char() == '+' || self.current_char() == '-' {
            self.advance();
        }
        while self.current_char().is_ascii_digit() {
            self.advance();
        }
        if self.current_char() == '.' {
            self.advance();
            while self.current_char().is_ascii_digit() {
                self.advance();
            }
        }
        if self.current_char() == 'e' || self.current_char() == 'E' {
            self.advance();
            if self.current_char() == '+' || self.current_char() == '-' {
                self.advance();
            }
            while self.current_char().is_ascii_digit() {
                self.advance();
            }
        }

        if self.pos == start {
            return Err(format!(
                "Expected number at position {}, got '{}'",
                self.pos,
                self.current_char()
            ));
        }

        let s: String = self.input[start..self.pos].iter().collect();
        s.parse::<f32>()
            .map_err(|_| format!("Invalid number '{}' at position {}", s, start))
    }

    /// 圆弧标志位，SVG 允许不带分隔符的紧凑写法，只读一个字符
    fn flag(&mut self) -> Result<bool, String> {
        self.skip_separators();
        match self.current_char() {
            '0' => {
                self.advance();
                Ok(false)
            }
            '1' => {
                self.advance();
                Ok(true)
            }
            c => Err(format!("Expected arc flag 0 or 1, got '{}'", c)),
        }
    }

    fn current_char(&self) -> char {
        if self.pos < self.input.len() {
            self.input[self.pos]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_separators(&mut self) {
        while self.pos < self.input.len() {
            let c = self.input[self.pos];
            if c.is_whitespace() || c == ',' {
                self.advance();
            } else {
                break;
            }
        }
    }
}
