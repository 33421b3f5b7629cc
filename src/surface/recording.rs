//! Recording surface double.
//!
//! Captures the exact sequence of drawing calls instead of rasterizing them.
//! Tests assert on the recorded [`DrawOp`] log: which paint operations were
//! issued, in what order, and with what attributes.

use super::Surface;
use crate::draw::paint::Paint;
use crate::draw::style::{Shadow, TextAlign};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    QuadTo {
        cx: f64,
        cy: f64,
        x: f64,
        y: f64,
    },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    SetFill(Paint),
    SetStroke(Paint),
    SetLineWidth(f64),
    SetDash(Vec<f64>),
    SetGlobalAlpha(f64),
    SetShadow(Shadow),
    SetFont {
        family: String,
        size: f64,
    },
    SetTextAlign(TextAlign),
    Fill,
    Stroke,
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
}

/// Surface implementation that records every call.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded call sequence, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drops the recorded log, keeping the surface usable.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Number of `Fill` operations issued.
    pub fn fill_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Fill).count()
    }

    /// Number of `Stroke` operations issued.
    pub fn stroke_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Stroke).count()
    }

    /// Returns true if every `Save` has a matching `Restore` and the log
    /// never restores below an empty stack.
    pub fn is_balanced(&self) -> bool {
        let mut depth: i64 = 0;
        for op in &self.ops {
            match op {
                DrawOp::Save => depth += 1,
                DrawOp::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(DrawOp::QuadTo { cx, cy, x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ops.push(DrawOp::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.ops.push(DrawOp::SetFill(paint.clone()));
    }

    fn set_stroke(&mut self, paint: &Paint) {
        self.ops.push(DrawOp::SetStroke(paint.clone()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn set_dash(&mut self, pattern: &[f64]) {
        self.ops.push(DrawOp::SetDash(pattern.to_vec()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(DrawOp::SetGlobalAlpha(alpha));
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.ops.push(DrawOp::SetShadow(*shadow));
    }

    fn set_font(&mut self, family: &str, size: f64) {
        self.ops.push(DrawOp::SetFont {
            family: family.to_string(),
            size,
        });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(DrawOp::SetTextAlign(align));
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.begin_path();
        surface.move_to(1.0, 2.0);
        surface.line_to(3.0, 4.0);
        surface.fill();
        surface.restore();

        assert_eq!(
            surface.ops(),
            &[
                DrawOp::Save,
                DrawOp::BeginPath,
                DrawOp::MoveTo { x: 1.0, y: 2.0 },
                DrawOp::LineTo { x: 3.0, y: 4.0 },
                DrawOp::Fill,
                DrawOp::Restore,
            ]
        );
        assert_eq!(surface.fill_count(), 1);
        assert_eq!(surface.stroke_count(), 0);
        assert!(surface.is_balanced());
    }

    #[test]
    fn detects_unbalanced_restores() {
        let mut surface = RecordingSurface::new();
        surface.restore();
        assert!(!surface.is_balanced());

        surface.reset();
        surface.save();
        assert!(!surface.is_balanced());
    }
}
