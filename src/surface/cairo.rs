//! Cairo backend for the [`Surface`] trait.
//!
//! Cairo models the current path, line width, and dash pattern natively; the
//! remaining canvas-style attributes (fill/stroke paints, global alpha,
//! shadow, font, alignment) are tracked here in a state stack mirrored with
//! `Context::save`/`restore`.
//!
//! Drawing errors from Cairo are swallowed (`let _ = ctx.fill();`): a failed
//! paint degrades to partial output instead of aborting a frame.

use super::Surface;
use crate::draw::paint::{Gradient, Paint};
use crate::draw::style::{Shadow, TextAlign};

#[derive(Clone)]
struct AttrState {
    fill: Paint,
    stroke: Paint,
    alpha: f64,
    shadow: Option<Shadow>,
    font_family: String,
    font_size: f64,
    align: TextAlign,
}

impl Default for AttrState {
    fn default() -> Self {
        Self {
            fill: Paint::None,
            stroke: Paint::None,
            alpha: 1.0,
            shadow: None,
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
            align: TextAlign::Left,
        }
    }
}

enum PaintOp {
    Fill,
    Stroke,
}

/// Cairo-backed drawing surface.
pub struct CairoSurface {
    ctx: cairo::Context,
    state: AttrState,
    stack: Vec<AttrState>,
}

impl CairoSurface {
    /// Wraps an existing Cairo context.
    pub fn new(ctx: cairo::Context) -> Self {
        Self {
            ctx,
            state: AttrState::default(),
            stack: Vec::new(),
        }
    }

    /// The underlying Cairo context.
    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    fn apply_source(&self, paint: &Paint) {
        match paint {
            Paint::None => {}
            Paint::Solid(color) => {
                self.ctx
                    .set_source_rgba(color.r, color.g, color.b, color.a * self.state.alpha);
            }
            Paint::Gradient(Gradient::Linear { from, to, stops }) => {
                let gradient = cairo::LinearGradient::new(from.x, from.y, to.x, to.y);
                for stop in stops {
                    let c = stop.color;
                    gradient.add_color_stop_rgba(stop.offset, c.r, c.g, c.b, c.a * self.state.alpha);
                }
                let _ = self.ctx.set_source(gradient);
            }
            Paint::Gradient(Gradient::Radial {
                from,
                from_radius,
                to,
                to_radius,
                stops,
            }) => {
                let gradient = cairo::RadialGradient::new(
                    from.x,
                    from.y,
                    *from_radius,
                    to.x,
                    to.y,
                    *to_radius,
                );
                for stop in stops {
                    let c = stop.color;
                    gradient.add_color_stop_rgba(stop.offset, c.r, c.g, c.b, c.a * self.state.alpha);
                }
                let _ = self.ctx.set_source(gradient);
            }
        }
    }

    /// Paints the current path once more, offset by the shadow, before the
    /// real paint pass. Cairo has no blur primitive, so the shadow is drawn
    /// hard at the given offset and color.
    fn shadow_prepass(&self, op: PaintOp) {
        let Some(shadow) = self.state.shadow else {
            return;
        };
        let Ok(path) = self.ctx.copy_path() else {
            return;
        };

        let _ = self.ctx.save();
        self.ctx.translate(shadow.offset.x, shadow.offset.y);
        // Re-appending under the translated matrix shifts the path; the
        // original outline is restored afterwards.
        self.ctx.new_path();
        self.ctx.append_path(&path);
        let c = shadow.color;
        self.ctx
            .set_source_rgba(c.r, c.g, c.b, c.a * self.state.alpha);
        let _ = match op {
            PaintOp::Fill => self.ctx.fill(),
            PaintOp::Stroke => self.ctx.stroke(),
        };
        let _ = self.ctx.restore();

        self.ctx.new_path();
        self.ctx.append_path(&path);
    }

    fn select_font(&self) {
        self.ctx.select_font_face(
            &self.state.font_family,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        self.ctx.set_font_size(self.state.font_size);
    }

    /// Horizontal anchor for the current alignment, given the run's advance.
    fn aligned_x(&self, x: f64, advance: f64) -> f64 {
        match self.state.align {
            TextAlign::Left => x,
            TextAlign::Center => x - advance / 2.0,
            TextAlign::Right => x - advance,
        }
    }
}

impl Surface for CairoSurface {
    fn save(&mut self) {
        let _ = self.ctx.save();
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        let _ = self.ctx.restore();
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        // Cairo only has cubics; elevate the quadratic segment.
        let (x0, y0) = self.ctx.current_point().unwrap_or((cx, cy));
        let c1x = x0 + 2.0 / 3.0 * (cx - x0);
        let c1y = y0 + 2.0 / 3.0 * (cy - y0);
        let c2x = x + 2.0 / 3.0 * (cx - x);
        let c2y = y + 2.0 / 3.0 * (cy - y);
        self.ctx.curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ctx.arc(cx, cy, radius.max(0.0), start_angle, end_angle);
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.state.fill = paint.clone();
    }

    fn set_stroke(&mut self, paint: &Paint) {
        self.state.stroke = paint.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width.max(0.0));
    }

    fn set_dash(&mut self, pattern: &[f64]) {
        self.ctx.set_dash(pattern, 0.0);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.state.shadow = Some(*shadow);
    }

    fn set_font(&mut self, family: &str, size: f64) {
        self.state.font_family = family.to_string();
        self.state.font_size = size;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn fill(&mut self) {
        if !self.state.fill.is_visible() {
            return;
        }
        self.shadow_prepass(PaintOp::Fill);
        let fill = self.state.fill.clone();
        self.apply_source(&fill);
        let _ = self.ctx.fill_preserve();
    }

    fn stroke(&mut self) {
        if !self.state.stroke.is_visible() {
            return;
        }
        self.shadow_prepass(PaintOp::Stroke);
        let stroke = self.state.stroke.clone();
        self.apply_source(&stroke);
        let _ = self.ctx.stroke_preserve();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if text.is_empty() || !self.state.fill.is_visible() {
            return;
        }

        self.select_font();
        let advance = self
            .ctx
            .text_extents(text)
            .map(|extents| extents.x_advance())
            .unwrap_or(0.0);
        let anchor_x = self.aligned_x(x, advance);

        if let Some(shadow) = self.state.shadow {
            let c = shadow.color;
            self.ctx
                .set_source_rgba(c.r, c.g, c.b, c.a * self.state.alpha);
            self.ctx
                .move_to(anchor_x + shadow.offset.x, y + shadow.offset.y);
            let _ = self.ctx.show_text(text);
        }

        let fill = self.state.fill.clone();
        self.apply_source(&fill);
        self.ctx.move_to(anchor_x, y);
        let _ = self.ctx.show_text(text);
    }
}
