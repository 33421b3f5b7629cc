//! Drawing-surface abstraction consumed by the shape primitives.
//!
//! Any 2D immediate-mode backend can implement [`Surface`]; the crate ships a
//! Cairo backend for real output and a recording double for tests.

pub mod cairo;
pub mod recording;

pub use self::cairo::CairoSurface;
pub use recording::{DrawOp, RecordingSurface};

use crate::draw::paint::Paint;
use crate::draw::style::{Shadow, TextAlign};

/// A stateful 2D rendering target.
///
/// The surface owns the current paint attributes (fill/stroke paints, line
/// width, dash pattern, global alpha, shadow, font, text alignment) and a
/// current path. `save`/`restore` scope the attribute state; primitives
/// bracket every render between exactly one save and one restore.
///
/// All methods are infallible from the caller's view. Backends swallow their
/// own drawing errors and degrade to partial output instead of failing a
/// render mid-frame.
pub trait Surface {
    /// Pushes the current attribute state.
    fn save(&mut self);
    /// Pops the most recently saved attribute state.
    fn restore(&mut self);

    /// Starts a new (empty) current path.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Quadratic curve from the current point toward `(cx, cy)`, ending at
    /// `(x, y)`.
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    /// Circular arc centered at `(cx, cy)`, angles in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);

    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f64);
    /// Sets the stroke dash pattern; an empty slice means solid.
    fn set_dash(&mut self, pattern: &[f64]);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_shadow(&mut self, shadow: &Shadow);
    fn set_font(&mut self, family: &str, size: f64);
    fn set_text_align(&mut self, align: TextAlign);

    /// Fills the current path with the current fill paint. The path is
    /// preserved so a stroke can follow on the same outline.
    fn fill(&mut self);
    /// Strokes the current path with the current stroke paint. The path is
    /// preserved.
    fn stroke(&mut self);
    /// Paints a single run of text at `(x, y)` using the current font,
    /// alignment, and fill paint.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
