//! Pan/zoom transform of the diagram viewer.

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.5;
/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 3.0;
/// Zoom change of the zoom-in/zoom-out buttons.
pub const BUTTON_STEP: f64 = 0.5;
/// Zoom change of one wheel notch.
pub const WHEEL_STEP: f64 = 0.1;

/// Pan/zoom state of one diagram.
///
/// Starts at scale 1 with no translation. Scale always stays within
/// [`MIN_SCALE`]..=[`MAX_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    x: f64,
    y: f64,
    /// Pointer position minus translation at drag start.
    drag_origin: Option<(f64, f64)>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            drag_origin: None,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current translation in pixels.
    #[must_use]
    pub fn translation(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(BUTTON_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-BUTTON_STEP);
    }

    /// Apply a wheel event. Negative `delta_y` (scrolling up) zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y < 0.0 {
            self.zoom_by(WHEEL_STEP);
        } else if delta_y > 0.0 {
            self.zoom_by(-WHEEL_STEP);
        }
    }

    /// Restore scale 1 and zero translation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn double_click(&mut self) {
        self.reset();
    }

    pub fn drag_start(&mut self, pointer_x: f64, pointer_y: f64) {
        self.drag_origin = Some((pointer_x - self.x, pointer_y - self.y));
    }

    /// Move the content with the pointer. Ignored unless a drag is active.
    pub fn drag_move(&mut self, pointer_x: f64, pointer_y: f64) {
        if let Some((origin_x, origin_y)) = self.drag_origin {
            self.x = pointer_x - origin_x;
            self.y = pointer_y - origin_y;
        }
    }

    pub fn drag_end(&mut self) {
        self.drag_origin = None;
    }

    /// CSS `transform` value for the content element.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }

    fn zoom_by(&mut self, step: f64) {
        let scale = ((self.scale + step) * 100.0).round() / 100.0;
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let viewport = Viewport::new();
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.translation(), (0.0, 0.0));
        assert!(!viewport.is_dragging());
    }

    #[test]
    fn test_zoom_buttons_clamp() {
        let mut viewport = Viewport::new();
        for _ in 0..10 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.scale(), MAX_SCALE);
        for _ in 0..10 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.scale(), MIN_SCALE);
    }

    #[test]
    fn test_wheel_steps() {
        let mut viewport = Viewport::new();
        viewport.wheel(-120.0);
        viewport.wheel(-120.0);
        assert_eq!(viewport.scale(), 1.2);
        viewport.wheel(120.0);
        assert_eq!(viewport.scale(), 1.1);
        viewport.wheel(0.0);
        assert_eq!(viewport.scale(), 1.1);
    }

    #[test]
    fn test_drag_pans() {
        let mut viewport = Viewport::new();
        viewport.drag_move(50.0, 50.0);
        assert_eq!(viewport.translation(), (0.0, 0.0));

        viewport.drag_start(10.0, 10.0);
        viewport.drag_move(40.0, 25.0);
        assert_eq!(viewport.translation(), (30.0, 15.0));
        viewport.drag_end();

        viewport.drag_start(0.0, 0.0);
        viewport.drag_move(-10.0, 5.0);
        viewport.drag_end();
        assert_eq!(viewport.translation(), (20.0, 20.0));

        viewport.drag_move(100.0, 100.0);
        assert_eq!(viewport.translation(), (20.0, 20.0));
    }

    #[test]
    fn test_double_click_resets() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.drag_start(0.0, 0.0);
        viewport.drag_move(5.0, 5.0);
        viewport.double_click();
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_css_transform() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        assert_eq!(viewport.css_transform(), "translate(0px, 0px) scale(1.5)");
    }
}
