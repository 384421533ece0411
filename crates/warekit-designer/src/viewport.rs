//! Viewport and coordinate transformation for the layout canvas.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (layout space). Manages zoom and pan with clamped, pure
//! arithmetic; none of these operations can fail and none touch the
//! layout.

use warekit_core::Point;

const MIN_ZOOM: f64 = 0.3;
const MAX_ZOOM: f64 = 3.0;
const ZOOM_STEP: f64 = 0.1;

/// The viewport transformation state (zoom, pan, grid visibility).
///
/// Ephemeral per-session state: not part of the persisted layout and not
/// subject to undo/redo.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    show_grid: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at 100% zoom, origin pan, grid visible.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            show_grid: true,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to [0.3, 3.0].
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Steps zoom in by 0.1, clamped.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Steps zoom out by 0.1, clamped.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Gets the pan offset (X coordinate, screen pixels).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate, screen pixels).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Pans by a delta amount. Pan is continuous and never grid-snapped.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets zoom to 1.0 and pan to the origin.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Whether the background grid is drawn.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Converts pixel coordinates to world coordinates by inverting the
    /// pan/zoom transform:
    ///
    /// ```text
    /// world_x = (pixel_x - pan_x) / zoom
    /// world_y = (pixel_y - pan_y) / zoom
    /// ```
    pub fn screen_to_world(&self, px: f64, py: f64) -> Point {
        Point::new((px - self.pan_x) / self.zoom, (py - self.pan_y) / self.zoom)
    }

    /// Converts world coordinates to pixel coordinates (the inverse of
    /// [`Viewport::screen_to_world`]).
    pub fn world_to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(x * self.zoom + self.pan_x, y * self.zoom + self.pan_y)
    }

    /// Scales a raw screen-space delta (e.g. a drag) into world space.
    pub fn screen_delta_to_world(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.zoom, dy / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_are_clamped() {
        let mut v = Viewport::new();
        for _ in 0..40 {
            v.zoom_in();
        }
        assert_eq!(v.zoom(), 3.0);
        for _ in 0..40 {
            v.zoom_out();
        }
        assert_eq!(v.zoom(), 0.3);
    }

    #[test]
    fn screen_world_round_trip() {
        let mut v = Viewport::new();
        v.pan_by(35.0, -12.5);
        v.set_zoom(1.5);
        let w = v.screen_to_world(200.0, 140.0);
        let s = v.world_to_screen(w.x, w.y);
        assert!((s.x - 200.0).abs() < 1e-9);
        assert!((s.y - 140.0).abs() < 1e-9);
    }

    #[test]
    fn reset_view_restores_identity() {
        let mut v = Viewport::new();
        v.pan_by(100.0, 50.0);
        v.zoom_in();
        v.reset_view();
        let w = v.screen_to_world(80.0, 60.0);
        assert_eq!((w.x, w.y), (80.0, 60.0));
    }

    #[test]
    fn grid_toggle() {
        let mut v = Viewport::new();
        assert!(v.show_grid());
        v.toggle_grid();
        assert!(!v.show_grid());
    }
}
