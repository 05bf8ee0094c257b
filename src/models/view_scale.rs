//! Board zoom driven by pinch and modified scroll-wheel gestures.

use tracing::trace;

pub const MIN_SCALE: f32 = 0.6;
pub const MAX_SCALE: f32 = 1.6;

/// Scale change per pixel of wheel movement
const WHEEL_SENSITIVITY: f32 = 0.0012;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pinch {
    start_distance: f32,
    start_scale: f32,
}

/// Zoom factor for the board, always within [`MIN_SCALE`, `MAX_SCALE`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewScale {
    scale: f32,
    pinch: Option<Pinch>,
}

impl ViewScale {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pinch: None,
        }
    }

    pub fn get(&self) -> f32 {
        self.scale
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Two touch points went down `distance` apart
    pub fn begin_pinch(&mut self, distance: f32) {
        if !distance.is_finite() || distance <= 0.0 {
            return;
        }
        self.pinch = Some(Pinch {
            start_distance: distance,
            start_scale: self.scale,
        });
    }

    /// The touch points are now `distance` apart. Returns whether the scale changed.
    pub fn update_pinch(&mut self, distance: f32) -> bool {
        let Some(pinch) = self.pinch else {
            return false;
        };
        if !distance.is_finite() || distance <= 0.0 {
            return false;
        }
        self.set(pinch.start_scale * (distance / pinch.start_distance))
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    /// Wheel zoom, only while Ctrl or Cmd is held.
    ///
    /// Returns whether the event was consumed.
    pub fn apply_wheel(&mut self, delta_y: f32, modifier_held: bool) -> bool {
        if !modifier_held || !delta_y.is_finite() {
            return false;
        }
        self.set(self.scale - delta_y * WHEEL_SENSITIVITY);
        true
    }

    fn set(&mut self, scale: f32) -> bool {
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        if clamped == self.scale {
            return false;
        }
        trace!(scale = clamped, "board zoom");
        self.scale = clamped;
        true
    }
}

impl Default for ViewScale {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_starts_at_unit_scale() {
        assert_eq!(ViewScale::new().get(), 1.0);
    }

    #[test]
    fn test_pinch_scales_relative_to_start() {
        let mut scale = ViewScale::new();
        scale.begin_pinch(100.0);
        assert!(scale.update_pinch(120.0));
        assert!(approx(scale.get(), 1.2));
        scale.update_pinch(110.0);
        assert!(approx(scale.get(), 1.1));
        scale.end_pinch();
        assert!(!scale.is_pinching());

        // next pinch starts from the current scale
        scale.begin_pinch(50.0);
        scale.update_pinch(25.0);
        assert!(approx(scale.get(), 0.6));
    }

    #[test]
    fn test_pinch_is_clamped() {
        let mut scale = ViewScale::new();
        scale.begin_pinch(10.0);
        scale.update_pinch(1000.0);
        assert_eq!(scale.get(), MAX_SCALE);
        scale.update_pinch(0.5);
        assert_eq!(scale.get(), MIN_SCALE);
    }

    #[test]
    fn test_pinch_ignores_bad_distances() {
        let mut scale = ViewScale::new();
        scale.begin_pinch(0.0);
        assert!(!scale.is_pinching());
        assert!(!scale.update_pinch(50.0));

        scale.begin_pinch(80.0);
        assert!(!scale.update_pinch(f32::NAN));
        assert!(!scale.update_pinch(-3.0));
        assert_eq!(scale.get(), 1.0);
    }

    #[test]
    fn test_wheel_needs_modifier() {
        let mut scale = ViewScale::new();
        assert!(!scale.apply_wheel(-100.0, false));
        assert_eq!(scale.get(), 1.0);

        assert!(scale.apply_wheel(-100.0, true));
        assert!(approx(scale.get(), 1.12));
        assert!(scale.apply_wheel(100.0, true));
        assert!(approx(scale.get(), 1.0));
    }

    #[test]
    fn test_wheel_is_clamped() {
        let mut scale = ViewScale::new();
        scale.apply_wheel(-100_000.0, true);
        assert_eq!(scale.get(), MAX_SCALE);
        scale.apply_wheel(100_000.0, true);
        assert_eq!(scale.get(), MIN_SCALE);
        // still consumed at the limit
        assert!(scale.apply_wheel(10.0, true));
        assert_eq!(scale.get(), MIN_SCALE);
    }
}
