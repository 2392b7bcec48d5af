use super::submission::ImageRef;
use serde::Deserialize;

/// Minimum magnification of the full-screen receipt preview.
pub const MIN_SCALE: f32 = 0.5;
/// Maximum magnification of the full-screen receipt preview.
pub const MAX_SCALE: f32 = 3.0;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    Open,
    Close,
    PinchStart,
    Pinch,
    Pan,
}

/// A single event from the preview surface.
///
/// `image` is only set for `open`, `scale` for `pinch`, `dx`/`dy` for `pan`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct GestureEvent {
    pub event: GestureKind,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub scale: Option<f32>,
    #[serde(default)]
    pub dx: Option<f32>,
    #[serde(default)]
    pub dy: Option<f32>,
}

/// Bounded zoom/pan state for the full-screen receipt preview.
///
/// Pinch and pan are recognized simultaneously and act on independent axes of
/// the same transform. Scale is clamped to `[MIN_SCALE, MAX_SCALE]`;
/// translation is unbounded. Closing the preview is the reset point: opening
/// leaves the transform as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewTransform {
    open: bool,
    image: Option<ImageRef>,
    scale: f32,
    saved_scale: f32,
    translate_x: f32,
    translate_y: f32,
}

impl Default for PreviewTransform {
    fn default() -> Self {
        Self {
            open: false,
            image: None,
            scale: 1.0,
            saved_scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl PreviewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the preview on the given image.
    pub fn open_preview(&mut self, image: ImageRef) {
        self.open = true;
        self.image = Some(image);
    }

    /// Closes the preview and resets the transform to identity.
    ///
    /// The easing towards the reset values is a presentation concern; only the
    /// final state matters here.
    pub fn close_preview(&mut self) {
        self.scale = 1.0;
        self.saved_scale = 1.0;
        self.translate_x = 0.0;
        self.translate_y = 0.0;
        self.open = false;
        self.image = None;
    }

    /// Snapshots the current scale as the base for a new pinch gesture.
    pub fn on_pinch_start(&mut self) {
        self.saved_scale = self.scale;
    }

    /// Applies the cumulative pinch factor against the gesture's base scale.
    pub fn on_pinch_update(&mut self, factor: f32) {
        self.scale = (self.saved_scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Replaces the translation with the cumulative delta of the active pan
    /// gesture. A new gesture restarts from its own origin; deltas do not
    /// accumulate across gestures.
    pub fn on_pan_update(&mut self, dx: f32, dy: f32) {
        self.translate_x = dx;
        self.translate_y = dy;
    }

    /// Dispatches one gesture event.
    pub fn apply(&mut self, event: GestureEvent) {
        match event.event {
            GestureKind::Open => self.open_preview(event.image.unwrap_or_default()),
            GestureKind::Close => self.close_preview(),
            GestureKind::PinchStart => self.on_pinch_start(),
            GestureKind::Pinch => {
                if let Some(factor) = event.scale {
                    self.on_pinch_update(factor);
                }
            }
            GestureKind::Pan => {
                self.on_pan_update(event.dx.unwrap_or(0.0), event.dy.unwrap_or(0.0));
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translate_x(&self) -> f32 {
        self.translate_x
    }

    pub fn translate_y(&self) -> f32 {
        self.translate_y
    }
}
