//! Page-wide background decoration.
//!
//! A page activates a decoration when it becomes visible and must leave the
//! shared canvas exactly as it found it when it goes away. The canvas state
//! present before the first activation is the restore point; later
//! activations only re-apply and never re-capture it.

#[cfg(feature = "web")]
mod body;

use std::sync::{Arc, Mutex};

#[cfg(feature = "web")]
pub use body::BodyCanvas;
use lg_types::{Gradient, GradientDirection, HexColor};
use tracing::debug;

/// The four canvas style fields a decoration touches. `None` means the field
/// carries no value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanvasStyle {
    pub background: Option<String>,
    pub attachment: Option<String>,
    pub size: Option<String>,
    pub animation: Option<String>,
}

/// The shared surface every page draws its background on.
pub trait Canvas {
    fn read(&self) -> CanvasStyle;

    /// Replace all four fields; `None` clears a field.
    fn write(&self, style: &CanvasStyle);
}

/// In-memory canvas. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct MemoryCanvas {
    style: Arc<Mutex<CanvasStyle>>,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: CanvasStyle) -> Self {
        Self {
            style: Arc::new(Mutex::new(style)),
        }
    }
}

impl Canvas for MemoryCanvas {
    fn read(&self) -> CanvasStyle {
        self.style.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn write(&self, style: &CanvasStyle) {
        *self.style.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = style.clone();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attachment {
    #[default]
    Fixed,
    Scroll,
}

impl Attachment {
    pub fn css(self) -> &'static str {
        match self {
            Attachment::Fixed => "fixed",
            Attachment::Scroll => "scroll",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeMode {
    Cover,
    /// Both axes scaled to the given percentage, room for the shift animation.
    Scaled(u16),
}

impl SizeMode {
    pub fn css(self) -> String {
        match self {
            SizeMode::Cover => "cover".to_string(),
            SizeMode::Scaled(pct) => format!("{pct}% {pct}%"),
        }
    }
}

/// Full decoration description; every canvas field is derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecorationConfig {
    pub gradient: Gradient,
    pub attachment: Attachment,
    pub size: SizeMode,
    pub animation: Option<String>,
}

impl DecorationConfig {
    /// App shell background shown behind every page.
    pub fn ambient() -> Self {
        let (start, end) = Gradient::default_pair();
        Self {
            gradient: Gradient::new(GradientDirection::ToRight, start, end),
            attachment: Attachment::Fixed,
            size: SizeMode::Cover,
            animation: None,
        }
    }

    /// Shared background of the login, register and reset pages.
    pub fn auth_page() -> Self {
        Self {
            gradient: Gradient::diagonal(HexColor::from_rgb(0x66, 0x7e, 0xea), HexColor::from_rgb(0x76, 0x4b, 0xa2)),
            attachment: Attachment::Fixed,
            size: SizeMode::Scaled(400),
            animation: Some("gradientShift 15s ease infinite".to_string()),
        }
    }

    /// Background of the generator page, following the colors being edited.
    pub fn generator(gradient: Gradient) -> Self {
        Self {
            gradient,
            attachment: Attachment::Fixed,
            size: SizeMode::Scaled(400),
            animation: Some("linearShift 15s ease infinite".to_string()),
        }
    }

    pub fn to_style(&self) -> CanvasStyle {
        CanvasStyle {
            background: Some(self.gradient.css()),
            attachment: Some(self.attachment.css().to_string()),
            size: Some(self.size.css()),
            animation: self.animation.clone(),
        }
    }
}

/// Apply/restore lifecycle of one page's decoration.
pub struct PageDecoration<C: Canvas> {
    canvas: C,
    restore_point: Option<CanvasStyle>,
}

impl<C: Canvas> PageDecoration<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            restore_point: None,
        }
    }

    /// Activate and hand back a guard that restores the canvas when released
    /// or dropped.
    pub fn scoped(canvas: C, config: &DecorationConfig) -> DecorationGuard<C> {
        let mut decoration = Self::new(canvas);
        decoration.activate(config);
        DecorationGuard { decoration }
    }

    pub fn is_active(&self) -> bool {
        self.restore_point.is_some()
    }

    pub fn restore_point(&self) -> Option<&CanvasStyle> {
        self.restore_point.as_ref()
    }

    /// Apply `config`, capturing the restore point on the first activation.
    pub fn activate(&mut self, config: &DecorationConfig) {
        if self.restore_point.is_none() {
            self.restore_point = Some(self.canvas.read());
        }
        self.canvas.write(&config.to_style());
        debug!(background = %config.gradient.css(), "page decoration applied");
    }

    /// Put back the restore point. Does nothing when not active.
    pub fn deactivate(&mut self) {
        if let Some(restore_point) = self.restore_point.take() {
            self.canvas.write(&restore_point);
            debug!("page decoration restored");
        }
    }
}

/// Scoped handle on an active decoration; restores exactly once.
pub struct DecorationGuard<C: Canvas> {
    decoration: PageDecoration<C>,
}

impl<C: Canvas> DecorationGuard<C> {
    /// Re-apply with new settings, keeping the original restore point.
    pub fn update(&mut self, config: &DecorationConfig) {
        self.decoration.activate(config);
    }

    pub fn restore_point(&self) -> Option<&CanvasStyle> {
        self.decoration.restore_point()
    }

    pub fn release(mut self) {
        self.decoration.deactivate();
    }
}

impl<C: Canvas> Drop for DecorationGuard<C> {
    fn drop(&mut self) {
        self.decoration.deactivate();
    }
}

#[cfg(test)]
#[path = "decoration_tests.rs"]
mod tests;
