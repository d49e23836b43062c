use super::{Canvas, CanvasStyle};

const BACKGROUND: &str = "background";
const ATTACHMENT: &str = "background-attachment";
const SIZE: &str = "background-size";
const ANIMATION: &str = "animation";

/// Inline style of `document.body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyCanvas;

impl BodyCanvas {
    pub fn new() -> Self {
        Self
    }

    fn style() -> Option<web_sys::CssStyleDeclaration> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.style())
    }
}

fn read_field(style: &web_sys::CssStyleDeclaration, name: &str) -> Option<String> {
    style.get_property_value(name).ok().filter(|value| !value.is_empty())
}

fn write_field(style: &web_sys::CssStyleDeclaration, name: &str, value: Option<&str>) {
    let result = match value {
        Some(value) => style.set_property(name, value),
        None => style.remove_property(name).map(|_| ()),
    };
    if let Err(e) = result {
        web_sys::console::warn_2(&format!("Failed to update body style '{}'", name).into(), &e);
    }
}

impl Canvas for BodyCanvas {
    fn read(&self) -> CanvasStyle {
        let Some(style) = Self::style() else {
            return CanvasStyle::default();
        };

        CanvasStyle {
            background: read_field(&style, BACKGROUND),
            attachment: read_field(&style, ATTACHMENT),
            size: read_field(&style, SIZE),
            animation: read_field(&style, ANIMATION),
        }
    }

    fn write(&self, target: &CanvasStyle) {
        let Some(style) = Self::style() else {
            return;
        };

        // The `background` shorthand resets attachment and size, so it goes first.
        write_field(&style, BACKGROUND, target.background.as_deref());
        write_field(&style, ATTACHMENT, target.attachment.as_deref());
        write_field(&style, SIZE, target.size.as_deref());
        write_field(&style, ANIMATION, target.animation.as_deref());
    }
}
