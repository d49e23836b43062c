use super::*;

fn color(hex: &str) -> HexColor {
    hex.parse().unwrap()
}

fn generator(start: &str, end: &str) -> DecorationConfig {
    DecorationConfig::generator(Gradient::diagonal(color(start), color(end)))
}

fn ambient_style() -> CanvasStyle {
    CanvasStyle {
        background: Some("linear-gradient(to right, #051937, #008793)".into()),
        attachment: Some("fixed".into()),
        size: Some("cover".into()),
        animation: None,
    }
}

#[test]
fn test_config_renders_every_field() {
    assert_eq!(DecorationConfig::ambient().to_style(), ambient_style());
    assert_eq!(
        DecorationConfig::auth_page().to_style(),
        CanvasStyle {
            background: Some("linear-gradient(135deg, #667eea, #764ba2)".into()),
            attachment: Some("fixed".into()),
            size: Some("400% 400%".into()),
            animation: Some("gradientShift 15s ease infinite".into()),
        }
    );
}

#[test]
fn test_activate_then_deactivate_restores_ambient() {
    let canvas = MemoryCanvas::with_style(ambient_style());
    let mut decoration = PageDecoration::new(canvas.clone());

    decoration.activate(&DecorationConfig::auth_page());
    assert_eq!(canvas.read().animation.as_deref(), Some("gradientShift 15s ease infinite"));
    assert!(decoration.is_active());

    decoration.deactivate();
    assert_eq!(canvas.read(), ambient_style());
    assert!(!decoration.is_active());
}

#[test]
fn test_second_activation_keeps_first_restore_point() {
    let canvas = MemoryCanvas::with_style(ambient_style());
    let mut decoration = PageDecoration::new(canvas.clone());

    decoration.activate(&generator("#111111", "#222222"));
    decoration.activate(&DecorationConfig::auth_page());
    assert_eq!(decoration.restore_point(), Some(&ambient_style()));

    decoration.deactivate();
    assert_eq!(canvas.read(), ambient_style());
}

#[test]
fn test_deactivate_clears_fields_that_had_no_value() {
    let canvas = MemoryCanvas::new();
    let mut decoration = PageDecoration::new(canvas.clone());

    decoration.activate(&DecorationConfig::auth_page());
    decoration.deactivate();

    assert_eq!(canvas.read(), CanvasStyle::default());
}

#[test]
fn test_deactivate_when_inactive_is_noop() {
    let canvas = MemoryCanvas::with_style(ambient_style());
    let mut decoration = PageDecoration::new(canvas.clone());
    decoration.deactivate();
    assert_eq!(canvas.read(), ambient_style());
}

#[test]
fn test_new_decoration_does_not_leak_previous_animation() {
    let canvas = MemoryCanvas::new();
    let mut decoration = PageDecoration::new(canvas.clone());

    decoration.activate(&DecorationConfig::auth_page());
    decoration.activate(&DecorationConfig::ambient());

    let style = canvas.read();
    assert_eq!(style.animation, None);
    assert_eq!(style.size.as_deref(), Some("cover"));
}

#[test]
fn test_recoloring_while_mounted_restores_original_empty_state() {
    let canvas = MemoryCanvas::new();

    let mut guard = PageDecoration::scoped(canvas.clone(), &generator("#051937", "#008793"));
    guard.update(&generator("#FF0000", "#00FF00"));
    assert_eq!(
        canvas.read().background.as_deref(),
        Some("linear-gradient(135deg, #ff0000, #00ff00)")
    );
    assert_eq!(guard.restore_point(), Some(&CanvasStyle::default()));

    drop(guard);
    assert_eq!(canvas.read(), CanvasStyle::default());
}

#[test]
fn test_explicit_release_restores_once() {
    let canvas = MemoryCanvas::with_style(ambient_style());
    let guard = PageDecoration::scoped(canvas.clone(), &DecorationConfig::auth_page());

    guard.release();
    assert_eq!(canvas.read(), ambient_style());

    // Whatever happens to the canvas afterwards is not overwritten by a
    // second restore.
    canvas.write(&DecorationConfig::auth_page().to_style());
    assert_eq!(canvas.read(), DecorationConfig::auth_page().to_style());
}

#[test]
fn test_nested_scopes_unwind_in_order() {
    let canvas = MemoryCanvas::new();
    let shell = PageDecoration::scoped(canvas.clone(), &DecorationConfig::ambient());
    {
        let _page = PageDecoration::scoped(canvas.clone(), &DecorationConfig::auth_page());
        assert_eq!(canvas.read(), DecorationConfig::auth_page().to_style());
    }
    assert_eq!(canvas.read(), ambient_style());

    drop(shell);
    assert_eq!(canvas.read(), CanvasStyle::default());
}
