//! Decoration hooks driven through a headless `VirtualDom`.

use std::{cell::RefCell, rc::Rc};

use client_core::{
    DecorationConfig, decoration::{Canvas, CanvasStyle, MemoryCanvas}
};
use dioxus::{dioxus_core::VirtualDom, prelude::*};
use lg_types::{Gradient, HexColor};

use super::{use_ambient_decoration, use_page_decoration};

/// Signals owned by [`Harness`], reachable from the test body.
#[derive(Clone, Default)]
struct Handles(Rc<RefCell<Option<(Signal<bool>, Signal<HexColor>)>>>);

impl Handles {
    fn get(&self) -> (Signal<bool>, Signal<HexColor>) {
        (*self.0.borrow()).expect("harness has rendered")
    }
}

fn generator(end: HexColor) -> DecorationConfig {
    DecorationConfig::generator(Gradient::diagonal(HexColor::from_rgb(0x05, 0x19, 0x37), end))
}

fn teal() -> HexColor {
    HexColor::from_rgb(0x00, 0x87, 0x93)
}

#[component]
fn Recolor() -> Element {
    let end = use_context::<Signal<HexColor>>();
    use_page_decoration(move || generator(end()));
    rsx! { div {} }
}

#[component]
fn Harness() -> Element {
    let show = use_signal(|| true);
    let end = use_signal(teal);
    let handles = use_context::<Handles>();
    use_hook(move || *handles.0.borrow_mut() = Some((show, end)));
    use_context_provider(move || end);

    rsx! {
        if show() {
            Recolor {}
        }
    }
}

#[component]
fn Shell() -> Element {
    use_ambient_decoration();
    rsx! { Harness {} }
}

fn mount(root: fn() -> Element, canvas: &MemoryCanvas, handles: &Handles) -> VirtualDom {
    let mut dom = VirtualDom::new(root)
        .with_root_context(canvas.clone())
        .with_root_context(handles.clone());
    dom.rebuild_in_place();
    settle(&mut dom);
    dom
}

/// Run queued effects and re-renders until nothing is pending.
fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        dom.process_events();
        dom.render_immediate_to_vec();
    }
}

#[test]
fn recolored_page_restores_the_ambient_canvas() {
    let ambient = DecorationConfig::ambient().to_style();
    let canvas = MemoryCanvas::with_style(ambient.clone());
    let handles = Handles::default();
    let mut dom = mount(Harness, &canvas, &handles);
    let (mut show, mut end) = handles.get();

    assert_eq!(canvas.read(), generator(teal()).to_style());

    let red = HexColor::from_rgb(0xff, 0, 0);
    dom.in_runtime(|| end.set(red.clone()));
    settle(&mut dom);
    assert_eq!(canvas.read(), generator(red).to_style());

    let green = HexColor::from_rgb(0, 0xff, 0);
    dom.in_runtime(|| end.set(green.clone()));
    settle(&mut dom);
    assert_eq!(canvas.read(), generator(green).to_style());

    dom.in_runtime(|| show.set(false));
    settle(&mut dom);
    assert_eq!(canvas.read(), ambient);
}

#[test]
fn shell_and_page_share_one_canvas() {
    let canvas = MemoryCanvas::new();
    let handles = Handles::default();
    let mut dom = mount(Shell, &canvas, &handles);
    let (mut show, _) = handles.get();

    assert_eq!(canvas.read(), generator(teal()).to_style());

    dom.in_runtime(|| show.set(false));
    settle(&mut dom);
    assert_eq!(canvas.read(), DecorationConfig::ambient().to_style());

    drop(dom);
    assert_eq!(canvas.read(), CanvasStyle::default());
}
