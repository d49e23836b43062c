//! Page background hooks over [`client_core::decoration`].
//!
//! The root provides one canvas and applies the ambient decoration to it for
//! the life of the app. Each page applies its own after mounting, so the page
//! it replaced has already restored the ambient state it captures.

use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "web")]
use client_core::decoration::BodyCanvas;
#[cfg(not(feature = "web"))]
use client_core::decoration::MemoryCanvas;
use client_core::{DecorationConfig, DecorationGuard, PageDecoration};
use dioxus::prelude::*;

/// `document.body` in the browser; a shared in-process canvas elsewhere.
#[cfg(feature = "web")]
pub type PageCanvas = BodyCanvas;
#[cfg(not(feature = "web"))]
pub type PageCanvas = MemoryCanvas;

type GuardSlot = Rc<RefCell<Option<DecorationGuard<PageCanvas>>>>;

/// Provide the canvas every decoration draws on. Call once, from the root.
pub fn use_page_canvas_provider() -> PageCanvas {
    use_context_provider(PageCanvas::default)
}

pub fn use_page_canvas() -> PageCanvas {
    use_context::<PageCanvas>()
}

/// App shell background, applied while rendering the root.
pub fn use_ambient_decoration() {
    let canvas = use_page_canvas();
    let guard: GuardSlot = use_hook(move || {
        let guard = PageDecoration::scoped(canvas, &DecorationConfig::ambient());
        Rc::new(RefCell::new(Some(guard)))
    });

    use_drop(move || {
        guard.borrow_mut().take();
    });
}

/// Keep `config` applied while the calling page is mounted.
///
/// `config` is re-evaluated whenever the signals it reads change; the canvas
/// state found at the first application is restored on unmount.
pub fn use_page_decoration(config: impl Fn() -> DecorationConfig + 'static) {
    let canvas = use_page_canvas();
    let guard: GuardSlot = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let guard = guard.clone();
        move || {
            let config = config();
            let mut slot = guard.borrow_mut();
            match slot.as_mut() {
                Some(active) => active.update(&config),
                None => *slot = Some(PageDecoration::scoped(canvas.clone(), &config)),
            }
        }
    });

    use_drop(move || {
        if let Some(active) = guard.borrow_mut().take() {
            active.release();
        }
    });
}

#[cfg(all(test, not(feature = "web")))]
#[path = "decoration_tests.rs"]
mod tests;
