//! Ring Showcase entry point
//!
//! On the web, mounts the carousel into `#carousel` and wires input.
//! Natively, prints the ring layout while stepping through it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, KeyboardEvent, MouseEvent, PointerEvent};

    use ring_showcase::carousel::{CardTilt, Item, RingInput, StepDirection};
    use ring_showcase::platform::{
        Command, ScopedListener, card_command_for_key, command_for_key,
    };
    use ring_showcase::renderer::DomRenderer;
    use ring_showcase::{Carousel, Settings, showcase};

    const ROOT_ID: &str = "carousel";

    /// A carousel mounted into the page. Dropping it removes every listener.
    struct MountedCarousel {
        carousel: Rc<RefCell<Carousel>>,
        _renderer: Rc<DomRenderer>,
        listeners: Vec<ScopedListener>,
    }

    thread_local! {
        static MOUNTED: RefCell<Option<MountedCarousel>> = const { RefCell::new(None) };
    }

    /// Items from the root's `data-items` JSON, or the built-in showcase
    fn load_items(root: &Element) -> Vec<Item> {
        match root.get_attribute("data-items") {
            Some(json) => match showcase::items_from_json(&json) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("{}; using built-in showcase", e);
                    showcase::default_items()
                }
            },
            None => showcase::default_items(),
        }
    }

    fn mount(root: &Element) -> Result<MountedCarousel, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let settings = Settings::load();
        let items = load_items(root);
        let carousel = Carousel::new(items, &settings)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        // A remount replaces whatever the previous mount left behind
        root.set_inner_html("");
        let renderer = Rc::new(DomRenderer::build(
            &document,
            root,
            carousel.items(),
            &settings,
        )?);
        renderer.render(carousel.hints());

        let carousel = Rc::new(RefCell::new(carousel));
        {
            let renderer = renderer.clone();
            carousel
                .borrow_mut()
                .subscribe(move |hints| renderer.render(hints));
        }

        let mut listeners = Vec::new();

        // Drag
        {
            let carousel = carousel.clone();
            let viewport = renderer.viewport.clone();
            listeners.push(ScopedListener::new(
                &renderer.viewport,
                "pointerdown",
                move |event: PointerEvent| {
                    let _ = viewport.set_pointer_capture(event.pointer_id());
                    carousel.borrow_mut().handle(RingInput::PointerDown {
                        x: event.client_x() as f32,
                    });
                },
            )?);
        }
        {
            let carousel = carousel.clone();
            listeners.push(ScopedListener::new(
                &renderer.viewport,
                "pointermove",
                move |event: PointerEvent| {
                    carousel.borrow_mut().handle(RingInput::PointerMove {
                        x: event.client_x() as f32,
                    });
                },
            )?);
        }
        for (event_type, input) in [
            ("pointerup", RingInput::PointerUp),
            ("pointercancel", RingInput::PointerCancel),
        ] {
            let carousel = carousel.clone();
            listeners.push(ScopedListener::new(
                &renderer.viewport,
                event_type,
                move |_event: PointerEvent| {
                    carousel.borrow_mut().handle(input);
                },
            )?);
        }

        // Keyboard (window-wide, released on unmount)
        {
            let carousel = carousel.clone();
            listeners.push(ScopedListener::new(
                &window,
                "keydown",
                move |event: KeyboardEvent| {
                    if let Some(input) =
                        command_for_key(&event.key()).and_then(Command::as_ring_input)
                    {
                        carousel.borrow_mut().handle(input);
                    }
                },
            )?);
        }

        // Prev / Next buttons
        for (button, dir) in [
            (&renderer.prev_button, StepDirection::Prev),
            (&renderer.next_button, StepDirection::Next),
        ] {
            let carousel = carousel.clone();
            listeners.push(ScopedListener::new(
                button,
                "click",
                move |_event: MouseEvent| {
                    carousel.borrow_mut().handle(RingInput::Step(dir));
                },
            )?);
        }

        // Card tilt and activation
        let count = carousel.borrow().items().len();
        for index in 0..count {
            let Some(panel) = renderer.panel(index).cloned() else {
                continue;
            };

            if settings.effective_card_tilt() {
                let renderer_move = renderer.clone();
                let panel_rect = panel.clone();
                listeners.push(ScopedListener::new(
                    &panel,
                    "mousemove",
                    move |event: MouseEvent| {
                        let r = panel_rect.get_bounding_client_rect();
                        let tilt = CardTilt::from_pointer(
                            event.client_x() as f32,
                            event.client_y() as f32,
                            r.left() as f32,
                            r.top() as f32,
                            r.width() as f32,
                            r.height() as f32,
                        );
                        renderer_move.apply_tilt(index, &tilt);
                    },
                )?);

                let renderer_leave = renderer.clone();
                listeners.push(ScopedListener::new(
                    &panel,
                    "mouseleave",
                    move |_event: MouseEvent| {
                        renderer_leave.apply_tilt(index, &CardTilt::rest());
                    },
                )?);
            }

            let carousel = carousel.clone();
            listeners.push(ScopedListener::new(
                &panel,
                "keydown",
                move |event: KeyboardEvent| {
                    if card_command_for_key(&event.key()) == Some(Command::Activate) {
                        event.prevent_default();
                        let carousel = carousel.borrow();
                        if carousel.selected_index() == index {
                            carousel.activate();
                        }
                    }
                },
            )?);
        }

        log::info!("Carousel mounted with {} listeners", listeners.len());

        Ok(MountedCarousel {
            carousel,
            _renderer: renderer,
            listeners,
        })
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Ring Showcase starting...");
        mount_root();
    }

    /// Mount into `#carousel`, keeping the result alive in `MOUNTED`
    fn mount_root() {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(ROOT_ID))
        else {
            log::error!("No #{} element to mount into", ROOT_ID);
            return;
        };

        match mount(&root) {
            Ok(mounted) => {
                log::info!(
                    "Showing '{}'",
                    mounted.carousel.borrow().selected_item().title
                );
                MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted));
            }
            Err(e) => log::error!("Failed to mount carousel: {:?}", e),
        }
    }

    pub fn unmount() {
        let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
        if let Some(mounted) = mounted {
            let released = mounted.listeners.len();
            drop(mounted);
            log::info!("Carousel unmounted, {} listeners released", released);
        }
    }

    /// Persist the reduced-motion preference and rebuild the carousel with it
    pub fn set_reduced_motion(enabled: bool) {
        let settings = Settings::load().with_reduced_motion(enabled);
        settings.save();
        log::info!("Reduced motion {}", if enabled { "on" } else { "off" });

        unmount();
        mount_root();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Tear down the mounted carousel and release its listeners
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    wasm_app::unmount();
}

/// Switch reduced motion on or off, save it and remount
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = setReducedMotion)]
pub fn set_reduced_motion(enabled: bool) {
    wasm_app::set_reduced_motion(enabled);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ring_showcase::carousel::RingInput;
    use ring_showcase::{Carousel, Settings, showcase};

    env_logger::init();
    log::info!("Ring Showcase (native) starting...");
    log::info!("The interactive page needs a browser - run with `trunk serve`");

    let mut carousel = match Carousel::new(showcase::default_items(), &Settings::load()) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    print_ring(&carousel, "initial");
    carousel.next();
    print_ring(&carousel, "next");
    carousel.handle(RingInput::PointerDown { x: 0.0 });
    carousel.handle(RingInput::PointerMove { x: -400.0 });
    print_ring(&carousel, "dragging");
    carousel.handle(RingInput::PointerUp);
    print_ring(&carousel, "released");
}

#[cfg(not(target_arch = "wasm32"))]
fn print_ring(carousel: &ring_showcase::Carousel, label: &str) {
    let state = carousel.state();
    println!(
        "\n== {} (selected {}, angle {:.1}°) ==",
        label, state.selected_index, state.current_angle
    );
    for (item, hint) in carousel.items().iter().zip(carousel.hints()) {
        let marker = if hint.is_centered {
            ">"
        } else if hint.is_hidden {
            "x"
        } else {
            " "
        };
        println!(
            "{} {:<16} offset {:>7.1}  x {:>7.1}  z {:>7.1}  scale {:.2}  opacity {:.2}  z-index {}",
            marker,
            item.title,
            hint.offset,
            hint.planar_x,
            hint.depth_z,
            hint.scale,
            hint.opacity,
            hint.stack_order
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
