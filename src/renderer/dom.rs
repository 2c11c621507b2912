//! DOM output for the carousel (wasm only)
//!
//! Builds one panel per item once, then only rewrites style attributes when
//! new hints are published.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::style::{PanelStyle, tilt_transform};
use crate::carousel::{CardTilt, Item, RenderHint};
use crate::consts::SCENE_PERSPECTIVE;
use crate::settings::Settings;

pub struct DomRenderer {
    pub viewport: HtmlElement,
    pub prev_button: HtmlElement,
    pub next_button: HtmlElement,
    slots: Vec<HtmlElement>,
    panels: Vec<HtmlElement>,
    settings: Settings,
}

fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    el.set_class_name(class);
    Ok(el)
}

fn create_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<HtmlElement, JsValue> {
    let el = create(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

impl DomRenderer {
    /// Build the scene, panels and controls inside `root`
    pub fn build(
        document: &Document,
        root: &Element,
        items: &[Item],
        settings: &Settings,
    ) -> Result<Self, JsValue> {
        let scene = create(document, "div", "scene")?;
        scene
            .style()
            .set_property("perspective", &format!("{SCENE_PERSPECTIVE}px"))?;

        let viewport = create(document, "div", "viewport")?;
        viewport.set_attribute("role", "region")?;
        viewport.set_attribute("aria-roledescription", "3D carousel")?;
        viewport.set_attribute("aria-label", "Interactive showcase")?;
        viewport.style().set_property("touch-action", "pan-y")?;

        let mut slots = Vec::with_capacity(items.len());
        let mut panels = Vec::with_capacity(items.len());
        for item in items {
            let slot = create(document, "div", "slot")?;
            let panel = create(document, "div", super::style::PANEL_CLASS_SIDE)?;
            panel.set_attribute("aria-label", &item.title)?;

            let card = create(document, "div", "card")?;
            if let Some(subtitle) = &item.subtitle {
                card.append_child(&create_text(document, "div", "card-subtitle", subtitle)?)?;
            }
            card.append_child(&create_text(document, "h3", "card-title", &item.title)?)?;
            let list = create(document, "ul", "card-lines")?;
            for line in &item.lines {
                list.append_child(&create_text(document, "li", "", &format!("• {line}"))?)?;
            }
            card.append_child(&list)?;

            panel.append_child(&card)?;
            slot.append_child(&panel)?;
            viewport.append_child(&slot)?;
            slots.push(slot);
            panels.push(panel);
        }
        scene.append_child(&viewport)?;

        let controls = create(document, "div", "controls")?;
        let prev_button = create_text(document, "button", "control", "Prev")?;
        let next_button = create_text(document, "button", "control", "Next")?;
        controls.append_child(&prev_button)?;
        if settings.show_controls_hint {
            controls.append_child(&create_text(
                document,
                "div",
                "controls-hint",
                "Use ← → or drag",
            )?)?;
        }
        controls.append_child(&next_button)?;

        root.append_child(&scene)?;
        root.append_child(&controls)?;

        Ok(Self {
            viewport,
            prev_button,
            next_button,
            slots,
            panels,
            settings: settings.clone(),
        })
    }

    /// Apply a full hint list
    pub fn render(&self, hints: &[RenderHint]) {
        for (i, hint) in hints.iter().enumerate() {
            if let Err(e) = self.render_panel(i, hint) {
                log::warn!("Failed to render panel {}: {:?}", i, e);
            }
        }
    }

    fn render_panel(&self, index: usize, hint: &RenderHint) -> Result<(), JsValue> {
        let (Some(slot), Some(panel)) = (self.slots.get(index), self.panels.get(index)) else {
            return Ok(());
        };

        let Some(style) = PanelStyle::from_hint(hint, &self.settings) else {
            slot.style().set_property("display", "none")?;
            return Ok(());
        };

        slot.style().remove_property("display")?;
        panel.set_class_name(style.class_name);
        panel.set_attribute("aria-hidden", if style.aria_hidden { "true" } else { "false" })?;
        panel.set_tab_index(if style.aria_hidden { -1 } else { 0 });

        let css = panel.style();
        css.set_property("transform-style", "preserve-3d")?;
        css.set_property("transform", &style.transform)?;
        css.set_property("opacity", &style.opacity.to_string())?;
        css.set_property("z-index", &style.z_index.to_string())?;
        css.set_property("filter", style.filter)?;
        css.set_property("transition", &style.transition)?;

        if style.aria_hidden {
            self.apply_tilt(index, &CardTilt::rest());
        }
        Ok(())
    }

    /// Panel element for an item
    pub fn panel(&self, index: usize) -> Option<&HtmlElement> {
        self.panels.get(index)
    }

    /// Tilt the card inside panel `index`
    pub fn apply_tilt(&self, index: usize, tilt: &CardTilt) {
        let Some(card) = self
            .panels
            .get(index)
            .and_then(|p| p.first_element_child())
            .and_then(|c| c.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        if let Err(e) = card.style().set_property("transform", &tilt_transform(tilt)) {
            log::warn!("Failed to tilt card {}: {:?}", index, e);
        }
    }
}
