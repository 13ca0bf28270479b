//! Attaching the rendering canvas to a page.
//!
//! The renderer draws into the canvas whose id is [`CANVAS_ID`], creating one
//! under `<body>` when none exists. Mounting creates that canvas ahead of
//! time inside a chosen container so the demo lands where the page wants it.

use crate::error::Result;

/// Id of the canvas element the renderer looks up.
pub const CANVAS_ID: &str = "canvas";

/// Places the rendering canvas inside the element matching `selector`.
///
/// Does nothing if a canvas with id [`CANVAS_ID`] is already in the document.
#[cfg(target_arch = "wasm32")]
pub fn mount(selector: &str) -> Result<()> {
    use crate::error::ExperienceError;
    use wasm_bindgen::JsCast;

    let dom = |err: wasm_bindgen::JsValue| ExperienceError::Dom(format!("{:?}", err));

    let window = web_sys::window().ok_or_else(|| ExperienceError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExperienceError::Dom("no document".into()))?;

    if document.get_element_by_id(CANVAS_ID).is_some() {
        log::debug!("canvas `#{}` already present, leaving it in place", CANVAS_ID);
        return Ok(());
    }

    let container = document
        .query_selector(selector)
        .map_err(dom)?
        .ok_or_else(|| ExperienceError::MissingContainer(selector.to_string()))?;

    let canvas = document
        .create_element("canvas")
        .map_err(dom)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| ExperienceError::Dom("created element is not a canvas".into()))?;
    canvas.set_id(CANVAS_ID);

    container.append_child(&canvas).map_err(dom)?;
    log::info!("canvas mounted into `{}`", selector);

    Ok(())
}

/// Places the rendering canvas inside the element matching `selector`.
///
/// Native targets render into their own window, so this only logs.
#[cfg(not(target_arch = "wasm32"))]
pub fn mount(selector: &str) -> Result<()> {
    log::debug!("ignoring container `{}` on a native target", selector);
    Ok(())
}
