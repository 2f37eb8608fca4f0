use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn user_agent(window: &web::Window) -> String {
    window.navigator().user_agent().unwrap_or_default()
}

pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Size the canvas to the window: backing store in device pixels, CSS size in
/// CSS pixels, and a context transform so drawing stays in CSS pixels.
/// Returns the CSS width and height.
pub fn sync_canvas_size(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    dpr: f64,
) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);

    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", width));
    _ = style.set_property("height", &format!("{}px", height));

    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (width as f32, height as f32)
}
