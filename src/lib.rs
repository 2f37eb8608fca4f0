#![cfg(target_arch = "wasm32")]
use heart_core::{DeviceClass, SimParams, Simulation, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;
mod startup;

const CANVAS_ID: &str = "heart";

static INIT: startup::InitGuard = startup::InitGuard::new();

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if startup::is_document_ready(&document.ready_state()) {
        run_init();
    } else {
        let closure = Closure::once(move || run_init());
        _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }
    Ok(())
}

fn run_init() {
    if !INIT.claim() {
        log::warn!("[init] already initialized, ignoring");
        return;
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = dom::context_2d(&canvas)?;

    let device = DeviceClass::from_user_agent(&dom::user_agent(&window));
    let dpr = dom::device_pixel_ratio(&window);
    let (width, height) = dom::sync_canvas_size(&window, &canvas, &ctx, dpr);
    log::info!(
        "[init] device={:?} dpr={:.2} viewport={}x{}",
        device,
        dpr,
        width,
        height
    );

    let viewport = Viewport::new(width, height, dpr as f32, device);
    let seed = rand::random::<u64>();
    let sim = Simulation::new(viewport, SimParams::default(), seed)?;
    let sim = Rc::new(RefCell::new(sim));

    events::wire_click(&window, sim.clone());
    events::wire_touchstart(&window, sim.clone());
    events::wire_resize(&window, canvas, ctx.clone(), dpr, sim.clone());

    let painter = render::Painter::new(ctx, &sim.borrow());
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { sim, painter })));
    Ok(())
}
