use crate::dom;
use glam::Vec2;
use heart_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_click(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        sim.borrow_mut().spawn_click_hearts(at);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_touchstart(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            let at = Vec2::new(t.client_x() as f32, t.client_y() as f32);
            sim.borrow_mut().spawn_click_hearts(at);
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    sim: Rc<RefCell<Simulation>>,
) {
    let window_resize = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_size(&window_resize, &canvas, &ctx, dpr);
        sim.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
