use crate::overlay::CanvasOverlay;
use measure_core::Measurer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub measurer: Rc<RefCell<Measurer>>,
    pub overlay: CanvasOverlay,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.measurer.borrow().render_tick(&mut self.overlay);
        self.frames += 1;
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `frame()` from requestAnimationFrame. The active flag is checked
/// before every tick; once it reads false the loop stops scheduling and
/// `running` is cleared so a later start can arm it again.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    if running.replace(true) {
        return;
    }
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let active = frame_ctx.borrow().measurer.borrow().is_active();
        if !active {
            log::info!(
                "[frame] session inactive; loop stopped after {} frames",
                frame_ctx.borrow().frames
            );
            running_tick.set(false);
            return;
        }
        frame_ctx.borrow_mut().frame();
        if !request_frame(&tick_clone) {
            running_tick.set(false);
        }
    }) as Box<dyn FnMut()>));
    if !request_frame(&tick) {
        running.set(false);
    }
}

fn request_frame(tick: &Tick) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let slot = tick.borrow();
    let Some(closure) = slot.as_ref() else {
        return false;
    };
    w.request_animation_frame(closure.as_ref().unchecked_ref()).is_ok()
}
