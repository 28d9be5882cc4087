//! Browser presentation layer.
//!
//! `mount` builds the card, wires DOM events into a shared `QuizSession` and
//! starts the two ambient loops: a `setInterval` spawner for falling petals and
//! a `requestAnimationFrame` loop that advances petals and fires scheduled
//! auto-advances. All browser handles live in `Mounted`; dropping it (via
//! `QuizHandle::stop` or when JS frees the handle) clears both loops, detaches
//! every listener and removes the DOM.

mod view;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window, window};

use crate::config::QuizConfig;
use crate::kana::WritingSystem;
use crate::petals::Viewport;
use crate::session::QuizSession;
use view::View;

/// Element id the widget mounts into when present; otherwise `<body>`.
pub const MOUNT_ID: &str = "kana-quiz";

type Session = Rc<RefCell<QuizSession<StdRng>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

struct Mounted {
    window: Window,
    session: Session,
    view: Rc<View>,
    spawn_timer: i32,
    _spawn_cb: Closure<dyn FnMut()>,
    frame_cb: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    listeners: Vec<Listener>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.spawn_timer);
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the frame closure's self-reference.
        self.frame_cb.borrow_mut().take();
        for l in &self.listeners {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.callback.as_ref().unchecked_ref());
        }
        self.view.unmount();
        log::info!(
            "kana quiz stopped ({} scheduled advance(s) dropped)",
            self.session.borrow().pending_advances().len()
        );
    }
}

/// Handle to a running quiz widget. Call `stop()` to tear it down.
#[wasm_bindgen]
pub struct QuizHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl QuizHandle {
    pub fn stop(&mut self) {
        self.mounted.take();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted.is_some()
    }

    /// Glyph currently on screen, if running.
    #[wasm_bindgen(getter)]
    pub fn glyph(&self) -> Option<String> {
        self.mounted
            .as_ref()
            .map(|m| m.session.borrow().quiz().prompt().glyph.to_string())
    }
}

fn now(win: &Window) -> f64 {
    win.performance().map(|p| p.now()).unwrap_or(0.0)
}

fn viewport_of(win: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dim(win.inner_width()), dim(win.inner_height()))
}

fn listen(
    target: &EventTarget,
    kind: &'static str,
    f: impl FnMut(Event) + 'static,
) -> Result<Listener, JsValue> {
    let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        kind,
        callback,
    })
}

pub fn mount(cfg: QuizConfig) -> Result<QuizHandle, JsValue> {
    cfg.validate()?;
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let host = match doc.get_element_by_id(MOUNT_ID) {
        Some(el) => el,
        None => doc
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .into(),
    };

    let view = Rc::new(View::build(&doc, &host, &cfg)?);
    let session: Session = Rc::new(RefCell::new(QuizSession::new(
        &cfg,
        viewport_of(&win),
        StdRng::from_entropy(),
    )));
    view.render_quiz(session.borrow().quiz());

    let mut listeners = Vec::with_capacity(4);
    {
        let (session, v, win) = (session.clone(), view.clone(), win.clone());
        listeners.push(listen(&view.form, "submit", move |evt| {
            evt.prevent_default();
            let outcome = session.borrow_mut().submit(now(&win));
            v.render_quiz(session.borrow().quiz());
            if outcome.play_sound {
                v.play_sound();
            }
        })?);
    }
    {
        let (session, v) = (session.clone(), view.clone());
        listeners.push(listen(&view.input, "input", move |_| {
            session.borrow_mut().edit(&v.input.value());
        })?);
    }
    {
        let (session, v) = (session.clone(), view.clone());
        listeners.push(listen(&view.select, "change", move |_| {
            match v.select.value().parse::<WritingSystem>() {
                Ok(ws) => session.borrow_mut().set_writing_system(ws),
                Err(e) => log::warn!("{e}"),
            }
            v.render_quiz(session.borrow().quiz());
        })?);
    }
    {
        let (session, v) = (session.clone(), view.clone());
        listeners.push(listen(&view.skip, "click", move |_| {
            session.borrow_mut().skip();
            v.render_quiz(session.borrow().quiz());
        })?);
    }

    // Falling-petal spawner.
    let spawn_cb = {
        let session = session.clone();
        Closure::wrap(Box::new(move || {
            session.borrow_mut().spawn_tick();
        }) as Box<dyn FnMut()>)
    };
    let spawn_timer = win.set_interval_with_callback_and_timeout_and_arguments_0(
        spawn_cb.as_ref().unchecked_ref(),
        cfg.petals.spawn_interval_ms.min(i32::MAX as u32) as i32,
    )?;

    // Per-frame advance + render.
    let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None));
    {
        let f = frame_cb.clone();
        let (session, view, win, frame_id) =
            (session.clone(), view.clone(), win.clone(), frame_id.clone());
        *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            let advanced = {
                let mut s = session.borrow_mut();
                s.resize(viewport_of(&win));
                s.frame(ts)
            };
            {
                let s = session.borrow();
                if advanced {
                    view.render_quiz(s.quiz());
                }
                view.render_petals(s.petals());
            }
            if let Some(cb) = f.borrow().as_ref() {
                let next: &Function = cb.as_ref().unchecked_ref();
                frame_id.set(win.request_animation_frame(next).ok());
            }
        }) as Box<dyn FnMut(f64)>));
    }
    if let Some(cb) = frame_cb.borrow().as_ref() {
        frame_id.set(Some(win.request_animation_frame(cb.as_ref().unchecked_ref())?));
    }

    log::info!(
        "kana quiz started: {} ({} entries), spawn every {}ms @ {:.2}, auto-advance {}ms",
        cfg.writing_system,
        cfg.writing_system.table().len(),
        cfg.petals.spawn_interval_ms,
        cfg.petals.spawn_chance,
        cfg.advance_delay_ms
    );

    Ok(QuizHandle {
        mounted: Some(Mounted {
            window: win,
            session,
            view,
            spawn_timer,
            _spawn_cb: spawn_cb,
            frame_cb,
            frame_id,
            listeners,
        }),
    })
}
