//! DOM construction and rendering for the quiz card and the petal layer.
//! Everything here is write-only presentation; state lives in `QuizSession`.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAudioElement, HtmlInputElement, HtmlSelectElement};

use crate::config::QuizConfig;
use crate::kana::WritingSystem;
use crate::petals::{Petal, PetalField, PetalKind};
use crate::quiz::{Quiz, Verdict};

const STYLE: &str = "
.kq-root { min-height:100vh; display:flex; align-items:center; justify-content:center; position:relative; overflow:hidden; background-size:cover; background-position:center; background-attachment:fixed; font-family:'Noto Sans JP', sans-serif; }
.kq-veil { position:absolute; inset:0; background:#fff; opacity:0.3; }
.kq-petals { position:absolute; top:0; left:0; right:0; bottom:0; overflow:hidden; pointer-events:none; }
.kq-petal { position:absolute; width:30px; height:30px; object-fit:contain; pointer-events:none; }
.kq-explosion { transition:all 0.5s ease-out; }
.kq-card { background:rgba(255,255,255,0.9); padding:2rem; border-radius:0.5rem; box-shadow:0 10px 15px rgba(0,0,0,0.1); max-width:28rem; width:100%; position:relative; z-index:10; }
.kq-header { display:flex; justify-content:space-between; align-items:center; margin-bottom:1.5rem; }
.kq-title { font-size:1.875rem; font-weight:700; color:#312e81; margin:0; }
.kq-select { padding:0.5rem; border:1px solid #d1d5db; border-radius:0.25rem; }
.kq-glyph-box { text-align:center; margin-bottom:1.5rem; }
.kq-glyph { font-size:8rem; font-weight:700; color:#4338ca; }
.kq-form { display:flex; flex-direction:column; gap:1rem; }
.kq-input { width:100%; padding:0.5rem; border:1px solid #d1d5db; border-radius:0.25rem; box-sizing:border-box; }
.kq-actions { display:flex; gap:1rem; }
.kq-check, .kq-skip { flex:1; color:#fff; padding:0.5rem; border:none; border-radius:0.25rem; cursor:pointer; }
.kq-check { background:#4338ca; }
.kq-check:hover { background:#3730a3; }
.kq-skip { background:#ec4899; }
.kq-skip:hover { background:#db2777; }
.kq-feedback { margin-top:1rem; text-align:center; }
.kq-feedback--correct { color:#16a34a; }
.kq-feedback--incorrect { color:#dc2626; }
";

pub(super) struct View {
    root: Element,
    petal_layer: Element,
    glyph: Element,
    pub(super) form: Element,
    pub(super) input: HtmlInputElement,
    pub(super) select: HtmlSelectElement,
    pub(super) skip: Element,
    feedback: Element,
    audio: Option<HtmlAudioElement>,
    // Swallows rejected `play()` promises (autoplay policy, missing asset).
    audio_catch: Closure<dyn FnMut(JsValue)>,
    petal_url: String,
    petal_nodes: RefCell<HashMap<u64, Element>>,
}

fn el(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let e = doc.create_element(tag)?;
    e.set_class_name(class);
    Ok(e)
}

impl View {
    /// Build the widget under `host`.
    pub(super) fn build(doc: &Document, host: &Element, cfg: &QuizConfig) -> Result<View, JsValue> {
        let root = el(doc, "div", "kq-root")?;
        root.set_attribute(
            "style",
            &format!("background-image:url('{}');", cfg.assets.background_url),
        )?;

        let style = doc.create_element("style")?;
        style.set_text_content(Some(STYLE));
        root.append_child(&style)?;
        let veil = el(doc, "div", "kq-veil")?;
        root.append_child(&veil)?;

        let petal_layer = el(doc, "div", "kq-petals")?;
        root.append_child(&petal_layer)?;

        let card = el(doc, "div", "kq-card")?;
        let header = el(doc, "div", "kq-header")?;
        let title = el(doc, "h1", "kq-title")?;
        title.set_text_content(Some("日本語学習"));
        header.append_child(&title)?;

        let select: HtmlSelectElement = el(doc, "select", "kq-select")?.dyn_into()?;
        for ws in WritingSystem::ALL {
            let opt = doc.create_element("option")?;
            opt.set_attribute("value", ws.as_str())?;
            opt.set_text_content(Some(ws.label()));
            select.append_child(&opt)?;
        }
        header.append_child(&select)?;
        card.append_child(&header)?;

        let glyph_box = el(doc, "div", "kq-glyph-box")?;
        let glyph = el(doc, "span", "kq-glyph")?;
        glyph_box.append_child(&glyph)?;
        card.append_child(&glyph_box)?;

        let form = el(doc, "form", "kq-form")?;
        let input: HtmlInputElement = el(doc, "input", "kq-input")?.dyn_into()?;
        input.set_type("text");
        input.set_placeholder("Type romaji here");
        input.set_attribute("autocomplete", "off")?;
        form.append_child(&input)?;

        let actions = el(doc, "div", "kq-actions")?;
        let check = el(doc, "button", "kq-check")?;
        check.set_attribute("type", "submit")?;
        check.set_text_content(Some("Check / 確認"));
        let skip = el(doc, "button", "kq-skip")?;
        skip.set_attribute("type", "button")?;
        skip.set_text_content(Some("Skip / スキップ"));
        actions.append_child(&check)?;
        actions.append_child(&skip)?;
        form.append_child(&actions)?;
        card.append_child(&form)?;

        let feedback = el(doc, "p", "kq-feedback")?;
        feedback.set_attribute("hidden", "")?;
        card.append_child(&feedback)?;
        root.append_child(&card)?;

        let audio = match &cfg.assets.sound_url {
            Some(url) => match HtmlAudioElement::new_with_src(url) {
                Ok(a) => Some(a),
                Err(e) => {
                    log::warn!("audio unavailable, continuing without sound: {e:?}");
                    None
                }
            },
            None => None,
        };
        let audio_catch = Closure::wrap(Box::new(|e: JsValue| {
            log::warn!("sound playback rejected: {e:?}");
        }) as Box<dyn FnMut(JsValue)>);

        host.append_child(&root)?;

        Ok(View {
            root,
            petal_layer,
            glyph,
            form,
            input,
            select,
            skip,
            feedback,
            audio,
            audio_catch,
            petal_url: cfg.assets.petal_url.clone(),
            petal_nodes: RefCell::new(HashMap::new()),
        })
    }

    pub(super) fn render_quiz(&self, quiz: &Quiz) {
        self.glyph.set_text_content(Some(quiz.prompt().glyph));
        let ws = quiz.writing_system().as_str();
        if self.select.value() != ws {
            self.select.set_value(ws);
        }
        // Only overwrite when state diverges so typing keeps its caret.
        if self.input.value() != quiz.input() {
            self.input.set_value(quiz.input());
        }
        match quiz.verdict() {
            None => {
                self.feedback.set_text_content(None);
                self.feedback.set_class_name("kq-feedback");
                let _ = self.feedback.set_attribute("hidden", "");
            }
            Some(v) => {
                let class = match v {
                    Verdict::Correct => "kq-feedback kq-feedback--correct",
                    Verdict::Incorrect { .. } => "kq-feedback kq-feedback--incorrect",
                };
                self.feedback.set_text_content(Some(&v.message()));
                self.feedback.set_class_name(class);
                let _ = self.feedback.remove_attribute("hidden");
            }
        }
    }

    pub(super) fn render_petals(&self, petals: &PetalField) {
        let Some(doc) = self.root.owner_document() else {
            return;
        };
        let mut nodes = self.petal_nodes.borrow_mut();
        let mut live = Vec::with_capacity(petals.len());
        for p in petals.iter() {
            live.push(p.id);
            let node = match nodes.get(&p.id) {
                Some(n) => n.clone(),
                None => match self.petal_node(&doc, p) {
                    Ok(n) => {
                        nodes.insert(p.id, n.clone());
                        n
                    }
                    Err(e) => {
                        log::warn!("could not create petal node: {e:?}");
                        continue;
                    }
                },
            };
            let _ = node.set_attribute(
                "style",
                &format!(
                    "left:{:.1}px; top:{:.1}px; transform:rotate({:.1}deg) scale({:.3});",
                    p.x, p.y, p.rotation, p.scale
                ),
            );
        }
        nodes.retain(|id, node| {
            let keep = live.contains(id);
            if !keep {
                node.remove();
            }
            keep
        });
    }

    fn petal_node(&self, doc: &Document, p: &Petal) -> Result<Element, JsValue> {
        let class = match p.kind {
            PetalKind::Falling => "kq-petal",
            PetalKind::Explosion => "kq-petal kq-explosion",
        };
        let img = el(doc, "img", class)?;
        img.set_attribute("src", &self.petal_url)?;
        img.set_attribute("alt", "")?;
        self.petal_layer.append_child(&img)?;
        Ok(img)
    }

    /// Best effort: never blocks or fails the quiz flow.
    pub(super) fn play_sound(&self) {
        let Some(audio) = &self.audio else {
            return;
        };
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.audio_catch);
            }
            Err(e) => log::warn!("sound playback failed: {e:?}"),
        }
    }

    pub(super) fn unmount(&self) {
        self.petal_nodes.borrow_mut().clear();
        self.root.remove();
    }
}
