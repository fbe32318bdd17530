use crate::constants::{REVEAL_SELECTOR, VISIBLE_CLASS};
use crate::core::constants::REVEAL_THRESHOLD;
use crate::core::{RevealController, RevealHost};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Marks targets with `is-visible` and forwards (un)observe calls to an
/// `IntersectionObserver` when one exists.
struct ClassRevealHost {
    observer: Option<web::IntersectionObserver>,
}

impl RevealHost for ClassRevealHost {
    type Target = web::Element;

    fn mark_revealed(&mut self, target: &web::Element) {
        dom::add_class(target, VISIBLE_CLASS);
    }

    fn observe(&mut self, target: &web::Element) {
        if let Some(o) = &self.observer {
            o.observe(target);
        }
    }

    fn unobserve(&mut self, target: &web::Element) {
        if let Some(o) = &self.observer {
            o.unobserve(target);
        }
    }
}

type SharedController = Rc<RefCell<Option<RevealController<web::Element>>>>;

pub fn init_reveal(document: &web::Document, reduced_motion: bool) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        log::warn!("[reveal] no {} elements", REVEAL_SELECTOR);
    }

    if reduced_motion {
        let mut host = ClassRevealHost { observer: None };
        RevealController::init(targets, true, &mut host);
        return Ok(());
    }

    let controller: SharedController = Rc::new(RefCell::new(None));
    let controller_cb = controller.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut host = ClassRevealHost {
                observer: Some(observer),
            };
            let mut guard = controller_cb.borrow_mut();
            let Some(ctrl) = guard.as_mut() else {
                return;
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                ctrl.on_intersection(&entry.target(), entry.is_intersecting(), &mut host);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    let mut host = ClassRevealHost {
        observer: Some(observer),
    };
    *controller.borrow_mut() = Some(RevealController::init(targets, false, &mut host));
    Ok(())
}
