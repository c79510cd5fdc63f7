//! Presentation contract.
//!
//! # Responsibility
//! - Describe what a rendering surface must offer the coordinator.
//! - Carry user intents from a surface back to bound handlers.
//!
//! # Invariants
//! - `render` always receives the complete list; surfaces never diff.
//! - Intents are dispatched without holding a borrow of the surface, so a
//!   handler may trigger a re-render of the same surface.

use crate::model::task::{Task, TaskId};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Text shown by surfaces when the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet! Add one?";

/// User request raised by a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    Add(String),
    Edit(TaskId, String),
    Delete(TaskId),
    Toggle(TaskId),
}

/// One callback per intent kind.
pub struct IntentHandlers {
    pub on_add: Box<dyn Fn(String)>,
    pub on_edit: Box<dyn Fn(TaskId, String)>,
    pub on_delete: Box<dyn Fn(TaskId)>,
    pub on_toggle: Box<dyn Fn(TaskId)>,
}

impl IntentHandlers {
    pub fn dispatch(&self, intent: UserIntent) {
        match intent {
            UserIntent::Add(text) => (self.on_add)(text),
            UserIntent::Edit(id, text) => (self.on_edit)(id, text),
            UserIntent::Delete(id) => (self.on_delete)(id),
            UserIntent::Toggle(id) => (self.on_toggle)(id),
        }
    }
}

/// Surface that displays tasks and raises intents.
pub trait RenderSurface {
    /// Replaces everything displayed with `tasks`.
    fn render(&mut self, tasks: &[Task]);
    /// Stores the handlers that raised intents are delivered to.
    fn bind_intents(&mut self, handlers: Rc<IntentHandlers>);
    fn intent_handlers(&self) -> Option<Rc<IntentHandlers>>;
}

/// Raises `intent` from `surface` to its bound handlers.
///
/// Adds and edits carrying empty text are filtered here. Returns `true` when
/// the intent reached a handler.
pub fn raise_intent<R: RenderSurface + ?Sized>(surface: &RefCell<R>, intent: UserIntent) -> bool {
    match &intent {
        UserIntent::Add(text) | UserIntent::Edit(_, text) if text.is_empty() => {
            debug!("event=intent_raise module=render status=skipped reason=empty_text");
            return false;
        }
        _ => {}
    }

    let handlers = surface.borrow().intent_handlers();
    match handlers {
        Some(handlers) => {
            handlers.dispatch(intent);
            true
        }
        None => {
            debug!("event=intent_raise module=render status=skipped reason=unbound");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{raise_intent, IntentHandlers, RenderSurface, UserIntent};
    use crate::model::task::Task;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Probe {
        handlers: Option<Rc<IntentHandlers>>,
        renders: usize,
    }

    impl RenderSurface for Probe {
        fn render(&mut self, _tasks: &[Task]) {
            self.renders += 1;
        }

        fn bind_intents(&mut self, handlers: Rc<IntentHandlers>) {
            self.handlers = Some(handlers);
        }

        fn intent_handlers(&self) -> Option<Rc<IntentHandlers>> {
            self.handlers.clone()
        }
    }

    fn recording_handlers(log: Rc<RefCell<Vec<UserIntent>>>) -> IntentHandlers {
        let add_log = Rc::clone(&log);
        let edit_log = Rc::clone(&log);
        let delete_log = Rc::clone(&log);
        IntentHandlers {
            on_add: Box::new(move |text| add_log.borrow_mut().push(UserIntent::Add(text))),
            on_edit: Box::new(move |id, text| {
                edit_log.borrow_mut().push(UserIntent::Edit(id, text))
            }),
            on_delete: Box::new(move |id| delete_log.borrow_mut().push(UserIntent::Delete(id))),
            on_toggle: Box::new(move |id| log.borrow_mut().push(UserIntent::Toggle(id))),
        }
    }

    #[test]
    fn unbound_surface_drops_intents() {
        let surface = RefCell::new(Probe::default());
        assert!(!raise_intent(&surface, UserIntent::Toggle(1)));
    }

    #[test]
    fn empty_text_never_reaches_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let surface = RefCell::new(Probe::default());
        surface
            .borrow_mut()
            .bind_intents(Rc::new(recording_handlers(Rc::clone(&log))));

        assert!(!raise_intent(&surface, UserIntent::Add(String::new())));
        assert!(!raise_intent(&surface, UserIntent::Edit(1, String::new())));
        assert!(raise_intent(&surface, UserIntent::Add("milk".into())));
        assert!(raise_intent(&surface, UserIntent::Delete(4)));

        assert_eq!(
            *log.borrow(),
            vec![UserIntent::Add("milk".into()), UserIntent::Delete(4)]
        );
    }

    #[test]
    fn handler_may_borrow_surface_mutably() {
        let surface = Rc::new(RefCell::new(Probe::default()));
        let target = Rc::clone(&surface);
        let handlers = IntentHandlers {
            on_add: Box::new(|_| {}),
            on_edit: Box::new(|_, _| {}),
            on_delete: Box::new(|_| {}),
            on_toggle: Box::new(move |_| target.borrow_mut().render(&[])),
        };
        surface.borrow_mut().bind_intents(Rc::new(handlers));

        assert!(raise_intent(&*surface, UserIntent::Toggle(2)));
        assert_eq!(surface.borrow().renders, 1);
    }
}
