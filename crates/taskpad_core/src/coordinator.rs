//! Wiring between the task store and a rendering surface.
//!
//! # Responsibility
//! - Relay every store change to `RenderSurface::render`.
//! - Forward surface intents to the matching store mutation.
//!
//! # Invariants
//! - The surface is rendered once during construction, before any intent.
//! - Intent handlers hold the store weakly; the store holds the surface
//!   strongly through its observer.
//! - Handlers have no error channel: mutation failures are logged and dropped.

use crate::kv::KeyValueStore;
use crate::model::task::Task;
use crate::render::{raise_intent, IntentHandlers, RenderSurface, UserIntent};
use crate::store::task_store::{StoreResult, TaskStore};
use log::{error, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type SharedStore<S> = Rc<RefCell<TaskStore<S>>>;

/// Connects one `TaskStore` to one `RenderSurface`.
pub struct Coordinator<S: KeyValueStore, R: RenderSurface> {
    store: SharedStore<S>,
    surface: Rc<RefCell<R>>,
}

impl<S, R> Coordinator<S, R>
where
    S: KeyValueStore + 'static,
    R: RenderSurface + 'static,
{
    /// Registers the change relay, binds intent handlers and renders the
    /// initial list.
    pub fn new(store: TaskStore<S>, surface: R) -> Self {
        let store = Rc::new(RefCell::new(store));
        let surface = Rc::new(RefCell::new(surface));

        let relay_target = Rc::clone(&surface);
        store
            .borrow_mut()
            .set_observer(move |tasks| relay(&relay_target, tasks));
        surface
            .borrow_mut()
            .bind_intents(Rc::new(intent_handlers(&store)));

        relay(&surface, store.borrow().tasks());

        Self { store, surface }
    }

    pub fn store(&self) -> &SharedStore<S> {
        &self.store
    }

    pub fn surface(&self) -> &Rc<RefCell<R>> {
        &self.surface
    }

    /// Raises `intent` as if the surface emitted it.
    pub fn raise(&self, intent: UserIntent) -> bool {
        raise_intent(self.surface.as_ref(), intent)
    }

    /// Re-renders the current list without mutating anything.
    pub fn refresh(&self) {
        relay(&self.surface, self.store.borrow().tasks());
    }
}

fn relay<R: RenderSurface>(surface: &RefCell<R>, tasks: &[Task]) {
    surface.borrow_mut().render(tasks);
}

fn intent_handlers<S: KeyValueStore + 'static>(store: &SharedStore<S>) -> IntentHandlers {
    let add = Rc::downgrade(store);
    let edit = Rc::downgrade(store);
    let delete = Rc::downgrade(store);
    let toggle = Rc::downgrade(store);

    IntentHandlers {
        on_add: Box::new(move |text| forward(&add, "task_add", |s| s.add_task(&text))),
        on_edit: Box::new(move |id, text| {
            forward(&edit, "task_edit", |s| s.edit_task(id, &text))
        }),
        on_delete: Box::new(move |id| forward(&delete, "task_delete", |s| s.delete_task(id))),
        on_toggle: Box::new(move |id| forward(&toggle, "task_toggle", |s| s.toggle_task(id))),
    }
}

fn forward<S: KeyValueStore>(
    store: &Weak<RefCell<TaskStore<S>>>,
    event: &str,
    op: impl FnOnce(&mut TaskStore<S>) -> StoreResult<()>,
) {
    let Some(store) = store.upgrade() else {
        warn!("event={event} module=coordinator status=skipped reason=store_dropped");
        return;
    };
    let mut guard = store.borrow_mut();
    if let Err(err) = op(&mut *guard) {
        error!("event={event} module=coordinator status=error error={err}");
    }
}
