use crate::action::Action;
use crate::error::DispatchError;
use crate::middleware::{DispatchResult, Middleware, Next, Outcome, Pipeline};
use crate::reducer::Reducer;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

struct ListenerEntry {
    id: u64,
    listener: Listener,
}

type Registry = RefCell<Vec<ListenerEntry>>;

pub(crate) struct Inner<S, A> {
    state: RefCell<S>,
    reducer: Box<dyn Reducer<S, A>>,
    pipeline: Pipeline<S, A>,
    listeners: Rc<Registry>,
    next_listener_id: Cell<u64>,
    reducing: Cell<bool>,
}

/// Marks a reducer call in progress, cleared even if the reducer panics
struct ReduceGuard<'a>(&'a Cell<bool>);

impl<'a> ReduceGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for ReduceGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: Clone, A: Action> Inner<S, A> {
    pub(crate) fn state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Pipeline entry point
    pub(crate) fn dispatch(&self, action: A) -> DispatchResult {
        if self.reducing.get() {
            return Err(DispatchError::DispatchDuringReduce {
                action: action.kind(),
            });
        }
        Next::new(self, self.pipeline.chain()).run(action)
    }

    /// Innermost `next`: reduce, commit, notify
    pub(crate) fn commit(&self, action: A) -> DispatchResult {
        let current = self.state();
        let next = {
            let _guard = ReduceGuard::enter(&self.reducing);
            self.reducer.reduce(Some(current), &action)
        };
        *self.state.borrow_mut() = next;
        log::trace!("Committed {}", action.kind());

        self.notify();
        Ok(Outcome::Committed)
    }

    fn notify(&self) {
        // Listeners added or removed during this pass only count from the next one
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|entry| Rc::clone(&entry.listener))
            .collect();

        for listener in snapshot {
            listener();
        }
    }
}

/// Store - holds application state and manages the Redux loop
///
/// Cloning the handle is cheap and every clone refers to the same state.
/// The store goes away once the last handle is dropped; listeners that need
/// to read state should capture a [`WeakStore`] so they don't keep it alive.
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Clone + 'static, A: Action + 'static> Store<S, A> {
    /// Create a store without middleware
    pub fn new<R: Reducer<S, A> + 'static>(reducer: R) -> Self {
        Self::from_parts(Box::new(reducer), Pipeline::new())
    }

    pub fn builder<R: Reducer<S, A> + 'static>(reducer: R) -> StoreBuilder<S, A> {
        StoreBuilder {
            reducer: Box::new(reducer),
            pipeline: Pipeline::new(),
        }
    }

    fn from_parts(reducer: Box<dyn Reducer<S, A>>, pipeline: Pipeline<S, A>) -> Self {
        let bootstrap = A::bootstrap();
        let initial = reducer.reduce(None, &bootstrap);
        log::debug!(
            "Store created with {} middleware, bootstrapped with {}",
            pipeline.len(),
            bootstrap.kind()
        );

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial),
                reducer,
                pipeline,
                listeners: Rc::new(RefCell::new(Vec::new())),
                next_listener_id: Cell::new(0),
                reducing: Cell::new(false),
            }),
        }
    }

    /// Latest committed state
    pub fn get_state(&self) -> S {
        self.inner.state()
    }

    /// Register a listener for every future committed dispatch
    pub fn subscribe<F: Fn() + 'static>(&self, listener: F) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);

        self.inner.listeners.borrow_mut().push(ListenerEntry {
            id,
            listener: Rc::new(listener),
        });

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner.listeners),
        }
    }

    /// Run an action through the middleware chain and the reducer
    ///
    /// Returns once the new state is committed and every listener subscribed
    /// at that moment has been called, or once a middleware declined it.
    pub fn dispatch(&self, action: A) -> DispatchResult {
        self.inner.dispatch(action)
    }

    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn middleware_names(&self) -> Vec<&'static str> {
        self.inner.pipeline.names()
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Store");
        match self.inner.state.try_borrow() {
            Ok(state) => debug.field("state", &*state),
            Err(_) => debug.field("state", &"<committing>"),
        };
        debug
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("middleware", &self.inner.pipeline.len())
            .finish()
    }
}

/// Create a store from a root reducer
pub fn create_store<S, A, R>(reducer: R) -> Store<S, A>
where
    S: Clone + 'static,
    A: Action + 'static,
    R: Reducer<S, A> + 'static,
{
    Store::new(reducer)
}

/// Create a store from a root reducer and a middleware pipeline
pub fn create_store_with<S, A, R>(reducer: R, pipeline: Pipeline<S, A>) -> Store<S, A>
where
    S: Clone + 'static,
    A: Action + 'static,
    R: Reducer<S, A> + 'static,
{
    Store::from_parts(Box::new(reducer), pipeline)
}

/// Collects middleware before the store exists; order is fixed by `build`
pub struct StoreBuilder<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    pipeline: Pipeline<S, A>,
}

impl<S: Clone + 'static, A: Action + 'static> StoreBuilder<S, A> {
    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn middleware<M: Middleware<S, A> + 'static>(mut self, middleware: M) -> Self {
        self.pipeline.add_middleware(middleware);
        self
    }

    pub fn build(self) -> Store<S, A> {
        Store::from_parts(self.reducer, self.pipeline)
    }
}

/// Non-owning store handle
pub struct WeakStore<S, A> {
    inner: Weak<Inner<S, A>>,
}

impl<S, A> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S, A> WeakStore<S, A> {
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

/// Handle returned by [`Store::subscribe`]
///
/// Dropping it does not unsubscribe.
#[derive(Clone, Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    /// Remove the listener; calling it again is a no-op
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().retain(|entry| entry.id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().iter().any(|entry| entry.id == self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{counter, CounterAction};
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_initial_state_from_bootstrap() {
        let store = Store::new(counter);
        assert_eq!(store.get_state(), 0);
    }

    #[test]
    fn test_store_dispatch_updates_state() {
        let store = create_store(counter);

        store.dispatch(CounterAction::Increment).unwrap();
        store.dispatch(CounterAction::Add(10)).unwrap();

        assert_eq!(store.get_state(), 11);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new(counter);
        let other = store.clone();

        other.dispatch(CounterAction::Increment).unwrap();

        assert_eq!(store.get_state(), 1);
    }

    #[test]
    fn test_listener_reads_committed_state() {
        let store = Store::new(counter);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let weak = store.downgrade();
        let sink = Rc::clone(&seen);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                sink.borrow_mut().push(store.get_state());
            }
        });

        store.dispatch(CounterAction::Add(3)).unwrap();
        store.dispatch(CounterAction::Increment).unwrap();

        assert_eq!(*seen.borrow(), vec![3, 4]);
    }

    #[test]
    fn test_double_unsubscribe_is_noop() {
        let store = Store::new(counter);
        let subscription = store.subscribe(|| {});

        assert!(subscription.is_active());
        subscription.unsubscribe();
        subscription.unsubscribe();

        assert!(!subscription.is_active());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = Store::new(counter);
        let subscription = store.subscribe(|| {});
        drop(store);

        subscription.unsubscribe();
        assert!(!subscription.is_active());
    }

    #[test]
    fn test_panicking_reducer_keeps_committed_state() {
        let store = Store::new(|state: Option<i64>, action: &CounterAction| {
            let state = state.unwrap_or_default();
            match action {
                CounterAction::Add(amount) if *amount < 0 => panic!("negative amount"),
                CounterAction::Add(amount) => state + amount,
                _ => state,
            }
        });
        store.dispatch(CounterAction::Add(2)).unwrap();

        let result = panic::catch_unwind(AssertUnwindSafe(|| store.dispatch(CounterAction::Add(-1))));

        assert!(result.is_err());
        assert_eq!(store.get_state(), 2);
        store.dispatch(CounterAction::Add(1)).unwrap();
        assert_eq!(store.get_state(), 3);
    }

    #[test]
    fn test_dispatch_from_reducer_is_refused() {
        let handle: Rc<RefCell<Option<WeakStore<i64, CounterAction>>>> = Rc::new(RefCell::new(None));
        let errors = Rc::new(RefCell::new(Vec::new()));
        let (slot, sink) = (Rc::clone(&handle), Rc::clone(&errors));

        let store = Store::new(move |state: Option<i64>, action: &CounterAction| {
            if let (CounterAction::Increment, Some(store)) =
                (action, slot.borrow().as_ref().and_then(WeakStore::upgrade))
            {
                if let Err(e) = store.dispatch(CounterAction::Add(100)) {
                    sink.borrow_mut().push(e.to_string());
                }
            }
            counter(state, action)
        });
        *handle.borrow_mut() = Some(store.downgrade());

        store.dispatch(CounterAction::Increment).unwrap();

        assert_eq!(store.get_state(), 1);
        assert_eq!(
            *errors.borrow(),
            vec!["`ADD` was dispatched while a reducer was running"]
        );
    }

    #[test]
    fn test_debug_output() {
        let store = Store::new(counter);
        store.subscribe(|| {});
        assert_eq!(
            format!("{:?}", store),
            "Store { state: 0, listeners: 1, middleware: 0 }"
        );
    }
}
