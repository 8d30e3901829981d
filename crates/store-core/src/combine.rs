//! Reducer composer - one root reducer over a keyed state tree
//!
//! Each slice of the tree is owned by exactly one slice reducer. The root
//! reducer built by [`combine_reducers`] runs every slice reducer for every
//! action and assembles a fresh [`StateTree`] covering all declared keys.
//! Slices that a reducer hands back untouched keep their `Arc` identity.

use crate::reducer::Reducer;
use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

type SliceFmt = fn(&(dyn Any + Send + Sync), &mut fmt::Formatter<'_>) -> fmt::Result;

/// Type-erased, shared slice state
#[derive(Clone)]
pub struct Slice {
    value: Arc<dyn Any + Send + Sync>,
    fmt: SliceFmt,
}

impl Slice {
    pub fn new<T>(value: Arc<T>) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        Self {
            value,
            fmt: fmt_slice::<T>,
        }
    }

    /// Typed view of this slice, `None` if it holds a different type
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Whether both slices share the same allocation
    pub fn ptr_eq(&self, other: &Slice) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

fn fmt_slice<T: Debug + 'static>(
    value: &(dyn Any + Send + Sync),
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match value.downcast_ref::<T>() {
        Some(value) => value.fmt(f),
        None => f.write_str("<slice>"),
    }
}

impl Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.fmt)(self.value.as_ref(), f)
    }
}

/// Keyed state tree, slices kept in declaration order
#[derive(Clone, Default)]
pub struct StateTree {
    slices: Vec<(&'static str, Slice)>,
}

impl StateTree {
    /// Typed slice under `key`
    pub fn get<T>(&self, key: &str) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.slice(key).and_then(Slice::downcast::<T>)
    }

    pub fn slice(&self, key: &str) -> Option<&Slice> {
        self.slices
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, slice)| slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Whether `key` refers to the same allocation in both trees
    pub fn same_slice(&self, other: &StateTree, key: &str) -> bool {
        match (self.slice(key), other.slice(key)) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Debug for StateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slices.iter().map(|(name, slice)| (name, slice)))
            .finish()
    }
}

type SliceReducer<A> = Box<dyn Fn(Option<&Slice>, &A) -> Slice>;

/// Builder for a [`CombinedReducer`]
pub struct CombineReducers<A> {
    reducers: Vec<(&'static str, SliceReducer<A>)>,
}

/// Start composing a root reducer from named slice reducers
///
/// ```ignore
/// let root = combine_reducers()
///     .slice("todos", todos_reducer::reduce)
///     .slice("goals", goals_reducer::reduce)
///     .build();
/// ```
pub fn combine_reducers<A>() -> CombineReducers<A> {
    CombineReducers {
        reducers: Vec::new(),
    }
}

impl<A: 'static> CombineReducers<A> {
    /// Register the reducer owning slice `key`
    ///
    /// Registering a key twice replaces the earlier reducer but keeps its position.
    pub fn slice<T, F>(mut self, key: &'static str, reducer: F) -> Self
    where
        T: Debug + Send + Sync + 'static,
        F: Fn(Option<Arc<T>>, &A) -> Arc<T> + 'static,
    {
        let erased: SliceReducer<A> = Box::new(move |previous: Option<&Slice>, action: &A| {
            let previous = previous.and_then(|slice| {
                let typed = slice.downcast::<T>();
                if typed.is_none() {
                    log::warn!("Slice `{}` holds an unexpected type, resetting to default", key);
                }
                typed
            });
            Slice::new(reducer(previous, action))
        });

        match self.reducers.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => {
                log::warn!("Reducer for slice `{}` registered twice, keeping the last one", key);
                entry.1 = erased;
            }
            None => self.reducers.push((key, erased)),
        }
        self
    }

    pub fn build(self) -> CombinedReducer<A> {
        CombinedReducer {
            reducers: self.reducers,
        }
    }
}

/// Root reducer produced by [`combine_reducers`]
pub struct CombinedReducer<A> {
    reducers: Vec<(&'static str, SliceReducer<A>)>,
}

impl<A> CombinedReducer<A> {
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reducers.iter().map(|(name, _)| *name)
    }
}

impl<A> Reducer<StateTree, A> for CombinedReducer<A> {
    fn reduce(&self, state: Option<StateTree>, action: &A) -> StateTree {
        let slices = self
            .reducers
            .iter()
            .map(|(key, reducer)| {
                let previous = state.as_ref().and_then(|tree| tree.slice(key));
                (*key, reducer(previous, action))
            })
            .collect();

        StateTree { slices }
    }
}
