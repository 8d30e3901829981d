//! Copy-on-write helpers for shared lists
//!
//! Every helper returns a new list that shares untouched elements with the
//! input, or the input itself when nothing would change.

use std::sync::Arc;

pub type SharedList<T> = Arc<Vec<Arc<T>>>;

pub fn append<T>(list: &SharedList<T>, item: T) -> SharedList<T> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend(list.iter().cloned());
    next.push(Arc::new(item));
    Arc::new(next)
}

/// Drop every element matching `remove`; no match hands back `list` itself
pub fn remove_where<T>(list: SharedList<T>, remove: impl Fn(&T) -> bool) -> SharedList<T> {
    if !list.iter().any(|item| remove(&**item)) {
        return list;
    }
    Arc::new(list.iter().filter(|&item| !remove(&**item)).cloned().collect())
}

/// Replace every element matching `matches` with `update(element)`
pub fn update_where<T>(
    list: SharedList<T>,
    matches: impl Fn(&T) -> bool,
    update: impl Fn(&T) -> T,
) -> SharedList<T> {
    if !list.iter().any(|item| matches(&**item)) {
        return list;
    }
    Arc::new(
        list.iter()
            .map(|item| {
                if matches(&**item) {
                    Arc::new(update(&**item))
                } else {
                    Arc::clone(item)
                }
            })
            .collect(),
    )
}

pub fn from_items<T>(items: impl IntoIterator<Item = T>) -> SharedList<T> {
    Arc::new(items.into_iter().map(Arc::new).collect())
}
