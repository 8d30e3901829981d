use std::fmt::Debug;

/// Action - immutable description of a requested state transition
///
/// Usually an enum where every variant carries its own payload. Actions are
/// created fresh per dispatch and have no identity beyond their content.
pub trait Action: Debug {
    /// Discriminant of this action, e.g. `"ADD_TODO"`
    fn kind(&self) -> &'static str;

    /// No-op action dispatched once when a store is created
    ///
    /// No reducer may recognise it: every slice answers it with its default.
    fn bootstrap() -> Self
    where
        Self: Sized;
}
