/// Reducer - pure function that produces the next state from current state + action
///
/// `None` means "no state yet": the reducer answers it with its default.
/// For an action it does not recognise, a reducer must hand back the state it
/// was given, so shared (`Arc`) state keeps its identity.
///
/// Any `Fn(Option<S>, &A) -> S` is a reducer.
pub trait Reducer<S, A> {
    fn reduce(&self, state: Option<S>, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(Option<S>, &A) -> S,
{
    fn reduce(&self, state: Option<S>, action: &A) -> S {
        self(state, action)
    }
}
