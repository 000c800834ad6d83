/// Watches a self-test run case by case and may cut it short.
///
/// Each event is answered with an optional action: `None` means carry on.
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` watches
/// silently.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
