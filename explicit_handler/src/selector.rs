/// Selects the handler type in an explicit handler hint.
///
/// Only meant to be used inside the hint closure:
/// `mediator.send_to_explicit_handler(|x| x.of_type::<MyRequestHandler>(), req)`.
///
/// Handler types named through [`of_type`](TypeSelector::of_type) must implement
/// `Default`. A handler holding state can still be named by returning a value of
/// it from the hint closure: `|_| MyRequestHandler(service.clone())`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSelector;

impl TypeSelector {
    /// Returns the default value of `T`.
    ///
    /// No handler is looked up or checked against the mediator.
    pub fn of_type<T: Default>(&self) -> T {
        T::default()
    }
}
