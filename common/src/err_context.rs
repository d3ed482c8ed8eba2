/// A module for attaching a human readable context to errors.

/// An error (E), and the context (C) in which it occurred.
#[derive(Debug)]
pub struct ErrorContext<E, C = String>(pub C, pub E);

/// Extends `Result` with a `context` method, so that the error side
/// can be converted into a richer error with `?`.
pub trait ErrorContextExt<T, E> {
    fn context<C: Into<String>>(self, c: C) -> Result<T, ErrorContext<E>>;
}

impl<T, E> ErrorContextExt<T, E> for Result<T, E> {
    fn context<C: Into<String>>(self, c: C) -> Result<T, ErrorContext<E>> {
        self.map_err(|e| ErrorContext(c.into(), e))
    }
}
