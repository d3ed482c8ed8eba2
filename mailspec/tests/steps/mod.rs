mod application;
mod email;
mod navigation;

use mailspec::steps::Error;

/// Fails the running step with the message of the error.
pub fn check<T>(outcome: Result<T, Error>) -> T {
    match outcome {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
