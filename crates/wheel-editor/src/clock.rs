//! Wall-clock labels for history entries.

/// Produces the human-readable timestamp stamped on each result.
pub trait Clock {
    fn timestamp(&self) -> String;
}

impl<F> Clock for F
where
    F: Fn() -> String,
{
    fn timestamp(&self) -> String {
        self()
    }
}
