//! Cooperative cancellation of long-running operations.
//!
//! The engines poll a thread-local interrupt flag between their top-level
//! stages (noding passes, labeling, ring assembly). When the flag is raised,
//! the in-progress operation aborts with [`Error::Interrupted`] and releases
//! everything it allocated; no partial result is observable.
//!
//! A per-thread callback may be registered instead of (or in addition to)
//! raising the flag directly; returning `true` from the callback raises the
//! flag at the next poll point. Registering callbacks is the embedding
//! wrapper's business; the core only promises to poll.
//!
//! ```
//! use sfgeo::interrupt;
//!
//! interrupt::request_interrupt();
//! assert!(interrupt::interrupt_requested());
//! interrupt::clear_interrupt();
//! assert!(!interrupt::interrupt_requested());
//! ```

use crate::{Error, Result};

use std::cell::Cell;

thread_local! {
    static INTERRUPT_REQUESTED: Cell<bool> = const { Cell::new(false) };
    static INTERRUPT_CALLBACK: Cell<Option<fn() -> bool>> = const { Cell::new(None) };
}

/// Raise the interrupt flag for the current thread.
///
/// The next operation poll point on this thread fails with
/// [`Error::Interrupted`], which also clears the flag.
pub fn request_interrupt() {
    INTERRUPT_REQUESTED.with(|flag| flag.set(true));
}

/// Lower the interrupt flag for the current thread.
pub fn clear_interrupt() {
    INTERRUPT_REQUESTED.with(|flag| flag.set(false));
}

/// Whether the interrupt flag is currently raised on this thread.
pub fn interrupt_requested() -> bool {
    INTERRUPT_REQUESTED.with(Cell::get)
}

/// Register a callback polled at the same safe points as the flag.
///
/// Returning `true` from the callback raises the flag. The callback is
/// per-thread and replaces any previously registered one.
pub fn register_interrupt_callback(callback: fn() -> bool) {
    INTERRUPT_CALLBACK.with(|cell| cell.set(Some(callback)));
}

/// Remove the interrupt callback for the current thread.
pub fn clear_interrupt_callback() {
    INTERRUPT_CALLBACK.with(|cell| cell.set(None));
}

/// Poll point: called by the engines between expensive stages.
pub(crate) fn check() -> Result<()> {
    if INTERRUPT_CALLBACK.with(Cell::get).is_some_and(|callback| callback()) {
        request_interrupt();
    }
    if interrupt_requested() {
        clear_interrupt();
        return Err(Error::Interrupted);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flag_round_trip() {
        clear_interrupt();
        assert!(check().is_ok());

        request_interrupt();
        assert_eq!(check(), Err(Error::Interrupted));
        // raising the error clears the flag
        assert!(check().is_ok());
    }

    #[test]
    fn callback_raises_flag() {
        clear_interrupt();
        register_interrupt_callback(|| true);
        assert_eq!(check(), Err(Error::Interrupted));
        clear_interrupt_callback();
        assert!(check().is_ok());
    }
}
