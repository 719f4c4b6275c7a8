//! Error types for the driver
//!
//! - [`Error`] - runtime errors of the panel entry points
//! - [`ProbeError`] - fatal errors while binding the driver to a device
//! - [`OutOfMemory`] - a mode sink could not store a mode
//!
//! Both enums are generic over the host's error types so a caller can match
//! on the exact code the DSI host or regulator framework reported.
//!
//! ## Example
//!
//! ```
//! use lt070me05000::Error;
//!
//! let err: Error<i32, i32> = Error::Transport(-5);
//! assert_eq!(err, Error::Transport(-5));
//! ```

/// Errors returned by the panel entry points
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error<T, R> {
    /// A DSI transfer failed
    ///
    /// Carries the error of the first failing write; the rest of the
    /// sequence was not sent.
    #[error("DSI transfer failed: {0:?}")]
    Transport(T),
    /// Enabling or disabling the supplies failed
    #[error("regulator operation failed: {0:?}")]
    Regulator(R),
    /// The probed mode could not be stored
    #[error("out of memory")]
    OutOfMemory,
}

impl<T, R> From<OutOfMemory> for Error<T, R> {
    fn from(_: OutOfMemory) -> Self {
        Error::OutOfMemory
    }
}

/// Errors that abort [`probe`](crate::driver::probe)
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError<D, H, T> {
    /// The supplies could not be acquired
    #[error("failed to init regulator: {0:?}")]
    Regulator(D),
    /// The display subsystem refused the panel
    #[error("failed to add panel: {0:?}")]
    Host(H),
    /// Attaching to the DSI host failed
    #[error("failed to attach to DSI host: {0:?}")]
    Transport(T),
}

/// A [`ModeSink`](crate::mode::ModeSink) ran out of room
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("out of memory")]
pub struct OutOfMemory;
