use thiserror::Error;

/// Errors that might occur when requesting an output route.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestRouteError {
    /// The requested route is not currently available. For example, a wired
    /// headset was named while none is plugged in. The request is rejected
    /// without any side effect; the previously recorded request, if any,
    /// stays in force.
    #[error("the requested route is not currently available")]
    InvalidSelection,
}
