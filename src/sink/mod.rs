//! Routing backends bundled with the crate.
//!
//! Platform integrations implement [`RouteSinkTrait`](crate::traits::RouteSinkTrait)
//! themselves; the backends here cover the cases that need no platform.

pub mod null;
