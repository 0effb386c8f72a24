//! # How to use audioroute
//!
//! Here are some concepts audioroute exposes:
//!
//! - An [`OutputRoute`] is one of the four audio output routing targets found
//!   on handset-class hardware: the speakerphone, a wired headset, the handset
//!   earpiece and a bluetooth headset.
//! - A [`Router`] tracks which routes are currently available and which route,
//!   if any, has been explicitly requested, and arbitrates which single route
//!   should carry audio at any moment.
//! - A [`RouteSinkTrait`](traits::RouteSinkTrait) connects the router to the
//!   platform: it answers the one capability question the router asks at
//!   session start (is an earpiece physically present) and receives the
//!   activation commands the router emits.
//!
//! ## Quick Start
//!
//! Create a [`Router`] over a sink, feed it availability changes from
//! whatever mechanism your platform offers, and ask it for routes:
//!
//! ```
//! use audioroute::sink::null::NullSink;
//! use audioroute::{OutputRoute, RouteRequest, Router};
//!
//! let router = Router::new(NullSink::new());
//!
//! // A bluetooth headset shows up; nothing is activated until requested.
//! router.route_availability_changed(OutputRoute::BluetoothHeadset, true);
//!
//! // Ask for the default-selection policy. The bluetooth headset wins over
//! // the speakerphone and an activation command is issued for it.
//! router.request(RouteRequest::Default)?;
//!
//! assert!(router.available_routes().contains(OutputRoute::BluetoothHeadset));
//! # Ok::<(), audioroute::RequestRouteError>(())
//! ```
//!
//! Requesting a route that is not present fails synchronously and leaves the
//! router untouched:
//!
//! ```
//! use audioroute::sink::null::NullSink;
//! use audioroute::{OutputRoute, RequestRouteError, RouteRequest, Router};
//!
//! let router = Router::new(NullSink::new());
//! let err = router
//!     .request(RouteRequest::Route(OutputRoute::WiredHeadset))
//!     .unwrap_err();
//! assert_eq!(err, RequestRouteError::InvalidSelection);
//! ```
//!
//! The router holds no threads and performs no blocking work. Availability
//! events and requests may arrive from different threads; the router
//! serializes access to its state internally and calls the sink outside of
//! its own lock.
//!
//! Alongside routing, the crate carries two small device-facing helpers:
//! [`usb_midi`] recovers event-packet boundaries from USB-MIDI transfer
//! buffers, and [`params`] holds the audio parameter fallbacks used when
//! platform property queries fail.

pub use error::*;
pub use params::{
    ChannelCount, FrameCount, SampleRate, DEFAULT_FRAMES_PER_BUFFER, DEFAULT_SAMPLE_RATE,
};
pub use router::Router;

use std::fmt;

mod error;
pub mod params;
mod router;
pub mod sink;
pub mod traits;
pub mod usb_midi;

/// One of the four audio output routing targets.
///
/// The speakerphone is always present. The earpiece only exists on
/// phone-class hardware, and is mutually exclusive with the wired headset:
/// plugging a headset in physically disables the earpiece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputRoute {
    /// The built-in loudspeaker. Always available; the fallback route.
    Speakerphone,
    /// A wired headset, with or without a microphone.
    WiredHeadset,
    /// The handset earpiece. Never chosen by default-selection; it can only
    /// become active through an explicit request.
    Earpiece,
    /// A bluetooth headset.
    BluetoothHeadset,
}

impl OutputRoute {
    /// All routes, in declaration order.
    pub const ALL: [OutputRoute; 4] = [
        OutputRoute::Speakerphone,
        OutputRoute::WiredHeadset,
        OutputRoute::Earpiece,
        OutputRoute::BluetoothHeadset,
    ];

    /// The human-readable name of the route.
    pub fn name(&self) -> &'static str {
        match self {
            OutputRoute::Speakerphone => "Speakerphone",
            OutputRoute::WiredHeadset => "Wired headset",
            OutputRoute::Earpiece => "Headset earpiece",
            OutputRoute::BluetoothHeadset => "Bluetooth headset",
        }
    }

    fn index(self) -> usize {
        match self {
            OutputRoute::Speakerphone => 0,
            OutputRoute::WiredHeadset => 1,
            OutputRoute::Earpiece => 2,
            OutputRoute::BluetoothHeadset => 3,
        }
    }
}

impl fmt::Display for OutputRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a caller has asked the router for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequest {
    /// Defer to the default-selection policy: wired headset first, then
    /// bluetooth, with the speakerphone as fallback.
    Default,
    /// Pin the named route for as long as it stays available.
    Route(OutputRoute),
}

/// The set of routes currently present on the system.
///
/// Values of this type returned by [`Router::available_routes`] are plain
/// copies taken under the router's lock; callers never observe a partially
/// updated set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailableRoutes {
    present: [bool; OutputRoute::ALL.len()],
}

impl AvailableRoutes {
    /// Whether `route` is present in the set.
    pub fn contains(&self, route: OutputRoute) -> bool {
        self.present[route.index()]
    }

    /// The number of routes present.
    pub fn len(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    /// Whether no route is present.
    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|&p| p)
    }

    /// An iterator yielding the present routes in declaration order.
    pub fn iter(self) -> impl Iterator<Item = OutputRoute> {
        OutputRoute::ALL
            .into_iter()
            .filter(move |route| self.present[route.index()])
    }

    pub(crate) fn insert(&mut self, route: OutputRoute) {
        self.present[route.index()] = true;
    }

    pub(crate) fn remove(&mut self, route: OutputRoute) {
        self.present[route.index()] = false;
    }
}

impl fmt::Display for AvailableRoutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for route in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}", route)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names() {
        assert_eq!(OutputRoute::Speakerphone.to_string(), "Speakerphone");
        assert_eq!(OutputRoute::WiredHeadset.to_string(), "Wired headset");
        assert_eq!(OutputRoute::Earpiece.to_string(), "Headset earpiece");
        assert_eq!(
            OutputRoute::BluetoothHeadset.to_string(),
            "Bluetooth headset"
        );
    }

    #[test]
    fn empty_set() {
        let routes = AvailableRoutes::default();
        assert!(routes.is_empty());
        assert_eq!(routes.len(), 0);
        assert_eq!(routes.iter().count(), 0);
        for route in OutputRoute::ALL {
            assert!(!routes.contains(route));
        }
    }

    #[test]
    fn insert_and_remove() {
        let mut routes = AvailableRoutes::default();
        routes.insert(OutputRoute::WiredHeadset);
        routes.insert(OutputRoute::Speakerphone);
        assert_eq!(routes.len(), 2);
        assert!(routes.contains(OutputRoute::WiredHeadset));

        routes.remove(OutputRoute::WiredHeadset);
        assert!(!routes.contains(OutputRoute::WiredHeadset));
        assert_eq!(routes.len(), 1);
    }

    #[test]
    fn iteration_order_is_declaration_order() {
        let mut routes = AvailableRoutes::default();
        routes.insert(OutputRoute::BluetoothHeadset);
        routes.insert(OutputRoute::Speakerphone);
        let collected: Vec<_> = routes.iter().collect();
        assert_eq!(
            collected,
            [OutputRoute::Speakerphone, OutputRoute::BluetoothHeadset]
        );
    }

    #[test]
    fn display_joins_names() {
        let mut routes = AvailableRoutes::default();
        routes.insert(OutputRoute::Speakerphone);
        routes.insert(OutputRoute::Earpiece);
        assert_eq!(routes.to_string(), "Speakerphone, Headset earpiece");
    }
}
