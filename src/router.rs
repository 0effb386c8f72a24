use std::sync::Mutex;

use crate::error::RequestRouteError;
use crate::traits::RouteSinkTrait;
use crate::{AvailableRoutes, OutputRoute, RouteRequest};

/// Arbitrates which single output route should carry audio.
///
/// A `Router` is driven by two event sources: explicit selection requests
/// ([`request`](Router::request)) and hardware-presence notifications
/// ([`route_availability_changed`](Router::route_availability_changed)). It
/// emits one output, an activation command naming exactly one route, through
/// the sink it was created over.
///
/// Availability and the recorded request are guarded together by a single
/// lock, held only for the read-modify-write. The sink is always called
/// after the lock has been released.
pub struct Router<S: RouteSinkTrait> {
    sink: S,
    has_earpiece: bool,
    state: Mutex<RouteState>,
}

#[derive(Clone, Copy)]
struct RouteState {
    available: AvailableRoutes,
    // `None` until the first call to `request`. Availability changes alone
    // never activate anything; see `route_availability_changed`.
    requested: Option<RouteRequest>,
}

impl<S: RouteSinkTrait> Router<S> {
    /// Creates a router over `sink` and seeds the availability set.
    ///
    /// The speakerphone is always present. The earpiece is present if the
    /// sink's capability query says one physically exists. Every other route
    /// starts absent and is announced later through
    /// [`route_availability_changed`](Router::route_availability_changed).
    pub fn new(sink: S) -> Router<S> {
        let has_earpiece = sink.has_earpiece();
        let mut available = AvailableRoutes::default();
        available.insert(OutputRoute::Speakerphone);
        if has_earpiece {
            available.insert(OutputRoute::Earpiece);
        }
        Router {
            sink,
            has_earpiece,
            state: Mutex::new(RouteState {
                available,
                requested: None,
            }),
        }
    }

    /// Records `request` and immediately activates the route it arbitrates
    /// to.
    ///
    /// A specific route must currently be available, otherwise the call
    /// fails with [`RequestRouteError::InvalidSelection`] and has no side
    /// effect. [`RouteRequest::Default`] always succeeds.
    pub fn request(&self, request: RouteRequest) -> Result<(), RequestRouteError> {
        let route = {
            let mut state = self.state.lock().unwrap();
            if let RouteRequest::Route(route) = request {
                if !state.available.contains(route) {
                    return Err(RequestRouteError::InvalidSelection);
                }
            }
            state.requested = Some(request);
            arbitrate(state.available, request)
        };
        self.activate(route);
        Ok(())
    }

    /// Applies a presence change for `route` and, if a request is on file,
    /// re-arbitrates and reissues the activation command.
    ///
    /// The wired headset and the earpiece are toggled as a pair: a headset
    /// plug removes the earpiece in the same update, and an unplug restores
    /// it when the capability query said one exists. The speakerphone is
    /// modelled as always present; attempts to remove it are ignored.
    ///
    /// Without a previously recorded request this only updates the set —
    /// a freshly available route is never activated spontaneously.
    pub fn route_availability_changed(&self, route: OutputRoute, is_available: bool) {
        let update = {
            let mut state = self.state.lock().unwrap();
            match (route, is_available) {
                (OutputRoute::Speakerphone, true) => {}
                (OutputRoute::Speakerphone, false) => {
                    log::warn!("ignoring attempt to remove the speakerphone route");
                    return;
                }
                (OutputRoute::WiredHeadset, true) => {
                    // Wired headset and earpiece are mutually exclusive.
                    state.available.insert(OutputRoute::WiredHeadset);
                    state.available.remove(OutputRoute::Earpiece);
                }
                (OutputRoute::WiredHeadset, false) => {
                    state.available.remove(OutputRoute::WiredHeadset);
                    if self.has_earpiece {
                        state.available.insert(OutputRoute::Earpiece);
                    }
                }
                (OutputRoute::Earpiece, true) => {
                    state.available.insert(OutputRoute::Earpiece);
                    state.available.remove(OutputRoute::WiredHeadset);
                }
                (OutputRoute::Earpiece, false) => {
                    state.available.remove(OutputRoute::Earpiece);
                }
                (OutputRoute::BluetoothHeadset, true) => {
                    state.available.insert(OutputRoute::BluetoothHeadset);
                }
                (OutputRoute::BluetoothHeadset, false) => {
                    state.available.remove(OutputRoute::BluetoothHeadset);
                }
            }
            log::debug!(
                "route {} now {}, available: [{}]",
                route,
                if is_available { "present" } else { "absent" },
                state.available,
            );
            state
                .requested
                .map(|request| arbitrate(state.available, request))
        };
        if let Some(route) = update {
            self.activate(route);
        }
    }

    /// The set of routes currently present.
    ///
    /// The returned value is a copy of the current state; it does not track
    /// later changes.
    pub fn available_routes(&self) -> AvailableRoutes {
        self.state.lock().unwrap().available
    }

    // The one externally observable output. Runs outside the state lock.
    fn activate(&self, route: OutputRoute) {
        log::debug!("activating {}", route);
        self.sink.activate(route);
    }
}

/// Default-selection policy: the "most unique" available route wins. Wired
/// headset first, then bluetooth, with the speakerphone as fallback. The
/// earpiece is never chosen here; it only becomes active through an explicit
/// request.
fn select_default_route(available: AvailableRoutes) -> OutputRoute {
    if available.contains(OutputRoute::WiredHeadset) {
        OutputRoute::WiredHeadset
    } else if available.contains(OutputRoute::BluetoothHeadset) {
        OutputRoute::BluetoothHeadset
    } else {
        OutputRoute::Speakerphone
    }
}

/// Maps the recorded request and the current availability to the single
/// route to activate. A pinned route that has since disappeared falls back
/// to the default-selection policy; the request itself stays on file, so the
/// route is picked up again once it reappears.
fn arbitrate(available: AvailableRoutes, requested: RouteRequest) -> OutputRoute {
    match requested {
        RouteRequest::Route(route) if available.contains(route) => route,
        _ => select_default_route(available),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(present: &[OutputRoute]) -> AvailableRoutes {
        let mut available = AvailableRoutes::default();
        for &route in present {
            available.insert(route);
        }
        available
    }

    #[test]
    fn default_selection_priority() {
        use OutputRoute::*;

        assert_eq!(
            select_default_route(routes(&[Speakerphone, WiredHeadset, BluetoothHeadset])),
            WiredHeadset
        );
        assert_eq!(
            select_default_route(routes(&[Speakerphone, BluetoothHeadset])),
            BluetoothHeadset
        );
        assert_eq!(select_default_route(routes(&[Speakerphone])), Speakerphone);
    }

    #[test]
    fn default_selection_is_total() {
        // Exactly one route for every possible availability set, and never
        // the earpiece.
        for bits in 0..16u8 {
            let mut available = AvailableRoutes::default();
            for (i, route) in OutputRoute::ALL.into_iter().enumerate() {
                if bits & (1 << i) != 0 {
                    available.insert(route);
                }
            }
            let selected = select_default_route(available);
            assert_ne!(selected, OutputRoute::Earpiece);
        }
    }

    #[test]
    fn default_selection_skips_earpiece() {
        assert_eq!(
            select_default_route(routes(&[OutputRoute::Speakerphone, OutputRoute::Earpiece])),
            OutputRoute::Speakerphone
        );
    }

    #[test]
    fn arbitrate_prefers_available_pinned_route() {
        let available = routes(&[OutputRoute::Speakerphone, OutputRoute::Earpiece]);
        assert_eq!(
            arbitrate(available, RouteRequest::Route(OutputRoute::Earpiece)),
            OutputRoute::Earpiece
        );
    }

    #[test]
    fn arbitrate_falls_back_when_pinned_route_is_gone() {
        let available = routes(&[OutputRoute::Speakerphone, OutputRoute::BluetoothHeadset]);
        assert_eq!(
            arbitrate(available, RouteRequest::Route(OutputRoute::WiredHeadset)),
            OutputRoute::BluetoothHeadset
        );
    }
}
