//! The trait allowing audioroute to abstract over platform routing backends.

use crate::OutputRoute;

/// A **RouteSink** carries the router's decisions to the platform.
///
/// The router asks a sink exactly one capability question, once, at session
/// start, and hands it every activation command it arbitrates. Everything
/// else about the platform — how availability changes are observed, how the
/// routing call is made, which thread any of this happens on — stays on the
/// sink's side of this seam.
pub trait RouteSinkTrait {
    /// Whether an earpiece-class transducer is physically present.
    ///
    /// Read once when the [`Router`](crate::Router) is created; the answer
    /// seeds the initial availability set and decides whether the earpiece
    /// reappears when a wired headset is unplugged.
    fn has_earpiece(&self) -> bool;

    /// Route audio output to `route`.
    ///
    /// Called outside the router's lock. The router may activate the same
    /// route twice in a row; implementations must tolerate that without
    /// error (the underlying platform call is expected to be idempotent,
    /// though the sink is free to let each call produce its own observable
    /// routing event).
    fn activate(&self, route: OutputRoute);
}
