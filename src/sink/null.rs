use crate::traits::RouteSinkTrait;
use crate::OutputRoute;

/// A sink for systems without routable audio output.
///
/// Activation commands are discarded and no earpiece is reported, so
/// default-selection always lands on the speakerphone. Useful headless and
/// in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> NullSink {
        NullSink
    }
}

impl RouteSinkTrait for NullSink {
    #[inline]
    fn has_earpiece(&self) -> bool {
        false
    }

    #[inline]
    fn activate(&self, _route: OutputRoute) {}
}
