//! Progress notification port
//!
//! Defines the interface for reporting an in-flight lookup.

/// Callback for lookup progress
///
/// Implementations live in the presentation layer (a spinner, a loading
/// overlay, ...). `on_lookup_start` and `on_lookup_finish` are each called
/// once per lookup that reaches the network, whatever the outcome.
pub trait LookupProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_lookup_start(&self, date: &str);

    /// Called after the lookup has completed or failed
    fn on_lookup_finish(&self, date: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LookupProgressNotifier for NoProgress {
    fn on_lookup_start(&self, _date: &str) {}
    fn on_lookup_finish(&self, _date: &str, _success: bool) {}
}
