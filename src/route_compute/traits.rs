/// Hooks called by the relaxation loop. Both default to no-ops.
pub trait SpfObserver<Id> {
    /// `vertex` improved from `previous` to `distance` through `via`.
    fn on_relax(&mut self, _vertex: &Id, _previous: f64, _distance: f64, _via: &Id) {}

    /// `vertex` was finalized at `distance`.
    fn on_settle(&mut self, _vertex: &Id, _distance: f64) {}
}

impl<Id> SpfObserver<Id> for () {}
