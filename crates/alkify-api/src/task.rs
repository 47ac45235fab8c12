use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Trip-wire tying an in-flight fetch to the view that issued it. The
/// view aborts the handle in its cleanup hook; the fetch checks it after
/// awaiting, so a stale response never updates an unmounted view.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborting_is_visible_through_clones() {
        let handle = AbortHandle::new();
        let task_side = handle.clone();
        assert!(!task_side.is_aborted());

        handle.abort();
        assert!(task_side.is_aborted());
    }
}
