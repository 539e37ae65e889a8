use smallvec::SmallVec;

/// One-shot "run after the next paint" hook.
///
/// Commands queued with [`pre_draw`](Self::pre_draw) are handed back exactly
/// once by the next [`on_draw`](Self::on_draw), after the host painted the
/// frame. The collapse animation uses it to restore a row's layout only once
/// the collapsed frame is on screen.
#[derive(Debug)]
pub struct DeferredPaintCallback<C> {
    pending: SmallVec<[C; 1]>,
}

impl<C> Default for DeferredPaintCallback<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> DeferredPaintCallback<C> {
    pub fn new() -> Self {
        Self {
            pending: SmallVec::new(),
        }
    }

    pub fn pre_draw(&mut self, command: C) {
        self.pending.push(command);
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Takes every queued command, in queue order.
    pub fn on_draw(&mut self) -> SmallVec<[C; 1]> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_run_once_after_paint() {
        let mut hook = DeferredPaintCallback::new();
        assert!(!hook.is_pending());

        hook.pre_draw("restore row 3");
        hook.pre_draw("restore row 5");
        assert!(hook.is_pending());

        let commands = hook.on_draw();
        assert_eq!(commands.as_slice(), &["restore row 3", "restore row 5"]);
        assert!(!hook.is_pending());
        assert!(hook.on_draw().is_empty());
    }
}
