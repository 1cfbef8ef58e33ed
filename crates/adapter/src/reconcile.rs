//! Differential redraw against a shadow snapshot.
//!
//! The reconciler remembers the last snapshot it pushed to a presenter. The
//! next call only redraws cells whose tag changed, the preview when the next
//! piece changed, and the status when the phase changed or the line count
//! went up. With no shadow (first call, resize, explicit invalidation) every
//! cell and the preview are drawn.

use crate::core::Snapshot;
use crate::presenter::Presenter;
use crate::types::Phase;

/// What a reconcile pass actually emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedrawStats {
    pub full: bool,
    pub cells: usize,
    pub preview: bool,
    pub status: bool,
}

#[derive(Debug, Clone)]
pub struct Reconciler {
    shadow: Option<Snapshot>,
    /// Last status pushed; a fresh engine reads as `GameOver` with 0 lines.
    status: (Phase, u32),
    pushed_status: bool,
    repush_status: bool,
}

impl Reconciler {
    pub fn new() -> Self {
        Self {
            shadow: None,
            status: (Phase::GameOver, 0),
            pushed_status: false,
            repush_status: false,
        }
    }

    /// Force the next pass to redraw everything.
    ///
    /// A status that was already shown once is pushed again too, since the
    /// presenter may have lost it.
    pub fn invalidate(&mut self) {
        self.shadow = None;
        self.repush_status = self.pushed_status;
    }

    pub fn reconcile<P: Presenter + ?Sized>(&mut self, snap: &Snapshot, out: &mut P) -> RedrawStats {
        let prev = self.shadow.as_ref().filter(|prev| prev.same_size(snap));
        let mut stats = RedrawStats {
            full: prev.is_none(),
            ..RedrawStats::default()
        };

        for y in 0..snap.height() {
            for x in 0..snap.width() {
                let cell = snap.cell(x, y);
                if prev.map_or(true, |p| p.cell(x, y) != cell) {
                    out.draw_cell(x, y, cell);
                    stats.cells += 1;
                }
            }
        }

        if prev.map_or(true, |p| p.next != snap.next) {
            out.draw_preview(snap.next);
            stats.preview = true;
        }

        let (phase, lines) = self.status;
        if self.repush_status || snap.phase != phase || snap.lines > lines {
            out.set_status(snap.phase, snap.lines);
            stats.status = true;
            self.pushed_status = true;
        }
        self.status = (snap.phase, snap.lines);
        self.repush_status = false;

        match self.shadow.as_mut() {
            Some(shadow) => shadow.clone_from(snap),
            None => self.shadow = Some(snap.clone()),
        }
        stats
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}
