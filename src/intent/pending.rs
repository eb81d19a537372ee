use std::time::Duration;

use super::identity::TooltipId;
use crate::timer::Flushable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    Show,
    Hide,
}

/// A scheduled show or hide for one tooltip
#[derive(Debug, Clone)]
pub struct Pending {
    kind: PendingKind,
    id: TooltipId,
    handle: Flushable,
}

impl Pending {
    pub(super) fn new(kind: PendingKind, id: TooltipId, handle: Flushable) -> Self {
        Self { kind, id, handle }
    }

    pub fn kind(&self) -> PendingKind {
        self.kind
    }

    pub fn id(&self) -> &TooltipId {
        &self.id
    }

    pub fn fire_at(&self) -> Duration {
        self.handle.fire_at()
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_pending()
    }

    pub(super) fn targets(&self, id: &TooltipId) -> bool {
        self.id == *id
    }

    pub(super) fn cancel(&self) -> bool {
        let cancelled = self.handle.cancel();
        if cancelled {
            log::debug!("cancelled pending {:?} for {}", self.kind, self.id);
        }
        cancelled
    }

    pub(super) fn flush(&self) -> bool {
        log::debug!("flushing pending {:?} for {}", self.kind, self.id);
        self.handle.flush()
    }
}

/// What a single tooltip is currently waiting for
#[derive(Debug, Clone, Default)]
pub enum PendingOp {
    #[default]
    None,
    Show(Pending),
    Hide(Pending),
}

impl PendingOp {
    pub fn is_none(&self) -> bool {
        matches!(self, PendingOp::None)
    }

    pub fn kind(&self) -> Option<PendingKind> {
        match self {
            PendingOp::None => None,
            PendingOp::Show(_) => Some(PendingKind::Show),
            PendingOp::Hide(_) => Some(PendingKind::Hide),
        }
    }
}
