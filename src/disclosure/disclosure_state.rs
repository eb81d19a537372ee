use std::cell::RefCell;
use std::rc::Rc;

/// Callback run on an open or close request
pub type Callback = Box<dyn FnMut()>;

/// Who owns the open flag, decided once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The instance flips its own flag
    Owned(bool),
    /// The controlling owner supplies the flag; requests only notify it
    Delegated(bool),
}

#[derive(Default)]
pub struct DisclosureOptions {
    /// Controlled value. `Some` switches the disclosure to delegated mode.
    pub is_open: Option<bool>,
    pub default_is_open: bool,
    pub on_open: Option<Callback>,
    pub on_close: Option<Callback>,
}

type SharedCallback = Rc<RefCell<Callback>>;

/// Callback owed for a transition that has already been applied.
///
/// Returned by [`Disclosure::begin_open`] and [`Disclosure::begin_close`] so
/// the caller can release any borrow on the disclosure before the callback
/// runs. The callback may then freely call back into whatever owns it.
#[must_use = "the open/close callback only runs when `run` is called"]
pub struct Notify(Option<SharedCallback>);

impl Notify {
    pub fn run(self) {
        let Some(callback) = self.0 else {
            return;
        };
        // A callback that re-triggers its own transition does not recurse
        match callback.try_borrow_mut() {
            Ok(mut callback) => (*callback)(),
            Err(_) => log::debug!("skipping re-entrant disclosure callback"),
        }
    }
}

impl std::fmt::Debug for Notify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Notify").field(&self.0.is_some()).finish()
    }
}

pub struct Disclosure {
    ownership: Ownership,
    on_open: Option<SharedCallback>,
    on_close: Option<SharedCallback>,
}

impl Disclosure {
    pub fn new(options: DisclosureOptions) -> Self {
        let ownership = match options.is_open {
            Some(is_open) => Ownership::Delegated(is_open),
            None => Ownership::Owned(options.default_is_open),
        };
        Self {
            ownership,
            on_open: options.on_open.map(|f| Rc::new(RefCell::new(f))),
            on_close: options.on_close.map(|f| Rc::new(RefCell::new(f))),
        }
    }

    pub fn uncontrolled() -> Self {
        Self::new(DisclosureOptions::default())
    }

    pub fn is_open(&self) -> bool {
        match self.ownership {
            Ownership::Owned(is_open) | Ownership::Delegated(is_open) => is_open,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.ownership, Ownership::Delegated(_))
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Returns `true` when the request changed the flag (owned mode) or was
    /// forwarded to the owner (delegated mode).
    pub fn open(&mut self) -> bool {
        self.begin_open().map(Notify::run).is_some()
    }

    pub fn close(&mut self) -> bool {
        self.begin_close().map(Notify::run).is_some()
    }

    /// Apply an open request without running `on_open`. `None` when the
    /// disclosure was already open.
    pub fn begin_open(&mut self) -> Option<Notify> {
        match self.ownership {
            Ownership::Owned(true) => None,
            Ownership::Owned(false) => {
                self.ownership = Ownership::Owned(true);
                Some(Notify(self.on_open.clone()))
            }
            Ownership::Delegated(_) => Some(Notify(self.on_open.clone())),
        }
    }

    pub fn begin_close(&mut self) -> Option<Notify> {
        match self.ownership {
            Ownership::Owned(false) => None,
            Ownership::Owned(true) => {
                self.ownership = Ownership::Owned(false);
                Some(Notify(self.on_close.clone()))
            }
            Ownership::Delegated(_) => Some(Notify(self.on_close.clone())),
        }
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Update the controlled value. Ignored for owned disclosures.
    pub fn set_controlled_open(&mut self, is_open: bool) {
        if let Ownership::Delegated(current) = &mut self.ownership {
            *current = is_open;
        }
    }
}

impl std::fmt::Debug for Disclosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disclosure")
            .field("ownership", &self.ownership)
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "disclosure_state_tests.rs"]
mod disclosure_state_tests;
