//! User-facing diagnostic lines and the scoped warnings switch.
//!
//! The warnings flag lives on a [`Diagnostics`] value that callers pass
//! down, not in process-wide state. [`Diagnostics::with_warnings`] overrides
//! it for one call and a [`WarningsGuard`] puts the old value back on every
//! exit path, including unwinding.

use std::cell::{Cell, RefCell};

enum Sink {
    Stderr,
    Captured(RefCell<Vec<String>>),
}

pub struct Diagnostics {
    warnings: Cell<bool>,
    sink: Sink,
}

impl Diagnostics {
    /// Diagnostics written to stderr, warnings enabled.
    pub fn stderr() -> Self {
        Self {
            warnings: Cell::new(true),
            sink: Sink::Stderr,
        }
    }

    /// Diagnostics kept in memory; read them back with [`Diagnostics::lines`].
    pub fn captured() -> Self {
        Self {
            warnings: Cell::new(true),
            sink: Sink::Captured(RefCell::new(Vec::new())),
        }
    }

    pub fn warnings_enabled(&self) -> bool {
        self.warnings.get()
    }

    /// Set the warnings flag until the returned guard is dropped.
    pub fn override_warnings(&self, flag: bool) -> WarningsGuard<'_> {
        let previous = self.warnings.replace(flag);
        WarningsGuard {
            flag: &self.warnings,
            previous,
        }
    }

    /// Run `body` with the warnings flag set to `flag`.
    ///
    /// Whatever `body` returns, `Err` included, is handed back unchanged
    /// after the previous flag is restored.
    pub fn with_warnings<T>(&self, flag: bool, body: impl FnOnce() -> T) -> T {
        let _guard = self.override_warnings(flag);
        body()
    }

    /// Emit a line unconditionally.
    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        match &self.sink {
            Sink::Stderr => eprintln!("{}", line),
            Sink::Captured(lines) => lines.borrow_mut().push(line),
        }
    }

    /// Emit a line only while warnings are enabled.
    pub fn warn(&self, line: impl Into<String>) {
        if self.warnings_enabled() {
            self.say(format!("warning: {}", line.into()));
        }
    }

    /// Lines emitted so far. Always empty for the stderr sink.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stderr => Vec::new(),
            Sink::Captured(lines) => lines.borrow().clone(),
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Restores the warnings flag captured by [`Diagnostics::override_warnings`].
#[must_use = "the previous flag is restored as soon as the guard is dropped"]
pub struct WarningsGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl Drop for WarningsGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}
