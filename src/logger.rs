// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::sync::{LazyLock, Mutex};

use crate::constants::{DEFAULT_INDENT, PRECACHED_LEVELS};
use crate::error::{Error, TlogResult};
use crate::value::{self, Value};

/// The destination that receives all formatted output.
///
/// The logger only relies on the "write bytes, report failure" capability;
/// it never closes the sink, and its lifecycle stays with the caller.
pub type Sink = Box<dyn Write + Send>;

/// Prints logs in a hierarchical presentation,
/// to help provide clarity for verbose processes.
///
/// The current nesting level is rendered by prepending
/// the indentation unit `level` times
/// in front of every line-starting write call.
/// The repeated prefix is cached and sliced,
/// instead of being rebuilt on every write.
///
/// All mutators are fluent and compose left-to-right:
///
/// ```
/// use treelog::{logger::TreeLogger, values};
///
/// let mut log = TreeLogger::new();
/// log.write_line(values!["scanning"])
///     .indent()
///     .write_line(values!["entries:", 3])
///     .unindent();
/// ```
///
/// The logger holds mutable state with no internal locking;
/// sharing one instance across threads requires external synchronization
/// (see [`default_logger`]).
pub struct TreeLogger {
    /// The text repeated once per nesting level.
    unit: String,
    /// Current nesting depth.
    level: usize,
    /// `unit` repeated `cached_levels` times.
    cache: String,
    /// Number of repetitions represented in `cache`.
    cached_levels: usize,
    sink: Sink,
}

impl TreeLogger {
    /// Creates a logger with the default indentation unit (two spaces),
    /// nesting level zero and stdout as the sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            unit: DEFAULT_INDENT.to_owned(),
            level: 0,
            cache: DEFAULT_INDENT.repeat(PRECACHED_LEVELS),
            cached_levels: PRECACHED_LEVELS,
            sink: Box::new(io::stdout()),
        }
    }

    /// Sets the text that represents one level of indentation
    /// for all following write calls.
    ///
    /// May be any string, including the empty one,
    /// which disables visible indentation.
    /// Already written output is not affected.
    pub fn indent_unit(&mut self, unit: impl Into<String>) -> &mut Self {
        let unit = unit.into();
        if unit != self.unit {
            // A cache built from the old unit must not be sliced
            // with the new unit's length.
            self.unit = unit;
            self.cache.clear();
            self.cached_levels = 0;
        }
        self
    }

    /// Sets the sink into which logs will be written.
    ///
    /// Default sink is stdout.
    pub fn sink(&mut self, sink: Sink) -> &mut Self {
        self.sink = sink;
        self
    }

    /// Increases the indentation by one copy of the indentation unit
    /// for following write calls.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        if self.level > self.cached_levels {
            self.regenerate_cache();
        }
        self
    }

    /// Decreases the indentation by one copy of the indentation unit
    /// for following write calls.
    ///
    /// Calling this at nesting level zero clamps at zero
    /// and logs a warning;
    /// use [`Self::try_unindent`] to treat that as an error instead.
    pub fn unindent(&mut self) -> &mut Self {
        if self.level == 0 {
            tracing::warn!("un-indent called at nesting level zero; staying at zero");
        } else {
            self.level -= 1;
        }
        self
    }

    /// Like [`Self::unindent`],
    /// but reports unbalanced indentation instead of clamping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnbalancedIndentation`]
    /// when the nesting level is already zero.
    pub fn try_unindent(&mut self) -> TlogResult<&mut Self> {
        if self.level == 0 {
            return Err(Error::UnbalancedIndentation);
        }
        self.level -= 1;
        Ok(self)
    }

    /// Writes the given values at the current indentation level,
    /// with no trailing newline.
    ///
    /// # Panics
    ///
    /// If the sink fails the write; see [`Sink`].
    pub fn write(&mut self, values: &[Value]) -> &mut Self {
        let payload = value::joined(values);
        self.emit_prefixed(&payload)
    }

    /// Writes the given values as a single line
    /// at the current indentation level.
    ///
    /// # Panics
    ///
    /// If the sink fails the write.
    pub fn write_line(&mut self, values: &[Value]) -> &mut Self {
        let mut payload = value::joined(values);
        payload.push('\n');
        self.emit_prefixed(&payload)
    }

    /// Writes the given values at an indentation level
    /// increased by one, without persisting the deeper level.
    ///
    /// Shortcut for `indent().write(..).unindent()`.
    ///
    /// # Panics
    ///
    /// If the sink fails the write.
    pub fn write_child(&mut self, values: &[Value]) -> &mut Self {
        self.indent().write(values).unindent()
    }

    /// Writes the given values as a single line at an indentation level
    /// increased by one, without persisting the deeper level.
    ///
    /// Shortcut for `indent().write_line(..).unindent()`.
    ///
    /// # Panics
    ///
    /// If the sink fails the write.
    pub fn write_child_line(&mut self, values: &[Value]) -> &mut Self {
        self.indent().write_line(values).unindent()
    }

    /// Directly appends the given values to the current log line,
    /// without prepending the indentation prefix,
    /// without inserting separators
    /// and without a trailing newline.
    ///
    /// # Panics
    ///
    /// If the sink fails the write.
    pub fn append(&mut self, values: &[Value]) -> &mut Self {
        let payload = value::concatenated(values);
        force_write(&mut self.sink, &payload);
        self
    }

    /// Writes a single newline character to the sink.
    ///
    /// # Panics
    ///
    /// If the sink fails the write.
    pub fn new_line(&mut self) -> &mut Self {
        force_write(&mut self.sink, "\n");
        self
    }

    /// The current nesting depth.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    fn emit_prefixed(&mut self, payload: &str) -> &mut Self {
        if self.cached_levels < self.level {
            self.regenerate_cache();
        }
        let prefix_len = self.unit.len() * self.level;
        force_write(&mut self.sink, &self.cache[..prefix_len]);
        force_write(&mut self.sink, payload);
        self
    }

    fn regenerate_cache(&mut self) {
        tracing::trace!(level = self.level, "Regenerating the indentation prefix cache");
        self.cache = self.unit.repeat(self.level);
        self.cached_levels = self.level;
    }
}

impl Default for TreeLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// A failing log sink would mask the very diagnostics
/// this crate exists to produce,
/// so a write fault is fatal and never swallowed or retried.
fn force_write(sink: &mut Sink, text: &str) {
    if let Err(err) = sink.write_all(text.as_bytes()) {
        panic!("Failed to write to the tree-log sink: {err}");
    }
}

static DEFAULT_LOGGER: LazyLock<Mutex<TreeLogger>> =
    LazyLock::new(|| Mutex::new(TreeLogger::new()));

/// Returns the pre-configured, process-wide default logger.
///
/// All calls return the same lazily created instance,
/// which lives for the rest of the process;
/// there is no reset.
/// The mutex is the synchronization boundary for concurrent callers;
/// [`TreeLogger`] itself does no locking.
pub fn default_logger() -> &'static Mutex<TreeLogger> {
    &DEFAULT_LOGGER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;
    use pretty_assertions::assert_eq;

    fn silent() -> TreeLogger {
        let mut log = TreeLogger::new();
        log.sink(Box::new(io::sink()));
        log
    }

    #[test]
    fn cache_covers_precached_depth_without_regrowth() {
        let mut log = silent();
        for _ in 0..PRECACHED_LEVELS {
            log.indent();
        }
        assert_eq!(log.cached_levels, PRECACHED_LEVELS);
        assert_eq!(log.cache, DEFAULT_INDENT.repeat(PRECACHED_LEVELS));
    }

    #[test]
    fn cache_regrows_past_precached_depth() {
        let mut log = silent();
        for _ in 0..=PRECACHED_LEVELS {
            log.indent();
        }
        assert_eq!(log.cached_levels, PRECACHED_LEVELS + 1);
        assert_eq!(log.cache.len(), DEFAULT_INDENT.len() * (PRECACHED_LEVELS + 1));
    }

    #[test]
    fn unindent_keeps_the_longer_cache() {
        let mut log = silent();
        log.indent().indent().unindent();
        assert_eq!(log.level(), 1);
        assert_eq!(log.cached_levels, PRECACHED_LEVELS);
    }

    #[test]
    fn changing_the_unit_invalidates_the_cache() {
        let mut log = silent();
        log.indent().indent();
        log.indent_unit("> ");
        assert_eq!(log.cached_levels, 0);
        assert_eq!(log.cache, "");
        // The next prefixed write rebuilds it for the current level.
        log.write(values!["x"]);
        assert_eq!(log.cached_levels, 2);
        assert_eq!(log.cache, "> > ");
    }

    #[test]
    fn setting_the_same_unit_keeps_the_cache() {
        let mut log = silent();
        log.indent();
        log.indent_unit(DEFAULT_INDENT);
        assert_eq!(log.cached_levels, PRECACHED_LEVELS);
    }

    #[test]
    fn unindent_at_zero_clamps() {
        let mut log = silent();
        log.unindent();
        assert_eq!(log.level(), 0);
    }

    #[test]
    fn try_unindent_at_zero_errors() {
        let mut log = silent();
        assert!(matches!(
            log.try_unindent(),
            Err(Error::UnbalancedIndentation)
        ));
        assert_eq!(log.level(), 0);
    }

    #[test]
    fn default_logger_is_a_singleton() {
        let first: *const Mutex<TreeLogger> = default_logger();
        let second: *const Mutex<TreeLogger> = default_logger();
        assert_eq!(first, second);
    }
}
