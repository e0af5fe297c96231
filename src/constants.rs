// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// The indentation unit used by a default-constructed logger:
/// one nesting level is rendered as two spaces.
pub const DEFAULT_INDENT: &str = "  ";

/// How many repetitions of the indentation unit
/// a freshly constructed logger pre-computes.
///
/// Trees up to this depth never trigger a regeneration
/// of the prefix cache.
pub const PRECACHED_LEVELS: usize = 10;
