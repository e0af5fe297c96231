// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// More un-indent then indent calls were issued;
    /// the nesting level would have to drop below zero.
    #[error("Unbalanced indentation: un-indent called at nesting level zero")]
    UnbalancedIndentation,
}

pub type TlogResult<T> = std::result::Result<T, Error>;
