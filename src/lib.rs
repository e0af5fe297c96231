// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

pub mod constants;
pub mod error;
pub mod logger;
pub mod value;
