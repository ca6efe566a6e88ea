// SPDX-License-Identifier: MPL-2.0
//! Reusable UI pieces: the shared dark styling and the shortcuts screen.

pub mod help;
pub mod styles;
