// SPDX-License-Identifier: MPL-2.0
//! `major_match_i18n` localizes the MajorMatch recommender front end.
//!
//! It ships an English/Arabic translation table built on Fluent, a
//! [`LanguageManager`](manager::LanguageManager) that persists the chosen
//! language and writes translations into any
//! [`TranslatableView`](view::TranslatableView), and a rewriter for the
//! English reason text produced by the recommendation backend.

pub mod config;
pub mod error;
pub mod i18n;
pub mod manager;
pub mod reason;
pub mod view;
