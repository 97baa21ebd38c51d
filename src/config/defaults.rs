// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the language preference.
//!
//! This module serves as the single source of truth for the names and
//! fallbacks shared by the settings file, the language manager and the CLI.

// ==========================================================================
// Storage
// ==========================================================================

/// Key under which the selected locale code is persisted.
pub const STORAGE_KEY: &str = "majorMatchLanguage";

/// Directory created under the user's config dir.
pub const APP_NAME: &str = "MajorMatch";

/// Settings file name inside [`APP_NAME`].
pub const CONFIG_FILE: &str = "settings.toml";

// ==========================================================================
// Locale
// ==========================================================================

/// Locale used when nothing is persisted or the stored code is unknown.
pub const DEFAULT_LOCALE_CODE: &str = "en";
