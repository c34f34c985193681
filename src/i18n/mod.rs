// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary. The locale is
//! resolved once at startup:
//!
//! - `--lang` on the command line
//! - `general.language` in `settings.toml`
//! - the operating system locale
//! - `en-US`
//!
//! Missing keys render as `MISSING: <key>` rather than failing.

pub mod fluent;
