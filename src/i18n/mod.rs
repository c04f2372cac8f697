//! Localization core: message bundles, resolution, formatting metadata.
//!
//! A [`LocaleResolver`] owns its collaborators and state; there is no global
//! instance. Build one, call [`LocaleResolver::load`] at startup, then resolve
//! keys synchronously from anywhere holding a reference.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wallet_locale::i18n::{
//!     DirBundleSource, FixedPreference, LocaleResolver, SystemEnvironment,
//! };
//! use wallet_locale::t;
//!
//! let resolver = LocaleResolver::builder()
//!     .source(Arc::new(DirBundleSource::new("app")))
//!     .preferences(Arc::new(FixedPreference::new("de")))
//!     .environment(Arc::new(SystemEnvironment::new("en")))
//!     .build();
//! resolver.load().await;
//!
//! let title = t!(resolver, "appName");
//! let greeting = t!(resolver, "greet", "Ann");
//! ```

mod bundle;
mod environment;
mod formatting;
mod locales;
mod resolver;
mod source;
mod template;
mod verify;

pub use bundle::{
    FetchedLocaleMessages, LocaleMessage, LocaleMessages, MAX_PLACEHOLDER_POSITION,
    PlaceholderDescriptor, RawBundle, RawMessage,
};
pub use environment::{
    FixedPreference, HostEnvironment, PreferenceStore, StaticEnvironment, SystemEnvironment,
};
pub use formatting::{DateLocale, Direction, FormattingMetadata, LocaleTable, NumberSymbols};
pub use locales::{
    DEFAULT_LOCALE, UI_LOCALE_ENV, bundle_dir_name, detect_locale, host_locale, is_valid_locale,
    language_of, normalize_locale,
};
pub use resolver::{LoadSummary, LocaleResolver, Resolution, Snapshot, Substitutions};
pub use source::{
    BundleSource, DEFAULT_FETCH_TIMEOUT, DirBundleSource, HttpBundleSource, StaticBundleSource,
    bundle_path,
};
pub use template::{Segment, UnresolvedPlaceholder};
pub use verify::{CoverageReport, PlaceholderMismatch, compare};

/// Resolve a message on a resolver.
///
/// # Examples
///
/// ```rust,ignore
/// // Simple message
/// let title = t!(resolver, "appName");
///
/// // Positional arguments, bound to the message's placeholders in order
/// let msg = t!(resolver, "swapAmount", "1.5", "ETH");
/// ```
#[macro_export]
macro_rules! t {
    ($resolver:expr, $key:expr) => {
        $resolver.resolve($key)
    };
    ($resolver:expr, $key:expr, $($arg:expr),+ $(,)?) => {
        $resolver.resolve_with(
            $key,
            ::std::vec![$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
}
