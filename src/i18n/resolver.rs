//! The locale resolver: bundle loading, message resolution, formatting data.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use bon::bon;
use tokio::sync::Mutex;

use super::{
    bundle::{FetchedLocaleMessages, LocaleMessage, LocaleMessages},
    environment::{HostEnvironment, PreferenceStore},
    formatting::{FormattingMetadata, LocaleTable, NumberSymbols},
    locales,
    source::BundleSource,
    template::{self, UnresolvedPlaceholder},
};

/// Outcome of resolving a message key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The message was found and rendered (possibly to an empty string).
    Found(String),
    /// No message, or the message could not be rendered.
    Empty,
}

impl Resolution {
    /// Whether a message was rendered.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The rendered text, or `""` for [`Resolution::Empty`].
    pub fn into_string(self) -> String {
        match self {
            Self::Found(text) => text,
            Self::Empty => String::new(),
        }
    }
}

/// Ordered substitution arguments.
///
/// A single value converts to a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions(Vec<String>);

impl Substitutions {
    /// No arguments.
    pub fn none() -> Self {
        Self::default()
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Substitutions {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for Substitutions {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for Substitutions {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

impl<T: ToString> From<Vec<T>> for Substitutions {
    fn from(values: Vec<T>) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for Substitutions {
    fn from(values: &[T]) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for Substitutions {
    fn from(values: [T; N]) -> Self {
        Self(values.iter().map(ToString::to_string).collect())
    }
}

macro_rules! substitution_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Substitutions {
                fn from(value: $ty) -> Self {
                    Self(vec![value.to_string()])
                }
            }
        )+
    };
}

substitution_from_number!(i32, i64, u32, u64, usize, f64);

/// Immutable resolver state from one `load()`.
#[derive(Debug)]
pub struct Snapshot {
    /// Target and fallback bundles.
    pub messages: FetchedLocaleMessages,
    /// Locale the target bundle was requested for.
    pub target_locale: Option<String>,
    /// Locale the fallback bundle was requested for.
    pub fallback_locale: Option<String>,
    /// Formatting metadata for the active locale at load time.
    pub formatting: Arc<FormattingMetadata>,
}

impl Snapshot {
    fn initial(table: &LocaleTable) -> Self {
        Self {
            messages: FetchedLocaleMessages::default(),
            target_locale: None,
            fallback_locale: None,
            formatting: Arc::new(table.baseline_metadata().clone()),
        }
    }
}

/// What a `load()` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Locale requested for the target bundle.
    pub target_locale: String,
    /// Locale requested for the fallback bundle.
    pub fallback_locale: String,
    /// Messages in the target bundle, `None` if unavailable.
    pub target_messages: Option<usize>,
    /// Messages in the fallback bundle, `None` if unavailable.
    pub fallback_messages: Option<usize>,
}

/// Resolves message keys against a target and a fallback bundle.
///
/// State is an immutable [`Snapshot`] replaced in one swap after both bundle
/// fetches settle, so readers see either the previous or the new pair.
/// Reloads on one instance run one at a time, in call order.
pub struct LocaleResolver {
    source: Arc<dyn BundleSource>,
    preferences: Arc<dyn PreferenceStore>,
    environment: Arc<dyn HostEnvironment>,
    table: LocaleTable,
    policy: UnresolvedPlaceholder,
    state: RwLock<Arc<Snapshot>>,
    reload: Mutex<()>,
}

#[bon]
impl LocaleResolver {
    /// Create a resolver. Nothing is loaded until [`LocaleResolver::load`].
    #[builder]
    pub fn new(
        source: Arc<dyn BundleSource>,
        preferences: Arc<dyn PreferenceStore>,
        environment: Arc<dyn HostEnvironment>,
        #[builder(default)] table: LocaleTable,
        #[builder(default)] policy: UnresolvedPlaceholder,
    ) -> Self {
        let state = RwLock::new(Arc::new(Snapshot::initial(&table)));
        Self { source, preferences, environment, table, policy, state, reload: Mutex::new(()) }
    }
}

impl LocaleResolver {
    /// Fetch the target and fallback bundles and replace the current state.
    ///
    /// Never fails: a bundle that cannot be fetched or parsed leaves its slot
    /// empty. When the target and fallback locales coincide the bundle is
    /// fetched once.
    pub async fn load(&self) -> LoadSummary {
        let _reload = self.reload.lock().await;

        let target_locale = self.active_locale();
        let fallback_locale = locales::normalize_locale(&self.environment.default_locale());

        let (target, fallback) = if target_locale == fallback_locale {
            let messages = self.fetch_messages(&target_locale).await;
            (messages.clone(), messages)
        } else {
            futures::join!(
                self.fetch_messages(&target_locale),
                self.fetch_messages(&fallback_locale)
            )
        };

        let formatting = Arc::new(self.table.resolve(&self.active_locale()).clone());

        let summary = LoadSummary {
            target_locale: target_locale.clone(),
            fallback_locale: fallback_locale.clone(),
            target_messages: target.as_ref().map(LocaleMessages::len),
            fallback_messages: fallback.as_ref().map(LocaleMessages::len),
        };

        let snapshot = Snapshot {
            messages: FetchedLocaleMessages { target, fallback },
            target_locale: Some(target_locale),
            fallback_locale: Some(fallback_locale),
            formatting,
        };
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(snapshot);

        tracing::debug!(
            target_locale = %summary.target_locale,
            fallback_locale = %summary.fallback_locale,
            target_messages = ?summary.target_messages,
            fallback_messages = ?summary.fallback_messages,
            "Locale bundles loaded"
        );

        summary
    }

    /// Fetch the bundle for `locale`, retrying with its bare language
    /// ("pt-BR" -> "pt") when the region-specific bundle is unavailable.
    async fn fetch_messages(&self, locale: &str) -> Option<LocaleMessages> {
        let mut candidates = vec![locale.to_string()];
        let language = locales::language_of(locale);
        if !language.is_empty() && language != locale {
            candidates.push(language);
        }

        for candidate in &candidates {
            match self.source.fetch(candidate).await {
                Ok(raw) => return Some(LocaleMessages::from(raw)),
                Err(e) => tracing::warn!(
                    locale = %candidate,
                    source = %self.source.describe(),
                    error = %e,
                    "Locale bundle unavailable"
                ),
            }
        }

        None
    }

    /// Resolve a message without arguments. Returns `""` if unavailable.
    pub fn resolve(&self, key: &str) -> String {
        self.try_resolve(key, Substitutions::none()).into_string()
    }

    /// Resolve a message with substitutions. Returns `""` if unavailable.
    pub fn resolve_with(&self, key: &str, substitutions: impl Into<Substitutions>) -> String {
        self.try_resolve(key, substitutions).into_string()
    }

    /// Resolve a message, distinguishing a rendered message from no message.
    ///
    /// Argument `i` binds to the placeholder declared at position `i + 1`, or
    /// to the name `"i"` when no placeholder sits at that position.
    pub fn try_resolve(&self, key: &str, substitutions: impl Into<Substitutions>) -> Resolution {
        let snapshot = self.snapshot();
        let Some(message) = snapshot.messages.lookup(key) else {
            return Resolution::Empty;
        };

        if !message.has_placeholders() {
            return Resolution::Found(message.message.clone());
        }

        let bindings = bind_arguments(message, substitutions.into());
        match template::substitute(&message.message, &bindings, self.policy) {
            Ok(text) => Resolution::Found(text),
            Err(e) => {
                tracing::warn!(key = key, error = %e, "Failed to render message");
                Resolution::Empty
            },
        }
    }

    /// Whether either bundle holds `key`.
    pub fn has_message(&self, key: &str) -> bool {
        self.snapshot().messages.lookup(key).is_some()
    }

    /// Locales whose bundle is currently held, target first.
    pub fn loaded_locales(&self) -> Vec<String> {
        let snapshot = self.snapshot();
        let mut loaded = Vec::with_capacity(2);

        if snapshot.messages.target.is_some()
            && let Some(locale) = &snapshot.target_locale
        {
            loaded.push(locale.clone());
        }
        if snapshot.messages.fallback.is_some()
            && let Some(locale) = &snapshot.fallback_locale
            && !loaded.contains(locale)
        {
            loaded.push(locale.clone());
        }

        loaded
    }

    /// The saved preference if set, else the host UI locale.
    pub fn active_locale(&self) -> String {
        let locale =
            self.preferences.saved_locale().unwrap_or_else(|| self.environment.ui_locale());
        locales::normalize_locale(&locale)
    }

    /// Formatting metadata cached by the last load (baseline before any load).
    pub fn formatting_metadata(&self) -> Arc<FormattingMetadata> {
        Arc::clone(&self.snapshot().formatting)
    }

    /// Number symbols of the active locale.
    pub fn number_symbols(&self) -> NumberSymbols {
        self.formatting_metadata().numbers.clone()
    }

    /// Current state.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The formatting table this resolver was built with.
    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// Policy for placeholders without a bound argument.
    pub fn policy(&self) -> UnresolvedPlaceholder {
        self.policy
    }
}

fn bind_arguments(
    message: &LocaleMessage,
    substitutions: Substitutions,
) -> HashMap<String, String> {
    substitutions
        .0
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let name = message
                .placeholder_at(index)
                .map_or_else(|| index.to_string(), str::to_string);
            (name, value)
        })
        .collect()
}

impl std::fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleResolver")
            .field("source", &self.source.describe())
            .field("active_locale", &self.active_locale())
            .field("policy", &self.policy)
            .finish()
    }
}
