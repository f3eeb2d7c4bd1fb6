//! Filter criteria and the pure matching engine.
//!
//! The engine is a plain function over a slice of records. It never
//! mutates the store, never reorders it, and has no failure modes: an
//! empty result is a normal outcome. All stateful concerns (who owns the
//! store, when to recompute) live with the results component.

use serde::Deserialize;

use crate::core::resource::Resource;

/// Sentinel category that matches every record.
pub const CATEGORY_ALL: &str = "all";

/// The complete set of active filter criteria.
///
/// Always fully specified: the filter panel emits whole states on submit,
/// never per-field deltas. Partial changes are expressed as a
/// [`FilterUpdate`] and merged by the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query; empty matches everything.
    pub query: String,
    /// A category name, or [`CATEGORY_ALL`]. Compared case-insensitively.
    pub category: String,
    /// When true, restrict to records that are open right now.
    pub open_now: bool,
    /// When true, restrict to records with a virtual option.
    pub virtual_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CATEGORY_ALL.to_string(),
            open_now: false,
            virtual_only: false,
        }
    }
}

impl FilterState {
    /// Merge a partial update onto this state, field by field.
    ///
    /// Fields the update leaves as `None` keep their prior value, so a
    /// caller that only knows about one criterion can't clobber the rest.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(query) = update.query {
            self.query = query;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(open_now) = update.open_now {
            self.open_now = open_now;
        }
        if let Some(virtual_only) = update.virtual_only {
            self.virtual_only = virtual_only;
        }
    }
}

/// A partial change to a [`FilterState`].
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub query: Option<String>,
    pub category: Option<String>,
    pub open_now: Option<bool>,
    pub virtual_only: Option<bool>,
}

impl From<FilterState> for FilterUpdate {
    /// A complete state is also a valid update (every field set).
    fn from(state: FilterState) -> Self {
        Self {
            query: Some(state.query),
            category: Some(state.category),
            open_now: Some(state.open_now),
            virtual_only: Some(state.virtual_only),
        }
    }
}

/// Which text fields a free-text query is matched against.
///
/// Configurable via `query_scope` in the config file. The broader rule is
/// the default; the narrower one is kept as an accepted alternate policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryScope {
    /// Match against title, summary, category and location.
    #[default]
    AllFields,
    /// Match against title and summary only.
    TitleSummary,
}

/// Select the subsequence of `store` matching `state`.
///
/// Order-preserving: the result is `store` with non-matching records
/// removed — nothing reordered, nothing duplicated. All criteria are
/// AND-ed. Query and category comparisons are trimmed and lowercased on
/// both sides.
pub fn filter(store: &[Resource], state: &FilterState, scope: QueryScope) -> Vec<Resource> {
    let query = state.query.trim().to_lowercase();
    let category = state.category.trim().to_lowercase();

    store
        .iter()
        .filter(|resource| {
            if !query.is_empty() {
                let haystack = match scope {
                    QueryScope::AllFields => format!(
                        "{} {} {} {}",
                        resource.title, resource.summary, resource.category, resource.location
                    ),
                    QueryScope::TitleSummary => {
                        format!("{} {}", resource.title, resource.summary)
                    }
                }
                .to_lowercase();
                if !haystack.contains(&query) {
                    return false;
                }
            }

            if !category.is_empty()
                && category != CATEGORY_ALL
                && resource.category.to_lowercase() != category
            {
                return false;
            }

            if state.open_now && !resource.open_now {
                return false;
            }

            if state.virtual_only && !resource.is_virtual {
                return false;
            }

            true
        })
        .cloned()
        .collect()
}
