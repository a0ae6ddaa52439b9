//! Browse pipeline: source selection, category filter, pagination.

use crate::domain::Recipe;

use super::pagination::{page_window, PageItem, Pagination};

/// Where the list screen draws recipes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    Catalog,
    Search(String),
}

/// Per-screen browse state. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    draft: String,
    query: String,
    category: String,
    page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            draft: String::new(),
            query: String::new(),
            category: String::new(),
            page: 1,
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown in the search field.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Text the search runs with.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Make `text` the committed query. Returns whether it changed; a change
    /// resets the page.
    pub fn commit_query(&mut self, text: &str) -> bool {
        let text = text.trim();
        if self.query == text {
            return false;
        }
        self.query = text.to_string();
        self.page = 1;
        true
    }

    /// Empty both the field and the committed query.
    pub fn clear_query(&mut self) -> bool {
        self.draft.clear();
        self.commit_query("")
    }

    /// Empty string means no filter.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if self.category == category {
            return false;
        }
        self.category = category;
        self.page = 1;
        true
    }

    /// Move to `page`, clamped to the pages available for `total` items.
    pub fn set_page(&mut self, page: usize, total: usize, pagination: &Pagination) {
        self.page = pagination.clamp(page, total);
    }

    pub fn source(&self) -> SourceSelection {
        if self.query.is_empty() {
            SourceSelection::Catalog
        } else {
            SourceSelection::Search(self.query.clone())
        }
    }

    /// Whether the list screen is still waiting for its source.
    ///
    /// `catalog_ready` says the full catalog has arrived; `answered` is the
    /// query the held search result belongs to. A result for any other query
    /// does not count, while a `None` result for the current one does.
    pub fn is_loading(&self, catalog_ready: bool, answered: Option<&str>) -> bool {
        match self.source() {
            SourceSelection::Catalog => !catalog_ready,
            SourceSelection::Search(query) => answered != Some(query.as_str()),
        }
    }

    /// Recipes after source selection and category filtering.
    ///
    /// `search` is the result for the committed query; `None` (nothing
    /// matched) behaves as an empty source.
    pub fn filtered<'a>(&self, catalog: &'a [Recipe], search: Option<&'a [Recipe]>) -> Vec<&'a Recipe> {
        let source = match self.source() {
            SourceSelection::Catalog => catalog,
            SourceSelection::Search(_) => search.unwrap_or(&[]),
        };
        source
            .iter()
            .filter(|recipe| self.category.is_empty() || recipe.category == self.category)
            .collect()
    }

    /// The page of recipes to render.
    pub fn apply(
        &self,
        catalog: &[Recipe],
        search: Option<&[Recipe]>,
        pagination: &Pagination,
    ) -> PageView {
        let filtered = self.filtered(catalog, search);
        let page = pagination.clamp(self.page, filtered.len());
        PageView {
            items: pagination
                .slice(&filtered, page)
                .iter()
                .map(|recipe| (*recipe).clone())
                .collect(),
            page,
            total_pages: pagination.total_pages(filtered.len()),
            total_matches: filtered.len(),
        }
    }
}

/// One rendered page of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<Recipe>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        page_window(self.page, self.total_pages)
    }
}
