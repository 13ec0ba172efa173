//! Filter-and-page state machine behind every listing.
//!
//! A [`CatalogView`] owns the loaded items, the current [`FilterState`] and the
//! current page. All transitions go through [`CatalogView::dispatch`], which
//! keeps the page inside `[1, total_pages]` after every action.

use serde::Serialize;

use crate::domain::filter::{CategoryFilter, FilterState, Filterable};
use crate::pagination::{Paginated, clamp_page, paginate, total_pages};

/// Progress of the one-shot load backing a view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// User input and load events understood by [`CatalogView::dispatch`].
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogAction<T> {
    SetQuery(String),
    SetCategory(CategoryFilter),
    GoToPage(usize),
    PreviousPage,
    NextPage,
    Loaded(Vec<T>),
    LoadFailed(String),
}

/// Snapshot of the user-controlled part of a view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogState {
    pub filter: FilterState,
    pub page: usize,
}

#[derive(Clone, Debug)]
pub struct CatalogView<T> {
    items: Vec<T>,
    page_size: usize,
    filter: FilterState,
    page: usize,
    load: LoadState,
}

impl<T: Filterable> CatalogView<T> {
    /// A view waiting for its items to arrive.
    pub fn loading(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            filter: FilterState::default(),
            page: 1,
            load: LoadState::Loading,
        }
    }

    /// A view over items that are already available.
    pub fn ready(items: Vec<T>, page_size: usize) -> Self {
        let mut view = Self::loading(page_size);
        view.dispatch(CatalogAction::Loaded(items));
        view
    }

    pub fn dispatch(&mut self, action: CatalogAction<T>) {
        match action {
            CatalogAction::SetQuery(query) => {
                self.filter.query = query.trim().to_string();
                self.page = 1;
            }
            CatalogAction::SetCategory(category) => {
                self.filter.category = category;
                self.page = 1;
            }
            CatalogAction::GoToPage(page) => {
                self.page = clamp_page(page, self.total_pages());
            }
            CatalogAction::PreviousPage => {
                if self.page > 1 {
                    self.page -= 1;
                }
            }
            CatalogAction::NextPage => {
                if self.page < self.total_pages() {
                    self.page += 1;
                }
            }
            CatalogAction::Loaded(items) => {
                self.items = items;
                self.load = LoadState::Ready;
                self.page = clamp_page(self.page, self.total_pages());
            }
            CatalogAction::LoadFailed(message) => {
                self.items.clear();
                self.load = LoadState::Failed(message);
                self.page = 1;
            }
        }
    }

    /// Applies a filter and a requested page in the order a visitor would:
    /// filter first (which resets the page), then navigate.
    pub fn apply(&mut self, filter: FilterState, page: usize) {
        self.dispatch(CatalogAction::SetQuery(filter.query));
        self.dispatch(CatalogAction::SetCategory(filter.category));
        self.dispatch(CatalogAction::GoToPage(page));
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(*item))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn state(&self) -> CatalogState {
        CatalogState {
            filter: self.filter.clone(),
            page: self.page,
        }
    }

    /// Distinct categories of the loaded items in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            let category = item.category();
            if !category.is_empty()
                && !categories
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(category))
            {
                categories.push(category.to_string());
            }
        }
        categories
    }

    /// The visible page of filtered items with its navigation strip.
    pub fn window(&self) -> Paginated<T>
    where
        T: Clone,
    {
        let filtered = self.filtered();
        let slice = paginate(&filtered, self.page_size, self.page);
        Paginated::new(
            slice.items.iter().map(|item| (*item).clone()).collect(),
            slice.page,
            slice.total_pages,
            slice.total_items,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogItem;

    fn item(n: usize, category: &str) -> CatalogItem {
        CatalogItem {
            id: format!("item-{n}"),
            title: format!("Item {n}"),
            description: if n % 2 == 0 { "even" } else { "odd" }.to_string(),
            category: category.to_string(),
            link: format!("/tools/item-{n}"),
        }
    }

    fn items(count: usize) -> Vec<CatalogItem> {
        (1..=count)
            .map(|n| item(n, if n <= count / 2 { "Text" } else { "Math" }))
            .collect()
    }

    #[test]
    fn starts_on_first_page_with_empty_filter() {
        let view = CatalogView::ready(items(30), 5);
        assert_eq!(view.page(), 1);
        assert!(view.filter().is_empty());
        assert_eq!(view.total_pages(), 6);
        assert_eq!(view.load_state(), &LoadState::Ready);
    }

    #[test]
    fn changing_query_resets_page() {
        let mut view = CatalogView::ready(items(30), 5);
        view.dispatch(CatalogAction::GoToPage(4));
        assert_eq!(view.page(), 4);

        view.dispatch(CatalogAction::SetQuery("item".to_string()));
        assert_eq!(view.page(), 1);

        view.dispatch(CatalogAction::GoToPage(3));
        view.dispatch(CatalogAction::SetQuery("item".to_string()));
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn changing_category_resets_page() {
        let mut view = CatalogView::ready(items(30), 5);
        view.dispatch(CatalogAction::GoToPage(2));
        view.dispatch(CatalogAction::SetCategory(CategoryFilter::parse("math")));
        assert_eq!(view.page(), 1);
        assert_eq!(view.filtered().len(), 15);
    }

    #[test]
    fn previous_on_first_page_is_a_no_op() {
        let mut view = CatalogView::ready(items(30), 5);
        let before = view.state();
        view.dispatch(CatalogAction::PreviousPage);
        assert_eq!(view.state(), before);
    }

    #[test]
    fn next_on_last_page_is_a_no_op() {
        let mut view = CatalogView::ready(items(12), 5);
        view.dispatch(CatalogAction::GoToPage(3));
        view.dispatch(CatalogAction::NextPage);
        assert_eq!(view.page(), 3);
        view.dispatch(CatalogAction::PreviousPage);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn go_to_page_is_clamped() {
        let mut view = CatalogView::ready(items(12), 5);
        view.dispatch(CatalogAction::GoToPage(99));
        assert_eq!(view.page(), 3);
        view.dispatch(CatalogAction::GoToPage(0));
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn reload_with_fewer_items_clamps_page() {
        let mut view = CatalogView::ready(items(30), 5);
        view.dispatch(CatalogAction::GoToPage(6));
        view.dispatch(CatalogAction::Loaded(items(7)));
        assert_eq!(view.page(), 2);
        assert_eq!(view.window().items.len(), 2);
    }

    #[test]
    fn failed_load_shows_empty_state() {
        let mut view: CatalogView<CatalogItem> = CatalogView::loading(5);
        assert_eq!(view.load_state(), &LoadState::Loading);
        view.dispatch(CatalogAction::LoadFailed("timeout".to_string()));
        assert_eq!(
            view.load_state(),
            &LoadState::Failed("timeout".to_string())
        );
        let window = view.window();
        assert!(window.items.is_empty());
        assert_eq!(window.total_pages, 1);
        assert!(window.pages.is_empty());
    }

    #[test]
    fn apply_filters_then_navigates() {
        let mut view = CatalogView::ready(items(30), 5);
        view.apply(FilterState::new("odd", CategoryFilter::All), 2);
        assert_eq!(view.filtered().len(), 15);
        assert_eq!(view.page(), 2);
        let window = view.window();
        assert_eq!(window.items[0].id, "item-11");
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let view = CatalogView::ready(items(6), 5);
        assert_eq!(view.categories(), vec!["Text", "Math"]);
    }
}
