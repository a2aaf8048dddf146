use std::sync::Arc;

use tokio::runtime::Handle;

use crate::carousel::Carousel;
use crate::loader::ProductLoader;
use crate::models::{FocusArea, LoadState, Product, Selection};
use crate::network::ProductSource;

/// State of the home route for as long as it is mounted.
pub struct HomePage {
    loader: ProductLoader,
    slides: Carousel<Product>,
    selection: Selection,
    grid_cursor: usize,
    focus: FocusArea,
    installed: bool,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            loader: ProductLoader::new(),
            slides: Carousel::default(),
            selection: Selection::default(),
            grid_cursor: 0,
            focus: FocusArea::Slideshow,
            installed: false,
        }
    }

    pub fn activate<S: ProductSource>(&mut self, handle: &Handle, source: Arc<S>) {
        self.loader.activate(handle, source);
    }

    pub fn deactivate(&mut self) {
        self.loader.deactivate();
    }

    /// Picks up the fetched catalog the first time it is ready.
    pub fn tick(&mut self) {
        if !self.installed && self.loader.state() == LoadState::Ready {
            self.slides.replace(self.loader.products());
            self.grid_cursor = 0;
            self.installed = true;
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.loader.state()
    }

    pub fn products(&self) -> &[Product] {
        self.slides.items()
    }

    pub fn slides(&self) -> &Carousel<Product> {
        &self.slides
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn focus(&self) -> FocusArea {
        self.focus
    }

    pub fn grid_cursor(&self) -> Option<usize> {
        (!self.products().is_empty()).then_some(self.grid_cursor)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusArea::Slideshow => FocusArea::Grid,
            FocusArea::Grid => FocusArea::Slideshow,
        };
    }

    pub fn next_slide(&mut self) {
        self.slides.advance();
    }

    pub fn prev_slide(&mut self) {
        self.slides.retreat();
    }

    pub fn open_current_slide(&mut self) {
        if let Some(product) = self.slides.current().cloned() {
            self.select(product);
        }
    }

    pub fn grid_left(&mut self) {
        self.grid_cursor = self.grid_cursor.saturating_sub(1);
    }

    pub fn grid_right(&mut self) {
        self.grid_move_to(self.grid_cursor + 1);
    }

    pub fn grid_up(&mut self, columns: usize) {
        self.grid_cursor = self.grid_cursor.saturating_sub(columns.max(1));
    }

    pub fn grid_down(&mut self, columns: usize) {
        self.grid_move_to(self.grid_cursor + columns.max(1));
    }

    pub fn open_grid_item(&mut self) {
        if let Some(product) = self.slides.items().get(self.grid_cursor).cloned() {
            self.select(product);
        }
    }

    pub fn select(&mut self, product: Product) {
        self.selection.select(product);
    }

    pub fn close_detail(&mut self) {
        self.selection.clear();
    }

    #[cfg(test)]
    pub async fn wait_loaded(&mut self) {
        self.loader.join().await;
        self.tick();
    }

    fn grid_move_to(&mut self, index: usize) {
        if index < self.products().len() {
            self.grid_cursor = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::{FakeSource, product, shirt_and_hat};

    async fn loaded(source: Arc<FakeSource>) -> HomePage {
        let mut page = HomePage::new();
        page.activate(&Handle::current(), source);
        page.wait_loaded().await;
        page
    }

    fn current_name(page: &HomePage) -> Option<&str> {
        page.slides().current().map(|p| p.name.as_str())
    }

    #[tokio::test]
    async fn slideshow_wraps_over_fetched_products() {
        let mut page = loaded(FakeSource::ok(shirt_and_hat())).await;
        assert_eq!(page.load_state(), LoadState::Ready);
        assert_eq!(page.slides().cursor(), Some(0));
        assert_eq!(current_name(&page), Some("Shirt"));

        page.next_slide();
        assert_eq!(current_name(&page), Some("Hat"));
        page.next_slide();
        assert_eq!(current_name(&page), Some("Shirt"));
    }

    #[tokio::test]
    async fn empty_catalog_has_no_slide() {
        let mut page = loaded(FakeSource::ok(Vec::new())).await;
        assert_eq!(page.load_state(), LoadState::Ready);
        assert!(page.products().is_empty());
        assert_eq!(current_name(&page), None);
        assert_eq!(page.grid_cursor(), None);

        page.next_slide();
        page.open_current_slide();
        page.open_grid_item();
        assert!(!page.selection().is_open());
    }

    #[tokio::test]
    async fn failed_fetch_leaves_page_usable() {
        let mut page = loaded(FakeSource::failing()).await;
        assert_eq!(page.load_state(), LoadState::Failed);
        assert!(page.products().is_empty());
        page.prev_slide();
        assert_eq!(current_name(&page), None);
    }

    #[tokio::test]
    async fn selection_is_independent_of_cursor() {
        let mut page = loaded(FakeSource::ok(shirt_and_hat())).await;
        page.next_slide();

        page.select(product("x", "Scarf", 120.0));
        assert_eq!(page.selection().get().map(|p| p.name.as_str()), Some("Scarf"));
        assert_eq!(current_name(&page), Some("Hat"));

        page.close_detail();
        assert!(page.selection().get().is_none());
        assert_eq!(page.slides().cursor(), Some(1));
    }

    #[tokio::test]
    async fn opening_slide_and_grid_items() {
        let mut page = loaded(FakeSource::ok(shirt_and_hat())).await;
        page.next_slide();
        page.open_current_slide();
        assert_eq!(page.selection().get().map(|p| p.id.as_str()), Some("2"));

        page.close_detail();
        page.open_grid_item();
        assert_eq!(page.selection().get().map(|p| p.id.as_str()), Some("1"));
    }

    #[tokio::test]
    async fn grid_cursor_is_clamped() {
        let products = (0..7).map(|i| product(&i.to_string(), "P", 1.0)).collect();
        let mut page = loaded(FakeSource::ok(products)).await;

        page.grid_left();
        assert_eq!(page.grid_cursor(), Some(0));
        page.grid_down(3);
        page.grid_down(3);
        assert_eq!(page.grid_cursor(), Some(6));
        page.grid_down(3);
        page.grid_right();
        assert_eq!(page.grid_cursor(), Some(6));
        page.grid_up(5);
        assert_eq!(page.grid_cursor(), Some(1));
        page.grid_up(5);
        assert_eq!(page.grid_cursor(), Some(0));
    }

    #[test]
    fn tick_before_ready_installs_nothing() {
        let mut page = HomePage::new();
        page.tick();
        assert_eq!(page.load_state(), LoadState::Loading);
        assert!(page.slides().is_empty());
    }
}
