//! The storefront view-model.
//!
//! [`Shop`] owns the filter state, the visible product list, the cart and
//! the store the cart is mirrored to. Every mutation recomputes the view
//! from scratch and bumps [`Shop::revision`], which a presentation layer
//! uses to decide when to redraw.

use crate::cart::{Cart, CartLine, CartPricing, QuantityChange};
use crate::catalog::{Catalog, CategoryCount, Product};
use crate::checkout::CheckoutSummary;
use crate::config::ShopConfig;
use crate::error::ShopError;
use crate::ids::{Brand, LineKey, ProductId, VariantTag};
use crate::notice::Notice;
use crate::search::{
    category_from_query, results_label, suggest, FilterChange, FilterState, Pagination,
    RatingThreshold, SearchResults, SortOption, Suggestions,
};
use stk_cache::{Cache, KvStore};
use tracing::{debug, error, info, warn};

const ADDED_MESSAGE: &str = "Item added to cart!";
const CHECKOUT_MESSAGE: &str = "Redirecting to checkout...";
const WISHLIST_MESSAGE: &str = "Wishlist feature coming soon!";

/// Storefront session state.
pub struct Shop<S: KvStore> {
    catalog: Catalog,
    config: ShopConfig,
    filters: FilterState,
    sort: SortOption,
    page: usize,
    /// Indexes into the catalog, filtered and sorted.
    view: Vec<usize>,
    cart: Cart,
    cache: Cache<S>,
    notices: Vec<Notice>,
    revision: u64,
}

impl<S: KvStore> Shop<S> {
    /// Open a session over the built-in catalog.
    pub fn open(store: S, config: ShopConfig) -> Self {
        Self::with_catalog(Catalog::stk(), store, config)
    }

    /// Open a session over a custom catalog.
    ///
    /// A missing or unreadable stored cart starts the session empty.
    pub fn with_catalog(catalog: Catalog, store: S, config: ShopConfig) -> Self {
        let cache = Cache::new(store);
        let cart = load_cart(&cache, &config.storage_key);

        let mut filters = FilterState::with_ceiling(config.price_ceiling);
        filters.category = config.default_category;

        let mut shop = Self {
            catalog,
            config,
            filters,
            sort: SortOption::default(),
            page: 1,
            view: Vec::new(),
            cart,
            cache,
            notices: Vec::new(),
            revision: 0,
        };
        shop.refresh();
        shop
    }

    /// Apply a page URL query string such as `?category=money`.
    ///
    /// Returns whether a category was pre-selected.
    pub fn apply_query(&mut self, query: &str) -> bool {
        match category_from_query(query) {
            Some(category) => {
                self.set_filter(FilterChange::new().category(category));
                true
            }
            None => false,
        }
    }

    // ----- filters, sort, pagination -----

    /// Merge a filter change and go back to the first page.
    pub fn set_filter(&mut self, change: FilterChange) {
        self.filters.apply(change);
        self.page = 1;
        self.refresh();
    }

    /// Reset every filter, showing all categories.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::with_ceiling(self.config.price_ceiling);
        self.page = 1;
        self.refresh();
    }

    /// Add or remove a brand from the brand filter.
    pub fn toggle_brand(&mut self, brand: Brand) {
        let mut brands = self.filters.brands.clone();
        if !brands.remove(&brand) {
            brands.insert(brand);
        }
        self.set_filter(FilterChange::new().brands(brands));
    }

    /// Add or remove a rating checkbox.
    pub fn toggle_rating(&mut self, threshold: RatingThreshold) {
        let mut ratings = self.filters.ratings.clone();
        if !ratings.remove(&threshold) {
            ratings.insert(threshold);
        }
        self.set_filter(FilterChange::new().ratings(ratings));
    }

    /// Change the sort order. The current page is kept.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.refresh();
    }

    /// Jump to a page, clamped to the available range.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = self.pagination_at(page).page;
        self.revision += 1;
    }

    fn refresh(&mut self) {
        let products = self.catalog.products();
        let mut view: Vec<usize> = (0..products.len())
            .filter(|&i| self.filters.matches(&products[i]))
            .collect();
        view.sort_by(|&a, &b| self.sort.compare(&products[a], &products[b]));
        self.view = view;

        self.page = self.pagination_at(self.page).page;
        self.revision += 1;
        debug!(
            visible = self.view.len(),
            page = self.page,
            sort = %self.sort,
            revision = self.revision,
            "view recomputed"
        );
    }

    fn pagination_at(&self, page: usize) -> Pagination {
        Pagination::new(page, self.config.page_size, self.view.len())
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination_at(self.page)
    }

    /// The current page of filtered, sorted products.
    pub fn visible_products(&self) -> SearchResults<&Product> {
        let pagination = self.pagination();
        let products = self.catalog.products();
        let items = self.view[pagination.range()]
            .iter()
            .map(|&i| &products[i])
            .collect();
        SearchResults::new(items, pagination)
    }

    /// Every product passing the filters, across all pages.
    pub fn filtered_products(&self) -> Vec<&Product> {
        let products = self.catalog.products();
        self.view.iter().map(|&i| &products[i]).collect()
    }

    /// Results counter text for the filtered list.
    pub fn results_label(&self) -> String {
        results_label(self.view.len())
    }

    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.catalog.category_counts()
    }

    /// Look up one product for the detail view.
    pub fn quick_view(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ----- search suggestions -----

    /// Suggestions for the search box.
    pub fn suggestions(&self, query: &str) -> Suggestions<'_> {
        suggest(self.catalog.products(), query)
    }

    /// Search for a suggested product by name.
    pub fn select_suggestion(&mut self, name: &str) {
        self.set_filter(FilterChange::new().search(name));
    }

    // ----- cart -----

    /// Add one unit of a product to the cart.
    ///
    /// Returns the line's new quantity. A blank variant counts as none.
    pub fn add_to_cart(&mut self, id: ProductId, variant: Option<&str>) -> Result<u32, ShopError> {
        let variant = VariantTag::parse(variant);

        let product = match self.catalog.get(id) {
            Some(product) => product,
            None => return Err(self.reject(ShopError::ProductNotFound(id))),
        };
        if !product.in_stock {
            let err = ShopError::OutOfStock(product.name.clone());
            return Err(self.reject(err));
        }
        if product.requires_variant() && variant.is_none() {
            let err = ShopError::MissingSelection {
                product_id: id,
                category: product.category,
            };
            return Err(self.reject(err));
        }

        let quantity = self.cart.add(product, variant.clone());
        info!(product = %id, variant = ?variant, quantity, "added to cart");

        self.notices.push(Notice::success(ADDED_MESSAGE));
        self.cart_changed();
        Ok(quantity)
    }

    /// Remove a cart line. Returns `false` if there was no such line.
    pub fn remove_from_cart(&mut self, key: &LineKey) -> bool {
        let removed = self.cart.remove(key);
        if removed {
            info!(line = %key, "removed from cart");
            self.cart_changed();
        }
        removed
    }

    /// Adjust a line's quantity by `delta`; the line goes away at zero.
    pub fn update_quantity(&mut self, key: &LineKey, delta: i64) -> QuantityChange {
        let change = self.cart.update_quantity(key, delta);
        if change != QuantityChange::Missing {
            info!(line = %key, delta, ?change, "cart quantity changed");
            self.cart_changed();
        }
        change
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        if self.cart.is_empty() {
            return;
        }
        self.cart.clear();
        info!("cart cleared");
        self.cart_changed();
    }

    /// Complete a simulated checkout and empty the cart.
    pub fn checkout(&mut self) -> Result<CheckoutSummary, ShopError> {
        let Some(summary) = CheckoutSummary::from_cart(&self.cart) else {
            return Err(self.reject(ShopError::EmptyCart));
        };

        info!(
            items = summary.item_count,
            total = %summary.total,
            "checkout completed"
        );
        self.notices.push(Notice::info(CHECKOUT_MESSAGE));
        self.cart.clear();
        self.cart_changed();
        Ok(summary)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Totals for the cart panel.
    pub fn cart_pricing(&self) -> CartPricing {
        CartPricing::calculate(&self.cart, &self.config.shipping)
    }

    /// Wishlists are not available yet; the shopper is told so.
    pub fn toggle_wishlist(&mut self, id: ProductId) {
        debug!(product = %id, "wishlist requested");
        self.notices.push(Notice::info(WISHLIST_MESSAGE));
    }

    fn cart_changed(&mut self) {
        self.persist();
        self.revision += 1;
    }

    /// Write the cart to its storage slot.
    ///
    /// Mutations call this themselves; use it directly to retry after a
    /// failed write.
    pub fn save(&mut self) -> Result<(), ShopError> {
        self.cache.set(&self.config.storage_key, &self.cart)?;
        Ok(())
    }

    /// Mirror the cart to the store. The in-memory cart stays authoritative
    /// when the write fails.
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!(key = %self.config.storage_key, error = %e, "failed to save cart");
        }
    }

    fn reject(&mut self, err: ShopError) -> ShopError {
        debug!(error = %err, "operation rejected");
        if err.is_user_facing() {
            self.notices.push(Notice::from(&err));
        }
        err
    }

    // ----- session -----

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Counter bumped on every re-render.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        self.cache.store()
    }

    pub fn into_store(self) -> S {
        self.cache.into_inner()
    }
}

fn load_cart<S: KvStore>(cache: &Cache<S>, key: &str) -> Cart {
    match cache.get::<Cart>(key) {
        Ok(Some(cart)) => {
            debug!(key, lines = cart.len(), "restored cart");
            cart
        }
        Ok(None) => Cart::new(),
        Err(e) if e.is_malformed() => {
            warn!(key, error = %e, "discarding unreadable stored cart");
            Cart::new()
        }
        Err(e) => {
            error!(key, error = %e, "failed to read stored cart");
            Cart::new()
        }
    }
}

impl<S: KvStore> std::fmt::Debug for Shop<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shop")
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .field("page", &self.page)
            .field("visible", &self.view.len())
            .field("cart_lines", &self.cart.len())
            .field("revision", &self.revision)
            .finish()
    }
}
