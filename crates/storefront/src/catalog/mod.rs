//! Product catalog and the listing pipeline.
//!
//! A listing is `all products -> category -> search term -> condition`.
//! Search suggestions are computed separately, always over every product.

mod data;

use serde::Deserialize;

use voltcart_core::{Category, Product, ProductId};

/// Maximum number of search suggestions.
pub const MAX_SUGGESTIONS: usize = 7;

/// Shown when a listing comes back empty.
pub const EMPTY_MESSAGE: &str = "No products found matching your criteria";

/// Condition selector on the listing page.
///
/// Matching is exact: a product whose condition reads `"new,used"` is
/// neither `New` nor `Used`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionFilter {
    #[default]
    All,
    New,
    Used,
}

impl ConditionFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::New, Self::Used];

    /// Parse a query value. Anything unrecognized selects `All`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::New => "new",
            Self::Used => "used",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::New => "New",
            Self::Used => "Used",
        }
    }

    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::New | Self::Used => product.condition == self.as_str(),
        }
    }
}

/// Inputs of one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Category slug from the path; `None` lists everything.
    pub category: Option<String>,
    /// Free text matched against product names.
    pub search: String,
    pub condition: ConditionFilter,
}

/// A product name split around the first occurrence of the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub before: String,
    pub matched: String,
    pub after: String,
}

impl Highlight {
    /// Split `text` around the first case-insensitive occurrence of `term`.
    /// Without an occurrence the whole text lands in `before`.
    #[must_use]
    pub fn split(text: &str, term: &str) -> Self {
        let unmatched = || Self {
            before: text.to_owned(),
            matched: String::new(),
            after: String::new(),
        };

        if term.is_empty() {
            return unmatched();
        }

        let lower_text = text.to_lowercase();
        let lower_term = term.to_lowercase();
        // Offsets are only transferable when lowercasing kept byte lengths.
        if lower_text.len() != text.len() {
            return unmatched();
        }

        let Some(start) = lower_text.find(&lower_term) else {
            return unmatched();
        };
        let end = start + lower_term.len();

        match (text.get(..start), text.get(start..end), text.get(end..)) {
            (Some(before), Some(matched), Some(after)) => Self {
                before: before.to_owned(),
                matched: matched.to_owned(),
                after: after.to_owned(),
            },
            _ => unmatched(),
        }
    }
}

/// One entry of the suggestion list.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    pub product: &'a Product,
    pub highlight: Highlight,
}

/// The in-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// A catalog over the given products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The stocked catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(data::products())
    }

    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Run the listing pipeline.
    #[must_use]
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        let listed = filter_by_category(&self.products, query.category.as_deref());
        let searched = filter_by_search(listed, &query.search);
        filter_by_condition(searched, query.condition)
    }

    /// Products whose name, brand or model contains `term`, at most
    /// [`MAX_SUGGESTIONS`]. A blank term suggests nothing.
    #[must_use]
    pub fn suggestions(&self, term: &str) -> Vec<Suggestion<'_>> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                [&p.name, &p.brand, &p.model]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .take(MAX_SUGGESTIONS)
            .map(|product| Suggestion {
                product,
                highlight: Highlight::split(&product.name, term),
            })
            .collect()
    }
}

/// Products in a category. `None` keeps everything; an unknown slug keeps nothing.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    match category {
        None => products.iter().collect(),
        Some(slug) => match Category::parse(slug) {
            Some(category) => products.iter().filter(|p| p.category == category).collect(),
            None => Vec::new(),
        },
    }
}

/// Products whose name contains `term`, ignoring case. An empty term keeps everything.
#[must_use]
pub fn filter_by_search<'a>(products: Vec<&'a Product>, term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

#[must_use]
pub fn filter_by_condition(products: Vec<&Product>, condition: ConditionFilter) -> Vec<&Product> {
    products
        .into_iter()
        .filter(|p| condition.matches(p))
        .collect()
}

/// Turn a product specification key into a label: a space before each uppercase letter, trimmed.
///
/// ```
/// use voltcart_storefront::catalog::spec_label;
///
/// assert_eq!(spec_label("screenSize"), "screen Size");
/// assert_eq!(spec_label("ram"), "ram");
/// ```
#[must_use]
pub fn spec_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label.trim().to_owned()
}
