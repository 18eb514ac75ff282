//! News categories and their display labels.
//!
//! One static table shared by the top menu, the home sidebar and category pages.

/// A browsable category: the API key and the label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Value of the API's `category` parameter.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// Categories offered in the menu, in menu order.
pub const CATEGORIES: &[Category] = &[
    Category {
        key: "technology",
        label: "Technology",
    },
    Category {
        key: "health",
        label: "Health",
    },
    Category {
        key: "entertainment",
        label: "Entertainment",
    },
    Category {
        key: "science",
        label: "Science",
    },
    Category {
        key: "business",
        label: "Business",
    },
];

/// Categories the API accepts that are not in the menu but still have a label.
const EXTRA_CATEGORIES: &[Category] = &[
    Category {
        key: "sports",
        label: "Sports",
    },
    Category {
        key: "general",
        label: "General",
    },
];

/// Categories fetched for the home feed when config does not say otherwise.
pub const DEFAULT_HOME_CATEGORIES: &[&str] = &["technology", "sports"];

/// Display label for a category key. `None` for keys the table does not know.
pub fn category_label(key: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .chain(EXTRA_CATEGORIES)
        .find(|c| c.key == key)
        .map(|c| c.label)
}

/// Menu category at a 1-based position (as bound to the number keys).
pub fn menu_category(position: usize) -> Option<&'static Category> {
    position.checked_sub(1).and_then(|idx| CATEGORIES.get(idx))
}
