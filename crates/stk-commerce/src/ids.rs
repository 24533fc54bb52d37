//! Newtype identifiers and tags.
//!
//! Using newtypes prevents accidentally mixing up a brand with a
//! subcategory, or a cart line key with a bare product id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Macro to generate string tag newtypes.
macro_rules! define_tag {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new tag from a string.
            pub fn new(tag: impl Into<String>) -> Self {
                Self(tag.into())
            }

            /// Get the tag as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_tag!(
    /// Narrower grouping within a category (e.g. "safe", "gamepass").
    Subcategory
);
define_tag!(
    /// Brand tag used by the brand filter.
    Brand
);
define_tag!(
    /// Secondary selection that distinguishes otherwise-identical cart lines.
    VariantTag
);

impl VariantTag {
    /// Normalize an optional user selection. Blank input means "nothing chosen".
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(VariantTag::new)
    }
}

/// Identity of a cart line: a product plus an optional variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub variant: Option<VariantTag>,
}

impl LineKey {
    pub fn new(product_id: ProductId, variant: Option<VariantTag>) -> Self {
        Self {
            product_id,
            variant,
        }
    }

    /// Key for a product without a variant.
    pub fn product(product_id: ProductId) -> Self {
        Self::new(product_id, None)
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => write!(f, "{} ({})", self.product_id, variant),
            None => write!(f, "{}", self.product_id),
        }
    }
}
