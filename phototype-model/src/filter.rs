use std::fmt;

use crate::photo_type::PhotoType;

/// Client-side predicate restricting which entries are retained from each
/// fetched catalog page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PhotoFilter {
    #[default]
    All,
    WithImage,
    WithoutImage,
}

impl PhotoFilter {
    pub fn all() -> &'static [PhotoFilter] {
        use PhotoFilter::*;
        &[All, WithImage, WithoutImage]
    }

    pub fn matches(&self, photo_type: &PhotoType) -> bool {
        match self {
            PhotoFilter::All => true,
            PhotoFilter::WithImage => photo_type.image.is_some(),
            PhotoFilter::WithoutImage => photo_type.image.is_none(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhotoFilter::All => "Show All",
            PhotoFilter::WithImage => "Show With Images",
            PhotoFilter::WithoutImage => "Show Without Images",
        }
    }
}

impl fmt::Display for PhotoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
