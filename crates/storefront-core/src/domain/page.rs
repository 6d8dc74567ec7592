//! Pagination and sorting types.
//!
//! The page shape follows Spring Data's JSON (`content`, `number`, `size`,
//! `totalElements`, `totalPages`). Pages are 0-based.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::product::Product;

/// Upper bound for page sizes, matching Spring's default `max-page-size`.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Sort used when none is specified.
pub const DEFAULT_SORT: SortSpec = SortSpec {
    field: SortField::Id,
    direction: SortDirection::Desc,
};

// ─────────────────────────────────────────────────────────────────────────────
// Sorting
// ─────────────────────────────────────────────────────────────────────────────

/// Product field a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Name,
    Price,
    Description,
    CreatedAt,
}

impl SortField {
    /// Name of the field as used in the `sort` query parameter.
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::Description => "description",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Plain ordinal comparison of two products on this field.
    ///
    /// Strings compare by code point, not by locale.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Price => a.price.cmp(&b.price),
            Self::Description => a.description.cmp(&b.description),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Errors from parsing a `"<field>,<asc|desc>"` sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortSpecError {
    #[error("Unknown sort field '{0}' (expected id, name, price, description or createdAt)")]
    UnknownField(String),

    #[error("Unknown sort direction '{0}' (expected asc or desc)")]
    UnknownDirection(String),
}

/// A single-key sort: `"<field>,<asc|desc>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two products according to this spec.
    ///
    /// Smaller values come first for ascending and last for descending.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        DEFAULT_SORT
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field.as_param(), self.direction.as_param())
    }
}

impl FromStr for SortSpec {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.split_once(',').unwrap_or((s, "asc"));

        let field = match field.trim() {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "price" => SortField::Price,
            "description" => SortField::Description,
            "createdAt" | "created_at" => SortField::CreatedAt,
            other => return Err(SortSpecError::UnknownField(other.to_string())),
        };

        let direction = match direction.trim().to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(SortSpecError::UnknownDirection(other.to_string())),
        };

        Ok(Self { field, direction })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page request / page
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index.
    pub page: u32,
    /// Page size, always within `1..=MAX_PAGE_SIZE`.
    pub size: u32,
    pub sort: SortSpec,
}

impl PageRequest {
    /// Create a request, clamping `size` into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32, sort: SortSpec) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }
}

/// One slice of an ordered collection plus pagination metadata.
///
/// Invariant: `number < total_pages`, and `total_pages >= 1` even when the
/// collection is empty (in which case `number == 0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Slice a fully materialised, already ordered collection.
    ///
    /// A page index past the end is clamped to the last page.
    pub fn from_items(items: Vec<T>, request: &PageRequest) -> Self {
        let size = request.size.max(1);
        let total_elements = items.len() as u64;
        let total_pages = u32::try_from(total_elements.div_ceil(u64::from(size)))
            .unwrap_or(u32::MAX)
            .max(1);
        let number = request.page.min(total_pages - 1);
        let start = number as usize * size as usize;

        Self {
            content: items.into_iter().skip(start).take(size as usize).collect(),
            number,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Enforce the page invariant on a page decoded from a backend.
    ///
    /// Spring reports `totalPages = 0` for an empty collection.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.number = self.number.min(self.total_pages - 1);
        self
    }

    pub const fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub const fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
