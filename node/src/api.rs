// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::NodeConfig;
use crate::errors::ApiError;
use rolodex_core::Record;
use serde::{Deserialize, Serialize};

// Paging values are taken as raw text so a bad number maps to
// `InvalidPagination`. Query strings that do not decode at all (a repeated
// key, say) become `InvalidQuery` in the handlers.

#[derive(Deserialize, Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub field: Option<String>,
    pub query: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl SearchParams {
    pub fn paging(&self) -> PageParams {
        PageParams {
            page: self.page.clone(),
            per_page: self.per_page.clone(),
        }
    }
}

/// Validated 1-based paging request.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn resolve(params: &PageParams, cfg: &NodeConfig) -> Result<Self, ApiError> {
        let page = parse_positive(params.page.as_deref())?.unwrap_or(1);
        let per_page = parse_positive(params.per_page.as_deref())?
            .unwrap_or(cfg.default_per_page)
            .min(cfg.max_per_page.max(1));
        Ok(Self { page, per_page })
    }

    /// 0-based index for the core paginator.
    pub fn index(&self) -> usize {
        rolodex_core::paginate::from_one_based(self.page).unwrap_or(0)
    }
}

fn parse_positive(raw: Option<&str>) -> Result<Option<usize>, ApiError> {
    match raw {
        None => Ok(None),
        Some(s) => match s.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Some(n)),
            _ => Err(ApiError::InvalidPagination),
        },
    }
}

#[derive(Serialize, Debug)]
pub struct PageMeta {
    pub page: usize,
    pub per_page: usize,
    /// Number of matching items across all pages.
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Serialize)]
pub struct ListResponse<'a> {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub clients: &'a [&'a Record],
}

#[derive(Serialize)]
pub struct DuplicatesResponse<'a> {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub duplicates: &'a [&'a Record],
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub results: &'a [&'a Record],
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RefreshResponse {
    pub outcome: String,
    pub detail: Option<String>,
    pub records: usize,
    pub fields: usize,
    pub fingerprint: Option<String>,
    /// Whether the published content differs from the previous store.
    pub changed: bool,
}
