use crate::api::dto::SearchPage;

/// Accumulated results for one category: the first page plus every
/// load-more page, appended in fetch order.
#[derive(Debug, Clone)]
pub struct ResultSet<T> {
    pub term: String,
    pub hits: Vec<T>,
    pub limit: u32,
    pub total: u64,
    /// Offset of the most recently fetched page.
    pub offset: i64,
}

impl<T> ResultSet<T> {
    pub fn from_first_page(page: SearchPage<T>) -> Self {
        Self {
            term: page.term,
            hits: page.hits,
            limit: page.limit,
            total: page.total,
            offset: page.offset,
        }
    }

    /// Offset to request the next page at.
    pub fn next_offset(&self) -> i64 {
        self.offset + self.limit as i64
    }

    pub fn has_more(&self) -> bool {
        (self.hits.len() as u64) < self.total
    }

    /// Append-only merge: new hits go to the end, prior hits keep their
    /// order, and nothing is de-duplicated by id.
    pub fn merge(&mut self, page: SearchPage<T>) {
        self.hits.extend(page.hits);
        self.limit = page.limit;
        self.total = page.total;
        self.offset = page.offset;
    }
}

/// Per-category fetch state, driven by messages from the spawned request
/// tasks. Load-more keeps the already-rendered results visible.
#[derive(Debug, Clone)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Loaded {
        results: ResultSet<T>,
        loading_more: bool,
    },
    Failed,
}

impl<T> PanelState<T> {
    pub fn results(&self) -> Option<&ResultSet<T>> {
        match self {
            PanelState::Loaded { results, .. } => Some(results),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
            || matches!(
                self,
                PanelState::Loaded {
                    loading_more: true,
                    ..
                }
            )
    }

    /// Whether a load-more action is currently allowed: results are shown,
    /// more hits exist, and no load-more is already in flight.
    pub fn can_load_more(&self) -> bool {
        match self {
            PanelState::Loaded {
                results,
                loading_more,
            } => !loading_more && results.has_more(),
            _ => false,
        }
    }

    /// Flag a load-more as in flight and return the term and offset to
    /// request. Returns None while one is outstanding, so the trigger
    /// cannot fire twice for the same category.
    pub fn begin_load_more(&mut self) -> Option<(String, i64)> {
        if !self.can_load_more() {
            return None;
        }
        match self {
            PanelState::Loaded {
                results,
                loading_more,
            } => {
                *loading_more = true;
                Some((results.term.clone(), results.next_offset()))
            }
            _ => None,
        }
    }

    pub fn finish_load_more(&mut self, page: SearchPage<T>) {
        if let PanelState::Loaded {
            results,
            loading_more,
        } = self
        {
            *loading_more = false;
            // Load-mores are not cancelled by a new search; a page fetched
            // for an older term must not leak into the current results.
            if page.term == results.term {
                results.merge(page);
            }
        }
    }

    /// Keep whatever is already rendered, just clear the in-flight flag.
    pub fn fail_load_more(&mut self) {
        if let PanelState::Loaded { loading_more, .. } = self {
            *loading_more = false;
        }
    }
}
