use super::*;

/// Case-insensitive substring match over a record's searchable fields.
///
/// An empty term matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn matches_all(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<R: Resource>(&self, record: &R) -> bool {
        self.matches_all()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// The filter as a plain predicate.
pub fn predicate<R: Resource>(term: &str) -> impl Fn(&R) -> bool {
    let filter = SearchFilter::new(term);
    move |r: &R| filter.matches(r)
}

pub fn filter_records<R: Resource>(records: &[R], term: &str) -> Vec<R> {
    let keep = predicate::<R>(term);
    records.iter().filter(|r| keep(r)).cloned().collect()
}

impl<R: Resource> ListController<R> {
    /// Narrows the filtered view to the current page's matches.
    ///
    /// Never touches the network and never changes the list state.
    pub fn search(&mut self, term: &str) {
        self.search = term.to_string();
        self.filtered = filter_records(&self.records, term);
        self.display_page = if term.is_empty() { self.page } else { 1 };
        log::debug!(
            "{}: search {:?} -> {} of {}",
            R::KIND,
            term,
            self.filtered.len(),
            self.records.len()
        );
    }

    pub fn clear_search(&mut self) {
        self.search("");
    }
}
