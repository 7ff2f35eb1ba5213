//! Client-side table scaffolding: filter, sort, and pagination state over a
//! row array handed in by a page. The dashboard mounts one per entity list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A column definition: a header plus a function rendering a row into the
/// cell string. Filtering and sorting both work on the rendered strings.
pub struct Column<T> {
    pub title: &'static str,
    pub render: fn(&T) -> String,
    pub sortable: bool,
}

pub struct DataTable<T> {
    pub rows: Vec<T>,
    pub columns: Vec<Column<T>>,
    pub filter: String,
    pub sort: Option<(usize, SortDirection)>,
    /// Zero-based page over the filtered rows.
    pub page: usize,
    pub page_size: usize,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>, page_size: usize) -> Self {
        Self {
            rows,
            columns,
            filter: String::new(),
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the backing rows (after a re-fetch) and keeps the page index
    /// in range.
    pub fn replace_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.clamp_page();
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 0;
    }

    /// Sorts by the given column, toggling direction on repeated calls.
    /// Non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, column: usize) {
        let sortable = self.columns.get(column).map(|c| c.sortable).unwrap_or(false);
        if !sortable {
            return;
        }
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn page_count(&self) -> usize {
        let filtered = self.filtered_indices().len();
        if filtered == 0 {
            1
        } else {
            filtered.div_ceil(self.page_size)
        }
    }

    /// The rows of the current page, after filter and sort.
    pub fn visible(&self) -> Vec<&T> {
        let mut indices = self.filtered_indices();
        if let Some((column, direction)) = self.sort {
            if let Some(col) = self.columns.get(column) {
                indices.sort_by_cached_key(|i| (col.render)(&self.rows[*i]).to_lowercase());
                if direction == SortDirection::Descending {
                    indices.reverse();
                }
            }
        }
        indices
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .map(|i| &self.rows[i])
            .collect()
    }

    fn filtered_indices(&self) -> Vec<usize> {
        let needle = self.filter.trim().to_lowercase();
        (0..self.rows.len())
            .filter(|i| {
                if needle.is_empty() {
                    return true;
                }
                self.columns
                    .iter()
                    .any(|c| (c.render)(&self.rows[*i]).to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn clamp_page(&mut self) {
        let last = self.page_count() - 1;
        if self.page > last {
            self.page = last;
        }
    }
}
