//! Paging and sorting types shared by all list queries.
//!
//! Sort columns are validated against a per-repository whitelist before they
//! are ever interpolated into SQL.

use garage_core::error::CoreError;

/// Default page size when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 100;
/// Hard ceiling on page size.
pub const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn as_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }

    fn as_param(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// One ordering applied to a list query. The column has already been checked
/// against the repository's whitelist.
#[derive(Debug, Clone)]
pub struct SortOrder {
    pub column: String,
    pub direction: SortDir,
}

/// Offset/limit pagination plus the caller's requested orderings.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
    pub orderings: Vec<SortOrder>,
}

impl PageRequest {
    /// Build a page request from raw `limit`/`offset`/`sort` parameters.
    ///
    /// Each sort spec has the form `column` or `column,asc|desc`. An empty
    /// spec list defaults to `id,asc`. Unknown columns and directions are
    /// rejected so they never reach SQL.
    pub fn new(
        limit: i64,
        offset: i64,
        sort_specs: &[String],
        allowed_columns: &[&str],
    ) -> Result<Self, CoreError> {
        if limit < 0 {
            return Err(CoreError::InvalidArgument(format!(
                "limit must not be negative, got {limit}"
            )));
        }
        if offset < 0 {
            return Err(CoreError::InvalidArgument(format!(
                "offset must not be negative, got {offset}"
            )));
        }

        let mut orderings = Vec::with_capacity(sort_specs.len());
        for spec in sort_specs {
            orderings.push(parse_sort_spec(spec, allowed_columns)?);
        }
        if orderings.is_empty() {
            orderings.push(SortOrder {
                column: "id".to_string(),
                direction: SortDir::Asc,
            });
        }

        Ok(Self {
            limit: limit.min(MAX_LIMIT),
            offset,
            orderings,
        })
    }

    /// A request returning every row, used by tests and internal scans.
    pub fn unpaged() -> Self {
        Self {
            limit: i64::MAX,
            offset: 0,
            orderings: vec![SortOrder {
                column: "id".to_string(),
                direction: SortDir::Asc,
            }],
        }
    }

    /// Render the `ORDER BY` body. Appends `id ASC` as a deterministic
    /// tiebreaker when the caller did not sort by id.
    pub fn order_by_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .orderings
            .iter()
            .map(|o| format!("{} {}", o.column, o.direction.as_sql()))
            .collect();
        if !self.orderings.iter().any(|o| o.column == "id") {
            parts.push("id ASC".to_string());
        }
        parts.join(", ")
    }

    /// Echo the applied sort in request-parameter form, for the search
    /// response envelope (e.g. `"id,asc"` or `"year,desc;id,asc"`).
    pub fn sort_description(&self) -> String {
        self.orderings
            .iter()
            .map(|o| format!("{},{}", o.column, o.direction.as_param()))
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn parse_sort_spec(spec: &str, allowed_columns: &[&str]) -> Result<SortOrder, CoreError> {
    let mut parts = spec.splitn(2, ',');
    let column = parts.next().unwrap_or("").trim();
    let direction = match parts.next().map(str::trim) {
        None | Some("") => SortDir::Asc,
        Some(d) if d.eq_ignore_ascii_case("asc") => SortDir::Asc,
        Some(d) if d.eq_ignore_ascii_case("desc") => SortDir::Desc,
        Some(other) => {
            return Err(CoreError::InvalidArgument(format!(
                "Unknown sort direction: {other}"
            )))
        }
    };

    if !allowed_columns.contains(&column) {
        return Err(CoreError::InvalidArgument(format!(
            "Cannot sort by column: {column}"
        )));
    }

    Ok(SortOrder {
        column: column.to_string(),
        direction,
    })
}
