//! List-endpoint query parameter parsing.
//!
//! `sort` and `category` are repeatable, so list handlers extract the raw
//! key/value pairs (`Query<Vec<(String, String)>>`) and run them through
//! [`ListParams::from_pairs`] instead of a derived struct.

use garage_core::error::CoreError;
use garage_db::paging::DEFAULT_LIMIT;

/// Parsed query parameters for list endpoints.
///
/// The equality filters (`make`, `year`, `model`) and the repeatable
/// `category` parameter only apply to the car search; the make and category
/// lists ignore them.
#[derive(Debug, Clone)]
pub struct ListParams {
    pub limit: i64,
    pub offset: i64,
    /// Raw sort specs (`column` or `column,direction`), validated later
    /// against the repository's column whitelist.
    pub sort: Vec<String>,
    pub make: Option<String>,
    pub year: Option<i32>,
    pub model: Option<String>,
    /// `None` when no `category` parameter was given; `Some` preserves the
    /// distinction between "no filter" and "filter on an empty set".
    pub categories: Option<Vec<String>>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort: Vec::new(),
            make: None,
            year: None,
            model: None,
            categories: None,
        }
    }
}

impl ListParams {
    /// Build list parameters from raw query pairs. Unknown keys are ignored;
    /// unparseable numbers are rejected.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, CoreError> {
        let mut params = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "limit" => params.limit = parse_number(&key, &value)?,
                "offset" => params.offset = parse_number(&key, &value)?,
                "sort" => params.sort.push(value),
                "make" => params.make = Some(value),
                "year" => params.year = Some(parse_number(&key, &value)?),
                "model" => params.model = Some(value),
                "category" => params.categories.get_or_insert_with(Vec::new).push(value),
                _ => {}
            }
        }

        Ok(params)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CoreError> {
    value.parse().map_err(|_| {
        CoreError::InvalidArgument(format!("Query parameter {key} must be a number, got: {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_no_parameters_given() {
        let params = ListParams::from_pairs(Vec::new()).unwrap();
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.offset, 0);
        assert!(params.sort.is_empty());
        assert_eq!(params.categories, None);
    }

    #[test]
    fn parses_paging_filters_and_repeated_parameters() {
        let params = ListParams::from_pairs(pairs(&[
            ("limit", "10"),
            ("offset", "20"),
            ("sort", "year,desc"),
            ("sort", "model"),
            ("make", "Toyota"),
            ("year", "2023"),
            ("model", "Corolla"),
            ("category", "Sedan"),
            ("category", "Drop-top"),
        ]))
        .unwrap();

        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 20);
        assert_eq!(params.sort, vec!["year,desc", "model"]);
        assert_eq!(params.make.as_deref(), Some("Toyota"));
        assert_eq!(params.year, Some(2023));
        assert_eq!(params.model.as_deref(), Some("Corolla"));
        assert_eq!(
            params.categories,
            Some(vec!["Sedan".to_string(), "Drop-top".to_string()])
        );
    }

    #[test]
    fn missing_category_parameter_stays_none() {
        let params = ListParams::from_pairs(pairs(&[("make", "Toyota")])).unwrap();
        assert_eq!(params.categories, None);
    }

    #[test]
    fn rejects_non_numeric_limit_and_year() {
        assert_matches!(
            ListParams::from_pairs(pairs(&[("limit", "lots")])),
            Err(CoreError::InvalidArgument(_))
        );
        assert_matches!(
            ListParams::from_pairs(pairs(&[("year", "recent")])),
            Err(CoreError::InvalidArgument(_))
        );
    }

    #[test]
    fn ignores_unknown_parameters() {
        let params = ListParams::from_pairs(pairs(&[("color", "red")])).unwrap();
        assert_eq!(params.limit, DEFAULT_LIMIT);
    }
}
