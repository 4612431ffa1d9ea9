//! Car entity model and the filtered-search types.

use garage_core::types::{CarId, DbId};
use sqlx::FromRow;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow)]
pub struct Car {
    pub id: CarId,
    pub make_id: DbId,
    pub year: i32,
    pub model: String,
}

/// A car row joined with its make's name, as returned by the filtered search.
#[derive(Debug, Clone, FromRow)]
pub struct CarWithMake {
    pub id: CarId,
    pub make_id: DbId,
    pub make_name: String,
    pub year: i32,
    pub model: String,
}

/// A category row tagged with the car it belongs to, for batch lookups over
/// the `cars_categories` join table.
#[derive(Debug, Clone, FromRow)]
pub struct CarCategoryRow {
    pub car_id: CarId,
    pub id: DbId,
    pub name: String,
}

/// Candidate state for a car, before validation and persistence.
///
/// `category_ids = None` means "no statement about categories": on create the
/// car gets an empty set, on update the current set is kept.
#[derive(Debug, Clone, Default)]
pub struct CarDraft {
    pub id: Option<CarId>,
    pub make_id: Option<DbId>,
    pub year: Option<i32>,
    pub model: Option<String>,
    pub category_ids: Option<Vec<DbId>>,
}

impl Car {
    /// Skip-null merge of a patch over this row. `current_categories` is the
    /// car's persisted category set, kept when the patch says nothing.
    pub fn apply(&self, patch: CarDraft, current_categories: Vec<DbId>) -> CarDraft {
        CarDraft {
            id: Some(self.id),
            make_id: patch.make_id.or(Some(self.make_id)),
            year: patch.year.or(Some(self.year)),
            model: patch.model.or_else(|| Some(self.model.clone())),
            category_ids: Some(patch.category_ids.unwrap_or(current_categories)),
        }
    }
}

/// Optional equality filters for the car search. Every field may be `None`,
/// meaning "no constraint on this field".
///
/// `expected_category_count` is compared against the number of the car's
/// categories whose name appears in `category_names`; callers pass the length
/// of the requested list so a car matches only when it carries every requested
/// category. A `None` count combined with a present name list can never match.
#[derive(Debug, Clone, Default)]
pub struct CarSearchFilter {
    pub make_name: Option<String>,
    pub year: Option<i32>,
    pub model: Option<String>,
    pub category_names: Option<Vec<String>>,
    pub expected_category_count: Option<i64>,
}

impl CarSearchFilter {
    /// Filter on a set of category names, requiring all of them.
    pub fn with_categories(names: Vec<String>) -> Self {
        let count = names.len() as i64;
        Self {
            category_names: Some(names),
            expected_category_count: Some(count),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn current() -> Car {
        Car {
            id: Uuid::nil(),
            make_id: 1,
            year: 2020,
            model: "Corolla".to_string(),
        }
    }

    #[test]
    fn apply_overwrites_present_fields_only() {
        let draft = current().apply(
            CarDraft {
                year: Some(2021),
                ..CarDraft::default()
            },
            vec![4, 5],
        );
        assert_eq!(draft.id, Some(Uuid::nil()));
        assert_eq!(draft.make_id, Some(1));
        assert_eq!(draft.year, Some(2021));
        assert_eq!(draft.model.as_deref(), Some("Corolla"));
        assert_eq!(draft.category_ids, Some(vec![4, 5]));
    }

    #[test]
    fn apply_replaces_categories_when_patch_has_them() {
        let draft = current().apply(
            CarDraft {
                category_ids: Some(vec![9]),
                ..CarDraft::default()
            },
            vec![4, 5],
        );
        assert_eq!(draft.category_ids, Some(vec![9]));
    }

    #[test]
    fn with_categories_sets_expected_count() {
        let filter =
            CarSearchFilter::with_categories(vec!["Sedan".to_string(), "Drop-top".to_string()]);
        assert_eq!(filter.expected_category_count, Some(2));
    }
}
