//! Explicit DTO/entity mapping functions.
//!
//! Each pair is mapped field by field; there is no reflective mapper. The
//! skip-null merge for updates lives on the row types (`Make::apply` and
//! friends) -- these functions only translate between representations.

use garage_core::error::CoreError;
use garage_db::models::car::{Car, CarDraft, CarWithMake};
use garage_db::models::category::{Category, CategoryDraft};
use garage_db::models::make::{Make, MakeDraft};

use crate::dto::{CarDto, CategoryDto, MakeDto};

pub fn make_to_dto(make: &Make) -> MakeDto {
    MakeDto {
        id: Some(make.id),
        name: Some(make.name.clone()),
    }
}

pub fn make_draft(dto: &MakeDto) -> MakeDraft {
    MakeDraft {
        id: dto.id,
        name: dto.name.clone(),
    }
}

pub fn category_to_dto(category: &Category) -> CategoryDto {
    CategoryDto {
        id: Some(category.id),
        name: Some(category.name.clone()),
    }
}

pub fn category_draft(dto: &CategoryDto) -> CategoryDraft {
    CategoryDraft {
        id: dto.id,
        name: dto.name.clone(),
    }
}

/// Build a car draft from its DTO.
///
/// The make reference collapses to its id; a make without one is left absent
/// for the validator to flag. Category references must carry ids -- a
/// category with no id cannot be linked and is rejected outright.
pub fn car_draft(dto: &CarDto) -> Result<CarDraft, CoreError> {
    let category_ids = match &dto.categories {
        None => None,
        Some(categories) => {
            let mut ids = Vec::with_capacity(categories.len());
            for category in categories {
                ids.push(category.id.ok_or_else(|| {
                    CoreError::InvalidArgument(
                        "Category references on a car must carry an id".to_string(),
                    )
                })?);
            }
            Some(ids)
        }
    };

    Ok(CarDraft {
        id: dto.id,
        make_id: dto.make.as_ref().and_then(|m| m.id),
        year: dto.year,
        model: dto.model.clone(),
        category_ids,
    })
}

pub fn car_to_dto(car: &Car, make: &Make, categories: &[Category]) -> CarDto {
    CarDto {
        id: Some(car.id),
        make: Some(make_to_dto(make)),
        year: Some(car.year),
        model: Some(car.model.clone()),
        categories: Some(categories.iter().map(category_to_dto).collect()),
    }
}

/// Assemble a search-result DTO from the joined row and its categories.
pub fn car_with_make_to_dto(row: &CarWithMake, categories: Vec<CategoryDto>) -> CarDto {
    CarDto {
        id: Some(row.id),
        make: Some(MakeDto {
            id: Some(row.make_id),
            name: Some(row.make_name.clone()),
        }),
        year: Some(row.year),
        model: Some(row.model.clone()),
        categories: Some(categories),
    }
}
