use chrono::Utc;

use common::types::{Dish, NewDish};
use models::dish::DishFields;

use crate::errors::ServiceError;

/// Business view of a stored dish row.
pub fn from_model(m: models::dish::Model) -> Dish {
    Dish {
        id: m.id,
        name: m.name,
        description: m.description,
        cuisine: m.cuisine,
        created_at: m.created_at.with_timezone(&Utc),
    }
}

/// Trim and validate client input.
pub fn fields_from_input(input: &NewDish) -> Result<DishFields, ServiceError> {
    Ok(DishFields::parse(
        input.name.as_deref(),
        input.description.as_deref(),
        input.cuisine.as_deref(),
    )?)
}
