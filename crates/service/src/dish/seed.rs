//! Sample data for the `seed` binary.

use configs::StoreBackend;
use models::dish::DishFields;
use tracing::info;

use super::service::DishService;
use crate::errors::ServiceError;

const SAMPLE_DISHES: [(&str, &str, &str); 10] = [
    ("Spaghetti Carbonara", "Classic Italian pasta with eggs, cheese, and bacon", "Italian"),
    ("Chicken Tikka Masala", "Creamy tomato-based curry with tender chicken pieces", "Indian"),
    ("Beef Tacos", "Seasoned ground beef in crispy shells with fresh toppings", "Mexican"),
    ("Pad Thai", "Stir-fried rice noodles with shrimp, peanuts, and lime", "Thai"),
    ("Greek Salad", "Fresh vegetables with feta cheese and olives", "Greek"),
    ("Chicken Fried Rice", "Wok-fried rice with vegetables and tender chicken", "Chinese"),
    ("Margherita Pizza", "Classic pizza with tomato sauce, mozzarella, and basil", "Italian"),
    ("Beef Burger", "Juicy beef patty with lettuce, tomato, and cheese", "American"),
    ("Sushi Roll Platter", "Assorted fresh sushi rolls with soy sauce and wasabi", "Japanese"),
    ("Caesar Salad", "Romaine lettuce with Caesar dressing and croutons", "American"),
];

pub fn sample_dishes() -> Vec<DishFields> {
    SAMPLE_DISHES
        .iter()
        .map(|(name, description, cuisine)| DishFields {
            name: (*name).to_string(),
            description: Some((*description).to_string()),
            cuisine: Some((*cuisine).to_string()),
        })
        .collect()
}

/// Seeding only makes sense against a persistent store.
pub fn ensure_persistent(backend: StoreBackend) -> Result<(), ServiceError> {
    match backend {
        StoreBackend::Postgres => Ok(()),
        StoreBackend::Memory => Err(ServiceError::Validation(
            "seeding needs a postgres store; STORE_BACKEND=memory has nothing to persist".into(),
        )),
    }
}

/// Wipe the collection and insert the sample dishes. Returns how many were added.
pub async fn reseed(service: &DishService) -> Result<u64, ServiceError> {
    let repo = service.repository();
    info!("clearing existing dishes");
    let removed = repo.delete_all().await?;
    info!(removed, "adding sample dishes");
    repo.insert_many(sample_dishes()).await
}
