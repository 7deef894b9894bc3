//! Dish module: domain conversions, repository abstraction with SeaORM and
//! in-memory implementations, and the service holding validation and the
//! random pick policy.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod seed;

pub use repository::DishRepository;
pub use service::DishService;
