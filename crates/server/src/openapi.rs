use utoipa::openapi::{OpenApi as OpenApiSpec, Server};
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct DishDoc {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(ToSchema)]
pub struct NewDishDoc {
    pub name: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
}

#[derive(ToSchema)]
pub struct HealthDoc {
    pub status: String,
    pub message: String,
    /// connected | connecting | disconnecting | disconnected | unknown
    pub database: Option<String>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::dishes::list,
        crate::routes::dishes::random,
        crate::routes::dishes::create,
        crate::routes::dishes::delete,
    ),
    components(
        schemas(
            DishDoc,
            NewDishDoc,
            HealthDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "dishes")
    )
)]
pub struct ApiDoc;

/// OpenAPI document with the mount point recorded as the server URL.
pub fn document(base_path: &str) -> OpenApiSpec {
    let mut doc = ApiDoc::openapi();
    let url = if base_path.is_empty() { "/" } else { base_path };
    doc.servers = Some(vec![Server::new(url)]);
    doc
}
