use crate::{
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        responses::product::ProductResponse,
    },
    middleware::ValidatedJson,
    repository::DynProductRepository,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(repository): Extension<DynProductRepository>,
) -> Result<impl IntoResponse, HttpError> {
    let products = repository.get_all().await?;

    let response: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product detail", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(repository): Extension<DynProductRepository>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

    Ok((StatusCode::OK, Json(ProductResponse::from(product))))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid payload"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    Extension(repository): Extension<DynProductRepository>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let created = repository.create(&body.to_product()).await?;

    let location = format!("/api/products/{}", created.product_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(created)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Invalid payload or ID mismatch"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_product(
    Extension(repository): Extension<DynProductRepository>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    // The mismatch check runs before any store access; no mutation may
    // happen on a rejected request.
    if id != body.id {
        return Err(HttpError::BadRequest(format!(
            "Path ID {id} does not match body ID {}",
            body.id
        )));
    }

    repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

    repository.update(&body.to_product()).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product(
    Extension(repository): Extension<DynProductRepository>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

    repository.delete(&product).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn product_api_routes(repository: DynProductRepository) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .layer(Extension(repository))
}
