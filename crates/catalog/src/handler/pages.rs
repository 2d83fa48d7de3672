use crate::{
    domain::{requests::product_form::ProductForm, responses::product::ProductResponse},
    repository::DynProductRepository,
};
use askama::Template;
use axum::{
    Form, Router,
    extract::{Extension, Path},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use shared::{errors::HttpError, validation::ValidationResult};
use tracing::info;

#[derive(Template)]
#[template(path = "products/index.html")]
struct IndexTemplate {
    products: Vec<ProductResponse>,
}

#[derive(Template)]
#[template(path = "products/details.html")]
struct DetailsTemplate {
    product: ProductResponse,
}

#[derive(Template)]
#[template(path = "products/create.html")]
struct CreateTemplate {
    form: ProductForm,
    errors: ValidationResult,
}

#[derive(Template)]
#[template(path = "products/edit.html")]
struct EditTemplate {
    form: ProductForm,
    errors: ValidationResult,
}

#[derive(Template)]
#[template(path = "products/delete.html")]
struct DeleteTemplate {
    product: ProductResponse,
}

fn page(template: impl Template) -> Result<Response, HttpError> {
    Ok(Html(template.render()?).into_response())
}

fn back_to_list() -> Response {
    Redirect::to("/products").into_response()
}

pub async fn index(
    Extension(repository): Extension<DynProductRepository>,
) -> Result<Response, HttpError> {
    let products = repository.get_all().await?;

    page(IndexTemplate {
        products: products.into_iter().map(ProductResponse::from).collect(),
    })
}

pub async fn details(
    Extension(repository): Extension<DynProductRepository>,
    id: Option<Path<i32>>,
) -> Result<Response, HttpError> {
    let Some(Path(id)) = id else {
        return Ok(back_to_list());
    };

    let product = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

    page(DetailsTemplate {
        product: ProductResponse::from(product),
    })
}

pub async fn create_form() -> Result<Response, HttpError> {
    page(CreateTemplate {
        form: ProductForm::default(),
        errors: ValidationResult::new(),
    })
}

pub async fn create_submit(
    Extension(repository): Extension<DynProductRepository>,
    Form(form): Form<ProductForm>,
) -> Result<Response, HttpError> {
    match form.validate() {
        Err(errors) => {
            info!("📝 Create form rejected: {:?}", errors);
            page(CreateTemplate { form, errors })
        }
        Ok(product) => {
            repository.create(&product).await?;
            Ok(back_to_list())
        }
    }
}

pub async fn edit_form(
    Extension(repository): Extension<DynProductRepository>,
    id: Option<Path<i32>>,
) -> Result<Response, HttpError> {
    let Some(Path(id)) = id else {
        return Ok(back_to_list());
    };

    let product = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

    page(EditTemplate {
        form: ProductForm::from(&product),
        errors: ValidationResult::new(),
    })
}

pub async fn edit_submit(
    Extension(repository): Extension<DynProductRepository>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Response, HttpError> {
    if id != form.product_id {
        return Err(HttpError::NotFound(format!(
            "Path ID {id} does not match form ID {}",
            form.product_id
        )));
    }

    match form.validate() {
        Err(errors) => {
            info!("📝 Edit form rejected: {:?}", errors);
            page(EditTemplate { form, errors })
        }
        Ok(product) => {
            repository
                .get_by_id(id)
                .await?
                .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

            repository.update(&product).await?;
            Ok(back_to_list())
        }
    }
}

pub async fn delete_confirm(
    Extension(repository): Extension<DynProductRepository>,
    id: Option<Path<i32>>,
) -> Result<Response, HttpError> {
    let Some(Path(id)) = id else {
        return Ok(back_to_list());
    };

    let product = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

    page(DeleteTemplate {
        product: ProductResponse::from(product),
    })
}

pub async fn delete_submit(
    Extension(repository): Extension<DynProductRepository>,
    Path(id): Path<i32>,
) -> Result<Response, HttpError> {
    let product = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))?;

    repository.delete(&product).await?;

    Ok(back_to_list())
}

pub fn product_page_routes(repository: DynProductRepository) -> Router {
    Router::new()
        .route("/products", get(index))
        .route("/products/details", get(details))
        .route("/products/details/{id}", get(details))
        .route("/products/create", get(create_form).post(create_submit))
        .route("/products/edit", get(edit_form))
        .route("/products/edit/{id}", get(edit_form).post(edit_submit))
        .route("/products/delete", get(delete_confirm))
        .route(
            "/products/delete/{id}",
            get(delete_confirm).post(delete_submit),
        )
        .layer(Extension(repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::product::Product, repository::InMemoryProductRepository};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use shared::abstract_trait::Repository;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn pencil() -> Product {
        Product {
            product_id: 1,
            name: "Pencil".into(),
            price: Decimal::new(10000, 2),
            stock: 50,
            color: "Red".into(),
        }
    }

    fn notebook() -> Product {
        Product {
            product_id: 2,
            name: "Notebook".into(),
            price: Decimal::new(20000, 2),
            stock: 500,
            color: "Blue".into(),
        }
    }

    fn seeded() -> (Arc<InMemoryProductRepository>, Router) {
        let repository = Arc::new(InMemoryProductRepository::with_products([
            pencil(),
            notebook(),
        ]));
        let router = product_page_routes(repository.clone());
        (repository, router)
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers().get("location").unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn index_lists_every_product() {
        let (_, router) = seeded();

        let response = router
            .oneshot(Request::get("/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Pencil"));
        assert!(html.contains("Notebook"));
    }

    #[tokio::test]
    async fn details_without_an_id_redirects_to_the_list() {
        let (_, router) = seeded();

        let response = router
            .oneshot(
                Request::get("/products/details")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/products");
    }

    #[tokio::test]
    async fn details_renders_the_entity() {
        let (_, router) = seeded();

        let response = router
            .oneshot(
                Request::get("/products/details/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Pencil"));
        assert!(html.contains("Red"));
    }

    #[tokio::test]
    async fn details_with_an_unknown_id_is_404() {
        let (_, router) = seeded();

        let response = router
            .oneshot(
                Request::get("/products/details/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_form_renders_empty() {
        let (_, router) = seeded();

        let response = router
            .oneshot(
                Request::get("/products/create")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("form"));
    }

    #[tokio::test]
    async fn valid_create_persists_and_redirects() {
        let (repository, router) = seeded();

        let response = router
            .oneshot(form_request(
                "/products/create",
                "name=Eraser&price=50.00&stock=25&color=White",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/products");

        let stored = repository.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(stored.name, "Eraser");
    }

    #[tokio::test]
    async fn invalid_create_re_renders_with_the_submitted_values() {
        let (repository, router) = seeded();

        let response = router
            .oneshot(form_request(
                "/products/create",
                "name=&price=50.00&stock=25&color=White",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("The Name field is required."));
        assert!(html.contains("White"));

        assert_eq!(repository.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unparseable_numbers_re_render_with_field_errors() {
        let (repository, router) = seeded();

        let response = router
            .oneshot(form_request(
                "/products/create",
                "name=Eraser&price=lots&stock=many&color=White",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Price must be a valid decimal number."));
        assert!(html.contains("Stock must be a valid integer."));

        assert_eq!(repository.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn edit_form_is_prefilled_from_the_entity() {
        let (_, router) = seeded();

        let response = router
            .oneshot(Request::get("/products/edit/2").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Notebook"));
        assert!(html.contains("Blue"));
    }

    #[tokio::test]
    async fn edit_form_without_an_id_redirects_to_the_list() {
        let (_, router) = seeded();

        let response = router
            .oneshot(Request::get("/products/edit").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/products");
    }

    #[tokio::test]
    async fn valid_edit_persists_and_redirects() {
        let (repository, router) = seeded();

        let response = router
            .oneshot(form_request(
                "/products/edit/1",
                "product_id=1&name=Pencil+HB&price=120.00&stock=40&color=Green",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let stored = repository.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.name, "Pencil HB");
        assert_eq!(stored.color, "Green");
    }

    #[tokio::test]
    async fn edit_with_mismatched_ids_is_404_and_mutates_nothing() {
        let (repository, router) = seeded();

        let response = router
            .oneshot(form_request(
                "/products/edit/1",
                "product_id=2&name=Hijacked&price=1.00&stock=0&color=Black",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(repository.get_by_id(1).await.unwrap().unwrap(), pencil());
        assert_eq!(repository.get_by_id(2).await.unwrap().unwrap(), notebook());
    }

    #[tokio::test]
    async fn invalid_edit_re_renders_without_persisting() {
        let (repository, router) = seeded();

        let response = router
            .oneshot(form_request(
                "/products/edit/1",
                "product_id=1&name=&price=120.00&stock=40&color=Green",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            body_text(response)
                .await
                .contains("The Name field is required.")
        );

        assert_eq!(repository.get_by_id(1).await.unwrap().unwrap(), pencil());
    }

    #[tokio::test]
    async fn edit_of_an_unknown_id_is_404() {
        let (repository, router) = seeded();

        let response = router
            .oneshot(form_request(
                "/products/edit/9",
                "product_id=9&name=Ghost&price=1.00&stock=1&color=Grey",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(repository.get_by_id(9).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_confirmation_renders_the_entity() {
        let (_, router) = seeded();

        let response = router
            .oneshot(
                Request::get("/products/delete/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Pencil"));
    }

    #[tokio::test]
    async fn confirmed_delete_removes_the_row_then_404s_on_repeat() {
        let (repository, router) = seeded();

        let response = router
            .clone()
            .oneshot(form_request("/products/delete/1", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(repository.get_by_id(1).await.unwrap(), None);

        let response = router
            .oneshot(form_request("/products/delete/1", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
