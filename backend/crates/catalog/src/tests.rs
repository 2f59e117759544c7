//! Router-level scenarios for the catalog crate
//!
//! The catalog routes run behind the storefront route guard, with sessions
//! signed by the auth crate, over the in-memory repository.

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use auth::application::SessionTokens;
    use auth::domain::value_object::email::Email;
    use auth::{AuthConfig, AuthGuardState, SessionClaims, UserRole, route_guard};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, header};
    use axum::middleware::from_fn_with_state;
    use chrono::{Duration, Utc};
    use kernel::id::UserId;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::entity::store::Store;
    use crate::domain::repository::StoreRepository;
    use crate::infra::memory::MemoryCatalogRepository;
    use crate::presentation::{CatalogAppState, admin_stores_router, catalog_router};

    pub struct TestApp {
        pub router: Router,
        pub repo: MemoryCatalogRepository,
        pub tokens: SessionTokens,
    }

    impl TestApp {
        pub fn new() -> Self {
            let repo = MemoryCatalogRepository::new();
            let config = Arc::new(AuthConfig::development());
            let state = CatalogAppState::new(repo.clone());

            let router = catalog_router(state.clone())
                .merge(admin_stores_router(state))
                .layer(from_fn_with_state(
                    AuthGuardState::storefront(config.clone()),
                    route_guard,
                ));

            Self {
                router,
                repo,
                tokens: SessionTokens::new(config),
            }
        }

        /// Session token for a user that exists only in the claims.
        pub fn token(&self, user_id: UserId, role: UserRole) -> String {
            let email = Email::new(format!("{}@example.com", user_id.as_uuid().simple())).unwrap();
            let claims = SessionClaims::new(user_id, &email, role, Utc::now(), Duration::hours(1));
            self.tokens.sign(&claims).unwrap()
        }

        pub async fn store_owned_by(&self, owner: UserId) -> Store {
            let store = Store::new(owner, "Main Street".to_string());
            self.repo.create_store(&store).await.unwrap();
            store
        }

        pub async fn send(
            &self,
            method: &str,
            uri: &str,
            body: Option<Value>,
            token: Option<&str>,
        ) -> Response<Body> {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header(header::COOKIE, format!("auth_token={token}"));
            }
            let body = match body {
                Some(json) => {
                    builder = builder.header(header::CONTENT_TYPE, "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };
            self.router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap()
        }

        /// POST a body that is not valid JSON.
        pub async fn post_raw(&self, uri: &str, body: &'static str, token: &str) -> Response<Body> {
            let req = Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, format!("auth_token={token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap();
            self.router.clone().oneshot(req).await.unwrap()
        }

        pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
            self.send("GET", uri, None, token).await
        }

        /// POST that must succeed; returns the created resource.
        pub async fn create(&self, uri: &str, body: Value, token: &str) -> Value {
            let resp = self.send("POST", uri, Some(body), Some(token)).await;
            assert_eq!(resp.status(), 200, "POST {uri}");
            body_json(resp).await
        }
    }

    pub async fn body_json(resp: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Owner with one store, a billboard, a category, sizes S/L and colors
    /// Red/Blue.
    pub struct Seeded {
        pub app: TestApp,
        pub owner: String,
        pub base: String,
        pub billboard_id: String,
        pub category_id: String,
    }

    pub async fn seeded() -> Seeded {
        let app = TestApp::new();
        let owner_id = UserId::new();
        let owner = app.token(owner_id, UserRole::Customer);
        let store = app.store_owned_by(owner_id).await;
        let base = format!("/api/{}", store.store_id);

        let billboard = app
            .create(
                &format!("{base}/billboards"),
                serde_json::json!({ "label": "Summer", "imageUrl": "https://img.test/summer.png" }),
                &owner,
            )
            .await;
        let billboard_id = billboard["id"].as_str().unwrap().to_string();

        let category = app
            .create(
                &format!("{base}/categories"),
                serde_json::json!({ "name": "Shirts", "billboardId": billboard_id }),
                &owner,
            )
            .await;
        let category_id = category["id"].as_str().unwrap().to_string();

        for (name, value) in [("Small", "S"), ("Large", "L")] {
            app.create(
                &format!("{base}/sizes"),
                serde_json::json!({ "name": name, "value": value }),
                &owner,
            )
            .await;
        }
        for (name, value) in [("Red", "#ff0000"), ("Blue", "#0000ff")] {
            app.create(
                &format!("{base}/colors"),
                serde_json::json!({ "name": name, "value": value }),
                &owner,
            )
            .await;
        }

        Seeded {
            app,
            owner,
            base,
            billboard_id,
            category_id,
        }
    }

    impl Seeded {
        pub fn product(&self, name: &str, variants: Value) -> Value {
            serde_json::json!({
                "name": name,
                "description": "Soft cotton",
                "price": "19.99",
                "categoryId": self.category_id,
                "images": [{ "url": "https://img.test/p.png" }],
                "variants": variants,
            })
        }
    }
}

#[cfg(test)]
mod read_tests {
    use super::support::*;
    use kernel::id::StoreId;

    #[tokio::test]
    async fn test_reads_need_no_session() {
        let app = TestApp::new();
        let uri = format!("/api/{}/products", StoreId::new());

        let resp = app.get(&uri, None).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_json(resp).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_categories_embed_their_billboard() {
        let s = seeded().await;

        let resp = s.app.get(&format!("{}/categories", s.base), None).await;
        let list = body_json(resp).await;
        assert_eq!(list[0]["name"], "Shirts");
        assert_eq!(list[0]["billboard"]["id"], s.billboard_id.as_str());
        assert_eq!(list[0]["billboard"]["label"], "Summer");

        let resp = s
            .app
            .get(&format!("{}/categories/{}", s.base, s.category_id), None)
            .await;
        assert_eq!(body_json(resp).await["billboard"]["label"], "Summer");
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_id_is_404() {
        let s = seeded().await;

        let resp = s
            .app
            .get(&format!("{}/billboards/{}", s.base, StoreId::new()), None)
            .await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_json(resp).await["error"], "Billboard not found");

        let resp = s.app.get(&format!("{}/sizes/not-a-uuid", s.base), None).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_json(resp).await["error"], "Size not found");
    }

    #[tokio::test]
    async fn test_lists_are_newest_first() {
        let s = seeded().await;

        let resp = s.app.get(&format!("{}/sizes", s.base), None).await;
        let names: Vec<_> = body_json(resp)
            .await
            .as_array()
            .unwrap()
            .iter()
            .map(|size| size["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Large", "Small"]);
    }
}

#[cfg(test)]
mod write_guard_tests {
    use super::support::*;
    use auth::UserRole;
    use kernel::id::{StoreId, UserId};
    use serde_json::json;

    #[tokio::test]
    async fn test_write_without_session_is_401() {
        let s = seeded().await;

        let resp = s
            .app
            .send(
                "POST",
                &format!("{}/billboards", s.base),
                Some(json!({ "label": "x", "imageUrl": "y" })),
                None,
            )
            .await;
        assert_eq!(resp.status(), 401);
        assert_eq!(body_json(resp).await["error"], "Unauthenticated");
    }

    #[tokio::test]
    async fn test_unknown_store_is_404() {
        let app = TestApp::new();
        let token = app.token(UserId::new(), UserRole::Customer);

        let resp = app
            .send(
                "POST",
                &format!("/api/{}/billboards", StoreId::new()),
                Some(json!({ "label": "x", "imageUrl": "y" })),
                Some(&token),
            )
            .await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_json(resp).await["error"], "Store not found");
    }

    #[tokio::test]
    async fn test_foreign_store_is_403_before_validation() {
        let s = seeded().await;
        let stranger = s.app.token(UserId::new(), UserRole::Customer);

        // Invalid body, but ownership is checked first
        let resp = s
            .app
            .send(
                "POST",
                &format!("{}/billboards", s.base),
                Some(json!({})),
                Some(&stranger),
            )
            .await;
        assert_eq!(resp.status(), 403);
        assert_eq!(body_json(resp).await["error"], "Unauthorized");

        // Even admins do not own other people's stores
        let admin = s.app.token(UserId::new(), UserRole::Admin);
        let resp = s
            .app
            .send(
                "DELETE",
                &format!("{}/billboards/{}", s.base, s.billboard_id),
                None,
                Some(&admin),
            )
            .await;
        assert_eq!(resp.status(), 403);
    }

    #[tokio::test]
    async fn test_missing_resource_is_404_before_validation() {
        let s = seeded().await;

        let resp = s
            .app
            .send(
                "PATCH",
                &format!("{}/billboards/{}", s.base, StoreId::new()),
                Some(json!({})),
                Some(&s.owner),
            )
            .await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_json(resp).await["error"], "Billboard not found");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_bad_request() {
        let s = seeded().await;

        let resp = s
            .app
            .post_raw(&format!("{}/billboards", s.base), "{\"label\": ", &s.owner)
            .await;
        assert_eq!(resp.status(), 400);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Invalid request body" })
        );
    }

    #[tokio::test]
    async fn test_validation_messages() {
        let s = seeded().await;
        let cases = [
            ("billboards", json!({ "imageUrl": "https://img" }), "Label is required"),
            ("billboards", json!({ "label": "x" }), "Image URL is required"),
            ("categories", json!({ "billboardId": s.billboard_id }), "Name is required"),
            ("categories", json!({ "name": "Hats" }), "Billboard ID is required"),
            ("sizes", json!({ "value": "XL" }), "Name is required"),
            ("sizes", json!({ "name": "Extra" }), "Value is required"),
            ("colors", json!({ "name": "Red", "value": "red" }), "Value must be a valid hex code"),
        ];

        for (resource, body, message) in cases {
            let resp = s
                .app
                .send("POST", &format!("{}/{resource}", s.base), Some(body), Some(&s.owner))
                .await;
            assert_eq!(resp.status(), 400, "{resource}: {message}");
            assert_eq!(body_json(resp).await["error"], message);
        }
    }
}

#[cfg(test)]
mod resource_tests {
    use super::support::*;
    use auth::UserRole;
    use kernel::id::UserId;
    use serde_json::json;

    #[tokio::test]
    async fn test_billboard_update_and_delete() {
        let s = seeded().await;
        let uri = format!("{}/billboards", s.base);
        let created = s
            .app
            .create(&uri, json!({ "label": "Winter", "imageUrl": "https://img/w" }), &s.owner)
            .await;
        let item = format!("{uri}/{}", created["id"].as_str().unwrap());

        let resp = s
            .app
            .send(
                "PATCH",
                &item,
                Some(json!({ "label": "Winter Sale", "imageUrl": "https://img/w2" })),
                Some(&s.owner),
            )
            .await;
        assert_eq!(resp.status(), 200);
        let updated = body_json(resp).await;
        assert_eq!(updated["label"], "Winter Sale");
        assert_eq!(updated["imageUrl"], "https://img/w2");

        let resp = s.app.send("DELETE", &item, None, Some(&s.owner)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_json(resp).await["label"], "Winter Sale");
        assert_eq!(s.app.get(&item, None).await.status(), 404);
    }

    #[tokio::test]
    async fn test_billboard_in_use_cannot_be_deleted() {
        let s = seeded().await;

        let resp = s
            .app
            .send(
                "DELETE",
                &format!("{}/billboards/{}", s.base, s.billboard_id),
                None,
                Some(&s.owner),
            )
            .await;
        assert_eq!(resp.status(), 409);
    }

    #[tokio::test]
    async fn test_category_rejects_billboard_of_another_store() {
        let s = seeded().await;
        let other_owner = UserId::new();
        let other_token = s.app.token(other_owner, UserRole::Customer);
        let other = s.app.store_owned_by(other_owner).await;

        let resp = s
            .app
            .send(
                "POST",
                &format!("/api/{}/categories", other.store_id),
                Some(json!({ "name": "Hats", "billboardId": s.billboard_id })),
                Some(&other_token),
            )
            .await;
        assert_eq!(resp.status(), 400);
        assert_eq!(
            body_json(resp).await["error"],
            format!("Billboard with id \"{}\" not found", s.billboard_id)
        );
    }

    #[tokio::test]
    async fn test_sizes_and_colors_do_not_mix() {
        let s = seeded().await;
        let sizes = body_json(s.app.get(&format!("{}/sizes", s.base), None).await).await;
        let size_id = sizes[0]["id"].as_str().unwrap();

        let resp = s
            .app
            .get(&format!("{}/colors/{size_id}", s.base), None)
            .await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_json(resp).await["error"], "Color not found");
    }

    #[tokio::test]
    async fn test_color_update_keeps_hex_rule() {
        let s = seeded().await;
        let colors = body_json(s.app.get(&format!("{}/colors", s.base), None).await).await;
        let item = format!("{}/colors/{}", s.base, colors[0]["id"].as_str().unwrap());

        let resp = s
            .app
            .send("PATCH", &item, Some(json!({ "name": "Navy", "value": "#000080" })), Some(&s.owner))
            .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_json(resp).await["value"], "#000080");

        let resp = s
            .app
            .send("PATCH", &item, Some(json!({ "name": "Navy", "value": "navy" })), Some(&s.owner))
            .await;
        assert_eq!(resp.status(), 400);
    }
}

#[cfg(test)]
mod product_tests {
    use super::support::*;
    use auth::UserRole;
    use kernel::id::UserId;
    use serde_json::json;

    #[tokio::test]
    async fn test_variant_names_resolve_to_ids() {
        let s = seeded().await;
        let sizes = body_json(s.app.get(&format!("{}/sizes", s.base), None).await).await;
        let large_id = sizes
            .as_array()
            .unwrap()
            .iter()
            .find(|size| size["name"] == "Large")
            .unwrap()["id"]
            .clone();

        let product = s
            .app
            .create(
                &format!("{}/products", s.base),
                s.product("Tee", json!([{ "sizeId": "Large", "colorId": "Red", "inStock": 4 }])),
                &s.owner,
            )
            .await;

        assert_eq!(product["variants"][0]["sizeId"], large_id);
        assert_eq!(product["variants"][0]["inStock"], 4);
        assert_eq!(product["price"], "19.99");
        assert_eq!(product["images"][0]["url"], "https://img.test/p.png");
        assert_eq!(product["isArchived"], false);
    }

    #[tokio::test]
    async fn test_unknown_variant_references() {
        let s = seeded().await;
        let uri = format!("{}/products", s.base);
        let missing_id = UserId::new().to_string();

        let cases = [
            (json!([{ "sizeId": "XL", "colorId": "Red" }]), "Size with name \"XL\" not found".to_string()),
            (json!([{ "sizeId": "Small", "colorId": "Green" }]), "Color with name \"Green\" not found".to_string()),
            (
                json!([{ "sizeId": missing_id, "colorId": "Red" }]),
                format!("Size with id \"{missing_id}\" not found"),
            ),
            (json!([{ "colorId": "Red" }]), "Variant size is required".to_string()),
            (json!([]), "Need at least 1 variant of a product".to_string()),
        ];

        for (variants, message) in cases {
            let resp = s
                .app
                .send("POST", &uri, Some(s.product("Tee", variants)), Some(&s.owner))
                .await;
            assert_eq!(resp.status(), 400, "{message}");
            assert_eq!(body_json(resp).await["error"], message);
        }
    }

    #[tokio::test]
    async fn test_product_field_validation() {
        let s = seeded().await;
        let uri = format!("{}/products", s.base);
        let variants = json!([{ "sizeId": "Small", "colorId": "Red" }]);

        let mut no_images = s.product("Tee", variants.clone());
        no_images["images"] = json!([]);
        let mut zero_price = s.product("Tee", variants.clone());
        zero_price["price"] = json!("0");
        let mut negative_price = s.product("Tee", variants.clone());
        negative_price["price"] = json!("-5");
        let mut foreign_category = s.product("Tee", variants.clone());
        foreign_category["categoryId"] = json!(UserId::new().to_string());

        let cases = [
            (s.product("  ", variants.clone()), "Name is required"),
            (no_images, "Images are required"),
            (zero_price, "Price is required"),
            (negative_price, "Price must be greater than zero"),
            (foreign_category, "Category not found for this store"),
        ];
        for (body, message) in cases {
            let resp = s.app.send("POST", &uri, Some(body), Some(&s.owner)).await;
            assert_eq!(resp.status(), 400, "{message}");
            assert_eq!(body_json(resp).await["error"], message);
        }
    }

    #[tokio::test]
    async fn test_listing_filters() {
        let s = seeded().await;
        let uri = format!("{}/products", s.base);

        let small_red = s.product("Small Red Tee", json!([{ "sizeId": "Small", "colorId": "Red" }]));
        let mut mixed = s.product(
            "Mixed Hoodie",
            json!([
                { "sizeId": "Small", "colorId": "Blue" },
                { "sizeId": "Large", "colorId": "Red" }
            ]),
        );
        mixed["isFeatured"] = json!(true);
        s.app.create(&uri, small_red, &s.owner).await;
        s.app.create(&uri, mixed, &s.owner).await;

        let sizes = body_json(s.app.get(&format!("{}/sizes", s.base), None).await).await;
        let colors = body_json(s.app.get(&format!("{}/colors", s.base), None).await).await;
        let id_of = |list: &serde_json::Value, name: &str| {
            list.as_array()
                .unwrap()
                .iter()
                .find(|item| item["name"] == name)
                .unwrap()["id"]
                .as_str()
                .unwrap()
                .to_string()
        };
        let (small, red) = (id_of(&sizes, "Small"), id_of(&colors, "Red"));

        let names = |value: serde_json::Value| -> Vec<String> {
            value
                .as_array()
                .unwrap()
                .iter()
                .map(|p| p["name"].as_str().unwrap().to_string())
                .collect()
        };

        // Newest first
        let all = body_json(s.app.get(&uri, None).await).await;
        assert_eq!(names(all), ["Mixed Hoodie", "Small Red Tee"]);

        // Small and Red exist on the hoodie, but not on the same variant
        let both = body_json(
            s.app
                .get(&format!("{uri}?sizeId={small}&colorId={red}"), None)
                .await,
        )
        .await;
        assert_eq!(names(both), ["Small Red Tee"]);

        let featured = body_json(s.app.get(&format!("{uri}?isFeatured=true"), None).await).await;
        assert_eq!(names(featured), ["Mixed Hoodie"]);

        let by_name = body_json(s.app.get(&format!("{uri}?name=hOOd"), None).await).await;
        assert_eq!(names(by_name), ["Mixed Hoodie"]);

        let by_category = body_json(
            s.app
                .get(&format!("{uri}?categoryId={}", s.category_id), None)
                .await,
        )
        .await;
        assert_eq!(by_category.as_array().unwrap().len(), 2);

        let garbage = body_json(s.app.get(&format!("{uri}?categoryId=nope"), None).await).await;
        assert_eq!(garbage, json!([]));
    }

    #[tokio::test]
    async fn test_archived_products_only_for_owner() {
        let s = seeded().await;
        let uri = format!("{}/products", s.base);
        let mut body = s.product("Old Tee", json!([{ "sizeId": "Small", "colorId": "Red" }]));
        body["isArchived"] = json!(true);
        let product = s.app.create(&uri, body, &s.owner).await;
        let item = format!("{uri}/{}", product["id"].as_str().unwrap());

        assert_eq!(body_json(s.app.get(&uri, None).await).await, json!([]));
        assert_eq!(s.app.get(&item, None).await.status(), 404);

        let stranger = s.app.token(UserId::new(), UserRole::Customer);
        assert_eq!(s.app.get(&item, Some(&stranger)).await.status(), 404);

        let resp = s.app.get(&item, Some(&s.owner)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_json(resp).await["isArchived"], true);
    }

    #[tokio::test]
    async fn test_update_replaces_variants_and_images() {
        let s = seeded().await;
        let uri = format!("{}/products", s.base);
        let product = s
            .app
            .create(
                &uri,
                s.product(
                    "Tee",
                    json!([
                        { "sizeId": "Small", "colorId": "Red" },
                        { "sizeId": "Large", "colorId": "Blue" }
                    ]),
                ),
                &s.owner,
            )
            .await;
        let item = format!("{uri}/{}", product["id"].as_str().unwrap());

        let mut body = s.product("Tee v2", json!([{ "sizeId": "Large", "colorId": "Red", "inStock": 9 }]));
        body["images"] = json!([{ "url": "https://img.test/a.png" }, { "url": "https://img.test/b.png" }]);
        body["price"] = json!(24);
        let resp = s.app.send("PATCH", &item, Some(body), Some(&s.owner)).await;
        assert_eq!(resp.status(), 200);

        let fetched = body_json(s.app.get(&item, None).await).await;
        assert_eq!(fetched["name"], "Tee v2");
        assert_eq!(fetched["price"], "24");
        assert_eq!(fetched["variants"].as_array().unwrap().len(), 1);
        assert_eq!(fetched["variants"][0]["inStock"], 9);
        assert_eq!(fetched["images"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_size_in_use_cannot_be_deleted() {
        let s = seeded().await;
        s.app
            .create(
                &format!("{}/products", s.base),
                s.product("Tee", json!([{ "sizeId": "Small", "colorId": "Red" }])),
                &s.owner,
            )
            .await;
        let sizes = body_json(s.app.get(&format!("{}/sizes", s.base), None).await).await;
        let small = sizes
            .as_array()
            .unwrap()
            .iter()
            .find(|size| size["name"] == "Small")
            .unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string();

        let resp = s
            .app
            .send("DELETE", &format!("{}/sizes/{small}", s.base), None, Some(&s.owner))
            .await;
        assert_eq!(resp.status(), 409);
    }
}

#[cfg(test)]
mod store_tests {
    use super::support::*;
    use auth::UserRole;
    use axum::http::header;
    use kernel::id::UserId;
    use serde_json::json;

    #[tokio::test]
    async fn test_admin_creates_and_lists_own_stores() {
        let app = TestApp::new();
        let admin = app.token(UserId::new(), UserRole::Admin);

        let store = app.create("/api/admin/stores", json!({ "name": "Outlet" }), &admin).await;
        assert_eq!(store["name"], "Outlet");

        let other_admin = app.token(UserId::new(), UserRole::Admin);
        app.create("/api/admin/stores", json!({ "name": "Other" }), &other_admin)
            .await;

        let list = body_json(app.get("/api/admin/stores", Some(&admin)).await).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], store["id"]);

        let resp = app
            .send("POST", "/api/admin/stores", Some(json!({ "name": " " })), Some(&admin))
            .await;
        assert_eq!(resp.status(), 400);
        assert_eq!(body_json(resp).await["error"], "Name is required");
    }

    #[tokio::test]
    async fn test_store_routes_are_admin_only() {
        let app = TestApp::new();

        let resp = app.get("/api/admin/stores", None).await;
        assert_eq!(resp.status(), 307);
        assert_eq!(
            resp.headers()[header::LOCATION],
            "/signin?returnUrl=%2Fapi%2Fadmin%2Fstores"
        );

        let customer = app.token(UserId::new(), UserRole::Customer);
        let resp = app.get("/api/admin/stores", Some(&customer)).await;
        assert_eq!(resp.status(), 307);
        assert_eq!(resp.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_created_store_is_writable_by_its_admin() {
        let app = TestApp::new();
        let admin = app.token(UserId::new(), UserRole::Admin);
        let store = app.create("/api/admin/stores", json!({ "name": "Outlet" }), &admin).await;

        let uri = format!("/api/{}/sizes", store["id"].as_str().unwrap());
        let size = app.create(&uri, json!({ "name": "One Size", "value": "OS" }), &admin).await;
        assert_eq!(size["storeId"], store["id"]);
    }
}
