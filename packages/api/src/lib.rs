//! # API crate — typed client for the recipe backend
//!
//! The backend is an external REST service; this crate is the only place the
//! client talks to it. Everything above it (controllers, views) goes through the
//! [`RecipeApi`] trait so tests can substitute a scripted fake.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpApi`], the `reqwest` implementation of [`RecipeApi`] |
//! | [`error`] | [`ApiError`]: transport failure vs. server rejection |
//! | [`models`] | Wire types: [`Recipe`], [`Author`], auth request/response bodies |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | `GET` | `/health` | — |
//! | `POST` | `/auth/login` | — |
//! | `POST` | `/auth/register` | — |
//! | `GET` | `/users/profile` | bearer |
//! | `GET` | `/recipes` | — |
//! | `DELETE` | `/recipes/:id` | bearer |

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::HttpApi;
pub use error::ApiError;
pub use models::{Author, AuthResponse, LoginRequest, Recipe, RegisterRequest, UserInfo};

/// Async interface to the recipe backend.
pub trait RecipeApi {
    fn health(&self) -> impl Future<Output = Result<(), ApiError>>;
    fn login(
        &self,
        request: LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn profile(&self, token: &str) -> impl Future<Output = Result<UserInfo, ApiError>>;
    fn recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, ApiError>>;
    fn delete_recipe(
        &self,
        token: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
