//! # API crate — client for the Student Portal REST backend
//!
//! Everything the frontend sends over the network goes through [`ApiClient`].
//! The crate owns no state; the session token it attaches comes from
//! [`store::SessionStore`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Auth gateway: `POST /auth/register`, `POST /auth/login`, request/response bodies |
//! | [`client`] | `reqwest`-backed [`ApiClient`], bearer token handling, status-to-error mapping |
//! | [`error`] | [`ApiError`] |
//! | [`resources`] | Generic CRUD [`ResourceClient`] and the student, recipe, posting and note record types |
//! | [`validation`] | Client-side form rules ([`Validate`], [`FieldErrors`]) |

pub mod auth;
pub mod client;
pub mod error;
pub mod resources;
pub mod validation;

pub use auth::{AuthGateway, LoginRequest, LoginResponse, RegisterRequest};
pub use client::ApiClient;
pub use error::ApiError;
pub use resources::notes::{Note, NoteFields, NotePatch, Notes};
pub use resources::postings::{Posting, PostingFields, PostingPatch, Postings};
pub use resources::recipes::{Recipe, RecipeFields, RecipePatch, Recipes};
pub use resources::students::{Student, StudentFields, StudentPatch, Students};
pub use resources::{Record, RecordId, Resource, ResourceClient};
pub use validation::{FieldErrors, Validate};

pub use store::{PortalConfig, Profile, Role, UserPayload};
