//! # userinfo
//!
//! Client for a reqres-style users API. The remote API wraps every payload in
//! an envelope of shape `{ "data": ... }`:
//!
//! - `GET {base}/users?page={page}` returns one page of users.
//! - `GET {base}/users/{id}` returns a single user, or a non-success status
//!   when the user does not exist.
//!
//! [`api::HttpApiClient`] talks to the network and [`service::UserService`]
//! delegates to any [`api::ApiClient`] so callers can swap the transport out.

pub mod api;
pub mod cli;
pub mod error;
pub mod service;

pub use self::error::{Error, Result};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
