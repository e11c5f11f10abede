//! Typed client for the FakeREST Books/Authors API and the fixture data that
//! drives its test suites.
//!
//! # Overview
//! `RestClient` issues GET/POST/PUT/DELETE against one service root and
//! deserializes JSON bodies into whatever type the caller names. Status codes
//! are returned as data: a 404 is a `Response` with `status_code == 404`, not
//! an `Err`. `BooksService` and `AuthorsService` pin the client to a resource
//! and its model.
//!
//! # Design
//! - `Settings` is constructed explicitly and passed in; there is no global
//!   configuration.
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`)
//!   executed by a `Transport`; `UreqTransport` is the network-backed one.
//! - Facade paths live in `ResourcePaths`, one per operation.

pub mod client;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod models;
pub mod services;
pub mod settings;
pub mod transport;

pub use client::RestClient;
pub use error::{ClientError, FixtureError, TransportError};
pub use fixtures::{Fixtures, GetAuthorCase, GetBookCase};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Response};
pub use models::{AuthorsModel, BookModel, ErrorModel};
pub use services::{AuthorsService, BooksService, ResourcePaths};
pub use settings::Settings;
pub use transport::{Transport, UreqTransport};
