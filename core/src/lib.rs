//! Synchronous API client core for the forum service.
//!
//! # Overview
//! Builds `HttpRequest` values and interprets replies without touching the
//! network (host-does-IO pattern). `ForumApi` adds a `Transport` on top and
//! exposes one method per remote operation.
//!
//! # Design
//! - `ForumClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (validates input, produces the
//!   request) and `parse_*` (consumes the reply), so the I/O boundary is
//!   explicit and every operation is testable without a server.
//! - Success payloads are returned as raw `serde_json::Value`.
//! - Failure messages are chosen per operation by an `ErrorPolicy`; the
//!   resulting `ClientError` displays exactly that message.

pub mod api;
mod backgrounds;
mod catalog;
pub mod client;
mod comments;
pub mod config;
pub mod error;
pub mod http;
pub mod multipart;
pub mod policy;
mod positions;
mod posts;
pub mod transport;
pub mod types;
mod users;

pub use api::ForumApi;
pub use client::ForumClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Reply, TransportError};
pub use multipart::{FormFile, PostForm};
pub use policy::{ErrorPolicy, Extractor, Failure, Fallback};
pub use transport::{Transport, UreqTransport};
pub use types::{BackgroundFilter, BackgroundUpdate, IdArg, NewBackground, NewComment, UserPost};
