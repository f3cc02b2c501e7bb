//! Client for a remote todo collection served over HTTP.
//!
//! # Overview
//! `Store` proxies list, find, save, remove and drop to a backend resource
//! (by default `/api/todo`) and reports results through completion
//! callbacks. A callback fires only when its request reaches the success
//! status; otherwise it is silently dropped.
//!
//! # Design
//! - `TodoApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).
//! - `Transport` performs the round-trip. `UreqTransport` is the default;
//!   tests plug in scripted transports.
//! - `Store` is the only stateful-looking piece, and it holds nothing but
//!   its name, the api and the transport. Every read goes to the network.
//! - Items are opaque JSON objects. `Todo`, `NewTodo` and `TodoPatch` are
//!   typed views for the reference backend's schema.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::TodoApi;
pub use config::StoreConfig;
pub use error::{ApiError, StoreError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{callback, Callback, Store};
pub use transport::{Transport, UreqTransport};
pub use types::{Item, ItemId, NewTodo, Query, Todo, TodoPatch};
