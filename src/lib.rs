//! # shop-admin
//!
//! > **Session state, REST plumbing and route guarding for a storefront admin front end.**
//!
//! The crate holds everything of the admin UI that is not drawing: who is logged in,
//! which requests are in flight, what the last error was, which views may be entered,
//! and the calls to the storefront REST API.
//!
//! ## 🏗️ Design
//!
//! ### One store, one writer
//! The session lives in a single actor task ([`framework::StoreActor`]). Every change
//! arrives as a [`SessionEvent`](session::SessionEvent) through its mpsc inbox and is
//! applied by a pure reducer, so concurrent operations never race on the state and no
//! lock is needed.
//!
//! ### Operations emit, the reducer decides
//! The [`dispatcher`] never writes the state. It emits `*_REQUEST` before a call and
//! `*_SUCCESS`/`*_FAILURE` after it. Each request carries a generation number; the
//! reducer ignores completions of requests that have since been superseded.
//!
//! ### Seams are traits
//! The network ([`transport::ApiTransport`]), the persisted token
//! ([`token_store::TokenStore`]) and user messages ([`notify::Notifier`]) are traits.
//! Production wiring uses `reqwest`, a JSON file and `tracing`; tests swap in scripted
//! or in-memory versions.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The generic store actor, its client and the test doubles for it.
//! - **Key items**: [`StoreEntity`](framework::StoreEntity), [`StoreActor`](framework::StoreActor),
//!   [`StoreClient`](framework::StoreClient).
//!
//! ### 2. The State ([`session`])
//! - **Role**: [`SessionState`](session::SessionState), its events and the reducer.
//!
//! ### 3. The Operations ([`dispatcher`], [`catalog`], [`guard`])
//! - **Role**: Register, log in, load the user and roles, log out; list and create
//!   products and categories; gate the admin views on the stored token.
//!
//! ### 4. The Plumbing ([`transport`], [`token_store`], [`notify`], [`validation`], [`model`])
//! - **Role**: Wire types, HTTP client, token persistence, snackbars and form rules.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Builds the system from configuration, installs tracing, shuts down.
//! - **Key items**: [`AdminSystem`](lifecycle::AdminSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Against a local API on port 3000, with info logs
//! RUST_LOG=info cargo run
//!
//! # Another API, searching the product table
//! SHOP_ADMIN_API_URL=https://shop.example.com RUST_LOG=info cargo run -- lamp
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod framework;
pub mod guard;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod session;
pub mod token_store;
pub mod transport;
pub mod validation;
