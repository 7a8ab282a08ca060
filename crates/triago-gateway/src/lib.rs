// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API gateway for the complaint service.
//!
//! Exposes complaint intake, listing, and update endpoints over axum.
//! Route setup and serving live in [`server`]; request/response shapes
//! and handler logic live in [`handlers`].

pub mod handlers;
pub mod server;

pub use server::{router, start_server, GatewayState};
