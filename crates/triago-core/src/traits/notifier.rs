// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification dispatcher trait.

use async_trait::async_trait;

use crate::types::ComplaintCreated;

/// Fire-and-forget delivery of a creation event to an external sink.
///
/// At most one delivery attempt is made; any failure is discarded. The
/// call must never surface an error to, or block, the creation path
/// beyond its own bounded attempt -- hence no return value.
#[async_trait]
pub trait Notifier {
    /// Attempt one delivery of the creation event.
    async fn notify(&self, event: &ComplaintCreated);
}
