//! Repository operations, one cluster per entity. All of them are methods
//! on [`Database`](crate::Database).
//!
//! Listings break `created_at` ties on `id` so rows written within the same
//! millisecond keep insertion order.

mod comments;
mod posts;
mod topics;
mod users;
