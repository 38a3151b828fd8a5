//! Domain types shared by the store, the outbound client and the API server.

pub mod error;
pub mod ids;
pub mod seed_list;
pub mod todo;
pub mod types;
