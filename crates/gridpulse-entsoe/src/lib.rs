//! ENTSO-E Transparency Platform client.
//!
//! Token-authenticated query API returning XML market documents. Covers the
//! three document types the dashboard needs: generation forecast (A71), load
//! forecast (A65), and cross-border physical flows (A11).

pub mod adapter;
pub mod client;
pub mod error;
pub mod parse;
pub mod zones;

pub use adapter::{EntsoeAdapter, EntsoeOp};
pub use client::EntsoeClient;
pub use error::EntsoeError;
pub use zones::area_code;
