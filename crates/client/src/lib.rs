//! JSON-RPC client for Mathesar.
//!
//! ```no_run
//! # async fn demo() -> mathesar_client::ClientResult<()> {
//! use mathesar_client::{ClientConfig, Mathesar};
//!
//! let config = ClientConfig::new("http://localhost:8000")?;
//! let mathesar = Mathesar::connect(&config, "admin", "secret").await?;
//! for table in mathesar.tables_list(2200, 1).await? {
//!     println!("{} {}", table.oid, table.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod rpc;
pub mod types;
pub mod wrappers;

pub use api::SIGNATURES;
pub use client::{Client, ClientConfig};
pub use error::{ClientError, ClientResult, RemoteError, RemoteErrorKind};
pub use rpc::{Params, absent_or_null, nullable, signature};
pub use wrappers::{Mathesar, NewCollaborator};
