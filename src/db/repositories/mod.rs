//! Repository implementations.
//!
//! Only the in-memory backend is shipped: the tool's state is small,
//! per-installation and rebuilt cheaply, so a SQL backend would add
//! operational weight without a workload to justify it. The trait seam in
//! [`crate::db::repository`] is where one would plug in.

pub mod local;

pub use local::LocalRepository;
