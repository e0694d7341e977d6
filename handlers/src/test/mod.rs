//! Unit test module
//!
//! Handler tests live here, separate from source files. They drive handlers and the full router
//! through a recording Bot and in-memory or mocked stores.

mod router_test;
mod session_test;
