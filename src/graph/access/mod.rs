//! Internal traversal scratch state.
//!
//! This module is intentionally `pub(crate)` so the search strategies and the
//! plain traversals share one notion of "visited" without exposing it as part
//! of the public API surface.

pub(crate) mod visited;
