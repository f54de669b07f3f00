//! Workspace-level integration tests for rotbench live in `tests/`.
