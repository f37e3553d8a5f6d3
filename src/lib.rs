//! Workspace-level integration tests for AlgoLab live under `tests/`.
