//! Cross-crate integration tests for PIB26 live under `tests/`.
