//! Cross-crate integration tests for the jo workspace live under `tests/`.
