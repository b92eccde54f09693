//! Workspace-level integration tests for `fib`. See `tests/`.
