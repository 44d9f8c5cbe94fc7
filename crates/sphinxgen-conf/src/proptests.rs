//! Property-based tests for the union field intersection.
