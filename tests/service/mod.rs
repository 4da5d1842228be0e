//! Cross-operation scenario tests.
//!
//! Each test runs several service calls in sequence the way a client
//! session would, asserting the state carried between them. Single-call
//! behavior is covered by the unit tests next to each service.
