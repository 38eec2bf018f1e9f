//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain, `tools`: the catalog of
//! genealogy tools and the dispatch layer that routes calls to them.

pub mod tools;
