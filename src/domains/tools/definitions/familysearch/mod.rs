//! FamilySearch tools module.
//!
//! - `search`: Search for individuals in the family tree
//! - `person`: Get details about a specific person
//!
//! Both tools currently answer from a fixed mock dataset; a real
//! FamilySearch API integration would replace `common::MOCK_PERSONS`.

pub mod common;
pub mod person;
pub mod search;

pub use person::{GetPersonDetailsParams, GetPersonDetailsTool};
pub use search::{SearchFamilyTreeParams, SearchFamilyTreeTool};
