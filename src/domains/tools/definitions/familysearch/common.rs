//! Common utilities shared across FamilySearch tools.
//!
//! Holds the mock person records both tools answer from, plus small
//! formatting helpers.

/// A person record in the mock family tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPerson {
    pub id: &'static str,
    pub name: &'static str,
    pub birth_year: u16,
    pub death_year: u16,
    pub birth: Option<&'static str>,
    pub death: Option<&'static str>,
    pub spouse: Option<&'static str>,
    pub children: Option<u32>,
}

/// Mock family tree, in search result order.
pub const MOCK_PERSONS: [MockPerson; 5] = [
    MockPerson {
        id: "FS123456",
        name: "John Smith",
        birth_year: 1820,
        death_year: 1890,
        birth: Some("15 Mar 1820, Springfield, IL"),
        death: Some("22 Jul 1890, Chicago, IL"),
        spouse: Some("Jane Doe (1825-1900)"),
        children: Some(3),
    },
    MockPerson {
        id: "FS789012",
        name: "Jane Smith",
        birth_year: 1785,
        death_year: 1850,
        birth: None,
        death: None,
        spouse: None,
        children: None,
    },
    MockPerson {
        id: "FS345678",
        name: "William Smith",
        birth_year: 1750,
        death_year: 1820,
        birth: None,
        death: None,
        spouse: None,
        children: None,
    },
    MockPerson {
        id: "FS901234",
        name: "Mary Smith",
        birth_year: 1800,
        death_year: 1875,
        birth: None,
        death: None,
        spouse: None,
        children: None,
    },
    MockPerson {
        id: "FS567890",
        name: "Robert Smith",
        birth_year: 1775,
        death_year: 1845,
        birth: None,
        death: None,
        spouse: None,
        children: None,
    },
];

/// Appended to every response built from mock records.
pub const MOCK_DATA_NOTE: &str =
    "Note: This is mock data. Real implementation requires FamilySearch API credentials.";

/// Default number of search results.
pub const DEFAULT_MAX_RESULTS: u64 = 10;

/// Find a mock record by its exact person ID.
pub fn find_person(person_id: &str) -> Option<&'static MockPerson> {
    MOCK_PERSONS.iter().find(|p| p.id == person_id)
}

/// Format a lifespan as `(birth-death)`.
pub fn format_lifespan(person: &MockPerson) -> String {
    format!("({}-{})", person.birth_year, person.death_year)
}

/// Turn a client-supplied `maxResults` into a result count.
///
/// Fractions are truncated, negatives and NaN clamp to 0, and the count never
/// exceeds `available`.
pub fn clamp_max_results(max_results: f64, available: usize) -> usize {
    if max_results.is_nan() || max_results <= 0.0 {
        return 0;
    }
    let requested = max_results.trunc();
    if requested >= available as f64 {
        available
    } else {
        requested as usize
    }
}
