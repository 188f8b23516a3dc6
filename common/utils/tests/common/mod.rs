//! Common test fixtures for integration tests

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub name: String,
    pub team: String,
    pub level: u32,
}

pub fn employee(name: &str, team: &str, level: u32) -> Employee {
    Employee {
        name: name.to_string(),
        team: team.to_string(),
        level,
    }
}

/// A small roster with repeated teams and levels.
pub fn create_test_roster() -> Vec<Employee> {
    vec![
        employee("ada", "core", 3),
        employee("grace", "infra", 4),
        employee("linus", "core", 2),
        employee("ken", "tools", 4),
        employee("barbara", "infra", 1),
        employee("ada", "tools", 5),
    ]
}

/// Integers with repeats, in no particular order.
pub fn create_test_i32_data() -> Vec<i32> {
    vec![5, 3, 5, 1, 3, 9, 0, 1, 7, 9, 2]
}
