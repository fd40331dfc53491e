//! Seed records.

use super::Professor;

/// The three-record sample list the backend ships before any scrape.
pub fn seed_professors() -> Vec<Professor> {
    vec![
        Professor::new(1, "Dr. Alice Smith", "Computer Science", "CIS101", "B+"),
        Professor::new(2, "Dr. Bob Johnson", "Mathematics", "MATH201", "A-"),
        Professor::new(3, "Dr. Charlie Brown", "Physics", "PHYS301", "B"),
    ]
}
