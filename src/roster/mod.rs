//! University roster roles.
//!
//! A closed set of roles replaces an open person hierarchy: the broad
//! category is the shared display capability, and the study/teach split is
//! dispatched through a single method rather than recovered by downcasting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Undergraduate,
    Graduate,
    Professor,
    Instructor,
    Staff,
}

impl Role {
    /// Shared display capability: the broad category of the role.
    pub fn category(&self) -> &'static str {
        match self {
            Role::Undergraduate | Role::Graduate => "Student",
            Role::Professor | Role::Instructor => "Faculty",
            Role::Staff => "Staff",
        }
    }

    /// Role-specific capability line. Staff have none.
    pub fn activity(&self) -> Option<&'static str> {
        match self {
            Role::Undergraduate => Some("Studying for a bachelor's degree"),
            Role::Graduate => Some("Studying for a master's or doctoral degree"),
            Role::Professor => Some("Teaching advanced classes"),
            Role::Instructor => Some("Teaching introductory classes"),
            Role::Staff => None,
        }
    }

    /// Every role, in roster order.
    pub fn all() -> [Role; 5] {
        [
            Role::Undergraduate,
            Role::Graduate,
            Role::Professor,
            Role::Instructor,
            Role::Staff,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_students_and_faculty_categories() {
        assert_eq!(Role::Undergraduate.category(), "Student");
        assert_eq!(Role::Graduate.category(), "Student");
        assert_eq!(Role::Professor.category(), "Faculty");
        assert_eq!(Role::Instructor.category(), "Faculty");
        assert_eq!(Role::Staff.category(), "Staff");
    }

    #[test]
    fn test_staff_have_no_activity() {
        assert!(Role::Staff.activity().is_none());
        for role in Role::all() {
            if role != Role::Staff {
                assert!(role.activity().is_some(), "{role:?} should have an activity");
            }
        }
    }

    #[test]
    fn test_activities_match_the_role() {
        assert_eq!(
            Role::Undergraduate.activity(),
            Some("Studying for a bachelor's degree")
        );
        assert_eq!(
            Role::Professor.activity(),
            Some("Teaching advanced classes")
        );
    }
}
