//! The hand-maintained roadmap plan: which issues belong to which project,
//! which milestone they close under, and the date they are due.
//!
//! The tables are compiled in. Nothing here talks to GitHub; the plan is
//! built once at startup and handed to the assignment runner read-only.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

/// Milestone name to milestone number, as created in the repository.
const MILESTONES: &[(&str, u64)] = &[
    ("Security Fix", 2),
    ("Database Improvements", 3),
    ("Poller Enhancements", 4),
    ("Card Metadata Source", 5),
    ("Full Integration", 6),
    ("Basic Statistics", 7),
    ("Advanced Analytics", 8),
    ("Rank Features", 9),
    ("Draft Storage", 10),
    ("Draft Display", 11),
    ("Draft Analytics", 12),
    ("Collection Features", 13),
    ("Deck Analysis", 14),
    ("Collection-Deck Integration", 15),
    ("GUI Foundation", 16),
    ("Statistics GUI", 17),
    ("Charts & Graphs", 18),
    ("Advanced GUI Features", 19),
    ("Export Features", 20),
    ("External Integration", 21),
];

/// Project name, project number, and the Projects v2 node id.
const PROJECTS: &[(&str, u64, &str)] = &[
    ("Security & Infrastructure", 2, "PVT_kwHOABsZ684BHe6N"),
    ("Card Metadata Integration", 3, "PVT_kwHOABsZ684BHe6O"),
    ("Statistics Enhancements", 4, "PVT_kwHOABsZ684BHe6P"),
    ("Draft Features", 5, "PVT_kwHOABsZ684BHe6Q"),
    ("Collection & Deck Management", 6, "PVT_kwHOABsZ684BHe6S"),
    ("Fyne GUI Foundation", 7, "PVT_kwHOABsZ684BHe6V"),
    ("GUI Features", 8, "PVT_kwHOABsZ684BHe6W"),
    ("Export & Integration", 9, "PVT_kwHOABsZ684BHe6X"),
];

/// Per project number: (issue, phase label, milestone name, due date).
const ASSIGNMENTS: &[(u64, &[(u64, &str, &str, &str)])] = &[
    (
        2,
        &[
            (31, "Phase 1: Security", "Security Fix", "2025-11-07"),
            (59, "Phase 2: Database", "Database Improvements", "2025-11-08"),
            (60, "Phase 2: Database", "Database Improvements", "2025-11-09"),
            (65, "Phase 3: Poller", "Poller Enhancements", "2025-11-10"),
            (66, "Phase 3: Poller", "Poller Enhancements", "2025-11-11"),
            (67, "Phase 3: Poller", "Poller Enhancements", "2025-11-12"),
            (68, "Phase 3: Poller", "Poller Enhancements", "2025-11-13"),
            (69, "Phase 3: Poller", "Poller Enhancements", "2025-11-14"),
        ],
    ),
    (
        3,
        &[
            (71, "Phase 1: Foundation", "Card Metadata Source", "2025-11-15"),
            (79, "Phase 2: Integration", "Full Integration", "2025-11-16"),
            (118, "Phase 2: Integration", "Full Integration", "2025-11-17"),
        ],
    ),
    (
        4,
        &[
            (38, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-18"),
            (39, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-19"),
            (40, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-20"),
            (41, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-21"),
            (42, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-22"),
            (43, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-23"),
            (44, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-24"),
            (45, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-25"),
            (46, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-26"),
            (47, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-11-27"),
            (48, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-28"),
            (49, "Phase 1: Core Statistics", "Basic Statistics", "2025-11-29"),
            (57, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-11-30"),
            (72, "Phase 1: Core Statistics", "Basic Statistics", "2025-12-01"),
            (76, "Phase 1: Core Statistics", "Basic Statistics", "2025-12-02"),
            (81, "Phase 1: Core Statistics", "Basic Statistics", "2025-12-03"),
            (87, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-04"),
            (88, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-05"),
            (89, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-06"),
            (90, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-07"),
            (91, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-08"),
            (92, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-09"),
            (94, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-10"),
            (95, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-11"),
            (96, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-12"),
            (97, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-13"),
            (98, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-14"),
            (99, "Phase 2: Advanced Analytics", "Advanced Analytics", "2025-12-15"),
            (100, "Phase 1: Core Statistics", "Basic Statistics", "2025-12-16"),
            (102, "Phase 3: Rank Tracking", "Rank Features", "2025-12-17"),
            (103, "Phase 3: Rank Tracking", "Rank Features", "2025-12-18"),
            (104, "Phase 3: Rank Tracking", "Rank Features", "2025-12-19"),
            (105, "Phase 3: Rank Tracking", "Rank Features", "2025-12-20"),
            (106, "Phase 3: Rank Tracking", "Rank Features", "2025-12-21"),
            (107, "Phase 3: Rank Tracking", "Rank Features", "2025-12-22"),
            (108, "Phase 3: Rank Tracking", "Rank Features", "2025-12-23"),
            (109, "Phase 3: Rank Tracking", "Rank Features", "2025-12-24"),
            (110, "Phase 3: Rank Tracking", "Rank Features", "2025-12-25"),
        ],
    ),
    (
        5,
        &[
            (112, "Phase 1: Storage", "Draft Storage", "2025-12-26"),
            (113, "Phase 2: Display", "Draft Display", "2025-12-27"),
            (114, "Phase 2: Display", "Draft Display", "2025-12-28"),
            (115, "Phase 3: Analytics", "Draft Analytics", "2025-12-29"),
            (116, "Phase 2: Display", "Draft Display", "2025-12-30"),
            (117, "Phase 2: Display", "Draft Display", "2025-12-31"),
            (118, "Phase 2: Display", "Draft Display", "2026-01-01"),
            (119, "Phase 3: Analytics", "Draft Analytics", "2026-01-02"),
            (120, "Phase 3: Analytics", "Draft Analytics", "2026-01-03"),
            (121, "Phase 3: Analytics", "Draft Analytics", "2026-01-04"),
            (122, "Phase 3: Analytics", "Draft Analytics", "2026-01-05"),
        ],
    ),
    (
        6,
        &[
            (73, "Phase 1: Collection", "Collection Features", "2026-01-06"),
            (74, "Phase 3: Integration", "Collection-Deck Integration", "2026-01-07"),
            (75, "Phase 3: Integration", "Collection-Deck Integration", "2026-01-08"),
            (76, "Phase 1: Collection", "Collection Features", "2026-01-09"),
            (77, "Phase 1: Collection", "Collection Features", "2026-01-10"),
            (80, "Phase 2: Deck Analysis", "Deck Analysis", "2026-01-11"),
            (82, "Phase 2: Deck Analysis", "Deck Analysis", "2026-01-12"),
            (83, "Phase 3: Integration", "Collection-Deck Integration", "2026-01-13"),
            (84, "Phase 3: Integration", "Collection-Deck Integration", "2026-01-14"),
            (85, "Phase 3: Integration", "Collection-Deck Integration", "2026-01-15"),
        ],
    ),
    (
        7,
        &[
            (50, "Phase 1: Foundation", "GUI Foundation", "2026-01-16"),
            (53, "Phase 1: Foundation", "GUI Foundation", "2026-01-17"),
        ],
    ),
    (
        8,
        &[
            (51, "Phase 1: Statistics GUI", "Statistics GUI", "2026-01-18"),
            (52, "Phase 2: Visualizations", "Charts & Graphs", "2026-01-19"),
            (54, "Phase 2: Visualizations", "Charts & Graphs", "2026-01-20"),
            (55, "Phase 1: Statistics GUI", "Statistics GUI", "2026-01-21"),
            (56, "Phase 3: Advanced Features", "Advanced GUI Features", "2026-01-22"),
            (61, "Phase 3: Advanced Features", "Advanced GUI Features", "2026-01-23"),
            (62, "Phase 3: Advanced Features", "Advanced GUI Features", "2026-01-24"),
            (63, "Phase 3: Advanced Features", "Advanced GUI Features", "2026-01-25"),
            (77, "Phase 1: Statistics GUI", "Statistics GUI", "2026-01-26"),
            (90, "Phase 2: Visualizations", "Charts & Graphs", "2026-01-27"),
            (98, "Phase 2: Visualizations", "Charts & Graphs", "2026-01-28"),
            (105, "Phase 1: Statistics GUI", "Statistics GUI", "2026-01-29"),
            (110, "Phase 2: Visualizations", "Charts & Graphs", "2026-01-30"),
            (113, "Phase 1: Statistics GUI", "Statistics GUI", "2026-01-31"),
            (114, "Phase 1: Statistics GUI", "Statistics GUI", "2026-02-01"),
            (117, "Phase 2: Visualizations", "Charts & Graphs", "2026-02-02"),
        ],
    ),
    (
        9,
        &[
            (42, "Phase 1: Export", "Export Features", "2026-02-03"),
            (58, "Phase 2: Integration", "External Integration", "2026-02-04"),
            (73, "Phase 1: Export", "Export Features", "2026-02-05"),
            (82, "Phase 1: Export", "Export Features", "2026-02-06"),
            (92, "Phase 1: Export", "Export Features", "2026-02-07"),
            (97, "Phase 1: Export", "Export Features", "2026-02-08"),
            (116, "Phase 1: Export", "Export Features", "2026-02-09"),
        ],
    ),
];

/// A project board the plan assigns issues to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub name: &'static str,
    pub number: u64,
    /// Opaque Projects v2 node id, used by the GraphQL attach mutation.
    pub id: &'static str,
}

/// One row of the plan: an issue and everything to set on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub issue: u64,
    pub phase: &'static str,
    pub milestone: &'static str,
    pub due: NaiveDate,
}

impl Assignment {
    /// The body marker line recording this assignment's due date.
    pub fn due_marker(&self) -> String {
        format!("**Due Date:** {}", self.due.format("%Y-%m-%d"))
    }
}

/// The full plan, built once by [`builtin`] and treated as read-only.
#[derive(Debug, Clone)]
pub struct Plan {
    milestones: HashMap<&'static str, u64>,
    projects: Vec<ProjectRef>,
    /// Keyed by project number; iteration order is ascending, which matches
    /// the order the boards were created in.
    assignments: BTreeMap<u64, Vec<Assignment>>,
}

impl Plan {
    /// Assembles a plan from its three tables.
    pub fn new(
        milestones: HashMap<&'static str, u64>,
        projects: Vec<ProjectRef>,
        assignments: BTreeMap<u64, Vec<Assignment>>,
    ) -> Self {
        Self {
            milestones,
            projects,
            assignments,
        }
    }

    /// Looks up the number for a milestone name.
    pub fn milestone_number(&self, name: &str) -> Option<u64> {
        self.milestones.get(name).copied()
    }

    /// Looks up a project by its number.
    pub fn project_by_number(&self, number: u64) -> Option<&ProjectRef> {
        self.projects.iter().find(|p| p.number == number)
    }

    /// All assignment groups, in ascending project-number order.
    pub fn groups(&self) -> impl Iterator<Item = (u64, &[Assignment])> {
        self.assignments.iter().map(|(n, rows)| (*n, rows.as_slice()))
    }

    /// Total number of assignment rows across all projects.
    pub fn total_assignments(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid due date {date:?} for issue #{issue}: {source}")]
    InvalidDate {
        issue: u64,
        date: &'static str,
        source: chrono::ParseError,
    },
}

/// Builds the compiled-in plan, parsing every due date.
pub fn builtin() -> Result<Plan, PlanError> {
    let milestones = MILESTONES.iter().copied().collect();
    let projects = PROJECTS
        .iter()
        .map(|&(name, number, id)| ProjectRef { name, number, id })
        .collect();

    let mut assignments = BTreeMap::new();
    for &(project, rows) in ASSIGNMENTS {
        let mut group = Vec::with_capacity(rows.len());
        for &(issue, phase, milestone, date) in rows {
            let due = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|source| PlanError::InvalidDate { issue, date, source })?;
            group.push(Assignment {
                issue,
                phase,
                milestone,
                due,
            });
        }
        assignments.insert(project, group);
    }

    Ok(Plan::new(milestones, projects, assignments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_builds() {
        let plan = builtin().unwrap();
        assert_eq!(plan.total_assignments(), 95);
    }

    #[test]
    fn test_group_sizes() {
        let plan = builtin().unwrap();
        let sizes: Vec<(u64, usize)> = plan.groups().map(|(n, rows)| (n, rows.len())).collect();
        assert_eq!(
            sizes,
            vec![
                (2, 8),
                (3, 3),
                (4, 38),
                (5, 11),
                (6, 10),
                (7, 2),
                (8, 16),
                (9, 7),
            ]
        );
    }

    #[test]
    fn test_milestone_lookup() {
        let plan = builtin().unwrap();
        assert_eq!(plan.milestone_number("Security Fix"), Some(2));
        assert_eq!(plan.milestone_number("External Integration"), Some(21));
        assert_eq!(plan.milestone_number("No Such Milestone"), None);
    }

    #[test]
    fn test_project_lookup() {
        let plan = builtin().unwrap();
        let project = plan.project_by_number(2).unwrap();
        assert_eq!(project.name, "Security & Infrastructure");
        assert_eq!(project.id, "PVT_kwHOABsZ684BHe6N");
        assert!(plan.project_by_number(42).is_none());
    }

    #[test]
    fn test_every_milestone_in_plan_resolves() {
        let plan = builtin().unwrap();
        for (_, rows) in plan.groups() {
            for row in rows {
                assert!(
                    plan.milestone_number(row.milestone).is_some(),
                    "unmapped milestone {:?}",
                    row.milestone
                );
            }
        }
    }

    #[test]
    fn test_every_group_has_a_project() {
        let plan = builtin().unwrap();
        for (number, _) in plan.groups() {
            assert!(plan.project_by_number(number).is_some());
        }
    }

    #[test]
    fn test_due_marker_format() {
        let plan = builtin().unwrap();
        let (_, rows) = plan.groups().next().unwrap();
        assert_eq!(rows[0].due_marker(), "**Due Date:** 2025-11-07");
    }

    #[test]
    fn test_due_dates_cover_schedule() {
        let plan = builtin().unwrap();
        let dates: Vec<NaiveDate> = plan
            .groups()
            .flat_map(|(_, rows)| rows.iter().map(|r| r.due))
            .collect();
        assert_eq!(dates.first().copied(), NaiveDate::from_ymd_opt(2025, 11, 7));
        assert_eq!(dates.last().copied(), NaiveDate::from_ymd_opt(2026, 2, 9));
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
