//! Startup seed data loader.
//!
//! # Responsibility
//! - Populate empty repositories with the fixed starter dataset.
//!
//! # Invariants
//! - Each project is saved as Category → Project → Tasks → Tags, so every
//!   foreign key points at an id assigned earlier in the same pass.
//! - Tags are saved through the project-scoped path so they are linked.

use crate::model::category::Category;
use crate::model::project::Project;
use crate::model::tag::Tag;
use crate::model::task::ProjectTask;
use crate::model::UNASSIGNED_ID;
use crate::repo::registry::Repositories;
use crate::repo::RepoResult;
use log::info;
use std::time::Instant;

/// Counts of records written by one seed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub categories: usize,
    pub tasks: usize,
    pub tags: usize,
}

pub struct SeedDataService {
    repos: Repositories,
}

impl SeedDataService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Saves the starter dataset and returns what was written.
    ///
    /// Calling this twice writes a second copy; callers seed once at startup.
    pub fn load_seed_data(&self) -> RepoResult<SeedSummary> {
        let started_at = Instant::now();
        let mut summary = SeedSummary::default();

        for mut project in seed_projects() {
            if let Some(category) = project.category.take() {
                project.category_id = self.repos.categories.save(&category)?;
                summary.categories += 1;
            }

            let project_id = self.repos.projects.save(&project)?;
            summary.projects += 1;

            for mut task in std::mem::take(&mut project.tasks) {
                task.project_id = project_id;
                self.repos.tasks.save(&task)?;
                summary.tasks += 1;
            }

            for tag in std::mem::take(&mut project.tags) {
                self.repos.tags.save_for_project(&tag, project_id)?;
                summary.tags += 1;
            }
        }

        info!(
            "event=seed_load module=service status=ok duration_ms={} projects={} categories={} tasks={} tags={}",
            started_at.elapsed().as_millis(),
            summary.projects,
            summary.categories,
            summary.tasks,
            summary.tags
        );
        Ok(summary)
    }
}

fn seed_project(
    name: &str,
    description: &str,
    icon: &str,
    category: Category,
    tags: Vec<Tag>,
    task_titles: &[&str],
) -> Project {
    let mut project = Project::new(name, description, icon);
    project.category = Some(category);
    project.tags = tags;
    project.tasks = task_titles
        .iter()
        .map(|title| ProjectTask::new(*title, UNASSIGNED_ID))
        .collect();
    project
}

fn seed_projects() -> Vec<Project> {
    vec![
        seed_project(
            "Balance",
            "Improve work-life balance.",
            "\u{ea28}",
            Category::new("work", "#3068df"),
            vec![Tag::new("work", "#3068df")],
            &[
                "Survey Employees",
                "Analyze Survey Results",
                "Develop Action Plan",
            ],
        ),
        seed_project(
            "Personal",
            "Learn to speak another language.",
            "\u{f8fe}",
            Category::new("education", "#8800FF"),
            vec![Tag::new("personal", "#FF4500")],
            &["Read a Book", "Attend a Workshop", "Practice a Hobby"],
        ),
        seed_project(
            "Fitness",
            "Promote health and fitness activities",
            "\u{f837}",
            Category::new("self", "#FF3300"),
            vec![Tag::new("health", "#32CD32")],
            &["Morning Yoga", "Evening Run", "Healthy Cooking Class"],
        ),
        seed_project(
            "Family and Friends",
            "Strengthen relationships with family and friends.",
            "\u{f5a9}",
            Category::new("relationships", "#FF9900"),
            vec![
                Tag::new("family", "#1E90FF"),
                Tag::new("friends", "#FF69B4"),
            ],
            &[
                "Plan a Family Reunion",
                "Organize a Friends' Get-together",
                "Weekly Phone Calls",
            ],
        ),
    ]
}
