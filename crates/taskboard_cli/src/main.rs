//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire the in-memory repositories, load seed data and print a summary.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use taskboard_core::{init_logging, CoreConfig, Repositories, SeedDataService};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(log) = config.log.as_ref() {
        init_logging(log)?;
    }

    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    let repos = Repositories::in_memory(&config);
    let summary = SeedDataService::new(repos.clone()).load_seed_data()?;
    log::info!(
        "event=cli_seed module=cli status=ok projects={}",
        summary.projects
    );

    for project in repos.projects.list()? {
        let category = project
            .category
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        let tags: Vec<&str> = project.tags.iter().map(|tag| tag.title.as_str()).collect();
        println!(
            "project id={} name={:?} category={} tasks={} tags={}",
            project.id,
            project.name,
            category,
            project.tasks.len(),
            tags.join(",")
        );
    }

    Ok(())
}
