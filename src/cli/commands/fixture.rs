use clap::Subcommand;
use serde::Deserialize;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::database::courses::CourseStore;
use crate::database::manager::DatabaseManager;
use crate::database::models::course::NewCourse;
use crate::database::models::screen::NewScreen;
use crate::database::models::student::NewStudent;
use crate::database::screens::ScreenStore;
use crate::database::students::StudentStore;

#[derive(Subcommand)]
pub enum FixtureCommands {
    #[command(about = "Load a fixture file into the database")]
    Load {
        #[arg(help = "Fixture file path", default_value = "fixtures/demo.json")]
        file: PathBuf,
    },
}

/// Fixture files carry any subset of the three collections.
#[derive(Deserialize)]
struct FixtureFile {
    #[serde(default)]
    screens: Vec<NewScreen>,
    #[serde(default)]
    students: Vec<NewStudent>,
    #[serde(default)]
    courses: Vec<NewCourse>,
}

pub async fn handle(cmd: FixtureCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        FixtureCommands::Load { file } => handle_load(file, output_format).await,
    }
}

async fn handle_load(file: PathBuf, output_format: OutputFormat) -> anyhow::Result<()> {
    if !file.exists() {
        return Err(anyhow::anyhow!("Fixture file not found: {}", file.display()));
    }

    let fixture: FixtureFile = serde_json::from_str(&fs::read_to_string(&file)?)?;

    let pool = DatabaseManager::pool().await?;
    let screen_store = ScreenStore::new(pool.clone());
    let student_store = StudentStore::new(pool.clone());
    let course_store = CourseStore::new(pool);

    let mut screens = 0usize;
    for screen in fixture.screens {
        screen_store.insert(screen).await?;
        screens += 1;
    }

    let mut students = 0usize;
    for student in fixture.students {
        student_store.insert(student).await?;
        students += 1;
    }

    let mut courses = 0usize;
    for course in fixture.courses {
        course_store.insert(course).await?;
        courses += 1;
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "success": true,
                    "file": file.display().to_string(),
                    "screens": screens,
                    "students": students,
                    "courses": courses
                }))?
            );
        }
        OutputFormat::Text => {
            println!("✓ Fixture loaded from {}", file.display());
            println!("  Screens:  {}", screens);
            println!("  Students: {}", students);
            println!("  Courses:  {}", courses);
        }
    }

    Ok(())
}
