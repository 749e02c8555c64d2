use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use roster::api::RosterApi;
use roster::commands::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::Student;
use roster::passgen::CharClass;
use roster::roster::{LoadOutcome, Statistics, StudentUpdate};
use roster::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi<FileStore>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            age,
            grade,
        }) => handle_add(&mut ctx, &id, &name, age, &grade),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Get { id }) => handle_get(&ctx, &id),
        Some(Commands::Update {
            id,
            name,
            age,
            grade,
        }) => handle_update(&mut ctx, &id, name, age, grade),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Passwd {
            length,
            count,
            classes,
        }) => handle_passwd(&ctx, length, count, &classes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "roster", "roster")
            .ok_or_else(|| RosterError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = RosterConfig::load(&data_dir).unwrap_or_default();
    let data_path = data_dir.join(&config.data_file);

    let (api, outcome) = RosterApi::open(FileStore::new(&data_path));
    match outcome {
        LoadOutcome::Loaded(count) => {
            if cli.verbose {
                println!(
                    "{}",
                    format!("Loaded {} students from {}", count, data_path.display()).dimmed()
                );
            }
        }
        LoadOutcome::Abandoned(e) => {
            eprintln!(
                "{}",
                format!("Warning: could not load roster data: {} (starting empty)", e).yellow()
            );
        }
    }

    Ok(AppContext { api, data_dir })
}

fn handle_add(ctx: &mut AppContext, id: &str, name: &str, age: u32, grade: &str) -> Result<()> {
    let result = ctx
        .api
        .add_student(id.trim(), name.trim(), age, grade.trim())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_students()?;
    print_students(&result.listed_students);
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_student(id.trim())?;
    print_students(&result.listed_students);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: &str,
    name: Option<String>,
    age: Option<u32>,
    grade: Option<String>,
) -> Result<()> {
    let update = StudentUpdate {
        name,
        age,
        grade,
    };
    let result = ctx.api.update_student(id.trim(), &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_student(id.trim())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    if let Some(stats) = &result.statistics {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_passwd(ctx: &AppContext, length: usize, count: usize, classes: &[String]) -> Result<()> {
    let classes: Vec<CharClass> = if classes.is_empty() {
        CharClass::ALL.to_vec()
    } else {
        classes
            .iter()
            .map(|name| {
                name.parse::<CharClass>()
                    .map_err(|e| RosterError::Validation(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?
    };

    let result = ctx.api.generate_passwords(count, length, &classes)?;
    if let [password] = result.passwords.as_slice() {
        println!("{}", password);
    } else {
        for (i, password) in result.passwords.iter().enumerate() {
            println!("{:>2}: {}", i + 1, password);
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = RosterConfig::load(&ctx.data_dir)?;
    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            println!("data-file = {}", config.data_file);
        }
        (Some("data-file"), Some(v)) => {
            config.data_file = v;
            config.save(&ctx.data_dir)?;
            println!("data-file = {}", config.data_file);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn print_students(students: &[Student]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    let id_width = students
        .iter()
        .map(|s| s.id.width())
        .chain(std::iter::once("ID".width()))
        .max()
        .unwrap_or(0);
    let name_width = students
        .iter()
        .map(|s| s.name.width())
        .chain(std::iter::once("NAME".width()))
        .max()
        .unwrap_or(0);

    println!(
        "{}",
        format!(
            "{}  {}  {:>3}  {}",
            pad_to_width("ID", id_width),
            pad_to_width("NAME", name_width),
            "AGE",
            "GRADE"
        )
        .dimmed()
    );

    for student in students {
        println!(
            "{}  {}  {:>3}  {}",
            pad_to_width(&student.id, id_width).bold(),
            pad_to_width(&student.name, name_width),
            student.age,
            student.grade
        );
    }
}

fn print_stats(stats: &Statistics) {
    println!("{}", "--- Roster Statistics ---".bold());
    println!("Total students: {}", stats.count);
    println!("Average age: {:.1}", stats.average_age);
    println!("Age range: {} - {}", stats.min_age, stats.max_age);
    println!("Grade distribution:");
    for (grade, count) in &stats.grade_counts {
        println!("  {}: {}", grade, count);
    }
}
