use anyhow::Result;
use clap::Parser;
use colored::*;

use duedate::core::calculator::DueDateCalculator;
use duedate::core::config::WorkingTimeConfig;
use duedate::core::submit::SubmitInstant;
use duedate::core::turnaround::Turnaround;
use duedate::logging::{init_logging, log_calculation, log_rejected_input, log_working_time};
use duedate::settings::Settings;

#[derive(Parser)]
#[command(name = "duedate")]
#[command(author = "Due Date Calculator Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Calculate due dates in working time", long_about = None)]
struct Cli {
    #[arg(help = "Submit date and time, e.g. \"2023-05-15 10:00\"")]
    submit: String,

    #[arg(help = "Turnaround in working hours, e.g. \"2:30\" or \"1.5\"")]
    turnaround: String,

    #[arg(long, value_name = "HH:MM", help = "Override the working-hours start")]
    start: Option<String>,

    #[arg(long, value_name = "HH:MM", help = "Override the working-hours end")]
    end: Option<String>,

    #[arg(
        long,
        value_name = "DAYS",
        help = "Override the working days (comma-separated, 1 = Monday .. 7 = Sunday)"
    )]
    days: Option<String>,

    #[arg(long, value_name = "ZONE", help = "Override the timezone (IANA identifier)")]
    timezone: Option<String>,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "✗".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let mut settings = Settings::from_env();
    if let Some(start) = &cli.start {
        settings.working_hours_start = start.clone();
    }
    if let Some(end) = &cli.end {
        settings.working_hours_end = end.clone();
    }
    if let Some(days) = &cli.days {
        settings.working_days = days.clone();
    }
    if let Some(timezone) = &cli.timezone {
        settings.timezone = timezone.clone();
    }

    let config = settings.into_config()?;
    log_working_time(
        &config.start_hhmm(),
        &config.end_hhmm(),
        &working_days_label(&config),
        &config.timezone().to_string(),
    );

    let submit = SubmitInstant::parse(&cli.submit, &config).map_err(|err| {
        log_rejected_input(&cli.submit, err.message());
        err
    })?;
    let turnaround = Turnaround::parse(&cli.turnaround).map_err(|err| {
        log_rejected_input(&cli.turnaround, err.message());
        err
    })?;

    let calculator = DueDateCalculator::new(&config);
    let due = calculator.calculate_due_date(&submit, &turnaround)?;
    log_calculation(&submit.to_string(), turnaround.minutes(), &due.to_string());

    if cli.json {
        print_json(&submit, &turnaround, &due)?;
    } else {
        print_report(&config, &calculator, &submit, &turnaround, &due);
    }

    Ok(())
}

fn print_json(submit: &SubmitInstant, turnaround: &Turnaround, due: &SubmitInstant) -> Result<()> {
    let result = serde_json::json!({
        "submit": submit,
        "turnaround": turnaround,
        "turnaround_minutes": turnaround.minutes(),
        "due": due,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn print_report(
    config: &WorkingTimeConfig,
    calculator: &DueDateCalculator<'_>,
    submit: &SubmitInstant,
    turnaround: &Turnaround,
    due: &SubmitInstant,
) {
    println!("{}", "Welcome to the Due Date Calculator".blue().bold());
    println!();
    println!(
        "{} Working hours start: {}",
        "→".green(),
        config.start_hhmm().cyan()
    );
    println!(
        "{} Working hours end: {}",
        "→".green(),
        config.end_hhmm().cyan()
    );
    println!(
        "{} Working days: {}",
        "→".green(),
        working_days_label(config).cyan()
    );
    println!(
        "{} Timezone: {}",
        "→".green(),
        config.timezone().to_string().cyan()
    );
    println!(
        "{} Working hours per day: {}",
        "→".green(),
        format!("{}", calculator.calculate_workday_minutes() as f64 / 60.0).cyan()
    );

    println!();
    println!("{}", "Inputs:".bold());
    println!(
        "  {} Submit datetime: {}",
        "»".blue(),
        submit.local().format("%Y-%m-%d %H:%M (%A)")
    );
    println!(
        "  {} Turnaround time: {} ({} minutes)",
        "»".blue(),
        turnaround,
        turnaround.minutes()
    );

    println!();
    println!(
        "{} Due datetime: {}",
        "✓".green().bold(),
        due.to_string().cyan().bold()
    );
    println!(
        "  {} local: {}",
        "→".blue(),
        due.local().format("%Y-%m-%d %H:%M (%A)")
    );
}

fn working_days_label(config: &WorkingTimeConfig) -> String {
    config
        .working_days()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
