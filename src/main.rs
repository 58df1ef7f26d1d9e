use clap::Parser;
use std::str::FromStr;
use tagging::application::clean_tag_input;
use tagging::cli::{format_cloud, format_settings, format_tag_list, format_tag_parts, Cli, Commands};
use tagging::domain::tags::{check_tag_length, edit_string_for_tags, get_tag_parts, parse_tag_input};
use tagging::domain::{calculate_cloud, Distribution};
use tagging::error::TaggingError;
use tagging::infrastructure::config::CONFIG_FILE_NAME;
use tagging::infrastructure::{load_counts, TagSettings};

fn main() {
    tagging::init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TaggingError> {
    let current_dir = std::env::current_dir()?;
    let settings = TagSettings::discover(cli.config.as_deref(), &current_dir)?;

    match cli.command {
        Commands::Parse { input, check } => {
            let tags = if check {
                clean_tag_input(&input, &settings)?
            } else {
                parse_tag_input(settings.apply_case(&input).as_str())
            };
            print!("{}", format_tag_list(&tags));
            Ok(())
        }
        Commands::Parts { tag } => {
            let parts = get_tag_parts(&tag)?;
            print!("{}", format_tag_parts(&parts));
            Ok(())
        }
        Commands::Edit { tags } => {
            let parts = tags
                .iter()
                .map(|tag| get_tag_parts(tag))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", settings.apply_case(&edit_string_for_tags(&parts)));
            Ok(())
        }
        Commands::Check { tag } => {
            let parts = get_tag_parts(&tag)?;
            check_tag_length(&parts, &settings.limits)?;
            println!("OK: {}", parts);
            Ok(())
        }
        Commands::Cloud {
            file,
            steps,
            distribution,
        } => {
            let distribution = Distribution::from_str(&distribution)?;

            let mut counts = load_counts(&file)?;
            calculate_cloud(&mut counts, steps, distribution)?;
            print!("{}", format_cloud(&counts));
            Ok(())
        }
        Commands::Config { init } => {
            if init {
                let path = current_dir.join(CONFIG_FILE_NAME);
                if path.exists() {
                    return Err(TaggingError::Config(format!(
                        "Config file already exists: {}",
                        path.display()
                    )));
                }
                settings.save_to_file(&path)?;
                println!("Created {}", path.display());
            } else {
                print!("{}", format_settings(&settings));
            }
            Ok(())
        }
    }
}
