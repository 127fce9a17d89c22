use clap::Parser;
use dnd_classes::core::ConfigProvider;
use dnd_classes::utils::error::{DndError, ErrorCategory};
use dnd_classes::utils::logger;
use dnd_classes::{
    Character, CharacterCard, ClassDirectory, ClassesApi, CliConfig, Command, ResolvedConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            report_and_exit(&e);
        }
    };

    if config.json_logs {
        logger::init_json_logger(config.verbose());
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("Starting dnd-classes CLI");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?})",
            e,
            e.category()
        );
        report_and_exit(&e);
    }
}

async fn run(command: Command, config: &ResolvedConfig) -> dnd_classes::Result<()> {
    let api = ClassesApi::from_config(config);

    match command {
        Command::Classes => {
            let directory = ClassDirectory::new(api);
            let classes = directory.load().await?;
            if classes.is_empty() {
                println!("No classes available");
            } else {
                println!("{}", ClassDirectory::<ClassesApi>::render(&classes));
            }
        }
        Command::Class { name } => {
            let directory = ClassDirectory::new(api);
            println!("{}", directory.describe(&name).await?);
        }
        Command::Raw => {
            let payload = api.get_class_list().await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Card {
            name,
            class_type,
            level,
        } => {
            let character = Character::new(name, class_type, level);
            println!("{}", CharacterCard::new(&character));
        }
        Command::Names { table } => {
            let payload = api.get_names(&table).await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Describe { table } => {
            let payload = api.describe_table(&table).await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Capabilities => {
            for capability in api.get_capabilities().await? {
                let methods = capability.methods.join(",");
                match capability.description {
                    Some(description) => {
                        println!("{} {} - {}", methods, capability.path, description)
                    }
                    None => println!("{} {}", methods, capability.path),
                }
            }
        }
        Command::Health => {
            api.health().await?;
            println!("✅ D&D API at {} is healthy", api.base_url());
        }
    }

    Ok(())
}

fn report_and_exit(e: &DndError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Request => 2,
        ErrorCategory::System => 3,
        ErrorCategory::Input => 4,
    };
    std::process::exit(exit_code);
}
