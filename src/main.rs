// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use wisdom_well::{
    AppState, Config, GenerativeModel, GroqClient, HealthReport, JsonExporter, Religion,
    ScriptureRetrievalFlow, ScriptureRetrievalInput, TranslationBoard, TranslationFlow,
    UnavailableModel, Validator, WaitIndicator,
    config::DEFAULT_CONFIG_PATH,
    prompts::scoped_catalogue,
    render_result, server, translate_entries,
    utils::logging::{format_error, format_info, format_success, format_warning},
};

#[derive(Parser)]
#[command(name = "wisdom_well")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Scripture retrieval and translation across eight faith traditions", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question and retrieve passages from the selected scriptures
    Ask {
        question: String,

        #[arg(short, long = "religion", value_name = "RELIGION", required_unless_present = "all")]
        religions: Vec<Religion>,

        /// Consult all eight traditions
        #[arg(long, conflicts_with = "religions")]
        all: bool,

        /// Translate every quote and insight after retrieval
        #[arg(short, long)]
        translate: bool,

        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,

        /// Print the raw result as JSON instead of cards
        #[arg(long)]
        json: bool,

        /// Also write the result to a timestamped file in DIR
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Translate a piece of text
    Translate {
        text: String,

        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,
    },

    /// Print the reference catalogue sent to the model
    Catalogue {
        #[arg(short, long = "religion", value_name = "RELIGION")]
        religions: Vec<Religion>,
    },

    /// List the supported religions
    Religions,

    /// Report configuration health
    Health,

    /// Serve the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    wisdom_well::utils::logging::init_logger(cli.color, cli.verbose);

    info!("WisdomWell");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config().with_env_api_key()
        })
    };

    match cli.command {
        Commands::Ask {
            question,
            religions,
            all,
            translate,
            language,
            json,
            output,
        } => {
            let religions = if all { Religion::ALL.to_vec() } else { religions };
            cmd_ask(
                &config,
                question,
                religions,
                translate,
                language.as_deref(),
                json,
                output,
                cli.color,
            )
            .await?;
        }
        Commands::Translate { text, language } => {
            cmd_translate(&config, &text, language.as_deref(), cli.color).await?;
        }
        Commands::Catalogue { religions } => {
            cmd_catalogue(religions);
        }
        Commands::Religions => {
            cmd_religions();
        }
        Commands::Health => {
            cmd_health(&config);
        }
        Commands::Serve { host, port } => {
            cmd_serve(config, host, port).await?;
        }
    }

    Ok(())
}

fn build_model(config: &Config) -> Result<Arc<dyn GenerativeModel>> {
    let client = GroqClient::from_config(&config.llm).context("Failed to create model client")?;
    info!("Using model {}", config.llm.model);
    Ok(Arc::new(client))
}

#[allow(clippy::too_many_arguments)]
async fn cmd_ask(
    config: &Config,
    question: String,
    religions: Vec<Religion>,
    translate: bool,
    language: Option<&str>,
    json: bool,
    output: Option<PathBuf>,
    colored: bool,
) -> Result<()> {
    Validator::validate_question(&question, config.retrieval.min_question_length)?;
    Validator::validate_religions(&religions)?;
    if let Some(code) = language {
        Validator::validate_language_code(code)?;
    }

    let model = build_model(config)?;
    let retrieval = ScriptureRetrievalFlow::new(model.clone());
    let input = ScriptureRetrievalInput::new(question, religions);

    let indicator = if json {
        WaitIndicator::hidden()
    } else {
        WaitIndicator::with_color("Seeking wisdom from the ancients...", colored)
    };
    let result = retrieval
        .run(&input)
        .await
        .context("Scripture retrieval failed")?;
    indicator.finish();

    if let Some(dir) = output {
        let exporter = JsonExporter::new(dir)?;
        let path = exporter.export(&input.question, &input.religions, &result, true)?;
        eprintln!(
            "{}",
            format_success(&format!("Saved result to {}", path.display()))
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let mut board = TranslationBoard::new();
    if translate && !result.is_empty() {
        let flow = TranslationFlow::new(model)
            .with_default_language(&config.translation.default_language);
        let target = language.unwrap_or(flow.default_language()).to_string();

        let indicator = WaitIndicator::with_color(&format!("Translating to {}...", target), colored);
        translate_entries(
            &flow,
            &result,
            Some(&target),
            config.translation.max_in_flight,
            &mut board,
        )
        .await;
        indicator.finish();

        let failures = board.failures();
        if failures > 0 {
            eprintln!(
                "{}",
                format_warning(&format!(
                    "{} translation(s) failed; showing the original text",
                    failures
                ))
            );
        }
    }

    let board = if translate { Some(&board) } else { None };
    println!("{}", render_result(&input.question, &result, board));

    Ok(())
}

async fn cmd_translate(
    config: &Config,
    text: &str,
    language: Option<&str>,
    colored: bool,
) -> Result<()> {
    Validator::validate_text_not_empty("text", text)?;
    if let Some(code) = language {
        Validator::validate_language_code(code)?;
    }

    let flow = TranslationFlow::new(build_model(config)?)
        .with_default_language(&config.translation.default_language);

    let indicator = WaitIndicator::with_color("Translating...", colored);
    let result = flow.translate(text, language).await;
    indicator.finish();

    match result {
        Ok(output) => {
            println!("{}", output.translated_text);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error("Failed to translate."));
            Err(e).context("Translation failed")
        }
    }
}

fn cmd_catalogue(religions: Vec<Religion>) {
    let religions = if religions.is_empty() {
        Religion::ALL.to_vec()
    } else {
        religions
    };
    println!("{}", scoped_catalogue(&religions));
}

fn cmd_religions() {
    for religion in Religion::ALL {
        println!("{}", religion);
    }
}

fn cmd_health(config: &Config) {
    let report = HealthReport::for_config(config);
    println!("{}", report.format());
    if !config.has_api_key() {
        eprintln!(
            "{}",
            format_info("Set GROQ_API_KEY or WISDOM_WELL__LLM__API_KEY to enable model calls")
        );
    }
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        Validator::validate_port(port)?;
        config.server.port = port;
    }

    // Start degraded without a key: /health reports it and model calls answer 502.
    let model: Arc<dyn GenerativeModel> = match GroqClient::from_config(&config.llm) {
        Ok(client) => {
            info!("Using model {}", config.llm.model);
            Arc::new(client)
        }
        Err(e) => {
            warn!("{}; serving in degraded mode", e);
            Arc::new(UnavailableModel::new(e.to_string()))
        }
    };
    let server_config = config.server.clone();
    let state = AppState::new(config, model);

    server::serve(&server_config, state)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
