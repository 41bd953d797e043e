use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use medscore_core::models::answer::Answers;
use medscore_core::models::response::SurveyResponseCreate;
use medscore_core::models::template::SurveyTemplate;
use medscore_narrative::bedrock::BedrockGenerator;
use medscore_narrative::normalize::normalize_advice_text;
use medscore_service::config::ServiceConfig;
use medscore_service::service::{evaluate, SurveyService};
use medscore_storage::client::{build_client, load_sdk_config};
use medscore_storage::s3::S3Store;

#[derive(Parser)]
#[command(name = "medscore", version, about = "Clinical questionnaire scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an answer file against a template file, offline.
    Calculate {
        #[arg(long)]
        template: PathBuf,
        #[arg(long)]
        answers: PathBuf,
    },
    /// Strip duplicated disclaimers from advice text.
    Normalize {
        /// Read from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List active templates in the bucket.
    Templates,
    /// Score and store a submission for a patient.
    Submit {
        #[arg(long)]
        template_id: Uuid,
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        answers: PathBuf,
    },
    /// Score answers for a user and store patient advice.
    Advice {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        code: String,
        #[arg(long)]
        answers: PathBuf,
        /// Free-text comment from the patient.
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Show a user's stored advice, newest first.
    History {
        #[arg(long)]
        user: Uuid,
        #[arg(long, default_value_t = 20)]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Logs go to stderr so stdout carries only results.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Calculate { template, answers } => {
            let template: SurveyTemplate = read_json(&template)?;
            let answers = read_answers(&answers)?;
            print_json(&evaluate(&template, &answers)?)?;
        }
        Command::Normalize { input } => {
            let text = match input {
                Some(path) => fs::read_to_string(&path)
                    .wrap_err_with(|| format!("reading {}", path.display()))?,
                None => io::read_to_string(io::stdin()).wrap_err("reading stdin")?,
            };
            println!("{}", normalize_advice_text(&text));
        }
        Command::Templates => {
            let service = connect().await?;
            print_json(&service.list_templates().await?)?;
        }
        Command::Submit {
            template_id,
            patient,
            answers,
        } => {
            let service = connect().await?;
            let submission = SurveyResponseCreate {
                template_id,
                patient_id: patient,
                responses: read_json(&answers)?,
            };
            print_json(&service.submit_response("cli", submission).await?)?;
        }
        Command::Advice {
            user,
            code,
            answers,
            text,
        } => {
            let service = connect().await?;
            let answers = read_answers(&answers)?;
            print_json(&service.create_advice(user, &code, &answers, &text).await?)?;
        }
        Command::History {
            user,
            limit,
            offset,
        } => {
            let service = connect().await?;
            print_json(&service.list_advice(user, limit, offset).await?)?;
        }
    }

    Ok(())
}

async fn connect() -> eyre::Result<SurveyService<S3Store, BedrockGenerator>> {
    let config = ServiceConfig::from_env();
    let prompts = config.prompts()?;
    let sdk_config = load_sdk_config(&config.region).await;

    let store = S3Store::new(build_client(&sdk_config), &config.bucket);
    let generator = config
        .model_id
        .as_deref()
        .map(|model_id| BedrockGenerator::new(&sdk_config, model_id));

    tracing::info!(
        bucket = %config.bucket,
        region = %config.region,
        generation = generator.is_some(),
        "service configured"
    );

    Ok(SurveyService::new(store, generator, prompts))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let raw = fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).wrap_err_with(|| format!("parsing {}", path.display()))
}

fn read_answers(path: &Path) -> eyre::Result<Answers> {
    let map: serde_json::Map<String, serde_json::Value> = read_json(path)?;
    Ok(Answers::from_json_map(&map))
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
