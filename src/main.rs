use clap::{Parser, Subcommand};
use emojigen::{
    logger::{self, LogLevel, LoggerConfig},
    CallerIdentity, EmojiService, EmojiSize, EmojiStyle, GenerationConfig, GenerationRequest,
    GenerationResult, InlineImage, PromptValidator, ValidatorConfig,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate emoji images from text prompts through the generation proxy
#[derive(Parser, Debug)]
#[command(name = "emojigen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generation proxy endpoint
    #[arg(short = 'e', long, env = "GEMINI_PROXY_URL", value_name = "URL")]
    endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "EMOJIGEN_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a single emoji
    Generate {
        prompt: String,

        #[arg(short, long, default_value = "cartoon")]
        style: EmojiStyle,

        #[arg(short, long, default_value = "face")]
        category: String,

        #[arg(long, default_value = "medium")]
        size: EmojiSize,

        /// Caller identity forwarded to the proxy
        #[arg(short, long, default_value = "anonymous")]
        user: String,

        /// Write an inline (data URL) image to this path
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },
    /// Generate every request in a JSON array file
    Batch {
        file: PathBuf,

        #[arg(short, long, default_value = "anonymous")]
        user: String,
    },
    /// Check a prompt without generating anything
    Validate {
        prompt: String,

        /// Use the 3..=500 character validator with suggestions
        #[arg(long)]
        long_form: bool,
    },
    /// List supported styles, categories and sizes
    Catalog,
}

#[derive(Serialize)]
struct Catalog {
    styles: &'static [EmojiStyle],
    categories: &'static [&'static str],
    sizes: &'static [EmojiSize],
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let args = Args::parse();

    let level = LogLevel::parse(&args.log_level).unwrap_or(LogLevel::Warn);
    logger::init_with_config(LoggerConfig::new().with_level(level))?;
    if !dotenv_loaded {
        log::debug!("No .env file found, using process environment");
    }
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut config = GenerationConfig::from_env();
    if let Some(endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint);
    }

    match args.command {
        Command::Generate {
            prompt,
            style,
            category,
            size,
            user,
            save,
        } => {
            logger::log_config_info(&config);
            let service = EmojiService::new(config)?;
            let request = GenerationRequest::new(prompt, style, category).with_size(size);
            let result = service
                .generate_emoji_as(request, &CallerIdentity::new(user))
                .await;

            print_json(&result)?;
            if let Some(path) = save {
                save_inline_image(&result, &path)?;
            }
            if !result.is_success() {
                std::process::exit(1);
            }
        }
        Command::Batch { file, user } => {
            logger::log_config_info(&config);
            let contents = fs::read_to_string(&file)?;
            let requests: Vec<GenerationRequest> = serde_json::from_str(&contents)?;
            let service = EmojiService::new(config)?;

            let results = service
                .generate_batch_as(requests, &CallerIdentity::new(user))
                .await;
            print_json(&results)?;
        }
        Command::Validate { prompt, long_form } => {
            let validator_config = if long_form {
                ValidatorConfig::long_form()
            } else {
                config.validator
            };
            let outcome = PromptValidator::new(validator_config)?.validate(&prompt);
            print_json(&outcome)?;
            if !outcome.valid {
                std::process::exit(2);
            }
        }
        Command::Catalog => {
            print_json(&Catalog {
                styles: EmojiService::available_styles(),
                categories: EmojiService::available_categories(),
                sizes: EmojiService::available_sizes(),
            })?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn save_inline_image(
    result: &GenerationResult,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(url) = result.image_url() else {
        log::warn!("Nothing to save: generation did not succeed");
        return Ok(());
    };

    match InlineImage::from_data_url(url)? {
        Some(image) => {
            let path = if path.extension().is_none() {
                path.with_extension(image.extension())
            } else {
                path.to_path_buf()
            };
            fs::write(&path, &image.bytes)?;
            log::info!("💾 Saved {} image to {}", image.mime_type, path.display());
        }
        None => {
            log::warn!("Image is hosted remotely, not saving: {}", url);
        }
    }

    Ok(())
}
