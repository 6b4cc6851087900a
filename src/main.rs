//! Mintgate CLI - pin NFT assets and resolve token URIs

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mintgate::{
    config::Args,
    metadata::TokenAttribute,
    pinning::{Asset, PinataClient, PinataConfig, UploadPipeline},
    resolver::{MetadataResolver, ResolverConfig},
};

#[derive(Parser, Debug)]
#[command(name = "mintgate")]
#[command(about = "Pin NFT assets and metadata to IPFS, resolve token URIs across gateways")]
struct Cli {
    #[command(flatten)]
    config: Args,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pin an asset and its metadata document, printing the token URI
    Upload {
        /// Path to the asset file
        #[arg(short, long)]
        file: PathBuf,

        /// Token name
        #[arg(short, long)]
        name: String,

        /// Token description
        #[arg(short, long)]
        description: String,

        /// Display attribute as trait=value (repeatable)
        #[arg(short, long = "attribute", value_name = "TRAIT=VALUE")]
        attributes: Vec<String>,

        /// MIME type of the asset; inferred from the extension when omitted
        #[arg(long)]
        content_type: Option<String>,
    },

    /// Resolve a token URI and print the metadata document as JSON
    Resolve {
        /// Token URI: ipfs://<cid>, data:application/json,<encoded>, or a URL
        uri: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = cli.config.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mintgate={log_level},info").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Upload {
            file,
            name,
            description,
            attributes,
            content_type,
        } => run_upload(cli.config, file, name, description, attributes, content_type).await,
        Command::Resolve { uri } => run_resolve(cli.config, uri).await,
    }
}

async fn run_upload(
    args: Args,
    file: PathBuf,
    name: String,
    description: String,
    attributes: Vec<String>,
    content_type: Option<String>,
) -> anyhow::Result<()> {
    if let Err(e) = args.validate_for_upload() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let bytes = tokio::fs::read(&file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let mime_type = content_type.unwrap_or_else(|| mime_for_path(&file).to_string());
    let token_attributes = parse_attributes(&attributes)?;

    info!(
        file = %file.display(),
        size = bytes.len(),
        mime = %mime_type,
        "Uploading asset"
    );

    let store = Arc::new(PinataClient::new(PinataConfig {
        api_url: args.pin_api_url.clone(),
        jwt: args.pin_jwt.clone().unwrap_or_default(),
        request_timeout: args.request_timeout(),
    }));

    let pipeline = UploadPipeline::new(store);
    let uri = pipeline
        .upload(Asset::new(bytes, mime_type), &name, &description, token_attributes)
        .await?;

    println!("{uri}");
    Ok(())
}

async fn run_resolve(args: Args, uri: String) -> anyhow::Result<()> {
    let resolver = MetadataResolver::new(ResolverConfig {
        gateways: args.gateway_list(),
        request_timeout: args.request_timeout(),
    });

    let document = resolver.resolve(&uri).await?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Guess a MIME type from the file extension
fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Parse repeatable `trait=value` attribute flags
fn parse_attributes(raw: &[String]) -> anyhow::Result<Vec<TokenAttribute>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(trait_type, value)| TokenAttribute::new(trait_type.trim(), value.trim()))
                .ok_or_else(|| anyhow::anyhow!("attribute must be trait=value, got '{pair}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("art.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(mime_for_path(Path::new("mystery")), "application/octet-stream");
    }

    #[test]
    fn test_parse_attributes() {
        let attrs = parse_attributes(&["Background=Blue".to_string(), " Rarity = Rare ".to_string()])
            .unwrap();
        assert_eq!(attrs[0], TokenAttribute::new("Background", "Blue"));
        assert_eq!(attrs[1], TokenAttribute::new("Rarity", "Rare"));
    }

    #[test]
    fn test_parse_attributes_rejects_missing_separator() {
        assert!(parse_attributes(&["Background".to_string()]).is_err());
    }
}
