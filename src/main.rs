use clap::{Args, Parser, Subcommand};
use privbin::api::ApiClient;
use privbin::{Attachment, PasteOptions};
use std::io::Read;

#[derive(Parser)]
#[command(name = "privbin", about = "PrivateBin client-side encryption CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a paste and POST it to a PrivateBin instance
    Send {
        #[command(flatten)]
        paste: PasteArgs,
        /// Instance base URL
        #[arg(short, long, default_value = "https://paste.i2pd.xyz/")]
        url: String,
    },
    /// Encrypt a paste and print the record JSON plus the secret, no network
    Encode {
        #[command(flatten)]
        paste: PasteArgs,
    },
}

#[derive(Args)]
struct PasteArgs {
    /// Paste text; read from stdin when omitted and no attachment is given
    text: Option<String>,
    /// Attachment path or http(s) URL
    #[arg(short, long)]
    attach: Option<String>,
    /// Filename override for the attachment
    #[arg(long)]
    filename: Option<String>,
    /// Passphrase folded into key derivation
    #[arg(short, long)]
    password: Option<String>,
    /// Compression: zlib (default) or none
    #[arg(short, long, default_value = "zlib")]
    compression: String,
    /// Formatter: plaintext (default), syntaxhighlighting, markdown
    #[arg(short, long, default_value = "plaintext")]
    formatter: String,
    /// Expiry: 5min, 10min, 1hour, 1day (default), 1week, 1month, 1year, never
    #[arg(short, long, default_value = "1day")]
    expire: String,
    /// Accept formatter/expire values unknown to this client
    #[arg(long)]
    bypass: bool,
    /// Delete the paste after the first read
    #[arg(short, long)]
    burn: bool,
    /// Allow replies on the server
    #[arg(short, long)]
    discussion: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {

        // ── Send ─────────────────────────────────────────────────────────────
        Commands::Send { paste, url } => {
            let options = build_options(paste)?;
            let encoded = privbin::encode(&options)?;
            let client = ApiClient::new(url);
            let response = client.post(&encoded)?;
            println!("Paste:  {}", client.paste_url(&response, &encoded.secret));
            println!("Delete: {}", client.delete_url(&response));
        }

        // ── Encode ───────────────────────────────────────────────────────────
        Commands::Encode { paste } => {
            let options = build_options(paste)?;
            let encoded = privbin::encode(&options)?;
            println!("{}", encoded.body_json()?);
            println!("Secret: {}", encoded.secret);
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn build_options(args: PasteArgs) -> Result<PasteOptions, Box<dyn std::error::Error>> {
    let mut options = PasteOptions::default();

    match args.text {
        Some(text) => options.set_text(text),
        None if args.attach.is_none() => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            options.set_text(text);
        }
        None => {}
    }

    options.set_compression(&args.compression)?;
    options.set_formatter(&args.formatter, args.bypass)?;
    options.set_expire(&args.expire, args.bypass)?;
    if args.discussion {
        options.set_discussion(true);
    }
    if args.burn {
        options.set_burn(true);
    }
    if let Some(password) = args.password {
        options.set_password(password);
    }
    if let Some(source) = &args.attach {
        options.set_attachment(Attachment::load(source, args.filename.as_deref())?);
    }

    Ok(options)
}
