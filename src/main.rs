use anyhow::Result;
use clap::{Parser, Subcommand};
use proxy_split::{
    proxy::{BundleExporter, ClassifiedBundle, DecodePolicy, ProxyClassifier, ProxyScheme},
    tui::SplitterApp,
};
use std::path::PathBuf;

/// A proxy list splitter that buckets mixed proxy files by scheme
#[derive(Parser)]
#[command(name = "proxy-split")]
#[command(about = "Split a mixed proxy list into HTTP, SOCKS4, and SOCKS5 files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a proxy file and write per-scheme output files
    Split {
        /// Input file containing mixed proxies
        input: PathBuf,
        /// Output directory for http.txt / socks4.txt / socks5.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail on invalid UTF-8 instead of decoding lossily
        #[arg(long)]
        strict: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count proxies per scheme without writing anything
    Count {
        /// Input file containing mixed proxies
        input: PathBuf,
        /// Fail on invalid UTF-8 instead of decoding lossily
        #[arg(long)]
        strict: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the interactive TUI
    Tui {
        /// Input file containing mixed proxies
        input: PathBuf,
        /// Output directory used by the export keys
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail on invalid UTF-8 instead of decoding lossily
        #[arg(long)]
        strict: bool,
    },
}

fn decode_policy(strict: bool) -> DecodePolicy {
    if strict {
        DecodePolicy::Strict
    } else {
        DecodePolicy::Lossy
    }
}

fn print_summary(bundle: &ClassifiedBundle, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&bundle.counts())?);
        return Ok(());
    }

    println!("Proxies processed successfully");
    for scheme in ProxyScheme::ALL {
        println!("  {:<7} {}", scheme, bundle.count(scheme));
    }
    if bundle.dropped > 0 {
        println!("  dropped {}", bundle.dropped);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output,
            strict,
            json,
        } => {
            let bundle = ProxyClassifier::classify_file(&input, decode_policy(strict))?;
            print_summary(&bundle, json)?;

            if let Some(output_dir) = output {
                let written = BundleExporter::write_all(&bundle, &output_dir)?;
                if written.is_empty() {
                    println!("Nothing to export");
                } else {
                    for path in &written {
                        println!("Saved {:?}", path);
                    }
                }
            }
        }
        Commands::Count { input, strict, json } => {
            let bundle = ProxyClassifier::classify_file(&input, decode_policy(strict))?;
            print_summary(&bundle, json)?;
        }
        Commands::Tui {
            input,
            output,
            strict,
        } => {
            let bundle = ProxyClassifier::classify_file(&input, decode_policy(strict))?;
            let source = input.display().to_string();
            let mut app = SplitterApp::new(bundle, source, output);
            app.run()?;
        }
    }

    Ok(())
}
