//! docblock — extract `/** ... */` documentation comments from source files.
//!
//! - **stdin mode**: `docblock < comment.txt` parses one raw docblock
//! - **file mode**: `docblock -f json src/*.php` extracts every doc comment
//! - **query mode**: `docblock -k param src/Mailer.php` prints matching values

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use docblock::model::SourceDoc;
use docblock::render;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docblock",
    about = "Extract /** ... */ documentation comments into key/value records"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads one raw docblock from stdin.
    files: Vec<String>,

    /// Output directory, one file per input. Prints to stdout when omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json, text
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Print only the values of this annotation key, one per line
    #[arg(short = 'k', long, conflicts_with = "texts")]
    key: Option<String>,

    /// Print only the free-text blocks
    #[arg(long)]
    texts: bool,

    /// Fail unless every docblock carries this key. Can be given multiple times.
    #[arg(long)]
    require: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let docs = if cli.files.is_empty() {
        vec![read_stdin()?]
    } else {
        read_files(&cli.files)?
    };

    check_required(&docs, &cli.require)?;

    if cli.key.is_some() || cli.texts {
        print!("{}", query(&docs, cli.key.as_deref()));
        return Ok(());
    }

    let renderer = render::create_renderer(&cli.format)?;

    let Some(output_dir) = cli.output.as_deref() else {
        for doc in &docs {
            print!("{}", renderer.render(doc));
        }
        return Ok(());
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    for doc in &docs {
        let name = derive_output_name(&doc.source);
        let out_path = output_dir.join(format!("{}.{}", name, renderer.file_extension()));
        fs::write(&out_path, renderer.render(doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        debug!(path = %out_path.display(), "wrote output");
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// stdin mode: the whole input is one raw docblock.
fn read_stdin() -> Result<SourceDoc> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(SourceDoc::raw("stdin", &input))
}

/// file mode: extract doc comments from every input file.
fn read_files(patterns: &[String]) -> Result<Vec<SourceDoc>> {
    let mut docs = Vec::new();
    for path in expand_globs(patterns)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let doc = SourceDoc::extract(path.to_string_lossy(), &content);
        if doc.blocks.is_empty() {
            debug!(path = %path.display(), "no doc comments");
            continue;
        }
        docs.push(doc);
    }
    Ok(docs)
}

/// Every block must carry each required key.
fn check_required(docs: &[SourceDoc], required: &[String]) -> Result<()> {
    for doc in docs {
        for block in &doc.blocks {
            for key in required {
                block
                    .docblock
                    .find_or_fail(key.as_str())
                    .with_context(|| {
                        format!("{}:{}: missing required @{}", doc.source, block.line, key)
                    })?;
            }
        }
    }
    Ok(())
}

/// Values of `key` (text blocks when `None`), one per line across all blocks.
fn query(docs: &[SourceDoc], key: Option<&str>) -> String {
    let mut out = String::new();
    for block in docs.iter().flat_map(|doc| &doc.blocks) {
        for value in block.docblock.find_values(key).into_iter().flatten() {
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}

/// File extensions recognized as source files when scanning directories.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "php", "java", "js", "mjs", "ts", "c", "h", "cpp", "hpp", "cs", "kt", "scala", "swift",
];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                let supported = p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
                if p.is_file() && supported {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "src/Mailer.php" → "Mailer"
fn derive_output_name(source: &str) -> String {
    Path::new(source)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}
