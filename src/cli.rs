use chrono::Datelike;
use clap::{ArgAction, Args, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

type ParseResult<T> = std::result::Result<T, String>;

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="motifmark",
          version=&**FULL_VERSION,
          about="Draws exon/intron structure and motif occurrences of DNA sequences to scale",
          long_about = None,
          after_help = format!("Copyright (C) {}     Motif Mark developers.
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    pub mark: MarkArgs,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Args, Debug, Clone)]
pub struct MarkArgs {
    #[clap(required = true)]
    #[clap(short = 'f')]
    #[clap(long = "fasta")]
    #[clap(help = "FASTA file with exons in uppercase and introns in lowercase")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub fasta_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "motifs")]
    #[clap(help = "Text file with one motif per line (IUPAC codes allowed)")]
    #[clap(value_name = "MOTIFS")]
    #[arg(value_parser = check_file_exists)]
    pub motifs_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path [default: FASTA path with a .png extension]")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: Option<PathBuf>,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "font-family")]
    #[clap(value_name = "FONT_FAMILY")]
    #[clap(help = "Font family used for labels")]
    pub font_family: Option<String>,
}

impl MarkArgs {
    pub fn image_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.fasta_path.with_extension("png"))
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> ParseResult<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

fn check_image_path(s: &str) -> ParseResult<PathBuf> {
    let path = check_prefix_path(s)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") | Some("png") | Some("pdf") => Ok(path),
        _ => Err("Image must have an extension of .svg, .png, or .pdf".to_string()),
    }
}

fn threads_in_range(s: &str) -> ParseResult<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> ParseResult<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_defaults_to_png_next_to_fasta() {
        let args = MarkArgs {
            fasta_path: PathBuf::from("data/Figure_1.fasta"),
            motifs_path: PathBuf::from("data/Fig_1_motifs.txt"),
            output_path: None,
            num_threads: 1,
            font_family: None,
        };
        assert_eq!(args.image_path(), PathBuf::from("data/Figure_1.png"));

        let args = MarkArgs {
            output_path: Some(PathBuf::from("out.svg")),
            ..args
        };
        assert_eq!(args.image_path(), PathBuf::from("out.svg"));
    }

    #[test]
    fn image_extension_is_checked() {
        assert!(check_image_path("plot.png").is_ok());
        assert!(check_image_path("plot.pdf").is_ok());
        assert_eq!(
            check_image_path("plot.jpg"),
            Err("Image must have an extension of .svg, .png, or .pdf".to_string())
        );
        assert!(check_image_path("/nonexistent/dir/plot.png").is_err());
    }

    #[test]
    fn thread_count_must_be_positive() {
        assert_eq!(threads_in_range("4"), Ok(4));
        assert!(threads_in_range("0").is_err());
        assert!(threads_in_range("many").is_err());
    }
}
