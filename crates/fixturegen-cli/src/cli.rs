use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};

use fixturegen_core::encode::DEFAULT_QUALITY;
use fixturegen_core::{
    EmbeddedTagger, ExiftoolTagger, GeneratorConfig, OrientationTagger, TagFailurePolicy,
};

#[derive(Parser, Debug)]
#[command(
    name = "fixturegen",
    version,
    about = "Generate JPEG fixtures for every EXIF orientation value",
    override_usage = "fixturegen [OPTIONS] <IMAGE>"
)]
pub struct Cli {
    /// Source image
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// The single source image, set once the positional count is checked.
    #[arg(skip)]
    pub image: PathBuf,

    /// Directory to write the fixtures to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// How the orientation tag is written
    #[arg(long, default_value = "embedded")]
    pub tagger: TaggerKind,

    /// exiftool executable used by `--tagger exiftool`
    #[arg(long, env = "FIXTUREGEN_EXIFTOOL", default_value = "exiftool")]
    pub exiftool: PathBuf,

    /// What to do when the orientation tag cannot be written
    #[arg(long, default_value = "fail")]
    pub on_tag_failure: OnTagFailure,

    /// Skip the text markers
    #[arg(long)]
    pub no_annotate: bool,

    /// Do not copy EXIF fields from the source image
    #[arg(long)]
    pub no_carry_exif: bool,

    /// Generate the fixtures in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Read back every fixture and check its tag and dimensions
    #[arg(long)]
    pub verify: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaggerKind {
    /// Rewrite the EXIF block in-process
    Embedded,
    /// Shell out to exiftool
    Exiftool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnTagFailure {
    /// Stop with an error
    Fail,
    /// Log a warning and continue
    Warn,
}

impl Cli {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: self.output_dir.clone(),
            jpeg_quality: self.quality,
            annotate: !self.no_annotate,
            carry_source_exif: !self.no_carry_exif,
            tag_policy: match self.on_tag_failure {
                OnTagFailure::Fail => TagFailurePolicy::Strict,
                OnTagFailure::Warn => TagFailurePolicy::Permissive,
            },
            parallel: self.parallel,
        }
    }

    pub fn tagger(&self) -> Box<dyn OrientationTagger> {
        match self.tagger {
            TaggerKind::Embedded => Box::new(EmbeddedTagger),
            TaggerKind::Exiftool => Box::new(ExiftoolTagger::new(self.exiftool.clone())),
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Parse the command line.
///
/// A missing or surplus image argument prints the usage line to stdout and
/// yields `None`; the caller exits successfully without producing anything.
/// Unknown flags and bad values are left to clap, which exits with status 2.
pub fn parse_args() -> Option<Cli> {
    let cli = Cli::parse().with_single_image();
    if cli.is_none() {
        println!("{}", Cli::command().render_usage());
    }
    cli
}

impl Cli {
    fn with_single_image(mut self) -> Option<Self> {
        match std::mem::take(&mut self.images).as_slice() {
            [image] => {
                self.image = image.clone();
                Some(self)
            }
            _ => None,
        }
    }
}
