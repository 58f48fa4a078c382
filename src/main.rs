use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use sentranslator::{
    braille::{Group, groups_to_dots, groups_to_unicode},
    config::{BATCH_SIZE, Config},
    display::{DiffingDriver, LogActuator, Presenter},
    source::{Keyboard, MAX_CHARS, TextFile, TextSource},
    speech::{Speaker, announce},
    test::{TestResult, check_yaml},
    translator::Translator,
};
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// a table listing every display group
    Plan,
    /// dot numbers, e.g. 1345-24
    Dots,
    /// Unicode braille
    Unicode,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// translate <INPUT> to braille groups
    #[command(arg_required_else_help = true)]
    Translate {
        /// String to translate
        input: String,
        #[arg(short, long, value_enum, default_value_t = Format::Plan)]
        format: Format,
    },
    /// translate the content of a .txt file
    #[command(arg_required_else_help = true)]
    File {
        /// Text file to translate
        path: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Plan)]
        format: Format,
    },
    /// show the braille groups of a text one after the other. Press Enter
    /// for the next group, `s` to hear the text and `q` to quit.
    Present {
        /// Text to present, read from the terminal if missing
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Run the tests defined in the <YAML_TEST_FILE>s. Return 0 if all
    /// tests pass or 1 if any of the tests fail.
    #[command(arg_required_else_help = true)]
    CheckYaml {
        /// YAML files listing the tests
        yaml: Vec<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[command(name = "sen")]
#[command(about = "A command line tool to translate Chinese and English text to two-cell braille")]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Program used to speak text, e.g. "espeak -v zh"
    #[arg(long, global = true, env = "SEN_SPEECH_COMMAND")]
    speech_command: Option<String>,
    /// Number of pins moved together
    #[arg(long, global = true, env = "SEN_BATCH_SIZE", default_value_t = BATCH_SIZE)]
    batch_size: usize,
    /// Maximum number of characters read from a text source
    #[arg(long, global = true, env = "SEN_MAX_CHARS", default_value_t = MAX_CHARS)]
    max_chars: usize,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            batch_size: self.batch_size,
            max_chars: self.max_chars,
            speech_command: self.speech_command.clone(),
        }
    }
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Group")]
    index: usize,
    #[tabled(rename = "Symbols")]
    labels: String,
    #[tabled(rename = "Dots")]
    dots: String,
    #[tabled(rename = "Braille")]
    unicode: String,
}

impl PlanRow {
    fn new(index: usize, group: &Group) -> Self {
        let labels = match &group.secondary {
            Some(_) => group.describe(),
            None => format!("{} + empty", group.primary.label),
        };
        PlanRow {
            index: index + 1,
            labels,
            dots: group.to_dots(),
            unicode: group.to_unicode(),
        }
    }
}

fn print_groups(groups: &[Group], format: Format) {
    match format {
        Format::Plan => {
            let rows = groups.iter().enumerate().map(|(i, g)| PlanRow::new(i, g));
            let mut table = Table::new(rows);
            table.with(Style::modern());
            println!("Total {} groups", groups.len());
            println!("{table}");
        }
        Format::Dots => println!("{}", groups_to_dots(groups)),
        Format::Unicode => println!("{}", groups_to_unicode(groups)),
    }
}

/// Show the groups of `text` one by one, driven by the commands read from
/// `input`
fn present(
    text: &str,
    config: &Config,
    speaker: &dyn Speaker,
    input: impl BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    let groups = Translator::new().translate(text);
    if groups.is_empty() {
        announce(speaker, "Conversion failed, please try again");
        return Err("Unable to convert input text to braille".into());
    }
    announce(
        speaker,
        "Conversion successful. Now press Enter to display the next braille group, s to hear the text",
    );
    print_groups(&groups, Format::Plan);

    let driver = DiffingDriver::new(LogActuator::default(), config.batch_size);
    let mut presenter = Presenter::new(driver, groups);
    let mut lines = input.lines();
    while !presenter.is_finished() {
        print!("[Enter] next group, [s] speak, [q] quit ({} left): ", presenter.remaining());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match line?.trim() {
            "" => {
                if let Some(group) = presenter.next()? {
                    println!("{} {} {}", group.describe(), group.to_dots(), group.to_unicode());
                }
                if presenter.is_finished() {
                    announce(speaker, "Display complete");
                }
            }
            "s" => announce(speaker, text),
            "q" => break,
            other => println!("unknown command {other:?}"),
        }
    }
    presenter.clear()?;
    info!("{} pin movements", presenter.driver().actuator().moves());
    Ok(())
}

fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = cli.config();
    match cli.command {
        Commands::Translate { input, format } => {
            print_groups(&Translator::new().translate(&input), format);
        }
        Commands::File { path, format } => {
            let text = TextFile::new(path).with_max_chars(config.max_chars).read_text();
            println!("Extracted text: {text}");
            print_groups(&Translator::new().translate(&text), format);
        }
        Commands::Present { text } => {
            let speaker = config.speaker()?;
            let text = match text {
                Some(text) => text,
                None => {
                    announce(&speaker, "Please enter text in the terminal");
                    print!("Please enter text to convert: ");
                    io::stdout().flush()?;
                    Keyboard::new(io::stdin().lock())
                        .with_max_chars(config.max_chars)
                        .read_text()
                }
            };
            if text.eq_ignore_ascii_case("q") {
                announce(&speaker, "See you next time!");
                return Ok(true);
            }
            present(&text, &config, &*speaker, io::stdin().lock())?;
        }
        Commands::CheckYaml { yaml } => {
            let translator = Translator::new();
            let mut results = Vec::new();
            for path in yaml {
                println!("Testing with {:?}", path);
                results.extend(check_yaml(&path, &translator)?);
            }
            for result in &results {
                if let TestResult::Failure {
                    input,
                    expected,
                    actual,
                } = result
                {
                    println!("FAIL {input:?}: expected {expected:?}, got {actual:?}");
                }
            }
            let failures = results.iter().filter(|r| r.is_failure()).count();
            println!("Pass: {}", results.iter().filter(|r| r.is_success()).count());
            println!("Fail: {failures}");
            println!(
                "Expected failures: {}",
                results.iter().filter(|r| r.is_expected_failure()).count()
            );
            println!(
                "Unexpected successes: {}",
                results.iter().filter(|r| r.is_unexpected_success()).count()
            );
            return Ok(failures == 0);
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
