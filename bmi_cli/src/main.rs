use bmi_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body Mass Index calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for height and weight repeatedly (default)
    Interactive {
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Calculate BMI once from the given measurements
    Calc {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },

    /// List the BMI categories and their recommendations
    Categories {
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    bmi_core::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_or_default(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Calc {
            height,
            weight,
            format,
        }) => {
            let display = display_settings(&config, format)?;
            cmd_calc(&height, &weight, &display)
        }
        Some(Commands::Categories { format }) => {
            let display = display_settings(&config, format)?;
            cmd_categories(&display)
        }
        Some(Commands::Interactive { format }) => {
            let display = display_settings(&config, format)?;
            cmd_interactive(&display)
        }
        None => {
            // Default to "interactive" command
            cmd_interactive(&config.display)
        }
    }
}

/// Apply a `--format` override on top of the configured display settings
fn display_settings(config: &Config, format: Option<String>) -> Result<DisplayConfig> {
    let mut display = config.display.clone();
    if let Some(format) = format {
        display.format = format.parse()?;
    }
    Ok(display)
}

fn cmd_calc(height: &str, weight: &str, display: &DisplayConfig) -> Result<()> {
    let result = evaluate(height, weight)?;
    let mut stdout = io::stdout().lock();
    render_result(&mut stdout, &result, display)
}

fn cmd_categories(display: &DisplayConfig) -> Result<()> {
    match display.format {
        OutputFormat::Json => {
            let rows: Vec<_> = bands()
                .iter()
                .map(|band| {
                    serde_json::json!({
                        "category": band.category,
                        "min": band.min,
                        "max": band.max,
                        "recommendation": band.category.recommendation(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for band in bands() {
                let range = match band.max {
                    Some(max) => format!("{:.1} to < {:.1}", band.min, max),
                    None => format!("{:.1} and above", band.min),
                };
                println!("{:<12} {}", band.category, range);
                if display.show_recommendation {
                    println!("  {}", band.category.recommendation());
                }
            }
        }
    }
    Ok(())
}

fn cmd_interactive(display: &DisplayConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_form(&mut input, &mut output, display)
}

/// Drive a form from line input until `q` or end of input
fn run_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    display: &DisplayConfig,
) -> Result<()> {
    let mut form = BmiForm::new();

    writeln!(output, "Enter your height and weight to calculate your BMI.")?;
    writeln!(output, "Type 'q' to quit.")?;

    loop {
        let Some(height) = prompt(input, output, "Height (cm): ")? else {
            break;
        };
        form.set_height(height);

        let Some(weight) = prompt(input, output, "Weight (kg): ")? else {
            break;
        };
        form.set_weight(weight);

        match form.submit() {
            Outcome::Success(result) => render_result(output, result, display)?,
            Outcome::Failed(e) => writeln!(output, "Error: {}", e)?,
            Outcome::Idle => {}
        }
        writeln!(output)?;
    }

    tracing::debug!("Interactive session ended");
    Ok(())
}

/// Read one line after printing `label`; `None` on end of input or quit
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }

    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().eq_ignore_ascii_case("q") {
        return Ok(None);
    }

    Ok(Some(line.to_string()))
}

fn render_result<W: Write>(
    output: &mut W,
    result: &BmiResult,
    display: &DisplayConfig,
) -> Result<()> {
    match display.format {
        OutputFormat::Json => {
            writeln!(output, "{}", serde_json::to_string_pretty(result)?)?;
        }
        OutputFormat::Text => {
            writeln!(output, "BMI: {}", result.bmi)?;
            writeln!(output, "Category: {}", result.category)?;
            if display.show_recommendation {
                writeln!(output, "Recommendation: {}", result.recommendation)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_lines(lines: &str, display: &DisplayConfig) -> String {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut output = Vec::new();
        run_form(&mut input, &mut output, display).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_form_loop_renders_result() {
        let out = run_lines("170\n70\nq\n", &DisplayConfig::default());

        assert!(out.contains("BMI: 24.2"));
        assert!(out.contains("Category: Normal"));
        assert!(out.contains("Recommendation: Maintain your healthy weight"));
    }

    #[test]
    fn test_form_loop_reports_error_and_continues() {
        let out = run_lines("0\n70\n150\n90\n", &DisplayConfig::default());

        assert!(out.contains("Error: Height must be a positive number."));
        assert!(out.contains("BMI: 40.0"));
        assert!(out.contains("Category: Obese"));
    }

    #[test]
    fn test_form_loop_stops_at_end_of_input() {
        let out = run_lines("170\n", &DisplayConfig::default());
        assert!(!out.contains("BMI:"));
        assert!(!out.contains("Error:"));
    }

    #[test]
    fn test_form_loop_blank_field_is_missing_input() {
        let out = run_lines("\n70\n", &DisplayConfig::default());
        assert!(out.contains("Error: Please enter both height and weight."));
    }

    #[test]
    fn test_hidden_recommendation() {
        let display = DisplayConfig {
            format: OutputFormat::Text,
            show_recommendation: false,
        };
        let out = run_lines("170\n70\n", &display);
        assert!(out.contains("Category: Normal"));
        assert!(!out.contains("Recommendation:"));
    }

    #[test]
    fn test_format_override() {
        let config = Config::default();
        let display = display_settings(&config, Some("json".into())).unwrap();
        assert_eq!(display.format, OutputFormat::Json);

        assert!(display_settings(&config, Some("xml".into())).is_err());
        assert_eq!(display_settings(&config, None).unwrap(), config.display);
    }
}
