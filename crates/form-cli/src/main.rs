pub mod builder;

mod wizard;

use builder::{GenerationInput, build_bundle, write_bundle};
use clap::{Parser, Subcommand, ValueEnum};
use form_codegen::{Target, emit};
use form_spec::{
    AnswerSet, Condition, ConditionAction, ConditionOperator, FieldType, FormDocument, FormField,
    FormSettings, FormSpec, FormTheme, RenderStatus, answers_schema, build_render_payload, lint,
    render_json_ui, render_text, resolve_visibility,
};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use wizard::{PromptContext, Verbosity, WizardPresenter, parse_answer};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Form builder with conditional visibility and code export",
    long_about = "Builds form specifications interactively, previews them in the terminal, and exports them as React, TypeScript, or plain HTML source"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Fill the form interactively, re-resolving visibility after each answer.
    Preview {
        /// Path to the form JSON.
        #[arg(long, value_name = "SPEC")]
        spec: PathBuf,
        /// Optional JSON file containing initial answers.
        #[arg(long, value_name = "ANSWERS")]
        answers: Option<PathBuf>,
        /// Show verbose output (status, visible fields, parse expectations).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Also emit answer JSON after submission.
        #[arg(long)]
        answers_json: bool,
    },
    /// Render the current form state once, without prompting.
    Render {
        /// Path to the form JSON.
        #[arg(long, value_name = "SPEC")]
        spec: PathBuf,
        /// Optional JSON file containing answers.
        #[arg(long, value_name = "ANSWERS")]
        answers: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Interactive form designer that writes a bundle of exported artifacts.
    New {
        /// Root directory for the bundle (defaults to FORMSMITH_OUTPUT_DIR or the current directory).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Overwrite an existing bundle.
        #[arg(long)]
        force: bool,
        /// Show internal bundle data for debugging.
        #[arg(long)]
        verbose: bool,
    },
    /// Non-interactive designer that consumes a JSON description and writes the bundle.
    Generate {
        /// JSON file describing settings, fields, and conditions.
        #[arg(long, value_name = "INPUT")]
        input: PathBuf,
        /// Root directory for the bundle.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Overwrite an existing bundle.
        #[arg(long)]
        force: bool,
        /// Show internal bundle data for debugging.
        #[arg(long)]
        verbose: bool,
    },
    /// Export one code target for an existing form.
    Emit {
        /// Path to the form JSON.
        #[arg(long, value_name = "SPEC")]
        spec: PathBuf,
        /// Export target: react-tailwind, typescript-tailwind, or html-css.
        #[arg(long, value_name = "TARGET")]
        target: Target,
        /// Write the artifact here instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Report advisory warnings for a form.
    Lint {
        /// Path to the form JSON.
        #[arg(long, value_name = "SPEC")]
        spec: PathBuf,
        /// Exit with an error when any warning is present.
        #[arg(long)]
        strict: bool,
    },
    /// Print the JSON Schema for a form's answer set.
    Schema {
        /// Path to the form JSON.
        #[arg(long, value_name = "SPEC")]
        spec: PathBuf,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preview {
            spec,
            answers,
            verbose,
            answers_json,
        } => run_preview(spec, answers, verbose, answers_json),
        Command::Render {
            spec,
            answers,
            format,
        } => run_render(spec, answers, format),
        Command::New {
            out,
            force,
            verbose,
        } => run_new(out, force, verbose),
        Command::Generate {
            input,
            out,
            force,
            verbose,
        } => run_generate(input, out, force, verbose),
        Command::Emit { spec, target, out } => run_emit(spec, target, out),
        Command::Lint { spec, strict } => run_lint(spec, strict),
        Command::Schema { spec } => run_schema(spec),
    }
}

fn run_preview(
    spec_path: PathBuf,
    answers_path: Option<PathBuf>,
    verbose: bool,
    answers_json: bool,
) -> CliResult<()> {
    let spec = load_spec(&spec_path)?;
    let mut answers = load_answers(answers_path)?;
    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose), answers_json);

    loop {
        let payload = build_render_payload(&spec, &answers);
        presenter.show_header(&payload);
        presenter.show_status(&payload);

        if payload.status == RenderStatus::Complete {
            presenter.show_completion(&payload.success_message, &answers);
            break;
        }

        let next_id = payload
            .next_field_id
            .clone()
            .ok_or("renderer reported pending input without a next field")?;
        let field = payload
            .fields
            .iter()
            .find(|field| field.id == next_id)
            .ok_or_else(|| format!("next field '{}' is missing from the payload", next_id))?;

        let prompt = PromptContext::new(field, &payload);
        let value = loop {
            presenter.show_prompt(&prompt);
            print!("> ");
            io::stdout().flush()?;
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Err("input ended before the form was complete".into());
            }

            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("exit") {
                return Err("preview aborted by user".into());
            }

            match parse_answer(field, trimmed) {
                Ok(value) => break value,
                Err(err) => presenter.show_parse_error(&err),
            }
        };

        answers.set(&next_id, value);
    }

    Ok(())
}

fn run_render(
    spec_path: PathBuf,
    answers_path: Option<PathBuf>,
    format: RenderMode,
) -> CliResult<()> {
    let spec = load_spec(&spec_path)?;
    let answers = load_answers(answers_path)?;
    let payload = build_render_payload(&spec, &answers);

    match format {
        RenderMode::Text => println!("{}", render_text(&payload)),
        RenderMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&render_json_ui(&payload))?
        ),
    }
    Ok(())
}

fn run_new(out_dir: Option<PathBuf>, force: bool, verbose: bool) -> CliResult<()> {
    println!("Interactive form designer");
    let title = prompt_non_empty("Form title", Some("Untitled Form"))?;
    let description = prompt_line("Description (optional)", None)?;
    let submit_button_text = prompt_non_empty("Submit button text", Some("Submit"))?;
    let success_message = prompt_non_empty(
        "Success message",
        Some("Thank you for your submission!"),
    )?;
    let theme = prompt_theme()?;
    let dir_name = prompt_non_empty("Output directory name", None)?;
    let out_root = resolve_output_root(out_dir)?;

    let mut document = FormDocument::with_settings(FormSettings {
        title,
        description,
        submit_button_text,
        success_message,
        theme,
    });
    loop {
        let field_id = prompt_line("Field ID (blank to auto-generate, 'done' to finish)", None)?;
        let field_id = field_id.trim().to_string();
        if field_id.eq_ignore_ascii_case("done") {
            break;
        }
        let field_id = if field_id.is_empty() {
            document.allocate_field_id()
        } else {
            field_id
        };

        let label = prompt_non_empty("Field label", Some(&field_id))?;
        let kind = prompt_field_type()?;
        let mut field = FormField::new(&field_id, kind, &label);
        field.required = prompt_bool("Required?", false)?;

        if kind.uses_options() {
            field.options = Some(prompt_option_values()?);
        }
        if kind == FieldType::Rating {
            field.max_rating = prompt_optional_u32("Rating scale (blank for 5)")?;
        }
        if kind == FieldType::Integer {
            loop {
                let min = prompt_optional_i64("Minimum value (blank for none)")?;
                let max = prompt_optional_i64("Maximum value (blank for none)")?;
                if let (Some(min), Some(max)) = (min, max)
                    && min > max
                {
                    println!("Minimum cannot exceed maximum.");
                    continue;
                }
                field.min = min;
                field.max = max;
                break;
            }
        }

        match document.add_field(field) {
            Ok(()) => println!("Added field '{}' ({}).", field_id, kind),
            Err(err) => println!("{}; choose a different identifier.", err),
        }
    }

    if document.spec().fields.is_empty() {
        return Err("at least one field is required".into());
    }

    let conditions = prompt_conditions(&document.spec().fields)?;
    for condition in conditions {
        document.add_condition(condition);
    }

    let spec = document.into_spec();
    let input = GenerationInput {
        dir_name,
        settings: spec.settings,
        fields: spec.fields,
        conditions: spec.conditions,
    };

    emit_bundle(&input, &out_root, force, verbose)
}

fn run_generate(
    input_path: PathBuf,
    out_dir: Option<PathBuf>,
    force: bool,
    verbose: bool,
) -> CliResult<()> {
    let contents = fs::read_to_string(&input_path)?;
    let input: GenerationInput = serde_json::from_str(&contents)?;
    let out_root = resolve_output_root(out_dir)?;
    emit_bundle(&input, &out_root, force, verbose)
}

fn emit_bundle(
    input: &GenerationInput,
    out_root: &PathBuf,
    force: bool,
    verbose: bool,
) -> CliResult<()> {
    let bundle_dir = out_root.join(&input.dir_name);
    if bundle_dir.exists() {
        if force {
            fs::remove_dir_all(&bundle_dir)?;
        } else {
            return Err(format!(
                "bundle {} already exists; rerun with --force to overwrite",
                bundle_dir.display()
            )
            .into());
        }
    }

    let bundle = build_bundle(input)?;
    let bundle_dir = write_bundle(&bundle, input, out_root)?;
    println!("Generated form bundle at {}", bundle_dir.display());

    for warning in lint(&bundle.spec) {
        eprintln!("Warning [{}]: {}", warning.code, warning.message);
    }

    if verbose {
        println!("Form specification:");
        println!("{}", serde_json::to_string_pretty(&bundle.spec)?);
        println!("Answer schema:");
        println!("{}", serde_json::to_string_pretty(&bundle.schema)?);
    }
    Ok(())
}

fn run_emit(spec_path: PathBuf, target: Target, out: Option<PathBuf>) -> CliResult<()> {
    let spec = load_spec(&spec_path)?;
    let code = emit(target, &spec)?;
    match out {
        Some(path) => {
            fs::write(&path, code)?;
            println!("Wrote {} artifact to {}", target, path.display());
        }
        None => print!("{}", code),
    }
    Ok(())
}

fn run_lint(spec_path: PathBuf, strict: bool) -> CliResult<()> {
    let spec = load_spec(&spec_path)?;
    let warnings = lint(&spec);
    if warnings.is_empty() {
        println!("No warnings.");
        return Ok(());
    }

    for warning in &warnings {
        match &warning.subject {
            Some(subject) => println!("[{}] {} ({})", warning.code, warning.message, subject),
            None => println!("[{}] {}", warning.code, warning.message),
        }
    }
    if strict {
        return Err(format!("{} warning(s) reported", warnings.len()).into());
    }
    Ok(())
}

fn run_schema(spec_path: PathBuf) -> CliResult<()> {
    let spec = load_spec(&spec_path)?;
    let visibility = resolve_visibility(&spec, &AnswerSet::new());
    let schema = answers_schema(&spec, &visibility);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn load_spec(path: &PathBuf) -> CliResult<FormSpec> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn load_answers(path: Option<PathBuf>) -> CliResult<AnswerSet> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            let value = serde_json::from_str(&contents)?;
            Ok(AnswerSet::from_value(value))
        }
        None => Ok(AnswerSet::new()),
    }
}

fn resolve_output_root(out: Option<PathBuf>) -> CliResult<PathBuf> {
    let candidate = match out {
        Some(path) => path,
        None => env::var_os("FORMSMITH_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    if candidate.as_os_str().is_empty() {
        return Err("output directory cannot be empty".into());
    }
    Ok(candidate)
}

fn prompt_conditions(fields: &[FormField]) -> CliResult<Vec<Condition>> {
    let mut conditions = Vec::new();
    while prompt_bool("Add visibility condition?", false)? {
        println!("Fields: {}", field_id_list(fields));
        let field_id = prompt_existing_field("Source field ID", fields)?;
        let operator = prompt_operator()?;
        let value = prompt_line("Value to compare against", None)?;
        let action = prompt_action()?;
        let target_field_id = prompt_existing_field("Target field ID", fields)?;
        if target_field_id == field_id {
            println!("A condition cannot target its own source field.");
            continue;
        }
        conditions.push(Condition::new(
            field_id,
            operator,
            value,
            action,
            target_field_id,
        ));
        println!("Added condition ({} total).", conditions.len());
    }
    Ok(conditions)
}

fn prompt_existing_field(prompt: &str, fields: &[FormField]) -> CliResult<String> {
    loop {
        let id = prompt_non_empty(prompt, None)?;
        if fields.iter().any(|field| field.id == id) {
            return Ok(id);
        }
        println!("Unknown field '{}'. Fields: {}", id, field_id_list(fields));
    }
}

fn field_id_list(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt_field_type() -> CliResult<FieldType> {
    loop {
        let value = prompt_line(
            "Field type (text|textarea|checkbox|radio|select|file|rating|integer|date)",
            Some("text"),
        )?;
        match FieldType::from_str(&value) {
            Ok(kind) => return Ok(kind),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt_operator() -> CliResult<ConditionOperator> {
    loop {
        let value = prompt_line(
            "Operator (equals|notEquals|contains|greaterThan|lessThan)",
            Some("equals"),
        )?;
        match ConditionOperator::from_str(&value) {
            Ok(operator) => return Ok(operator),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt_action() -> CliResult<ConditionAction> {
    loop {
        let value = prompt_line("Action (show|hide)", Some("show"))?;
        match ConditionAction::from_str(&value) {
            Ok(action) => return Ok(action),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt_theme() -> CliResult<FormTheme> {
    loop {
        let value = prompt_line("Theme (light|dark)", Some("light"))?;
        match FormTheme::from_str(&value) {
            Ok(theme) => return Ok(theme),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt_option_values() -> CliResult<Vec<String>> {
    loop {
        let raw = prompt_line("Comma separated options (e.g. red,blue,green)", None)?;
        let normalized = raw
            .split(',')
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .map(|option| option.to_string())
            .collect::<Vec<_>>();
        if normalized.is_empty() {
            println!("Provide at least one option for choice fields.");
            continue;
        }
        return Ok(normalized);
    }
}

fn prompt_optional_i64(prompt: &str) -> CliResult<Option<i64>> {
    loop {
        let raw = prompt_line(prompt, None)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                println!("Enter a whole number or leave blank.");
            }
        }
    }
}

fn prompt_optional_u32(prompt: &str) -> CliResult<Option<u32>> {
    loop {
        let raw = prompt_line(prompt, None)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<u32>() {
            Ok(value) if value > 0 => return Ok(Some(value)),
            _ => {
                println!("Enter a positive whole number or leave blank.");
            }
        }
    }
}

fn prompt_line(prompt: &str, default: Option<&str>) -> CliResult<String> {
    if let Some(default_value) = default {
        print!("{} [{}]: ", prompt, default_value);
    } else {
        print!("{}: ", prompt);
    }
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        if let Some(default_value) = default {
            Ok(default_value.to_string())
        } else {
            Ok(String::new())
        }
    } else {
        Ok(trimmed.to_string())
    }
}

fn prompt_non_empty(prompt: &str, default: Option<&str>) -> CliResult<String> {
    loop {
        let value = prompt_line(prompt, default)?;
        if !value.trim().is_empty() {
            return Ok(value);
        }
        println!("Value cannot be empty.");
    }
}

fn prompt_bool(prompt: &str, default: bool) -> CliResult<bool> {
    let prompt_text = format!("{} (y/n)", prompt.trim());
    let default_hint = if default { "Y" } else { "N" };
    loop {
        let line = prompt_line(&prompt_text, Some(default_hint))?;
        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => {
                println!("Invalid answer '{}'. Expected yes or no.", other);
            }
        }
    }
}
