use serde_json::{Value, json};

use form_spec::{AnswerSet, RenderControl, RenderField, RenderPayload, RenderStatus};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: field prompts only.
    Clean,
    /// Verbose output: status, visible fields, parse expectations.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Presenter responsible for printing prompts once the evaluator yields the
/// next visible unanswered field.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
    show_answers_json: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity, show_answers_json: bool) -> Self {
        Self {
            verbosity,
            header_printed: false,
            show_answers_json,
        }
    }

    pub fn show_header(&mut self, payload: &RenderPayload) {
        if self.header_printed {
            return;
        }
        println!("Form: {}", payload.form_title);
        if self.verbosity.is_verbose() && !payload.form_description.is_empty() {
            println!("Description: {}", payload.form_description);
        }
        self.header_printed = true;
    }

    pub fn show_status(&self, payload: &RenderPayload) {
        if self.verbosity.is_verbose() {
            println!(
                "Status: {} ({}/{})",
                payload.status.as_str(),
                payload.progress.answered,
                payload.progress.total
            );
            self.print_visible_fields(payload);
        } else if payload.status == RenderStatus::NeedInput && payload.progress.total == 0 {
            println!("No visible fields are available; check your conditional logic.");
        }
    }

    fn print_visible_fields(&self, payload: &RenderPayload) {
        println!("Visible fields:");
        for field in payload.fields.iter().filter(|field| field.visible) {
            let mut entry = format!(" - {} ({})", field.id, field.label);
            if field.required {
                entry.push_str(" [required]");
            }
            println!("{}", entry);
        }
    }

    pub fn show_prompt(&self, prompt: &PromptContext) {
        let mut line = if prompt.total > 0 {
            format!("{}/{} {}", prompt.index, prompt.total, prompt.label)
        } else {
            format!("{} {}", prompt.index, prompt.label)
        };
        if prompt.required {
            line.push_str(" *");
        }
        if let Some(hint) = &prompt.hint {
            line.push(' ');
            line.push_str(hint);
        }
        println!("{}", line);
        if self.verbosity.is_verbose() && !prompt.choices.is_empty() {
            println!("Choices: {}", prompt.choices.join(", "));
        }
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Invalid answer: {}", error.user_message);
        if self.verbosity.is_verbose()
            && let Some(debug) = &error.debug_message
        {
            eprintln!("  Expected: {}", debug);
        }
    }

    /// Submission stays a no-op: nothing is transmitted anywhere, the form
    /// just reports its configured success message.
    pub fn show_completion(&self, success_message: &str, answers: &AnswerSet) {
        println!("{}", success_message);
        if self.show_answers_json {
            match answers.to_json_pretty() {
                Ok(pretty) => println!("{}", pretty),
                Err(err) => eprintln!("Failed to serialize answers to JSON: {}", err),
            }
        }
    }
}

/// Context used to format a single prompt.
pub struct PromptContext {
    pub index: usize,
    pub total: usize,
    pub label: String,
    pub required: bool,
    pub hint: Option<String>,
    pub choices: Vec<String>,
}

impl PromptContext {
    pub fn new(field: &RenderField, payload: &RenderPayload) -> Self {
        let index = payload.progress.answered + 1;
        let choices = match &field.control {
            RenderControl::RadioGroup { options } | RenderControl::Dropdown { options } => {
                options.clone()
            }
            _ => Vec::new(),
        };
        Self {
            index: index.max(1),
            total: payload.progress.total,
            label: field.label.clone(),
            required: field.required,
            hint: control_hint(&field.control),
            choices,
        }
    }
}

fn control_hint(control: &RenderControl) -> Option<String> {
    match control {
        RenderControl::Toggle => Some("(yes/no, y/n, true/false)".to_string()),
        RenderControl::RatingRow { max } => Some(format!("(1-{})", max)),
        RenderControl::NumberBox { min, max } => match (min, max) {
            (Some(min), Some(max)) => Some(format!("(integer {}-{})", min, max)),
            (Some(min), None) => Some(format!("(integer, at least {})", min)),
            (None, Some(max)) => Some(format!("(integer, at most {})", max)),
            (None, None) => Some("(integer)".to_string()),
        },
        RenderControl::DatePicker => Some("(YYYY-MM-DD)".to_string()),
        RenderControl::FilePicker => Some("(file name)".to_string()),
        RenderControl::RadioGroup { options } | RenderControl::Dropdown { options }
            if !options.is_empty() =>
        {
            Some(format!("({})", options.join("/")))
        }
        _ => None,
    }
}

/// Error produced when parsing answers from the user.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}

/// Turn one line of input into the stored answer value for a field.
///
/// Empty input on an optional field stores an empty string so the field
/// counts as answered; empty input on a required field is rejected.
pub fn parse_answer(field: &RenderField, raw: &str) -> Result<Value, AnswerParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if field.required {
            return Err(AnswerParseError::new("a value is required", None));
        }
        return Ok(Value::String(String::new()));
    }

    match &field.control {
        RenderControl::TextBox
        | RenderControl::MultilineText
        | RenderControl::FilePicker => Ok(Value::String(trimmed.to_string())),
        RenderControl::Toggle => parse_bool(trimmed),
        RenderControl::RadioGroup { options } | RenderControl::Dropdown { options } => {
            parse_choice(trimmed, options)
        }
        RenderControl::RatingRow { max } => parse_rating(trimmed, *max),
        RenderControl::NumberBox { min, max } => parse_integer(trimmed, *min, *max),
        RenderControl::DatePicker => parse_date(trimmed),
    }
}

fn parse_bool(raw: &str) -> Result<Value, AnswerParseError> {
    match raw.to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Ok(Value::Bool(true)),
        "false" | "f" | "no" | "n" | "0" => Ok(Value::Bool(false)),
        _ => Err(AnswerParseError::new(
            "answer must be yes or no",
            Some("yes/no, y/n, true/false, 1/0".into()),
        )),
    }
}

fn parse_choice(raw: &str, options: &[String]) -> Result<Value, AnswerParseError> {
    if options.iter().any(|option| option == raw) {
        return Ok(Value::String(raw.to_string()));
    }
    // A bare number picks the option at that 1-based position.
    if let Ok(position) = raw.parse::<usize>()
        && position >= 1
        && position <= options.len()
    {
        return Ok(Value::String(options[position - 1].clone()));
    }
    Err(AnswerParseError::new(
        "answer must match one of the choices",
        Some(options.join(", ")),
    ))
}

fn parse_rating(raw: &str, max: u32) -> Result<Value, AnswerParseError> {
    let rating: u32 = raw.parse().map_err(|_| {
        AnswerParseError::new("rating must be a whole number", Some(format!("1-{}", max)))
    })?;
    if rating < 1 || rating > max {
        return Err(AnswerParseError::new(
            format!("rating must be between 1 and {}", max),
            None,
        ));
    }
    Ok(json!(rating))
}

fn parse_integer(raw: &str, min: Option<i64>, max: Option<i64>) -> Result<Value, AnswerParseError> {
    let number: i64 = raw
        .parse()
        .map_err(|_| AnswerParseError::new("answer must be a whole number", None))?;
    if let Some(min) = min
        && number < min
    {
        return Err(AnswerParseError::new(
            format!("answer must be at least {}", min),
            None,
        ));
    }
    if let Some(max) = max
        && number > max
    {
        return Err(AnswerParseError::new(
            format!("answer must be at most {}", max),
            None,
        ));
    }
    Ok(json!(number))
}

fn parse_date(raw: &str) -> Result<Value, AnswerParseError> {
    let error = || {
        AnswerParseError::new(
            "date must be formatted as YYYY-MM-DD",
            Some("for example 2025-01-31".into()),
        )
    };
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return Err(error());
    }
    let month: u32 = parts[1].parse().map_err(|_| error())?;
    let day: u32 = parts[2].parse().map_err(|_| error())?;
    if parts[0].parse::<u32>().is_err() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(error());
    }
    Ok(Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_spec::FieldType;

    fn field(control: RenderControl, required: bool) -> RenderField {
        RenderField {
            id: "f".into(),
            label: "F".into(),
            kind: FieldType::Text,
            required,
            visible: true,
            control,
            current_value: None,
        }
    }

    #[test]
    fn blank_input_is_rejected_only_when_required() {
        let required = field(RenderControl::TextBox, true);
        assert!(parse_answer(&required, "  ").is_err());

        let optional = field(RenderControl::TextBox, false);
        assert_eq!(parse_answer(&optional, "").unwrap(), json!(""));
    }

    #[test]
    fn toggle_accepts_common_spellings() {
        let toggle = field(RenderControl::Toggle, false);
        assert_eq!(parse_answer(&toggle, "Yes").unwrap(), json!(true));
        assert_eq!(parse_answer(&toggle, "0").unwrap(), json!(false));
        assert!(parse_answer(&toggle, "maybe").is_err());
    }

    #[test]
    fn choices_accept_text_or_position() {
        let select = field(
            RenderControl::Dropdown {
                options: vec!["red".into(), "blue".into()],
            },
            false,
        );
        assert_eq!(parse_answer(&select, "blue").unwrap(), json!("blue"));
        assert_eq!(parse_answer(&select, "1").unwrap(), json!("red"));
        assert!(parse_answer(&select, "green").is_err());
    }

    #[test]
    fn ratings_and_integers_enforce_bounds() {
        let rating = field(RenderControl::RatingRow { max: 3 }, false);
        assert_eq!(parse_answer(&rating, "3").unwrap(), json!(3));
        assert!(parse_answer(&rating, "4").is_err());

        let number = field(
            RenderControl::NumberBox {
                min: Some(1),
                max: Some(10),
            },
            false,
        );
        assert_eq!(parse_answer(&number, "10").unwrap(), json!(10));
        assert!(parse_answer(&number, "0").is_err());
        assert!(parse_answer(&number, "eleven").is_err());
    }

    #[test]
    fn dates_must_be_iso_formatted() {
        let date = field(RenderControl::DatePicker, false);
        assert_eq!(
            parse_answer(&date, "2025-01-31").unwrap(),
            json!("2025-01-31")
        );
        assert!(parse_answer(&date, "31/01/2025").is_err());
        assert!(parse_answer(&date, "2025-13-01").is_err());
    }
}
