use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use form_codegen::{Target, TemplateEngine, emit_with};
use form_spec::{
    AnswerSet, Condition, FormField, FormSettings, FormSpec, answers_schema, resolve_visibility,
};

/// Input shape describing what should be generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationInput {
    pub dir_name: String,
    #[serde(default)]
    pub settings: FormSettings,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Generated bundle returned by the builder.
#[derive(Debug)]
pub struct GeneratedBundle {
    pub spec: FormSpec,
    pub schema: Value,
    pub artifacts: Vec<(Target, String)>,
}

/// Build the full bundle from CLI inputs or JSON answers.
pub fn build_bundle(input: &GenerationInput) -> Result<GeneratedBundle, String> {
    validate_input(input)?;

    let spec = FormSpec {
        settings: input.settings.clone(),
        fields: input.fields.clone(),
        conditions: input.conditions.clone(),
    };

    let visibility = resolve_visibility(&spec, &AnswerSet::new());
    let schema = answers_schema(&spec, &visibility);

    let engine = TemplateEngine::new().map_err(|err| err.to_string())?;
    let artifacts = Target::ALL
        .iter()
        .map(|target| {
            emit_with(&engine, *target, &spec)
                .map(|code| (*target, code))
                .map_err(|err| err.to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GeneratedBundle {
        spec,
        schema,
        artifacts,
    })
}

fn validate_input(input: &GenerationInput) -> Result<(), String> {
    if input.dir_name.trim().is_empty() {
        return Err("dir_name must be provided".into());
    }
    if input.fields.is_empty() {
        return Err("at least one field must be defined".into());
    }

    let mut seen = HashSet::new();
    for field in &input.fields {
        if field.id.trim().is_empty() {
            return Err("field id cannot be empty".into());
        }
        if !seen.insert(field.id.clone()) {
            return Err(format!("duplicate field id '{}'", field.id));
        }
        if let (Some(min), Some(max)) = (field.min, field.max)
            && min > max
        {
            return Err(format!("field '{}' min cannot exceed max", field.id));
        }
    }

    for condition in &input.conditions {
        if condition.field_id.trim().is_empty() || condition.target_field_id.trim().is_empty() {
            return Err("conditions must name a source and a target field".into());
        }
    }

    Ok(())
}

/// Serialize the bundle to disk.
pub fn write_bundle(
    bundle: &GeneratedBundle,
    input: &GenerationInput,
    out_root: &Path,
) -> io::Result<PathBuf> {
    let bundle_dir = out_root.join(&input.dir_name);
    let code_dir = bundle_dir.join("code");
    let schemas_dir = bundle_dir.join("schemas");

    fs::create_dir_all(&code_dir)?;
    fs::create_dir_all(&schemas_dir)?;

    write_json(&bundle_dir.join("form.json"), &bundle.spec)?;
    write_json(&schemas_dir.join("answers.schema.json"), &bundle.schema)?;
    for (target, code) in &bundle.artifacts {
        fs::write(code_dir.join(target.file_name()), code)?;
    }

    fs::write(bundle_dir.join("README.md"), build_readme(bundle))?;

    Ok(bundle_dir)
}

fn write_json(path: &Path, value: &impl Serialize) -> io::Result<()> {
    let contents = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, contents)
}

fn build_readme(bundle: &GeneratedBundle) -> String {
    let description = if bundle.spec.settings.description.is_empty() {
        "No description provided."
    } else {
        bundle.spec.settings.description.as_str()
    };
    let artifact_list = bundle
        .artifacts
        .iter()
        .map(|(target, _)| format!("- `code/{}` ({})", target.file_name(), target))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# {title}\n\n{description}\n\n## Files\n\n- `form.json`\n- `schemas/answers.schema.json`\n{artifacts}\n\nTry the form in a terminal with:\n\n```\nformsmith preview --spec form.json\n```\n\nRe-export a single target with:\n\n```\nformsmith emit --spec form.json --target react-tailwind\n```\n",
        title = bundle.spec.settings.title,
        description = description,
        artifacts = artifact_list,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_spec::FieldType;

    fn minimal_input() -> GenerationInput {
        GenerationInput {
            dir_name: "demo".into(),
            settings: FormSettings::default(),
            fields: vec![FormField::new("f1", FieldType::Text, "Name")],
            conditions: vec![],
        }
    }

    #[test]
    fn build_bundle_emits_every_target() {
        let bundle = build_bundle(&minimal_input()).unwrap();
        assert_eq!(bundle.artifacts.len(), Target::ALL.len());
        assert!(bundle.schema["properties"]["f1"].is_object());
    }

    #[test]
    fn write_bundle_lays_out_the_directory() {
        let input = minimal_input();
        let bundle = build_bundle(&input).unwrap();
        let temp_dir = tempfile::TempDir::new().expect("temp dir");

        let bundle_dir = write_bundle(&bundle, &input, temp_dir.path()).expect("write bundle");

        assert!(bundle_dir.join("form.json").exists());
        assert!(bundle_dir.join("schemas").join("answers.schema.json").exists());
        for target in Target::ALL {
            assert!(bundle_dir.join("code").join(target.file_name()).exists());
        }
        let readme = std::fs::read_to_string(bundle_dir.join("README.md")).expect("read README");
        assert!(readme.contains("formsmith preview --spec form.json"));
    }

    #[test]
    fn rejects_duplicate_field_ids() {
        let mut input = minimal_input();
        input.fields.push(FormField::new("f1", FieldType::Date, "When"));
        let err = build_bundle(&input).unwrap_err();
        assert!(err.contains("duplicate field id"));
    }

    #[test]
    fn rejects_conditions_without_endpoints() {
        let mut input = minimal_input();
        input.conditions.push(Condition::new(
            "",
            form_spec::ConditionOperator::Equals,
            "x",
            form_spec::ConditionAction::Show,
            "f1",
        ));
        let err = build_bundle(&input).unwrap_err();
        assert!(err.contains("source and a target"));
    }
}
