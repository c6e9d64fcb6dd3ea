// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input templates generated from the team record schema.

use std::str::FromStr;

use workforce_domain::{FieldKind, FieldSpec, SCHEMA};

use crate::error::ApiError;

/// Which template(s) to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateFormat {
    /// The CSV template only.
    Csv,
    /// The JSON template only.
    Json,
    /// Both templates, CSV first.
    #[default]
    Both,
}

impl TemplateFormat {
    const fn includes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    const fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl FromStr for TemplateFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "both" => Ok(Self::Both),
            _ => Err(ApiError::UnknownTemplateFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Renders the requested input template(s).
///
/// Field order and placeholders come from [`SCHEMA`], so the templates
/// always describe exactly the fields the validator requires.
#[must_use]
pub fn provide_template(format: TemplateFormat) -> String {
    let mut lines: Vec<String> = Vec::new();

    if format.includes_csv() {
        let names: Vec<&str> = SCHEMA.iter().map(|spec| spec.name).collect();
        let placeholders: Vec<&str> = SCHEMA.iter().map(|spec| spec.placeholder).collect();

        lines.push(String::from("CSV Template:"));
        lines.push(String::from("```csv"));
        lines.push(names.join(","));
        lines.push(placeholders.join(","));
        lines.push(String::from("```"));
    }

    if format.includes_json() {
        lines.push(String::from("JSON Template:"));
        lines.push(String::from("```json"));
        lines.push(String::from("{"));
        lines.push(String::from(r#" "teams": ["#));
        lines.push(String::from(" {"));
        let last: usize = SCHEMA.len() - 1;
        for (idx, spec) in SCHEMA.iter().enumerate() {
            let separator: &str = if idx == last { "" } else { "," };
            lines.push(format!(
                r#" "{}": {}{separator}"#,
                spec.name,
                json_placeholder(spec)
            ));
        }
        lines.push(String::from(" }"));
        lines.push(String::from(" ]"));
        lines.push(String::from("}"));
        lines.push(String::from("```"));
    }

    lines.join("\n")
}

/// Identifiers are strings in JSON, so their placeholder is quoted.
fn json_placeholder(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Identifier => format!("\"{}\"", spec.placeholder),
        _ => spec.placeholder.to_string(),
    }
}
