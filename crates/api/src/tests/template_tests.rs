// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use super::helpers::CSV_HEADER;
use crate::{ApiError, TemplateFormat, provide_template};

#[test]
fn test_csv_template() {
    let template: String = provide_template(TemplateFormat::Csv);

    let lines: Vec<&str> = template.lines().collect();
    assert_eq!(lines[0], "CSV Template:");
    assert_eq!(lines[1], "```csv");
    assert_eq!(lines[2], CSV_HEADER);
    assert_eq!(
        lines[3],
        "[String],[positive integer],[positive integer],[positive number in minutes],[positive number],[0-100],[0-100]"
    );
    assert_eq!(lines[4], "```");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_json_template() {
    let template: String = provide_template(TemplateFormat::Json);

    assert!(template.starts_with("JSON Template:\n```json\n{\n \"teams\": [\n {"));
    assert!(template.contains(" \"team_id\": \"[String]\","));
    assert!(template.contains(" \"average_query_time\": [positive number in minutes],"));
    assert!(template.contains(" \"remote_infrastructure_efficiency\": [0-100]\n }"));
    assert!(template.ends_with(" ]\n}\n```"));
}

#[test]
fn test_both_templates_csv_first() {
    let both: String = provide_template(TemplateFormat::Both);

    assert_eq!(
        both,
        format!(
            "{}\n{}",
            provide_template(TemplateFormat::Csv),
            provide_template(TemplateFormat::Json)
        )
    );
    assert_eq!(TemplateFormat::default(), TemplateFormat::Both);
}

#[test]
fn test_template_format_from_str() {
    assert_eq!(TemplateFormat::from_str("csv"), Ok(TemplateFormat::Csv));
    assert_eq!(TemplateFormat::from_str("JSON"), Ok(TemplateFormat::Json));
    assert_eq!(TemplateFormat::from_str(" both "), Ok(TemplateFormat::Both));
    assert_eq!(
        TemplateFormat::from_str("xml"),
        Err(ApiError::UnknownTemplateFormat {
            format: String::from("xml")
        })
    );
}
