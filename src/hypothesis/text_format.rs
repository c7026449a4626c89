//! The human-readable model format.
//!
//! A model is one rule per line:
//! ```txt
//! IF (<feature> > <threshold>, [<alpha_0>, <alpha_1>, ...], [<beta_0>, <beta_1>, ...])
//! ```
//! A one-vs-all model is a sequence of such blocks separated by
//! a line holding `----`.
use regex::Regex;

use super::model::Model;
use super::rule::Rule;
use crate::common::constants::ONE_VS_ALL_SEPARATOR;
use crate::error::ParseError;

use std::sync::LazyLock;


static RULE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*IF\s*\(\s*(\S+?)\s*>\s*([^,\s]+)\s*,\s*\[([^\]]*)\]\s*,\s*\[([^\]]*)\]\s*\)\s*$"
    )
    .expect("rule line regex must compile")
});


/// Render `model` one rule per line, without trailing newline.
/// An empty model renders as the empty string.
pub fn render_model(model: &Model) -> String {
    model.rules()
        .iter()
        .map(Rule::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}


/// Render the sub-models of a one-vs-all classifier.
pub fn render_one_vs_all(models: &[Model]) -> String {
    let separator = format!("\n{ONE_VS_ALL_SEPARATOR}\n");
    models.iter()
        .map(render_model)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}


/// Parse a single model.
/// Both `\n` and `\r\n` line endings are accepted
/// and blank lines are skipped.
/// Parsed rules carry no margin.
pub fn parse_model(text: &str) -> Result<Model, ParseError> {
    let text = text.replace("\r\n", "\n");

    let mut n_class = None;
    let mut rules = Vec::new();
    for (line, content) in text.split('\n').enumerate() {
        let line = line + 1;
        if content.trim().is_empty() { continue; }

        let rule = parse_rule(line, content)?;

        match n_class {
            None => { n_class = Some(rule.n_class()); },
            Some(expected) if expected != rule.n_class() => {
                return Err(ParseError::ClassCount {
                    line,
                    expected,
                    got: rule.n_class(),
                });
            },
            Some(_) => {},
        }
        rules.push(rule);
    }

    Ok(Model::from_rules(rules))
}


/// Parse the sub-models of a one-vs-all classifier.
/// Each block is parsed independently.
pub fn parse_one_vs_all(text: &str) -> Result<Vec<Model>, ParseError> {
    let text = text.replace("\r\n", "\n");
    let separator = format!("\n{ONE_VS_ALL_SEPARATOR}\n");
    text.split(&separator)
        .map(parse_model)
        .collect()
}


fn parse_rule(line: usize, content: &str) -> Result<Rule, ParseError> {
    let malformed = || ParseError::Format {
        line,
        text: content.to_string(),
    };

    let caps = RULE_LINE.captures(content)
        .ok_or_else(malformed)?;

    let threshold = parse_number(&caps[2]).ok_or_else(malformed)?;
    let alpha = parse_vector(&caps[3]).ok_or_else(malformed)?;
    let beta = parse_vector(&caps[4]).ok_or_else(malformed)?;

    if alpha.len() != beta.len() {
        return Err(ParseError::Cardinality {
            line,
            alpha: alpha.len(),
            beta: beta.len(),
        });
    }

    Ok(Rule::new(&caps[1], threshold, alpha, beta))
}


fn parse_vector(items: &str) -> Option<Vec<f64>> {
    items.split(',')
        .map(parse_number)
        .collect()
}


fn parse_number(item: &str) -> Option<f64> {
    item.trim().parse::<f64>().ok()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_blank_lines() {
        let text = "IF (a > 1.5, [1.0, -1.0], [-1.0, 1.0])\r\n\r\n\
                    if (b > -2.0, [0.5, 0.5], [-0.5, -0.5])\r\n";
        let model = parse_model(text).unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.rules()[1].feature, "b");
        assert_eq!(model.rules()[1].threshold, -2.0);
        assert!(model.rules().iter().all(|rule| rule.margin.is_none()));
    }

    #[test]
    fn exponents_and_python_floats() {
        let model = parse_model("IF (a > 1e-07, [2.5E+3, -inf], [NaN, 0.0])")
            .unwrap();
        let rule = &model.rules()[0];
        assert_eq!(rule.threshold, 1e-7);
        assert_eq!(rule.alpha, vec![2500.0, f64::NEG_INFINITY]);
        assert!(rule.beta[0].is_nan());
    }

    #[test]
    fn garbage_is_a_format_error() {
        let text = "IF (a > 1.0, [1.0], [1.0])\nTHEN something";
        let err = parse_model(text).unwrap_err();
        assert_eq!(
            err,
            ParseError::Format { line: 2, text: "THEN something".into() }
        );
    }

    #[test]
    fn bad_number_is_a_format_error() {
        let err = parse_model("IF (a > x1, [1.0], [1.0])").unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 1, .. }));

        let err = parse_model("IF (a > 1.0, [], [1.0])").unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 1, .. }));
    }

    #[test]
    fn empty_text_is_an_empty_model() {
        assert!(parse_model("").unwrap().is_empty());
        assert!(parse_model("\n\n").unwrap().is_empty());
    }
}
