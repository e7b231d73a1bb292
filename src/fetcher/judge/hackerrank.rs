extern crate regex;
extern crate scraper;
extern crate serde_json;

use crate::{
    error::{Error, Result},
    types::Samples,
};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

pub(super) fn problem_url(contest: &str, problem: &str) -> String {
    format!(
        "https://www.hackerrank.com/rest/contests/{}/challenges/{}",
        contest, problem
    )
}

/// The REST API nests the statement HTML under `model.body_html`.
pub(super) fn extract(body: &str) -> Result<Samples> {
    let envelope: Value = serde_json::from_str(body)?;
    let html = envelope
        .pointer("/model/body_html")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            Error::Parse(String::from("hackerrank response has no model.body_html field"))
        })?;
    let fragment = Html::parse_fragment(html);
    let input = Selector::parse("div.challenge_sample_input pre").unwrap();
    let output = Selector::parse("div.challenge_sample_output pre").unwrap();
    let span = Selector::parse("span").unwrap();
    let wrapper = Regex::new(r"(?i)(<pre>(<code>)?|(</code>)?</pre>)").unwrap();
    let mut samples = Samples::default();
    for pre in fragment.select(&input) {
        samples.inputs.push(pre_text(pre, &span, &wrapper));
    }
    for pre in fragment.select(&output) {
        samples.outputs.push(pre_text(pre, &span, &wrapper));
    }
    Ok(samples)
}

// Sample blocks sometimes highlight each line with a span; joining the span
// contents with newlines keeps the intended line structure where a plain
// tag strip would flatten it.
fn pre_text(pre: ElementRef<'_>, span: &Selector, wrapper: &Regex) -> String {
    let spans: Vec<String> = pre.select(span).map(|s| s.inner_html()).collect();
    if !spans.is_empty() {
        spans.join("\n").trim().to_string()
    } else {
        wrapper.replace_all(&pre.html(), "").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(statement: &str) -> String {
        serde_json::json!({ "model": { "body_html": statement } }).to_string()
    }

    #[test]
    fn extracts_code_wrapped_samples() {
        let body = envelope(
            "<div class=\"challenge_sample_input\"><pre><code>1 2 3</code></pre></div>\
             <div class=\"challenge_sample_output\"><pre><code>6</code></pre></div>",
        );
        let samples = extract(&body).unwrap();
        assert_eq!(samples.inputs, vec!["1 2 3"]);
        assert_eq!(samples.outputs, vec!["6"]);
    }

    #[test]
    fn joins_highlighted_spans_with_newlines() {
        let body = envelope(
            "<div class=\"challenge_sample_input\"><pre>\
             <span>2</span><span>1 2</span></pre></div>",
        );
        let samples = extract(&body).unwrap();
        assert_eq!(samples.inputs, vec!["2\n1 2"]);
    }

    #[test]
    fn page_without_sample_divs_yields_empty_samples() {
        let samples = extract(&envelope("<p>statement</p>")).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn missing_model_field_is_a_parse_error() {
        assert!(extract("{\"message\": \"not found\"}").is_err());
    }

    #[test]
    fn builds_rest_url() {
        assert_eq!(
            problem_url("master", "solve-me-first"),
            "https://www.hackerrank.com/rest/contests/master/challenges/solve-me-first"
        );
    }
}
