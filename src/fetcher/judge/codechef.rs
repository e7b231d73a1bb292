extern crate regex;
extern crate scraper;
extern crate serde_json;

use crate::{
    error::{Error, Result},
    types::{Samples, TestCase},
};
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

pub(super) fn problem_url(contest: &str, problem: &str) -> String {
    format!(
        "https://codechef.com/api/contests/{}/problems/{}",
        contest, problem
    )
}
pub(super) fn contest_url(contest: &str) -> String {
    format!("https://codechef.com/{}", contest)
}

/// The API wraps the statement HTML in a JSON envelope under `body`.
pub(super) fn extract(body: &str) -> Result<Samples> {
    let envelope: Value = serde_json::from_str(body)?;
    let html = envelope
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Parse(String::from("codechef response has no body field")))?;
    Ok(extract_fragment(html))
}

// Statements put each sample in one pre, input and output separated by bold
// "Input:"/"Output:" labels. Cutting at the labels splits the pair out of
// the raw serialization before the leftover tags get stripped.
fn extract_fragment(html: &str) -> Samples {
    let fragment = Html::parse_fragment(html);
    let pre = Selector::parse("pre").unwrap();
    let input_cut = Regex::new(r"(?si)(<pre>.*<b>Input:?</b>:?|<b>Output:?</b>.*</pre>)").unwrap();
    let output_cut = Regex::new(r"(?si)(<pre>.*<b>Output:?</b>:?|</pre>)").unwrap();
    let tag = Regex::new("<[^<]+?>").unwrap();
    let mut cases = Vec::new();
    for case in fragment.select(&pre) {
        let raw = case.html();
        let input = tag
            .replace_all(&input_cut.replace_all(&raw, ""), "")
            .trim()
            .to_string();
        let output = tag
            .replace_all(&output_cut.replace_all(&raw, ""), "")
            .trim()
            .to_string();
        cases.push(TestCase { input, output });
    }
    Samples::from_cases(cases)
}

pub(super) fn problem_links(contest: &str, body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let name = Selector::parse("table.dataTable div.problemname a").unwrap();
    document
        .select(&name)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| problem_url(contest, super::problem_id_from_url(href)))
        .collect()
}
