extern crate regex;
extern crate scraper;

use crate::{error::Result, types::Samples};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

pub(super) fn problem_url(contest: &str, problem: &str) -> String {
    format!("https://codeforces.com/contest/{}/problem/{}", contest, problem)
}
pub(super) fn contest_url(contest: &str) -> String {
    format!("https://codeforces.com/contest/{}", contest)
}

struct SelectorSet {
    input: Selector,
    output: Selector,
    line: Selector,
}
impl SelectorSet {
    fn new() -> Self {
        Self {
            input: Selector::parse("div.input pre").unwrap(),
            output: Selector::parse("div.output pre").unwrap(),
            line: Selector::parse("div.test-example-line").unwrap(),
        }
    }
}

pub(super) fn extract(body: &str) -> Result<Samples> {
    let document = Html::parse_document(body);
    let selectors = SelectorSet::new();
    let tag = Regex::new("<[^<]+?>").unwrap();
    let mut samples = Samples::default();
    for pre in document.select(&selectors.input) {
        samples.inputs.push(pre_text(pre, &selectors.line, &tag));
    }
    for pre in document.select(&selectors.output) {
        samples.outputs.push(pre_text(pre, &selectors.line, &tag));
    }
    Ok(samples)
}

// Newer problem pages wrap each sample line in its own div; joining those
// keeps the line structure a plain tag strip would flatten.
fn pre_text(pre: ElementRef<'_>, line: &Selector, tag: &Regex) -> String {
    let lines: Vec<String> = pre.select(line).map(|l| l.text().collect()).collect();
    if !lines.is_empty() {
        return lines.join("\n").trim().to_string();
    }
    // inner_html re-serializes every break as plain <br>; the other two
    // replacements cover the raw source forms all the same.
    let html = pre
        .inner_html()
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("</br>", "");
    tag.replace_all(&html, "").trim().to_string()
}

pub(super) fn problem_links(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let id = Selector::parse("table.problems td.id a").unwrap();
    document
        .select(&id)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| format!("https://codeforces.com{}", href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBLEM_PAGE: &str = r#"<html><body>
        <div class="input"><div class="title">Input</div><pre>3<br>1 2 3</pre></div>
        <div class="output"><div class="title">Output</div><pre>6</pre></div>
    </body></html>"#;

    #[test]
    fn extracts_sample_pair_with_line_breaks() {
        let samples = extract(PROBLEM_PAGE).unwrap();
        assert_eq!(samples.inputs, vec!["3\n1 2 3"]);
        assert_eq!(samples.outputs, vec!["6"]);
    }

    #[test]
    fn self_closing_breaks_become_newlines() {
        let page = r#"<html><body><div class="input"><pre>5 4<br/>1 2 3 4</pre></div></body></html>"#;
        let samples = extract(page).unwrap();
        assert_eq!(samples.inputs, vec!["5 4\n1 2 3 4"]);
    }

    #[test]
    fn joins_example_line_divs() {
        let page = r#"<html><body><div class="input"><pre>
            <div class="test-example-line">5 4</div>
            <div class="test-example-line">1 2 3 4 5</div>
        </pre></div></body></html>"#;
        let samples = extract(page).unwrap();
        assert_eq!(samples.inputs, vec!["5 4\n1 2 3 4 5"]);
    }

    #[test]
    fn missing_containers_yield_empty_samples() {
        let samples = extract("<html><body><p>nothing here</p></body></html>").unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn builds_urls() {
        assert_eq!(
            problem_url("1234", "A"),
            "https://codeforces.com/contest/1234/problem/A"
        );
        assert_eq!(contest_url("1234"), "https://codeforces.com/contest/1234");
    }

    #[test]
    fn discovers_problem_links_in_document_order() {
        let listing = r#"<html><body><table class="problems">
            <tr><td class="id"><a href="/contest/1234/problem/A">A</a></td></tr>
            <tr><td class="id"><a href="/contest/1234/problem/B">B</a></td></tr>
        </table></body></html>"#;
        assert_eq!(
            problem_links(listing),
            vec![
                "https://codeforces.com/contest/1234/problem/A",
                "https://codeforces.com/contest/1234/problem/B",
            ]
        );
    }
}
