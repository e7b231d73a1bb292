extern crate regex;
extern crate scraper;

use crate::{
    error::Result,
    types::{Samples, TestCase},
};
use regex::Regex;
use scraper::{Html, Selector};

// SPOJ statements are addressed by problem code alone; the contest only
// matters for cache addressing.
pub(super) fn problem_url(problem: &str) -> String {
    format!("https://spoj.com/problems/{}", problem)
}

// Same bold-label scheme as codechef, but on the raw statement page and
// with the output label trailing off to the end of the block.
pub(super) fn extract(body: &str) -> Result<Samples> {
    let document = Html::parse_document(body);
    let pre = Selector::parse("pre").unwrap();
    let input_cut = Regex::new(r"(?si)(<pre>.*<b>Input:?</b>:?|<b>Output:?</b>.*)").unwrap();
    let output_cut = Regex::new(r"(?si)(<pre>.*<b>Output:?</b>:?|</pre>)").unwrap();
    let tag = Regex::new("<[^<]+?>").unwrap();
    let mut cases = Vec::new();
    for case in document.select(&pre) {
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
    Ok(Samples::from_cases(cases))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sample_at_bold_labels() {
        let page = "<html><body>\
            <pre><b>Input:</b>\n3\n1 2 3\n<b>Output:</b>\n6</pre>\
        </body></html>";
        let samples = extract(page).unwrap();
        assert_eq!(samples.inputs, vec!["3\n1 2 3"]);
        assert_eq!(samples.outputs, vec!["6"]);
    }

    #[test]
    fn page_without_pre_blocks_yields_empty_samples() {
        let samples = extract("<html><body><p>hello</p></body></html>").unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn builds_problem_url_from_code_alone() {
        assert_eq!(problem_url("TEST"), "https://spoj.com/problems/TEST");
    }
}
