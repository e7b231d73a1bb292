use std::fmt;

/// One sample (input, output) pair as shown on a problem page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

/// The raw extraction result for one page. Inputs and outputs are kept as
/// separate ordered sequences because some judges yield them from
/// independent structural queries; index i pairs `inputs[i]` with
/// `outputs[i]`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Samples {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl Samples {
    pub fn from_cases(cases: Vec<TestCase>) -> Self {
        let mut ret = Self::default();
        for case in cases {
            ret.inputs.push(case.input);
            ret.outputs.push(case.output);
        }
        ret
    }
    pub fn len(&self) -> usize {
        self.inputs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// Outcome of a single-problem scrape. `Cached` means the guard found a
/// populated cache entry and force mode was off, so nothing was fetched or
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Cached,
    Fetched(usize),
}

/// Outcome of a contest-wide sweep. Links dropped because of fetch or
/// extraction failures show up in `failed` instead of vanishing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContestSummary {
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl fmt::Display for ContestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fetched {} of {} problems, {} failed",
            self.succeeded, self.requested, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cases_keeps_order() {
        let samples = Samples::from_cases(vec![
            TestCase {
                input: String::from("1"),
                output: String::from("2"),
            },
            TestCase {
                input: String::from("3"),
                output: String::from("4"),
            },
        ]);
        assert_eq!(samples.inputs, vec!["1", "3"]);
        assert_eq!(samples.outputs, vec!["2", "4"]);
        assert_eq!(samples.len(), 2);
    }
}
