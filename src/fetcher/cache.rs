extern crate home;

use crate::{config::cache::DIR_NAME, types::Samples};
use std::{
    collections::HashSet,
    fs, io,
    path::PathBuf,
};

/// On-disk store of scraped test cases, addressed by (site, contest,
/// problem). Each problem gets its own directory holding `Input<i>` and
/// `Output<i>` files, one pair per test case, plain text. Nothing here ever
/// deletes an entry; a re-scrape replaces the file set for its key.
pub struct TestCaseCache {
    root: PathBuf,
}

impl TestCaseCache {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
    pub fn default_root() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".cache").join(DIR_NAME))
    }

    fn contest_dir(&self, site: &str, contest: &str) -> PathBuf {
        self.root.join(site).join(contest)
    }
    fn problem_dir(&self, site: &str, contest: &str, problem: &str) -> PathBuf {
        self.contest_dir(site, contest).join(problem)
    }

    /// True iff the problem already has cached files. Creates missing
    /// intermediate directories as a side effect so later writes never fail
    /// on a missing path; `problem = None` only sets up the contest
    /// placeholder.
    pub fn exists(&self, site: &str, contest: &str, problem: Option<&str>) -> io::Result<bool> {
        let problem = match problem {
            Some(p) => p,
            None => {
                fs::create_dir_all(self.contest_dir(site, contest))?;
                return Ok(false);
            }
        };
        let dir = self.problem_dir(site, contest, problem);
        if dir.is_dir() && dir.read_dir()?.next().is_some() {
            return Ok(true);
        }
        fs::create_dir_all(dir)?;
        Ok(false)
    }

    /// Problem ids already present under the contest directory. A contest
    /// that was never requested yields the empty set.
    pub fn cached_problems(&self, site: &str, contest: &str) -> io::Result<HashSet<String>> {
        let dir = self.contest_dir(site, contest);
        if !dir.is_dir() {
            return Ok(HashSet::new());
        }
        let mut ret = HashSet::new();
        for entry in dir.read_dir()? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                ret.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(ret)
    }

    /// Writes the full file set for the problem, dropping files from any
    /// earlier scrape first so a shorter sample list never leaves stale
    /// trailing indices behind.
    pub fn write(
        &self,
        site: &str,
        contest: &str,
        problem: &str,
        samples: &Samples,
    ) -> io::Result<()> {
        let dir = self.problem_dir(site, contest, problem);
        fs::create_dir_all(&dir)?;
        for entry in dir.read_dir()? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
            }
        }
        for (index, input) in samples.inputs.iter().enumerate() {
            fs::write(dir.join(format!("Input{}", index)), input)?;
        }
        for (index, output) in samples.outputs.iter().enumerate() {
            fs::write(dir.join(format!("Output{}", index)), output)?;
        }
        Ok(())
    }
}
