extern crate log;

use crate::{
    cache::TestCaseCache,
    client::Client,
    error::Result,
    judge::{self, Judge},
    types::{ContestSummary, ScrapeOutcome},
};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Resolves a request to fetch targets, retrieves the pages, and routes
/// the extracted samples into the cache.
pub struct Downloader {
    client: Client,
    cache: TestCaseCache,
    judge: Judge,
}

impl Downloader {
    pub fn new(judge: Judge, cache: TestCaseCache) -> Result<Self> {
        Ok(Self {
            client: Client::new()?,
            cache,
            judge,
        })
    }

    /// Fetches one problem page and caches its samples. A populated cache
    /// entry short-circuits the whole request unless forced: no fetch, no
    /// write. Network failures are fatal here; the caller decides what to
    /// tell the user.
    pub async fn scrape_problem(
        &self,
        contest: &str,
        problem: &str,
        force: bool,
    ) -> Result<ScrapeOutcome> {
        let site = self.judge.name();
        if self.cache.exists(site, contest, Some(problem))? && !force {
            info!("{}-{} already cached", contest, problem);
            return Ok(ScrapeOutcome::Cached);
        }
        let url = self.judge.problem_url(contest, problem);
        info!("fetching {}", url);
        let page = self.client.get(&url).await?;
        let samples = self.judge.extract(&page.body)?;
        debug!("inputs: {:?}", samples.inputs);
        debug!("outputs: {:?}", samples.outputs);
        self.cache.write(site, contest, problem, &samples)?;
        Ok(ScrapeOutcome::Fetched(samples.len()))
    }

    /// Sweeps a whole contest: discovers the problem links, drops the ones
    /// already cached (unless forced), fetches the rest concurrently and
    /// caches every page that came back well-formed. Per-link failures are
    /// counted, not fatal; filesystem errors still abort.
    pub async fn scrape_contest(&self, contest: &str, force: bool) -> Result<ContestSummary> {
        let site = self.judge.name();
        self.cache.exists(site, contest, None)?;
        let listing = self.client.get(&self.judge.contest_url(contest)?).await?;
        let mut links = self.judge.problem_links(contest, &listing.body)?;
        info!("found {} problems:\n{}", links.len(), links.join("\n"));
        if !force {
            let cached = self.cache.cached_problems(site, contest)?;
            drop_cached_links(&mut links, &cached);
        }
        let requested = links.len();
        let mut succeeded = 0;
        for result in self.client.get_batch(links).await {
            let page = match result {
                Ok(page) => page,
                Err(err) => {
                    warn!("dropping failed fetch: {}", err);
                    continue;
                }
            };
            let problem = judge::problem_id_from_url(&page.url).to_string();
            let samples = match self.judge.extract(&page.body) {
                Ok(samples) => samples,
                Err(err) => {
                    warn!("dropping {}: {}", problem, err);
                    continue;
                }
            };
            debug!("caching {} sample(s) for {}", samples.len(), problem);
            self.cache.write(site, contest, &problem, &samples)?;
            succeeded += 1;
        }
        Ok(ContestSummary {
            requested,
            succeeded,
            failed: requested - succeeded,
        })
    }
}

fn drop_cached_links(links: &mut Vec<String>, cached: &HashSet<String>) {
    links.retain(|link| !cached.contains(judge::problem_id_from_url(link)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Samples, TestCase};
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn cached_problem_skips_fetch_and_write() {
        let dir = tempdir().unwrap();
        let cache = TestCaseCache::new(dir.path());
        cache
            .write(
                "spoj",
                "contest",
                "TEST",
                &Samples::from_cases(vec![TestCase {
                    input: String::from("3\n1 2 3"),
                    output: String::from("6"),
                }]),
            )
            .unwrap();
        let downloader = Downloader::new(Judge::Spoj, cache).unwrap();
        let outcome = downloader
            .scrape_problem("contest", "TEST", false)
            .await
            .unwrap();
        assert_eq!(outcome, ScrapeOutcome::Cached);
        let problem = dir.path().join("spoj/contest/TEST");
        let mut names: Vec<String> = problem
            .read_dir()
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Input0", "Output0"]);
        assert_eq!(
            fs::read_to_string(problem.join("Input0")).unwrap(),
            "3\n1 2 3"
        );
    }

    #[test]
    fn contest_filter_drops_cached_links() {
        let mut links: Vec<String> = ["A", "B", "C"]
            .iter()
            .map(|p| format!("https://codeforces.com/contest/1234/problem/{}", p))
            .collect();
        let cached: HashSet<String> = vec![String::from("B")].into_iter().collect();
        drop_cached_links(&mut links, &cached);
        assert_eq!(
            links,
            vec![
                "https://codeforces.com/contest/1234/problem/A",
                "https://codeforces.com/contest/1234/problem/C",
            ]
        );
    }

    #[test]
    fn contest_filter_keeps_everything_when_nothing_cached() {
        let mut links = vec![String::from("https://codechef.com/api/contests/C/problems/X")];
        drop_cached_links(&mut links, &HashSet::new());
        assert_eq!(links.len(), 1);
    }
}
