// src/progress.rs
/// Progress reporting for a season scrape. Frontends (CLI, tests) implement
/// whichever hooks they care about.
pub trait Progress {
    /// Called once with the number of months about to be fetched.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A month page was fetched and every row built.
    fn item_done(&mut self, _month: u32, _games: usize) {}

    /// A month failed; the season stops right after this call.
    fn item_failed(&mut self, _month: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
