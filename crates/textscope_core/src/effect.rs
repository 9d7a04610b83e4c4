/// Work the app shell performs after a transition. Every variant is one
/// independent operation; none carries state into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    AnalyseFile,
    AnalyseDirectory,
    AnalyseWikipedia,
    ListProcesses,
    SearchProcesses,
    KillProcess,
    LockFile,
    UnlockFile,
    ReportInvalidChoice,
    Quit,
}
