use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use engine_logging::{engine_info, engine_warn};
use textscope_core::Effect;
use textscope_engine::{
    analyse_directory, analyse_lines, analyse_wiki, compute_stats, parse_slice_len,
    write_artifacts, ArtifactOutcome, CorpusSource, FetchSettings, MatchCase, Settings,
    SingleFileSource, WikiClient,
};

use super::locks;
use super::process;
use super::prompt::Prompter;

/// Executes effects emitted by the core, one blocking operation at a time.
/// Operation failures are printed; only terminal I/O errors propagate.
pub struct EffectRunner {
    settings: Settings,
    runtime: tokio::runtime::Runtime,
}

impl EffectRunner {
    pub fn new(settings: Settings) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { settings, runtime })
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        effect: Effect,
        prompt: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        engine_info!("Running {:?}", effect);
        match effect {
            Effect::AnalyseFile => self.analyse_file(prompt),
            Effect::AnalyseDirectory => self.analyse_directory(prompt),
            Effect::AnalyseWikipedia => self.analyse_wikipedia(prompt),
            Effect::ListProcesses => self.list_processes(prompt),
            Effect::SearchProcesses => self.search_processes(prompt),
            Effect::KillProcess => self.kill_process(prompt),
            Effect::LockFile => self.lock_file(prompt),
            Effect::UnlockFile => self.unlock_file(prompt),
            Effect::ReportInvalidChoice => prompt.say("Invalid choice"),
            Effect::Quit => prompt.say("Bye."),
        }
    }

    fn analyse_file<R: BufRead, W: Write>(&self, prompt: &mut Prompter<R, W>) -> io::Result<()> {
        let Some(answer) = prompt.ask("File path (empty = default): ")? else {
            return Ok(());
        };
        let path = if answer.is_empty() {
            self.settings.default_file.clone()
        } else {
            PathBuf::from(answer)
        };

        let loaded = match SingleFileSource::new(&path).load() {
            Ok(loaded) => loaded,
            Err(err) => {
                engine_warn!("File analysis aborted: {}", err);
                return prompt.say(format!("Invalid file: {err}"));
            }
        };
        let lines = loaded.units;

        prompt.say(format!("Size: {} bytes", loaded.meta.size_bytes))?;
        prompt.say(format!("Modified: {}", loaded.meta.modified_rfc3339()))?;
        prompt.say(format!("Lines: {}", lines.len()))?;
        let stats = compute_stats(&lines);
        if let Some(average) = stats.average_word_length() {
            prompt.say(format!("Words: {}", stats.total_words))?;
            prompt.say(format!("Average word length: {average}"))?;
        }

        let Some(keyword) = prompt.ask("Keyword: ")? else {
            return Ok(());
        };
        let Some(requested) = prompt.ask("Number of lines for head/tail: ")? else {
            return Ok(());
        };

        let analysis = analyse_lines(
            &lines,
            &keyword,
            MatchCase::Sensitive,
            parse_slice_len(&requested),
        );
        let outcomes = write_artifacts(&self.settings.out_dir, &analysis.artifacts());
        report_outcomes(prompt, &outcomes)?;
        prompt.say("File analysis complete.")
    }

    fn analyse_directory<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        let Some(answer) = prompt.ask("Directory (empty = base_dir): ")? else {
            return Ok(());
        };
        let root = if answer.is_empty() {
            self.settings.base_dir.clone()
        } else {
            PathBuf::from(answer)
        };

        let analysis = match analyse_directory(&root, &self.settings.default_ext) {
            Ok(analysis) => analysis,
            Err(err) => {
                engine_warn!("Directory analysis aborted: {}", err);
                return prompt.say(format!("Directory analysis failed: {err}"));
            }
        };

        prompt.say(format!(
            "Files: {} | Merged lines: {}",
            analysis.descriptors.len(),
            analysis.merged.len()
        ))?;
        let outcomes = write_artifacts(&self.settings.out_dir, &analysis.artifacts());
        report_outcomes(prompt, &outcomes)?;
        prompt.say("Directory analysis complete.")
    }

    fn analyse_wikipedia<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        let Some(article) = prompt.ask("Article name (e.g. Go_(langage)): ")? else {
            return Ok(());
        };
        if article.is_empty() {
            return prompt.say("Invalid article");
        }

        let fetched = WikiClient::at(&self.settings.wiki_root(), FetchSettings::default())
            .map(|client| self.runtime.block_on(client.fetch_paragraphs(&article)));
        let paragraphs = match fetched.and_then(|result| result) {
            Ok(paragraphs) => paragraphs,
            Err(err) if err.is_nothing_found() => {
                return prompt.say("No paragraph found.");
            }
            Err(err) => {
                engine_warn!("Wikipedia analysis of {:?} aborted: {}", article, err);
                return prompt.say(format!("Wikipedia error: {err}"));
            }
        };

        let Some(keyword) = prompt.ask("Keyword to filter: ")? else {
            return Ok(());
        };
        let summary = analyse_wiki(&article, &paragraphs, &keyword);
        let outcomes = write_artifacts(&self.settings.out_dir, &[summary.artifact()]);
        report_outcomes(prompt, &outcomes)?;
        if let Some(Ok(path)) = outcomes.first().map(|o| o.result.as_ref()) {
            prompt.say(format!("Wikipedia analysis complete -> {}", path.display()))?;
        }
        Ok(())
    }

    fn list_processes<R: BufRead, W: Write>(&self, prompt: &mut Prompter<R, W>) -> io::Result<()> {
        prompt.say(format!("OS: {}", std::env::consts::OS))?;
        match process::capture_process_table() {
            Ok(table) => {
                for line in process::top_lines(&table, self.settings.process_top_n) {
                    prompt.say(line)?;
                }
                Ok(())
            }
            Err(err) => prompt.say(format!("Process listing failed: {err}")),
        }
    }

    fn search_processes<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        let Some(keyword) = prompt.ask("Keyword: ")? else {
            return Ok(());
        };
        match process::capture_process_table() {
            Ok(table) => {
                for line in process::search_lines(&table, &keyword) {
                    prompt.say(line)?;
                }
                Ok(())
            }
            Err(err) => prompt.say(format!("Process search failed: {err}")),
        }
    }

    fn kill_process<R: BufRead, W: Write>(&self, prompt: &mut Prompter<R, W>) -> io::Result<()> {
        let Some(answer) = prompt.ask("PID to kill: ")? else {
            return Ok(());
        };
        let Some(pid) = process::parse_pid(&answer) else {
            return prompt.say("Invalid PID");
        };

        prompt.say(format!("About to kill process PID {pid}"))?;
        let confirmed = prompt
            .ask("Confirm (yes/no): ")?
            .is_some_and(|reply| reply.eq_ignore_ascii_case("yes"));
        if !confirmed {
            return prompt.say("Cancelled.");
        }

        match process::kill(pid) {
            Ok(()) => {
                engine_info!("Killed process {}", pid);
                prompt.say("Process terminated (if permitted).")
            }
            Err(err) => prompt.say(format!("Kill failed: {err}")),
        }
    }

    fn lock_file<R: BufRead, W: Write>(&self, prompt: &mut Prompter<R, W>) -> io::Result<()> {
        let Some(name) = prompt.ask("File name to lock: ")? else {
            return Ok(());
        };
        match locks::lock(&self.settings.out_dir, &name) {
            Ok(path) => prompt.say(format!("Locked: {}", path.display())),
            Err(err) => prompt.say(format!("Lock failed: {err}")),
        }
    }

    fn unlock_file<R: BufRead, W: Write>(&self, prompt: &mut Prompter<R, W>) -> io::Result<()> {
        let Some(name) = prompt.ask("File name to unlock: ")? else {
            return Ok(());
        };
        match locks::unlock(&self.settings.out_dir, &name) {
            Ok(_) => prompt.say("Unlocked."),
            Err(err) => prompt.say(format!("Unlock failed: {err}")),
        }
    }
}

fn report_outcomes<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    outcomes: &[ArtifactOutcome],
) -> io::Result<()> {
    for outcome in outcomes {
        if let Err(err) = &outcome.result {
            prompt.say(format!("Could not write {}: {err}", outcome.file_name))?;
        }
    }
    Ok(())
}
