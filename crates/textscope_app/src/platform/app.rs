use std::io::{self, BufRead, Write};

use engine_logging::{engine_error, engine_info};
use textscope_core::{update, AppState, Msg};
use textscope_engine::{ensure_output_dir, Settings};

use super::effects::EffectRunner;
use super::prompt::Prompter;
use super::render::render;

/// Runs the interactive menu on stdin/stdout until the user quits.
pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    if let Err(err) = ensure_output_dir(&settings.out_dir) {
        engine_error!("Output directory {:?} unavailable: {}", settings.out_dir, err);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(settings, stdin.lock(), stdout.lock())
}

/// Drives the core state machine from `input`, drawing menus to `output`.
pub fn run_session<R: BufRead, W: Write>(
    settings: Settings,
    input: R,
    output: W,
) -> anyhow::Result<()> {
    let runner = EffectRunner::new(settings)?;
    let mut prompt = Prompter::new(input, output);
    let mut state = AppState::new();
    engine_info!("Session started");

    while !state.is_finished() {
        if state.consume_dirty() {
            prompt.say(render(&state.view()))?;
        }
        let msg = match prompt.ask("Choice: ")? {
            Some(line) => Msg::Input(line),
            None => Msg::EndOfInput,
        };

        let (next, effects) = update(state, msg);
        state = next;
        for effect in effects {
            runner.run(effect, &mut prompt)?;
        }
    }

    engine_info!("Session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use textscope_engine::Settings;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::run_session;

    fn session(settings: Settings, script: &str) -> String {
        let mut output = Vec::new();
        run_session(settings, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn settings_in(temp: &TempDir) -> Settings {
        let out_dir = temp.path().join("out");
        fs::create_dir(&out_dir).unwrap();
        Settings {
            default_file: temp.path().join("input.txt"),
            base_dir: temp.path().join("data"),
            out_dir,
            ..Settings::default()
        }
    }

    #[test]
    fn single_file_session_writes_partition_and_slices() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        fs::write(&settings.default_file, "hello world\n42 99\nhello there\n").unwrap();
        let out_dir = settings.out_dir.clone();

        let transcript = session(settings, "a\n\nhello\n2\nq\n");

        assert!(transcript.contains("Lines: 3"));
        assert!(transcript.contains("Words: 4"));
        assert!(transcript.contains("Average word length: 5"));
        assert!(transcript.contains("File analysis complete."));
        assert!(transcript.ends_with("Bye.\n"));

        let read = |name: &str| fs::read_to_string(out_dir.join(name)).unwrap();
        assert_eq!(read("filtered.txt"), "hello world\nhello there\n");
        assert_eq!(read("filtered_not.txt"), "42 99\n");
        assert_eq!(read("head.txt"), "hello world\n42 99\n");
        assert_eq!(read("tail.txt"), "42 99\nhello there\n");
    }

    #[test]
    fn invalid_file_aborts_without_artifacts() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let out_dir = settings.out_dir.clone();

        let transcript = session(settings, "A\nmissing.txt\nQ\n");

        assert!(transcript.contains("Invalid file"));
        assert_eq!(fs::read_dir(out_dir).unwrap().count(), 0);
    }

    #[test]
    fn directory_session_writes_index_report_and_merged() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        fs::create_dir(&settings.base_dir).unwrap();
        fs::write(settings.base_dir.join("a.txt"), "one\ntwo\n").unwrap();
        fs::write(settings.base_dir.join("b.txt"), "three\n").unwrap();
        let out_dir = settings.out_dir.clone();

        let transcript = session(settings, "B\n\nQ\n");

        assert!(transcript.contains("Files: 2 | Merged lines: 3"));
        let index = fs::read_to_string(out_dir.join("index.txt")).unwrap();
        assert_eq!(index.lines().count(), 2);
        let merged = fs::read_to_string(out_dir.join("merged.txt")).unwrap();
        assert_eq!(merged, "one\ntwo\nthree\n");
    }

    #[test]
    fn submenus_and_locks_round_trip() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let lock = settings.out_dir.join("notes.lock");

        let transcript = session(settings.clone(), "E\n1\nnotes\nQ\nQ\n");
        assert!(transcript.contains("===== SecureOps ====="));
        assert!(transcript.contains("Locked: "));
        assert!(lock.is_file());

        let transcript = session(settings, "e\n1\nnotes\n2\nnotes\nq\nq\n");
        assert!(transcript.contains("Lock failed: already locked"));
        assert!(transcript.contains("Unlocked."));
        assert!(!lock.exists());
    }

    #[test]
    fn invalid_choices_and_closed_input_end_cleanly() {
        let temp = TempDir::new().unwrap();
        let transcript = session(settings_in(&temp), "zz\nD\nQ\n");

        assert!(transcript.contains("Invalid choice"));
        assert!(transcript.contains("===== ProcessOps ====="));
        assert_eq!(transcript.matches("===== MENU =====").count(), 3);
        assert!(transcript.ends_with("Bye.\n"));
    }

    #[test]
    fn empty_wiki_article_is_rejected_before_fetching() {
        let temp = TempDir::new().unwrap();
        let transcript = session(settings_in(&temp), "C\n\nQ\n");
        assert!(transcript.contains("Invalid article"));
    }

    fn serve_article(runtime: &tokio::runtime::Runtime, article: &str, html: &str) -> MockServer {
        runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(format!("/wiki/{article}")))
                .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
                .mount(&server)
                .await;
            server
        })
    }

    #[test]
    fn wiki_page_without_paragraphs_writes_nothing() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = serve_article(
            &runtime,
            "Page_vide",
            r#"<html><body><div id="mw-content-text"><p> </p><p></p></div></body></html>"#,
        );
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            wiki_base_url: Some(format!("{}/wiki/", server.uri())),
            ..settings_in(&temp)
        };
        let out_dir = settings.out_dir.clone();

        let transcript = session(settings, "C\nPage_vide\nQ\n");

        assert!(transcript.contains("No paragraph found."));
        assert!(!transcript.contains("Keyword to filter"));
        assert_eq!(fs::read_dir(out_dir).unwrap().count(), 0);
    }

    #[test]
    fn wiki_article_summary_is_written_to_out_dir() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = serve_article(
            &runtime,
            "Portail:Rust",
            r#"<div id="mw-content-text"><p>Rust est rapide.</p><p>Autre sujet.</p></div>"#,
        );
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            wiki_base_url: Some(format!("{}/wiki/", server.uri())),
            ..settings_in(&temp)
        };
        let out_dir = settings.out_dir.clone();

        let transcript = session(settings, "C\nPortail:Rust\nrust\nQ\n");

        assert!(transcript.contains("Wikipedia analysis complete"));
        let summary = fs::read_to_string(out_dir.join("wiki_Portail_Rust.txt")).unwrap();
        assert_eq!(
            summary,
            "Article: Portail:Rust\n\
             Total paragraphs: 2\n\
             Total words: 5\n\
             Average word length: 5\n\
             \n\
             Paragraphs containing 'rust':\n\
             Rust est rapide.\n"
        );
    }
}
