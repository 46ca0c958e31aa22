//! Interactive session: analyze passages line by line, keeping the last result.
//!
//! Every analysis replaces the live result. `:show` redisplays it without a
//! network call and `:clear` drops it.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;
use truthlens_client::InferenceClient;
use truthlens_core::{SessionResultCache, validate_passage};

use crate::display;

pub const HELP: &str = "\
Enter a news passage to analyze it. Commands:
  :image <path>  scan an image for deepfake manipulation
  :show          show the last result again
  :clear         clear the last result
  :help          show this help
  :quit          leave the session
";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand<'a> {
    Analyze(&'a str),
    Image(&'a str),
    Show,
    Clear,
    Help,
    Quit,
    Blank,
    Unknown(&'a str),
}

impl<'a> SessionCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Blank;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Self::Analyze(line);
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "image" if !arg.is_empty() => Self::Image(arg),
            "show" => Self::Show,
            "clear" => Self::Clear,
            "help" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line),
        }
    }
}

/// What to do after handling a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

/// Session state: the client, the credential, and the single-slot cache.
pub struct Session<'a> {
    client: &'a InferenceClient,
    token: Option<&'a str>,
    json: bool,
    cache: SessionResultCache,
}

impl<'a> Session<'a> {
    pub fn new(client: &'a InferenceClient, token: Option<&'a str>, json: bool) -> Self {
        Self {
            client,
            token,
            json,
            cache: SessionResultCache::new(),
        }
    }

    pub async fn handle(&mut self, line: &str) -> anyhow::Result<Step> {
        let command = SessionCommand::parse(line);
        debug!(?command, "session command");

        let output = match command {
            SessionCommand::Quit => return Ok(Step::Quit),
            SessionCommand::Blank => String::new(),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Unknown(raw) => format!("Unknown command: {raw} (try :help)\n"),
            SessionCommand::Show => match self.cache.current() {
                Some(live) => display::render_live(live, self.json)?,
                None => format!("{}\n", display::NO_RESULT),
            },
            SessionCommand::Clear => {
                self.cache.clear();
                format!("Cleared. {}\n", display::NO_RESULT)
            }
            SessionCommand::Analyze(text) => match validate_passage(text) {
                Ok(passage) => {
                    let outcome = self.client.analyze(passage, self.token).await;
                    display::render_live(self.cache.store(outcome), self.json)?
                }
                Err(err) => format!("{err}\n"),
            },
            SessionCommand::Image(path) => match tokio::fs::read(path).await {
                Ok(bytes) => {
                    let outcome = self.client.analyze_image(bytes, self.token).await;
                    display::render_live(self.cache.store(outcome), self.json)?
                }
                Err(err) => format!("could not read {path}: {err}\n"),
            },
        };
        Ok(Step::Print(output))
    }
}

/// Run the session on stdin/stdout until `:quit` or end of input.
pub async fn run(client: &InferenceClient, token: Option<&str>, json: bool) -> anyhow::Result<()> {
    let mut session = Session::new(client, token, json);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(HELP.as_bytes()).await?;
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match session.handle(&line).await? {
            Step::Print(output) => stdout.write_all(output.as_bytes()).await?,
            Step::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use truthlens_client::ClientConfig;
    use truthlens_core::{ErrorKind, VerdictKind};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PASSAGE: &str = "The city council approved the new budget on Tuesday evening.";

    fn client_for(server: &MockServer) -> InferenceClient {
        InferenceClient::new(ClientConfig {
            endpoint: server.uri(),
            text_model: "acme/text-detector".into(),
            image_model: "acme/image-detector".into(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn printed(step: Step) -> String {
        match step {
            Step::Print(out) => out,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(SessionCommand::parse("  "), SessionCommand::Blank);
        assert_eq!(SessionCommand::parse(":show"), SessionCommand::Show);
        assert_eq!(SessionCommand::parse(" :clear "), SessionCommand::Clear);
        assert_eq!(SessionCommand::parse(":q"), SessionCommand::Quit);
        assert_eq!(
            SessionCommand::parse(":image  photos/cat.png"),
            SessionCommand::Image("photos/cat.png")
        );
        assert_eq!(
            SessionCommand::parse(":image"),
            SessionCommand::Unknown(":image")
        );
        assert_eq!(
            SessionCommand::parse(":bogus"),
            SessionCommand::Unknown(":bogus")
        );
        assert_eq!(
            SessionCommand::parse("  Breaking news today  "),
            SessionCommand::Analyze("Breaking news today")
        );
    }

    #[tokio::test]
    async fn show_redisplays_without_another_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/acme/text-detector"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
                {"label": "REAL", "score": 0.8},
                {"label": "FAKE", "score": 0.2}
            ]])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut session = Session::new(&client, Some("hf_test_token"), false);

        let first = printed(session.handle(PASSAGE).await.unwrap());
        assert!(first.contains("Likely authentic"));
        assert_eq!(
            session.cache.outcome().and_then(|o| o.verdict()),
            Some(VerdictKind::Authentic)
        );

        let again = printed(session.handle(":show").await.unwrap());
        assert_eq!(again, first);
    }

    #[tokio::test]
    async fn clear_returns_to_no_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut session = Session::new(&client, Some("hf_test_token"), false);

        session.handle(PASSAGE).await.unwrap();
        assert_eq!(
            session.cache.outcome().and_then(|o| o.error_kind()),
            Some(ErrorKind::ModelWarming)
        );

        let cleared = printed(session.handle(":clear").await.unwrap());
        assert!(cleared.contains(display::NO_RESULT));
        assert!(session.cache.is_empty());

        let shown = printed(session.handle(":show").await.unwrap());
        assert_eq!(shown, format!("{}\n", display::NO_RESULT));
    }

    #[tokio::test]
    async fn short_passage_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut session = Session::new(&client, Some("hf_test_token"), false);

        let out = printed(session.handle("hello").await.unwrap());
        assert!(out.contains("passage too short: 5 characters"));
        assert!(session.cache.is_empty());
    }

    #[tokio::test]
    async fn new_analysis_replaces_live_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"label": "FAKE", "score": 0.9},
                {"label": "REAL", "score": 0.1}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut session = Session::new(&client, Some("hf_test_token"), false);

        session.handle(PASSAGE).await.unwrap();
        assert_eq!(
            session.cache.outcome().and_then(|o| o.error_kind()),
            Some(ErrorKind::Unauthorized)
        );

        session.handle(PASSAGE).await.unwrap();
        let live = session.cache.outcome().unwrap();
        assert_eq!(live.verdict(), Some(VerdictKind::Fake));
        assert_eq!(live.error_kind(), None);
    }

    #[tokio::test]
    async fn unreadable_image_keeps_live_result() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let mut session = Session::new(&client, Some("hf_test_token"), false);

        let out = printed(
            session
                .handle(":image /definitely/not/here.png")
                .await
                .unwrap(),
        );
        assert!(out.starts_with("could not read /definitely/not/here.png"));
        assert!(session.cache.is_empty());
    }

    #[tokio::test]
    async fn quit_stops_the_session() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let mut session = Session::new(&client, None, false);
        assert_eq!(session.handle(":quit").await.unwrap(), Step::Quit);
    }
}
