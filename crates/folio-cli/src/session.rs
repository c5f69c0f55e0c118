use anyhow::Result;
use cliclack::{input, spinner};
use console::style;

use folio::actions::resolve_query;
use folio::client::AssistantClient;
use folio::models::VoiceResponse;

use crate::render;

/// Hard cap enforced by the input surface, not by the exchange itself.
pub const MAX_QUERY_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ConnectionStatus {
    Checking,
    Connected,
    Offline,
}

#[derive(Debug, PartialEq)]
enum Input {
    Exit,
    Help,
    Speak,
    /// Index into the currently displayed quick actions.
    FollowUp(usize),
    Query(String),
    /// Re-prompt with a hint; nothing is submitted.
    Invalid(&'static str),
}

/// Ephemeral per-session screen state: connection status, the current
/// response, and the last query sent. Reset semantics follow the original
/// screen - each new query replaces the response wholesale.
pub struct Session {
    client: AssistantClient,
    max_speak_words: u32,
    status: ConnectionStatus,
    current: Option<VoiceResponse>,
}

impl Session {
    pub fn new(client: AssistantClient, max_speak_words: u32) -> Self {
        Session {
            client,
            max_speak_words,
            status: ConnectionStatus::Checking,
            current: None,
        }
    }

    pub async fn start(&mut self) -> Result<()> {
        println!(
            "{} {}",
            style("Portfolio Voice").bold(),
            style("- type \"/exit\" to end the session, \"/?\" for help").dim()
        );
        self.check_connection().await;

        loop {
            let text: String = input("Ask about your portfolio:")
                .placeholder("Type your question...")
                .interact()?;

            match parse_input(&text, self.action_count()) {
                Input::Exit => break,
                Input::Help => render::help(),
                Input::Speak => match &self.current {
                    Some(response) => render::speak(&response.speak_text),
                    None => println!("{}", style("Nothing to speak yet.").dim()),
                },
                Input::FollowUp(index) => {
                    // The only chaining behavior: a quick action becomes the
                    // next query. Actions were already bounds-checked.
                    let action = &self.current.as_ref().unwrap().actions[index];
                    let query = resolve_query(action);
                    println!("{}", style(format!("Following up: {}", query)).dim());
                    self.ask(&query).await;
                }
                Input::Query(query) => self.ask(&query).await,
                Input::Invalid(hint) => println!("{}", style(hint).yellow()),
            }
        }
        Ok(())
    }

    /// Headless mode: one question, rendered, then exit.
    pub async fn ask_once(&mut self, query: &str) -> Result<()> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            anyhow::bail!("query must not be empty");
        }
        self.ask(trimmed).await;
        Ok(())
    }

    async fn ask(&mut self, query: &str) {
        let account_id = self.client.config().account_id;

        // Input stays blocked until this call settles; the exchange itself
        // places no limit on concurrent calls.
        let spin = spinner();
        spin.start("Thinking...");

        match self
            .client
            .respond_as(query, account_id, self.max_speak_words)
            .await
        {
            Ok(response) => {
                spin.stop("");
                self.set_status(ConnectionStatus::Connected);
                render::answer(&response, query);
                self.current = Some(response);
            }
            Err(e) => {
                spin.stop("");
                // Any submit failure degrades connectivity, same as a failed
                // probe, whatever the error kind.
                self.set_status(ConnectionStatus::Offline);
                render::error(&e.to_string());
            }
        }
    }

    async fn check_connection(&mut self) {
        let spin = spinner();
        spin.start("Checking connection...");
        let healthy = self.client.check_health().await;
        spin.stop("");
        self.set_status(if healthy {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Offline
        });
    }

    fn set_status(&mut self, status: ConnectionStatus) {
        if self.status != status {
            self.status = status;
            render::status(match status {
                ConnectionStatus::Connected => true,
                _ => false,
            });
        }
    }

    fn action_count(&self) -> usize {
        self.current
            .as_ref()
            .map(|r| r.actions.len().min(render::MAX_ACTIONS_SHOWN))
            .unwrap_or(0)
    }
}

fn parse_input(text: &str, action_count: usize) -> Input {
    let text = text.trim();

    if text.eq_ignore_ascii_case("/exit") || text.eq_ignore_ascii_case("/quit") {
        return Input::Exit;
    }
    if text == "/?" {
        return Input::Help;
    }
    if text.eq_ignore_ascii_case("/speak") {
        return Input::Speak;
    }

    if let Ok(number) = text.parse::<usize>() {
        if (1..=action_count).contains(&number) {
            return Input::FollowUp(number - 1);
        }
        return Input::Invalid("No quick action with that number.");
    }

    if text.is_empty() {
        return Input::Invalid("Type a question about your portfolio.");
    }
    if text.chars().count() > MAX_QUERY_CHARS {
        return Input::Invalid("Questions are capped at 500 characters.");
    }

    Input::Query(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("/exit", 0), Input::Exit);
        assert_eq!(parse_input("/QUIT", 0), Input::Exit);
        assert_eq!(parse_input("/?", 0), Input::Help);
        assert_eq!(parse_input("/speak", 0), Input::Speak);
    }

    #[test]
    fn test_parse_query_trims_whitespace() {
        assert_eq!(
            parse_input("  how am I doing?  ", 0),
            Input::Query("how am I doing?".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_oversized_queries() {
        assert!(matches!(parse_input("   ", 0), Input::Invalid(_)));

        let oversized = "x".repeat(MAX_QUERY_CHARS + 1);
        assert!(matches!(parse_input(&oversized, 0), Input::Invalid(_)));

        let at_cap = "x".repeat(MAX_QUERY_CHARS);
        assert_eq!(parse_input(&at_cap, 0), Input::Query(at_cap));
    }

    #[test]
    fn test_parse_follow_up_selection() {
        assert_eq!(parse_input("1", 3), Input::FollowUp(0));
        assert_eq!(parse_input("3", 3), Input::FollowUp(2));
        assert!(matches!(parse_input("4", 3), Input::Invalid(_)));
        assert!(matches!(parse_input("1", 0), Input::Invalid(_)));
    }
}
