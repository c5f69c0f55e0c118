use console::style;

use folio::models::{Action, Source, VoiceResponse};

/// Show at most 3 quick actions, matching the original screen.
pub const MAX_ACTIONS_SHOWN: usize = 3;

pub fn answer(response: &VoiceResponse, asked: &str) {
    println!();
    println!("{}", style(format!("You asked: {}", asked)).dim());
    print_markdown(&response.answer_text);
    if let Some(telemetry) = &response.telemetry {
        println!(
            "{}",
            style(format!("answered in {:.0} ms", telemetry.latency_ms)).dim()
        );
    }
    sources(&response.sources);
    actions(&response.actions);
    println!();
}

pub fn error(message: &str) {
    println!("{}", style(message).red());
}

pub fn status(connected: bool) {
    let pill = if connected {
        style("● Connected").green()
    } else {
        style("● Offline").red()
    };
    println!("{}", pill);
}

/// Stand-in for the mobile text-to-speech playback: print the spoken form.
pub fn speak(speak_text: &str) {
    println!("{}", style(speak_text).italic());
}

pub fn help() {
    println!("Commands:");
    println!("/exit - Exit the session");
    println!("/speak - Show the speakable form of the current answer");
    println!("/? - Display this help message");
    println!("1..{} - Resubmit via a quick action", MAX_ACTIONS_SHOWN);
}

fn sources(sources: &[Source]) {
    if sources.is_empty() {
        return;
    }

    println!("{}", style("SOURCES").dim().bold());
    for source in sources {
        println!("  {}", style(&source.title).cyan());
        let mut meta = Vec::new();
        if let Some(publisher) = &source.publisher {
            meta.push(publisher.clone());
        }
        if let Some(published_at) = &source.published_at {
            meta.push(published_at.clone());
        }
        if !meta.is_empty() {
            println!("  {}", style(meta.join(" · ")).dim());
        }
        println!("  {}", style(&source.url).dim().underlined());
    }
}

fn actions(actions: &[Action]) {
    let shown = &actions[..actions.len().min(MAX_ACTIONS_SHOWN)];
    if shown.is_empty() {
        return;
    }

    println!("{}", style("QUICK ACTIONS").dim().bold());
    for (index, action) in shown.iter().enumerate() {
        println!("  [{}] {}", index + 1, action.label);
    }
    println!("{}", style("type a number to follow up").dim());
}

fn print_markdown(content: &str) {
    bat::PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .unwrap();
}
