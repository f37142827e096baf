//! Card Advisor terminal front end
//!
//! Line-oriented driver for the widget controller. Selector commands keep
//! working while a message is being answered.

use card_advisor::client::{
    AssistantClient, ChatReply, ClientError, HttpAssistantClient, LoggingClient,
};
use card_advisor::config::{ClientConfig, LogFormat};
use card_advisor::controller::{Refresh, UiEvent, WidgetController};
use card_advisor::render::RenderedBlock;
use card_advisor::selector::{
    CardListView, PanelChange, SelectionView, SelectorAction, NO_MATCHES_TEXT, PLACEHOLDER_TEXT,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  /cards [query]  open the card list, optionally filtered
  /pick <name>    select or unselect a card
  /drop <name>    remove a selected card
  /panel          show or hide the card list
  /close          close the card list
  /quit           exit
Anything else is sent to the assistant.";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Cards(&'a str),
    Pick(&'a str),
    Drop(&'a str),
    Panel,
    Close,
    Help,
    Quit,
    Message(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    let (head, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(h, r)| (h, r.trim()));
    match head {
        "/cards" => Command::Cards(rest),
        "/pick" => Command::Pick(rest),
        "/drop" => Command::Drop(rest),
        "/panel" => Command::Panel,
        "/close" => Command::Close,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Message(line),
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "card_advisor=info".into());

    let (json, pretty) = match format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Pretty => (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

fn print_block(block: &RenderedBlock) {
    println!("\n{}:\n{}\n", block.header, block.text);
}

fn print_selection(widget: &WidgetController) {
    match widget.selector().selection_view() {
        SelectionView::Placeholder => println!("Cards: {PLACEHOLDER_TEXT}"),
        SelectionView::Tags(tags) => {
            let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
            println!("Cards: {}", names.join(", "));
        }
    }
}

fn print_card_list(widget: &WidgetController) {
    if !widget.selector().is_panel_open() {
        return;
    }
    match widget.selector().list_view() {
        CardListView::NoMatches => println!("  {NO_MATCHES_TEXT}"),
        view => {
            for item in view.items() {
                let mark = if item.selected { item.check_mark() } else { " " };
                println!("  [{mark}] {:<30} {}", item.card.name, item.card.meta());
            }
        }
    }
}

fn redraw(widget: &WidgetController, refresh: Refresh) {
    match refresh {
        Refresh::Nothing => {}
        Refresh::Panel(PanelChange::Closed) => println!("(card list closed)"),
        Refresh::Panel(_) | Refresh::CardList => print_card_list(widget),
        Refresh::Selector => {
            print_selection(widget);
            print_card_list(widget);
        }
    }
}

fn print_new_blocks(widget: &WidgetController, count: usize) {
    let blocks = widget.transcript().blocks();
    for block in blocks.iter().skip(blocks.len().saturating_sub(count)) {
        print_block(block);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    init_tracing(config.log_format);

    let http = HttpAssistantClient::new(&config)?;
    tracing::info!(endpoint = %http.endpoint(), "Using assistant endpoint");
    if let Err(e) = http.health_check().await {
        tracing::warn!(error = %e, "Assistant is not reachable yet");
    }
    let client: Arc<dyn AssistantClient> = Arc::new(LoggingClient::new(Arc::new(http)));

    let mut widget = WidgetController::default();
    if let Some(welcome) = widget.transcript().welcome() {
        println!("{welcome}\n\n{HELP}\n");
    }
    print_selection(&widget);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: Option<JoinHandle<Result<ChatReply, ClientError>>> = None;

    loop {
        tokio::select! {
            joined = async {
                match in_flight.as_mut() {
                    Some(handle) => handle.await,
                    None => std::future::pending().await,
                }
            } => {
                in_flight = None;
                let result = joined.unwrap_or_else(|e| {
                    Err(ClientError::network(format!("Request task failed: {e}")))
                });
                match widget.finish(result) {
                    Ok((_, scrolls)) => print_new_blocks(&widget, scrolls.len()),
                    Err(e) => tracing::error!(error = %e, "Could not record reply"),
                }
            }

            line = lines.next_line() => {
                let Some(line) = line? else { break };

                let refresh = match parse_command(&line) {
                    Command::Quit => break,
                    Command::Help => {
                        println!("{HELP}");
                        Refresh::Nothing
                    }
                    Command::Cards(query) => {
                        if !widget.selector().is_panel_open() {
                            widget.handle(UiEvent::SelectorClicked);
                        }
                        widget.handle(UiEvent::SearchInput(query.to_string()))
                    }
                    Command::Pick(name) => {
                        widget.handle(UiEvent::Selector(SelectorAction::Toggle(name.to_string())))
                    }
                    Command::Drop(name) => {
                        widget.handle(UiEvent::Selector(SelectorAction::Remove(name.to_string())))
                    }
                    Command::Panel => widget.handle(UiEvent::SelectorClicked),
                    Command::Close => widget.handle(UiEvent::OutsideClick),
                    Command::Message(text) => {
                        if widget.submit_control().disabled {
                            println!("(still waiting for the previous reply)");
                            continue;
                        }
                        widget.handle(UiEvent::InputChanged(text.to_string()));
                        match widget.submit() {
                            Ok((request, scrolls)) => {
                                print_new_blocks(&widget, scrolls.len());
                                let client = Arc::clone(&client);
                                in_flight = Some(tokio::spawn(async move { client.chat(&request).await }));
                                println!("(thinking...)");
                            }
                            Err(e) => println!("{e}"),
                        }
                        Refresh::Nothing
                    }
                };
                redraw(&widget, refresh);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("/cards  axis "), Command::Cards("axis"));
        assert_eq!(parse_command("/cards"), Command::Cards(""));
        assert_eq!(parse_command("/pick HDFC Regalia"), Command::Pick("HDFC Regalia"));
        assert_eq!(parse_command("/drop Axis Ace"), Command::Drop("Axis Ace"));
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(
            parse_command("best card for travel"),
            Command::Message("best card for travel")
        );
    }
}
