/// Interactive console demo driving a Session.
///
/// Everything is in-memory, so this is a REPL over one session rather than a
/// command-per-invocation client.
use crate::schedule::event_schedule;
use crate::session::Session;
use crate::types::Interest;
use crate::view::ActiveView;
use colored::*;
use std::io::{BufRead, Write};

pub fn run(mut session: Session) -> anyhow::Result<()> {
    print_banner(&session);

    let stdin = std::io::stdin();
    loop {
        print!("{} ", ">".bright_cyan().bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "help" => print_usage(),
            "profile" => show_profile(&mut session),
            "schedule" => show_schedule(&mut session),
            "attendees" => show_attendees(&mut session),
            "connections" => show_connections(&mut session),
            "request" | "accept" | "decline" if rest.is_empty() => {
                eprintln!("{}", format!("Usage: {} <id>", command).yellow());
            }
            "request" => session.request_card(rest),
            "accept" => session.accept_request(rest),
            "decline" => session.decline_request(rest),
            "chat" => open_channel(&mut session, rest),
            "say" => {
                if !session.post_channel_message(rest) {
                    eprintln!("{}", "Nothing sent: select a channel and write a non-empty message.".yellow());
                }
            }
            "msg" if rest.is_empty() => {
                eprintln!("{}", "Usage: msg <id>".yellow());
            }
            "msg" => {
                if session.start_direct_chat(rest).is_none() {
                    eprintln!("{}", format!("No attendee with id {}", rest).yellow());
                } else {
                    show_direct_chat(&session);
                }
            }
            "send" => {
                if !session.send_direct_message(rest) {
                    eprintln!("{}", "Nothing sent: open a chat with `msg <id>` and write a non-empty message.".yellow());
                } else {
                    show_direct_chat(&session);
                }
            }
            "qr" => match session.qr_payload() {
                Ok(payload) => println!("{}", payload),
                Err(e) => eprintln!("{} {}", "✗".red().bold(), e),
            },
            "scan" => session.handle_scan_success(rest),
            "scanfail" => session.handle_scan_error(rest),
            "quit" | "exit" => break,
            _ => {
                eprintln!("{} Unknown command: {}", "✗".red().bold(), command.red());
                print_usage();
            }
        }

        if let Some(note) = session.take_notification() {
            println!("{} {}", "◆".green(), note.green());
        }
    }

    Ok(())
}

fn print_banner(session: &Session) {
    println!("{}", "⚡ EventLink".bright_cyan().bold());
    println!(
        "Signed in as {} ({} badge). Type {} for commands.",
        session.me().name.bright_white().bold(),
        session.badge().to_string().cyan(),
        "help".cyan()
    );
}

fn print_usage() {
    println!("{}", "Commands:".bright_white().bold());
    println!("  {}                     Show your profile, badge and QR card", "profile".cyan());
    println!("  {}                    Show the event schedule", "schedule".cyan());
    println!("  {}                   Who is checked in, with card status", "attendees".cyan());
    println!("  {}                 Pending requests and connections", "connections".cyan());
    println!("  {} <id>                Request an attendee's contact card", "request".cyan());
    println!("  {} <id>                 Accept a pending contact request", "accept".cyan());
    println!("  {} <id>                Decline a pending contact request", "decline".cyan());
    println!("  {} <topic>                Open an interest channel", "chat".cyan());
    println!("  {} <text>                  Post into the open channel", "say".cyan());
    println!("  {} <id>                    Open a direct chat", "msg".cyan());
    println!("  {} <text>                 Send into the open direct chat", "send".cyan());
    println!("  {}                          Print your QR payload", "qr".cyan());
    println!("  {} <payload>              Simulate a successful scan", "scan".cyan());
    println!("  {} <error>            Simulate a failed scan", "scanfail".cyan());
    println!("  {}", "quit".cyan());
}

fn show_profile(session: &mut Session) {
    session.navigate(ActiveView::Profile);
    println!("{}", session.view_title().bright_white().bold());
    let me = session.me();
    println!(
        "  {} — {}, {}",
        me.name.bright_white(),
        me.title,
        me.company
    );
    let topics: Vec<String> = me.interests.iter().map(|i| i.to_string()).collect();
    println!("  Interests: {}", topics.join(", "));
    println!(
        "  Badge: {} ({} events attended)",
        session.badge().to_string().cyan(),
        me.events_attended
    );
    println!("  Connections: {}", session.ledger().connection_count());
    if let Some(card) = &me.contact_card {
        for (channel, url) in [
            ("linkedin", &card.linkedin),
            ("twitter", &card.twitter),
            ("github", &card.github),
            ("website", &card.website),
        ] {
            if let Some(url) = url {
                println!("  {}: {}", channel, url);
            }
        }
    }
}

fn show_schedule(session: &mut Session) {
    session.navigate(ActiveView::Schedule);
    println!("{}", session.view_title().bright_white().bold());
    for event in event_schedule() {
        println!(
            "  {} - {}  {} — {} ({})",
            event.time,
            event.end_time,
            event.title.bright_white(),
            event.speaker,
            event.location
        );
    }
}

fn show_attendees(session: &mut Session) {
    session.navigate(ActiveView::CheckedIn);
    println!("{}", session.view_title().bright_white().bold());
    let my_id = session.me().id.clone();
    for attendee in session.directory().checked_in(&my_id) {
        let button = session.ledger().card_button(&attendee.id);
        println!(
            "  {}  {} — {}, {}  [{}]",
            attendee.id.cyan(),
            attendee.name.bright_white(),
            attendee.title,
            attendee.company,
            button.label()
        );
    }
}

fn show_connections(session: &mut Session) {
    session.navigate(ActiveView::Connections);
    println!("{}", session.view_title().bright_white().bold());
    let pending: Vec<String> = session
        .ledger()
        .incoming_requests()
        .iter()
        .map(|id| format!("{} ({})", session.directory().name_of(id), id))
        .collect();
    if pending.is_empty() {
        println!("  No pending requests.");
    } else {
        println!("  Pending ({}):", pending.len());
        for p in pending {
            println!("    {}", p.yellow());
        }
    }
    let connected: Vec<String> = session
        .ledger()
        .connections()
        .iter()
        .map(|id| format!("{} ({})", session.directory().name_of(id), id))
        .collect();
    if connected.is_empty() {
        println!("  No connections yet.");
    } else {
        println!("  Connected ({}):", connected.len());
        for c in connected {
            println!("    {}", c.green());
        }
    }
}

fn open_channel(session: &mut Session, topic: &str) {
    let interest = match topic.parse::<Interest>() {
        Ok(i) => i,
        Err(e) => {
            let topics: Vec<&str> = Interest::ALL.iter().map(|i| i.as_str()).collect();
            eprintln!("{} {} (topics: {})", "✗".red().bold(), e, topics.join(", "));
            return;
        }
    };
    session.open_interest(interest);
    println!("{}", session.view_title().bright_white().bold());
    let my_id = session.me().id.clone();
    let roster = session.directory().by_interest(interest, &my_id);
    let names: Vec<&str> = roster.iter().map(|a| a.name.as_str()).collect();
    println!("  Attendees: {}", names.join(", "));
    for msg in session.channels().messages(interest) {
        println!(
            "  [{}] {}: {}",
            msg.timestamp.dimmed(),
            msg.author.name.bright_white(),
            msg.text
        );
    }
}

fn show_direct_chat(session: &Session) {
    println!("{}", session.view_title().bright_white().bold());
    if let Some(chat) = session.router().active_chat().and_then(|id| session.chats().get(id)) {
        for msg in &chat.messages {
            println!(
                "  [{}] {}: {}",
                msg.timestamp.dimmed(),
                msg.author.name.bright_white(),
                msg.text
            );
        }
    }
}
