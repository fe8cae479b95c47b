//! Campus Connect demo shell
//!
//! A thin line-oriented front end over the application facade, standing
//! in for a presentation layer. All logic lives in the library.

use std::io::{self, BufRead, Write};

use tracing::info;

use campus_connect::{
    catalog::EventCatalog,
    config::Settings,
    models::{Event, Notice, NoticeKind, Registration},
    query::QueryParams,
    storage::LedgerStorage,
    utils::{helpers, logging},
    CampusConnectApp,
};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the command loop.
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", campus_connect::info());

    // Load the event catalog
    let catalog = match &settings.catalog.seed_path {
        Some(path) => EventCatalog::load_from_file(path)?,
        None => EventCatalog::seed(),
    };

    // Load the persisted ledger and assemble the facade
    let storage = LedgerStorage::new(&settings.storage);
    let event_count = catalog.len();
    let mut app = CampusConnectApp::new(catalog, storage);

    let user_id = settings.profile.user_id.clone();
    println!("Campus Connect | {} events | signed in as {}", event_count, user_id);
    println!("Type 'help' for commands.");

    let mut params = QueryParams::default();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "list" => render_events(&app.list_events(&params)),
            "search" => {
                params.search_text = rest.to_string();
                render_events(&app.list_events(&params));
            }
            "category" => match app.parse_query(&params.search_text, rest, &params.sort_key.to_string()) {
                Ok(parsed) => {
                    params = parsed;
                    render_events(&app.list_events(&params));
                }
                Err(e) => println!("{}", e),
            },
            "sort" => match app.parse_query(&params.search_text, &params.category.to_string(), rest) {
                Ok(parsed) => {
                    params = parsed;
                    render_events(&app.list_events(&params));
                }
                Err(e) => println!("{}", e),
            },
            "show" => match app.event(rest) {
                Some(event) => render_event_detail(event, app.registration_for(&user_id, rest)),
                None => println!("No event with id '{}'", rest),
            },
            "register" => match app.register(&user_id, rest) {
                Ok(notice) => print_notice(&notice),
                Err(e) => println!("{}", e),
            },
            "checkin" => print_notice(&app.check_in(&user_id, rest)),
            "mine" => render_my_events(&app, &user_id),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
    }

    info!("Campus Connect shell closed");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list                 show events for the current query");
    println!("  search <text>        search titles, venues and tags");
    println!("  category <name|All>  filter by category");
    println!("  sort <date|popularity|newest>");
    println!("  show <id>            event details and your QR code");
    println!("  register <id>        register for an event");
    println!("  checkin <id>         check in to an event");
    println!("  mine                 your registrations");
    println!("  quit");
}

fn render_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events found. Try adjusting your search or filters.");
        return;
    }

    for event in events {
        println!(
            "[{}] {} | {} {} @ {} | {} | {}/{} participants",
            event.id,
            event.title,
            event.date,
            event.time.format("%H:%M"),
            event.venue,
            event.category,
            event.current_participants,
            event.max_participants,
        );
    }
}

fn render_event_detail(event: &Event, registration: Option<&Registration>) {
    println!("{} ({})", event.title, event.category);
    println!("  {}", event.description);
    println!("  When:  {} at {}", event.date, event.time.format("%H:%M"));
    println!("  Where: {}", event.venue);
    println!("  Who:   {} | {} spots left", event.organizer, event.spots_remaining());
    println!("  Tags:  {}", event.tags.join(", "));

    match registration {
        Some(reg) if reg.checked_in => {
            println!("  You checked in at {}", reg.checked_in_at.map(helpers::format_timestamp).unwrap_or_default());
        }
        Some(reg) => {
            println!("  Registered {}. QR code: {}", helpers::format_timestamp(reg.registered_at), reg.qr_code);
        }
        None if event.is_full() => println!("  Event is full."),
        None => println!("  You are not registered."),
    }
}

fn render_my_events(app: &CampusConnectApp, user_id: &str) {
    let mine = app.my_events(user_id);
    if mine.is_empty() {
        println!("You have no registered events.");
        return;
    }

    println!("You have {} registered event(s):", mine.len());
    for (registration, event) in mine {
        let title = event.map(|e| e.title.as_str()).unwrap_or("(event no longer listed)");
        let status = if registration.checked_in { "checked in" } else { "registered" };
        println!("  [{}] {} | {}", registration.event_id, title, status);
    }
}

fn print_notice(notice: &Notice) {
    let tag = match notice.kind {
        NoticeKind::Success => "OK",
        NoticeKind::Info => "INFO",
        NoticeKind::Warning => "WARN",
    };
    println!("[{}] {}: {}", tag, notice.title, notice.body);
}
