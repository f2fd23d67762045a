use calc_console::app::{self, Flow, HELP};
use calc_console::ui::MemoryPage;
use calc_console::{ApiClient, Config, Controller, Store};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!(api = %config.api_url, state = %config.state_path.display(), "starting calculator console");

    let store = Store::open(&config.state_path).await;
    let mut controller = Controller::new(ApiClient::new(&config.api_url), store);
    let mut page = MemoryPage::full();

    controller.load_page(&mut page).await;
    flush(&mut page);
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let action = match app::parse_action(&line) {
            Ok(action) => action,
            Err(err) => {
                eprintln!("{err}\n{HELP}");
                continue;
            }
        };

        let flow = app::dispatch(&mut controller, &mut page, action).await;
        flush(&mut page);
        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => eprintln!("error: {err}"),
        }
    }

    info!("bye");
    Ok(())
}

fn flush(page: &mut MemoryPage) {
    for event in page.drain_events() {
        println!("{event}");
    }
}
