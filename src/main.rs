#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use ox_client::{
    init_logging, receive_loop, ui, CellIndex, Connection, GameView, UiEvent, DEFAULT_SERVER_ADDR,
};
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Server address to connect to.
    #[arg(long, default_value = DEFAULT_SERVER_ADDR)]
    connect: String,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut view = GameView::new();

    println!("Connecting to {}...", cli.connect);
    let (mut conn, reader) = match Connection::connect(cli.connect.as_str()).await {
        Ok(halves) => halves,
        Err(e) => {
            // Connect failure leaves the client inert: no retry, no loop.
            view.connect_failed();
            eprintln!("Connection error: {}", e);
            return Ok(());
        }
    };
    view.connected();
    println!("Connected.");

    let (events_tx, mut events_rx) = mpsc::channel(16);
    let reader_task = tokio::spawn(receive_loop(reader, events_tx));

    ui::print_view(&view);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            event = events_rx.recv() => match event {
                Some(UiEvent::Snapshot(snapshot)) => {
                    view.apply(&snapshot);
                    ui::print_view(&view);
                }
                Some(UiEvent::Disconnected) | None => {
                    view.disconnected();
                    ui::print_view(&view);
                    break;
                }
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if view.is_over() {
                    if input.eq_ignore_ascii_case("r") {
                        view.restart();
                        ui::print_view(&view);
                    }
                    continue;
                }
                let index = input
                    .parse::<u8>()
                    .ok()
                    .and_then(|i| CellIndex::new(i).ok());
                let Some(index) = index else {
                    println!("Enter a cell index between 0 and 8.");
                    continue;
                };
                match view.local_move(index) {
                    Ok(()) => {
                        conn.send_move(index).await?;
                        ui::print_view(&view);
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    // The read task ends with the connection; dropping the runtime on return
    // tears it down if stdin closed first.
    drop(reader_task);
    Ok(())
}
