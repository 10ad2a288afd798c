use clap::Parser;
use miette::{IntoDiagnostic, Result};
use order_form::application::controller::FormController;
use order_form::application::replay::replay;
use order_form::domain::event::FormEvent;
use order_form::domain::menu::MenuEntry;
use order_form::infrastructure::in_memory::InMemorySurface;
use order_form::interfaces::csv::menu_reader::MenuReader;
use order_form::interfaces::csv::script_reader::ScriptReader;
use order_form::interfaces::csv::summary_writer::SummaryWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input menu CSV file (item,price,quantity)
    menu: PathBuf,

    /// Event script CSV to replay against the form (at_ms,event,item,value)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Emit the settled order snapshot as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = File::open(&cli.menu).into_diagnostic()?;
    let mut menu: Vec<MenuEntry> = Vec::new();
    for entry in MenuReader::new(file).entries() {
        match entry {
            Ok(entry) => menu.push(entry),
            Err(e) => eprintln!("Error reading menu entry: {}", e),
        }
    }

    let mut events: Vec<FormEvent> = Vec::new();
    if let Some(path) = &cli.script {
        let file = File::open(path).into_diagnostic()?;
        for event in ScriptReader::new(file).events() {
            match event {
                Ok(event) => {
                    if let Some(item) = &event.item
                        && !menu.iter().any(|entry| entry.item == *item)
                    {
                        eprintln!("Error reading event: unknown item '{}'", item);
                        continue;
                    }
                    events.push(event);
                }
                Err(e) => eprintln!("Error reading event: {}", e),
            }
        }
    }

    let surface = InMemorySurface::for_menu(&menu);
    let mut controller = FormController::new(menu, surface);
    replay(&mut controller, events).await;

    let snapshot = controller.snapshot();
    if cli.json {
        let json = serde_json::to_string_pretty(&snapshot).into_diagnostic()?;
        println!("{json}");
    } else {
        let stdout = io::stdout();
        let mut writer = SummaryWriter::new(stdout.lock());
        writer.write_snapshot(&snapshot).into_diagnostic()?;
    }

    Ok(())
}
