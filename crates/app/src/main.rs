use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portfolio_motion_core::{
    ContactForm, ContactMessage, DividerMotion, FirstVisitLatch, HeroChoreography, HeroSignal,
    HoverIntents, MessageSender, MotionClock, MotionConfig, Navigator, Result, ScrollTracker,
    SlideLedger, ViewportObserver,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { config } => run_replay(config.as_deref()),
        Commands::DumpConfig { output } => run_dump_config(output.as_deref()),
    }
}

/// Replays a scripted interaction session through the motion core and logs
/// every derived flag, end to end: scroll thresholds, the divider/hero
/// reveal chain, a hover activation, the card entrance gate, and a form
/// submission.
fn run_replay(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => MotionConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => MotionConfig::default(),
    };
    tracing::info!(?config_path, "replaying scripted session");

    let tracker = ScrollTracker::new();
    let mut latch = FirstVisitLatch::new();
    let bands = config.scroll;
    let subscription = tracker.subscribe(move |progress| {
        let progress = *progress;
        let style = bands.style_at(progress);
        tracing::info!(
            progress,
            dimmed = style.dimmed,
            blurred = style.blurred,
            divider_bright = style.divider_bright,
            "nav style updated"
        );
    })?;

    for progress in [0.0, 0.01, 0.05, 0.07, 0.2] {
        let progress = tracker.publish_progress(progress)?;
        latch.observe(progress);
    }
    subscription.cancel();

    let mut divider = DividerMotion::begin(latch.is_first_visit());
    tracing::info!(style = ?divider.style(), "divider animation begins");

    let mut hero = HeroChoreography::new();
    if divider.complete() {
        hero.signal(HeroSignal::DividerSettled);
    }
    hero.signal(HeroSignal::PanelSettled);
    hero.signal(HeroSignal::WaveTextFinished);
    hero.signal(HeroSignal::IntroCopyFinished);
    tracing::info!(phase = ?hero.phase(), "hero choreography settled");

    let mut clock = MotionClock::new();
    let mut hover = HoverIntents::with_dwell(config.hover.dwell());
    let mut navigator = TracingNavigator;
    hover.pointer_enter(0, &clock);
    clock.advance(config.hover.dwell());
    for item in hover.tick(&clock) {
        navigator.center_item(item)?;
    }

    let observer = ViewportObserver::new();
    observer.observe("card-4", config.viewport)?;
    observer.update_fraction("card-4", 0.25)?;
    let mut ledger = SlideLedger::new();
    ledger.mark_shown(1);
    tracing::info!(
        animate = ledger.may_animate(1, observer.is_visible("card-4")),
        "card entrance gate evaluated"
    );

    let mut form = ContactForm::new();
    form.set_name("John Doe");
    form.set_email("example@gmail.com");
    form.set_message("Hello from the replay harness.");
    let notice = form.submit(&mut TracingSender)?;
    tracing::info!(?notice, "contact form submitted");

    Ok(())
}

fn run_dump_config(output: Option<&std::path::Path>) -> Result<()> {
    let json = MotionConfig::default().to_json_string()?;
    match output {
        Some(path) => {
            tracing::info!(?path, "writing default configuration");
            fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Routing seam backed by nothing but the log; the replay harness only
/// cares that the requests come out in the right order.
struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn scroll_to_section(&mut self, section: &str, duration_ms: u64) -> Result<()> {
        tracing::info!(section, duration_ms, "smooth scroll requested");
        Ok(())
    }

    fn open_page(&mut self, path: &str) -> Result<()> {
        tracing::info!(path, "page transition requested");
        Ok(())
    }

    fn center_item(&mut self, item: u32) -> Result<()> {
        tracing::info!(item, "centering hovered item");
        Ok(())
    }
}

/// Fire-and-forget sender stand-in for the mail service.
struct TracingSender;

impl MessageSender for TracingSender {
    fn send(&mut self, message: &ContactMessage) -> Result<()> {
        tracing::info!(name = %message.name, "sending contact message");
        Ok(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Choreography harness for the portfolio site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a scripted interaction session through the motion core.
    Replay {
        /// Optional configuration file overriding the site defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print or write the default configuration as JSON.
    DumpConfig {
        /// Output path; prints to stdout when omitted.
        output: Option<PathBuf>,
    },
}
