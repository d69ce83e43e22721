use ascii_player::cli::Args;
use ascii_player::config::Config;
use ascii_player::display::TerminalDisplay;
use ascii_player::error::PlayerError;
use ascii_player::playback::{install_ctrlc_handler, CancelToken, SystemClock};
use ascii_player::player::{validate_video_path, Player};
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PlayerError> {
    validate_video_path(&args.video)?;

    let config = Config::load(args.config.as_deref())?;
    let options = args.player_options(&config.player);

    let cancel = CancelToken::new();
    if let Err(e) = install_ctrlc_handler(&cancel) {
        log::warn!("Failed to install Ctrl+C handler: {}", e);
        eprintln!("Warning: Ctrl+C handling unavailable: {}", e);
    }

    let player = Player::open(&args.video, options, &config.ffmpeg)?;
    let mut display = TerminalDisplay::stdout();
    let outcome = player.play(args.start, &mut display, &SystemClock::new(), &cancel)?;

    log::info!(
        "{} after {} frames",
        outcome.status_message(),
        outcome.frames_played()
    );
    Ok(())
}
