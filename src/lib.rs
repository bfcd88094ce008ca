pub mod dice;
pub mod gameplay;
pub mod players;
pub mod wire;

pub type Points = u32;
pub type Face = u8;

/// number of sides on each die
pub const FACES: Face = 6;
/// number of dice shaken at the top of every turn
pub const DICE: usize = 6;
/// cumulative score a player must exceed to trigger the end game
pub const GOAL: Points = 10_000;
/// bytes consumed per blocking receive on a remote connection
pub const WIRE_BUFFER: usize = 1024;
/// port a remote player peer listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 6464;
/// pause after each score award, skipped in quick mode
pub const PACE: std::time::Duration = std::time::Duration::from_millis(200);

/// Initialize terminal logging for game narration.
/// INFO carries the turn-by-turn narration, WARN carries protocol anomalies.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
