use dialoguer::Input;
use farkle::gameplay::Game;
use farkle::players::Player;
use farkle::players::Policy;

/// No flags: prompt for an optional remote peer and a name, then play a
/// two-player game between the scripted bot and the configured player.
fn main() -> anyhow::Result<()> {
    farkle::log();
    let host: String = Input::new()
        .with_prompt("Remote player host ip address (or press ENTER to skip)")
        .allow_empty(true)
        .interact()?;
    let name: String = Input::new()
        .with_prompt("Player name")
        .default(String::from("Player"))
        .interact()?;
    let player = match host.is_empty() {
        true => Player::human(&name),
        false => {
            let port: u16 = Input::new()
                .with_prompt("Remote player port")
                .default(farkle::DEFAULT_PORT)
                .interact()?;
            Player::remote(&name, &host, port)?
        }
    };
    let bot = Player::policy("Bot", Policy::TakeOnes);
    Game::new(vec![bot, player]).play();
    Ok(())
}
