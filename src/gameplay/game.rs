use super::Cup;
use super::Event;
use super::Segment;
use super::Shake;
use super::Transcript;
use crate::players::Player;
use crate::Points;
use colored::Colorize;

/// Owns the table: the players in seating order, their cumulative scores,
/// the transcript, and the dice cup. Scores only move through ::award and
/// only ever increase. One Game is one table; concurrent games each own
/// their own state.
pub struct Game {
    players: Vec<Player>,
    scores: Vec<Points>,
    transcript: Transcript,
    cup: Box<dyn Shake>,
    goal: Points,
    quick: bool,
}

impl Game {
    pub fn new(players: Vec<Player>) -> Self {
        let scores = players.iter().map(|_| 0).collect();
        Self {
            players,
            scores,
            transcript: Transcript::default(),
            cup: Box::new(Cup::new()),
            goal: crate::GOAL,
            quick: false,
        }
    }

    /// swap in a different dice source
    pub fn shaken(mut self, cup: impl Shake + 'static) -> Self {
        self.cup = Box::new(cup);
        self
    }
    /// play to a different score threshold
    pub fn to(mut self, goal: Points) -> Self {
        self.goal = goal;
        self
    }
    /// no console narration, no pacing sleeps. transcript and remote
    /// connections still receive every line.
    pub fn quickly(mut self) -> Self {
        self.quick = true;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
    pub fn scores(&self) -> impl Iterator<Item = (&str, Points)> {
        self.players
            .iter()
            .map(|p| p.name())
            .zip(self.scores.iter().copied())
    }

    /// Round-robin turns until the end-game countdown expires: the countdown
    /// starts the moment any player's total exceeds the goal and ticks once
    /// per turn from then on, so every player gets exactly one more turn
    /// after the threshold is first crossed. Returns the final standings,
    /// best first, ties in seating order.
    pub fn play(&mut self) -> Vec<(String, Points)> {
        let mut endgame = 0;
        let mut turns = 0;
        loop {
            for i in 0..self.players.len() {
                let points = self.turn(i);
                self.award(i, points);
                turns += 1;
                if self.scores[i] > self.goal || endgame > 0 {
                    endgame += 1;
                }
                if endgame >= self.players.len() {
                    return self.conclude(turns);
                }
            }
        }
    }

    /// One full turn for the player in seat i. Farkle wipes the whole turn
    /// accumulator, including segments already kept this turn; a bank or a
    /// foul commits the full current roll's score on top of the accumulator.
    fn turn(&mut self, i: usize) -> Points {
        let player = self.players[i].name().to_string();
        let mut rolled = self.cup.shake(crate::DICE);
        let mut kitty = 0;
        loop {
            self.emit(Event::Rolled {
                player: player.clone(),
                roll: rolled.clone(),
            });
            if rolled.score() == 0 {
                self.emit(Event::Farkled {
                    player: player.clone(),
                });
                return 0;
            }
            let answer = self.players[i].choose(&rolled);
            match super::resolve(&rolled, answer) {
                Segment::Bank => {
                    self.emit(Event::Banked {
                        player: player.clone(),
                        keep: rolled.trim(),
                        points: rolled.score(),
                    });
                    return kitty + rolled.score();
                }
                Segment::Foul(response) => {
                    log::warn!("invalid move from {}: {}", player, response);
                    self.emit(Event::Foul {
                        player: player.clone(),
                        response,
                    });
                    self.emit(Event::Banked {
                        player: player.clone(),
                        keep: rolled.trim(),
                        points: rolled.score(),
                    });
                    return kitty + rolled.score();
                }
                Segment::Continue(keep, reroll) => {
                    self.emit(Event::Kept {
                        player: player.clone(),
                        keep: keep.clone(),
                        points: keep.score(),
                    });
                    kitty += keep.score();
                    rolled = self.cup.shake(reroll);
                }
            }
        }
    }

    fn award(&mut self, i: usize, points: Points) {
        let player = self.players[i].name().to_string();
        self.scores[i] += points;
        self.emit(Event::Awarded {
            player,
            points,
            total: self.scores[i],
        });
        if !self.quick {
            std::thread::sleep(crate::PACE);
        }
    }

    fn conclude(&mut self, turns: usize) -> Vec<(String, Points)> {
        self.emit(Event::Over {
            turns,
            rounds: turns / self.players.len(),
        });
        let mut standings = self
            .players
            .iter()
            .map(|p| p.name().to_string())
            .zip(self.scores.iter().copied())
            .collect::<Vec<(String, Points)>>();
        standings.sort_by(|a, b| b.1.cmp(&a.1)); // stable, ties keep seating order
        for (player, points) in standings.clone() {
            self.emit(Event::Ranked { player, points });
        }
        standings
    }

    /// Fans one event out to every sink in the same order: console (unless
    /// quick), transcript, each remote player's connection. A dead remote
    /// sink is logged and skipped, never fatal.
    fn emit(&mut self, event: Event) {
        let line = event.to_string();
        if !self.quick {
            match event {
                Event::Awarded { .. } | Event::Ranked { .. } => {
                    log::info!("{}", line.bright_green())
                }
                _ => log::info!("{}", line),
            }
        }
        self.transcript.record(&line);
        for player in self.players.iter_mut() {
            let name = player.name().to_string();
            if let Some(conn) = player.outbox() {
                if let Err(e) = conn.send(&line) {
                    log::warn!("dropped narration to {}: {:#}", name, e);
                }
            }
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (name, points) in self.scores() {
            writeln!(f, "{:<16}{:>8}", name, points)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Roll;
    use crate::players::Policy;
    use std::collections::VecDeque;

    /// dice cup that serves a scripted sequence of rolls
    struct Stacked(VecDeque<Roll>);

    impl Stacked {
        fn new(rolls: Vec<Vec<crate::Face>>) -> Self {
            Self(rolls.into_iter().map(Roll::from).collect())
        }
    }

    impl Shake for Stacked {
        fn shake(&mut self, n: usize) -> Roll {
            let roll = self.0.pop_front().expect("script covers every shake");
            assert!(roll.size() == n);
            roll
        }
    }

    fn turn_points(game: &mut Game) -> Points {
        let points = game.turn(0);
        game.award(0, points);
        points
    }

    #[test]
    fn keep_then_bank_accumulates() {
        let players = vec![Player::scripted(
            "Ann",
            vec![Some(Roll::from(vec![1, 1, 1])), None],
        )];
        let cup = Stacked::new(vec![vec![1, 1, 1, 2, 3, 4], vec![5, 5, 5]]);
        let mut game = Game::new(players).shaken(cup).quickly();
        assert!(turn_points(&mut game) == 1500);
        assert!(game.scores[0] == 1500);
    }

    #[test]
    fn farkle_wipes_the_whole_turn() {
        let players = vec![Player::scripted(
            "Ann",
            vec![Some(Roll::from(vec![1, 1, 1]))],
        )];
        let cup = Stacked::new(vec![vec![1, 1, 1, 2, 3, 4], vec![2, 3, 4]]);
        let mut game = Game::new(players).shaken(cup).quickly();
        assert!(turn_points(&mut game) == 0);
        assert!(game.scores[0] == 0);
    }

    #[test]
    fn foul_banks_the_current_roll() {
        // the keep is not a subset of the offer
        let players = vec![Player::scripted(
            "Ann",
            vec![Some(Roll::from(vec![5, 5, 5]))],
        )];
        let cup = Stacked::new(vec![vec![1, 1, 5, 2, 3, 4]]);
        let mut game = Game::new(players).shaken(cup).quickly();
        assert!(turn_points(&mut game) == 250);
    }

    #[test]
    fn hot_dice_shake_the_full_pool() {
        let players = vec![Player::scripted(
            "Ann",
            vec![Some(Roll::from(vec![1, 1, 1, 5, 5, 5])), None],
        )];
        let cup = Stacked::new(vec![vec![1, 1, 1, 5, 5, 5], vec![1, 2, 3, 4, 5, 6]]);
        let mut game = Game::new(players).shaken(cup).quickly();
        // 1500 kept hot, then banks the follow-up roll's 150
        assert!(turn_points(&mut game) == 1650);
    }

    #[test]
    fn turn_narration_reaches_the_transcript() {
        let players = vec![Player::scripted(
            "Ann",
            vec![Some(Roll::from(vec![1, 1, 1])), None],
        )];
        let cup = Stacked::new(vec![vec![1, 1, 1, 2, 3, 4], vec![5, 5, 5]]);
        let mut game = Game::new(players).shaken(cup).quickly();
        turn_points(&mut game);
        let lines = game.transcript().lines();
        assert!(lines[0] == "Ann rolls [1, 1, 1, 2, 3, 4].");
        assert!(lines[1] == "Ann keeps [1, 1, 1] (1000 points) and continues.");
        assert!(lines[2] == "Ann rolls [5, 5, 5].");
        assert!(lines[3] == "Ann ends turn, keeping [5, 5, 5] (500 points).");
        assert!(lines[4] == "Ann scores 1500 points for a total of 1500.\n");
    }

    #[test]
    fn endgame_gives_every_player_one_more_turn() {
        // every turn banks its opening roll immediately (trim has 3 dice,
        // RerollWithFour wants 4), so the roll script is one roll per turn
        let players = vec![
            Player::policy("P1", Policy::RerollWithFour),
            Player::policy("P2", Policy::RerollWithFour),
        ];
        let cup = Stacked::new(vec![
            vec![1, 1, 1, 2, 3, 4], // P1 banks 1000
            vec![5, 5, 2, 3, 4, 6], // P2 banks 100
            vec![1, 1, 1, 2, 3, 4], // P1 banks 1000, crosses 1500 -> countdown
            vec![5, 5, 5, 2, 3, 4], // P2 banks 500, countdown expires
        ]);
        let mut game = Game::new(players).shaken(cup).to(1500).quickly();
        let standings = game.play();
        assert!(standings == vec![(String::from("P1"), 2000), (String::from("P2"), 600)]);
        let last = game.transcript().lines().last().unwrap().clone();
        assert!(last == "P2 scored 600");
        assert!(game
            .transcript()
            .lines()
            .iter()
            .any(|l| l == "Game complete in 4 turns (2 rounds):\n"));
    }

    #[test]
    fn ties_keep_seating_order() {
        let players = vec![
            Player::policy("P1", Policy::RerollWithFour),
            Player::policy("P2", Policy::RerollWithFour),
        ];
        let cup = Stacked::new(vec![
            vec![1, 1, 1, 2, 3, 4], // P1 banks 1000, crosses 900 -> countdown
            vec![1, 1, 1, 2, 3, 4], // P2 banks 1000, countdown expires
        ]);
        let mut game = Game::new(players).shaken(cup).to(900).quickly();
        let standings = game.play();
        assert!(standings == vec![(String::from("P1"), 1000), (String::from("P2"), 1000)]);
    }

    #[test]
    fn farkle_on_the_opening_roll_awards_zero() {
        let players = vec![Player::scripted("Ann", vec![])];
        let cup = Stacked::new(vec![vec![2, 3, 4, 6, 6, 4]]);
        let mut game = Game::new(players).shaken(cup).quickly();
        assert!(turn_points(&mut game) == 0);
        let lines = game.transcript().lines();
        assert!(lines[1] == "Ann farkles.");
        assert!(lines[2] == "Ann scores 0 points for a total of 0.\n");
    }
}
