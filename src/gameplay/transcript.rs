/// In-memory record of every narration line emitted over a whole game, in
/// broadcast order. The console and each remote connection receive the same
/// lines; this sink is the one that outlives the turn loop.
#[derive(Debug, Default)]
pub struct Transcript(Vec<String>);

impl Transcript {
    pub fn record(&mut self, line: &str) {
        self.0.push(line.to_string());
    }
    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.0.iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
