use crate::dice::Roll;
use crate::wire::Connection;
use crate::wire::Response;

/// Player whose decisions come from a connected peer. The roll is sent as a
/// framed move request and the answer is read back over the same connection.
/// Anything that goes wrong mid-move — hangup, unparseable text, a keep that
/// is not a subset of the offer — degrades to "bank now" with a logged
/// anomaly. Nothing here is ever fatal to the game.
#[derive(Debug)]
pub struct Remote {
    name: String,
    conn: Connection,
}

impl Remote {
    pub fn connect(name: &str, host: &str, port: u16) -> anyhow::Result<Self> {
        let conn = Connection::open(host, port)?;
        log::info!("{} connected successfully.", name);
        Ok(Self {
            name: name.to_string(),
            conn,
        })
    }

    pub fn choose(&mut self, roll: &Roll) -> Option<Roll> {
        match self.delegate(roll) {
            Ok(keep) => keep,
            Err(e) => {
                log::warn!("connection failure for {}: {:#}", self.name, e);
                None
            }
        }
    }

    /// narration lines are mirrored to the peer over this same connection.
    pub fn conn(&mut self) -> &mut Connection {
        &mut self.conn
    }

    fn delegate(&mut self, roll: &Roll) -> anyhow::Result<Option<Roll>> {
        self.conn.send(&roll.to_string())?;
        let line = self.conn.receive()?;
        match Response::from(line.as_str()) {
            Response::Bank => Ok(None),
            Response::Garbled => {
                log::warn!("malformed response from {}: {:?}", self.name, line.trim_end());
                Ok(None)
            }
            Response::Keep(dice) => {
                let keep = Roll::from(dice);
                match keep.is_subset_of(roll) {
                    true => Ok(Some(keep)),
                    false => {
                        log::warn!("{} kept {} which is not in {}", self.name, keep, roll);
                        Ok(None)
                    }
                }
            }
        }
    }
}
