/// Interactive player driven by terminal prompts. The prompt refuses to
/// return until the entry is a trimmed, scoreable subset of the offered
/// roll; there is no retry limit by design. An empty entry is valid and
/// means "bank now".
pub struct Human {
    name: String,
}

impl Human {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn choose(&self, roll: &Roll) -> Option<Roll> {
        let entry: String = Input::new()
            .with_prompt(format!(
                "{}, input values to keep, separated by spaces",
                self.name
            ))
            .allow_empty(true)
            .report(false)
            .validate_with(|line: &String| -> Result<(), String> {
                match Self::parse(line) {
                    None => Err(String::from("enter face values separated by spaces")),
                    Some(keep) if keep.is_subset_of(roll) && keep.is_trimmed() => Ok(()),
                    Some(keep) => Err(format!(
                        "{} is not a scoreable subset of {}. Try again",
                        keep, roll
                    )),
                }
            })
            .interact()
            .expect("interactive terminal");
        let keep = Self::parse(&entry).expect("validated by prompt");
        match keep.size() {
            0 => None,
            _ => Some(keep),
        }
    }

    fn parse(line: &str) -> Option<Roll> {
        line.split_whitespace()
            .map(|token| token.parse::<Face>().ok())
            .collect::<Option<Vec<Face>>>()
            .map(Roll::from)
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human({})", self.name)
    }
}

use crate::dice::Roll;
use crate::Face;
use dialoguer::Input;
use std::fmt::{Debug, Formatter};
