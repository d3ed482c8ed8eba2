use std::str::FromStr;

/// The optional `not ` of a step, as in "there should (not |)be an email".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Negation(pub bool);

impl Negation {
    pub fn is_negated(self) -> bool {
        self.0
    }
}

impl FromStr for Negation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Negation(false)),
            "not" => Ok(Negation(true)),
            other => Err(format!("'{other}' is not a negation, expected 'not' or nothing")),
        }
    }
}
