use std::fmt::Display;

use crate::store::CardSet;

///Which cards have been answered wrong the most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardestCards {
    NoErrors,
    Single { term: String, mistakes: u32 },
    Tied { terms: Vec<String>, mistakes: u32 },
}

impl HardestCards {
    ///Every term sharing the highest mistake count is reported, in card order.
    pub fn compute(set: &CardSet) -> Self {
        let max = set
            .mistake_entries()
            .map(|(_, mistakes)| mistakes)
            .max()
            .unwrap_or(0);
        if max == 0 {
            return Self::NoErrors;
        }

        let mut terms = set
            .mistake_entries()
            .filter(|(_, mistakes)| *mistakes == max)
            .map(|(term, _)| term.to_owned())
            .collect::<Vec<_>>();

        if terms.len() == 1 {
            Self::Single {
                term: terms.swap_remove(0),
                mistakes: max,
            }
        } else {
            Self::Tied {
                terms,
                mistakes: max,
            }
        }
    }

    pub fn terms(&self) -> Vec<&str> {
        match self {
            Self::NoErrors => vec![],
            Self::Single { term, .. } => vec![term.as_str()],
            Self::Tied { terms, .. } => terms.iter().map(String::as_str).collect(),
        }
    }

    pub fn mistakes(&self) -> u32 {
        match self {
            Self::NoErrors => 0,
            Self::Single { mistakes, .. } | Self::Tied { mistakes, .. } => *mistakes,
        }
    }
}

impl Display for HardestCards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoErrors => f.write_str("There are no cards with errors."),
            Self::Single { term, mistakes } => f.write_fmt(format_args!(
                "The hardest card is \"{term}\". You have {mistakes} errors answering it."
            )),
            Self::Tied { terms, mistakes } => {
                let terms = terms
                    .iter()
                    .map(|term| format!("\"{term}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                f.write_fmt(format_args!(
                    "The hardest cards are {terms}. You have {mistakes} errors answering them."
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::store::CardSet;

    use super::HardestCards;

    fn with_counts(counts: &[(&str, u32)]) -> CardSet {
        let mut set = CardSet::new();
        for (term, count) in counts {
            set.upsert(term, &format!("{term} definition"), *count);
        }
        set
    }

    #[test]
    fn no_cards() {
        assert_eq!(HardestCards::compute(&CardSet::new()), HardestCards::NoErrors);
    }

    #[test]
    fn all_zero() {
        let set = with_counts(&[("a", 0), ("b", 0)]);
        let report = HardestCards::compute(&set);
        assert_eq!(report, HardestCards::NoErrors);
        assert!(report.terms().is_empty());
        assert_eq!(report.to_string(), "There are no cards with errors.");
    }

    #[test]
    fn single_hardest() {
        let set = with_counts(&[("a", 1), ("b", 4), ("c", 2)]);
        let report = HardestCards::compute(&set);
        assert_eq!(
            report,
            HardestCards::Single {
                term: "b".to_owned(),
                mistakes: 4
            }
        );
        assert_eq!(
            report.to_string(),
            "The hardest card is \"b\". You have 4 errors answering it."
        );
    }

    #[test]
    fn ties_report_every_term() {
        let set = with_counts(&[("a", 3), ("b", 3), ("c", 1)]);
        let report = HardestCards::compute(&set);
        assert_eq!(report.terms(), vec!["a", "b"]);
        assert_eq!(report.mistakes(), 3);
        assert_eq!(
            report.to_string(),
            "The hardest cards are \"a\", \"b\". You have 3 errors answering them."
        );
    }

    #[test]
    fn ties_follow_card_order() {
        let set = with_counts(&[("z", 2), ("m", 1), ("a", 2)]);
        assert_eq!(HardestCards::compute(&set).terms(), vec!["z", "a"]);
    }

    #[test]
    fn reset_clears_report() {
        let mut set = with_counts(&[("a", 3), ("b", 5)]);
        set.reset_stats();
        assert_eq!(HardestCards::compute(&set), HardestCards::NoErrors);
    }
}
