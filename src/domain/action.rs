use super::submission::SubmissionId;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Approve,
    Reject,
}

/// One administrator decision read from a review actions stream.
///
/// `reason` is only meaningful for rejections; an approve row leaves it empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ReviewAction {
    pub action: ActionKind,
    pub id: SubmissionId,
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_deserialization() {
        let csv = "action, id, reason\napprove, 1, \nreject, 2, Montant incorrect";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let actions: Vec<ReviewAction> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("Failed to deserialize actions");

        assert_eq!(actions[0].action, ActionKind::Approve);
        assert_eq!(actions[0].id, "1".into());
        assert_eq!(actions[1].action, ActionKind::Reject);
        assert_eq!(actions[1].reason.as_deref(), Some("Montant incorrect"));
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let csv = "action, id, reason\nescalate, 1, ";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize::<ReviewAction>();

        assert!(iter.next().unwrap().is_err());
    }
}
