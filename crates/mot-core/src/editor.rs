use std::sync::Arc;

use crate::bullets;
use crate::log::{LogError, VocabLog};

/// Which bullets of the last definition to retain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Keep exactly these 1-based bullets, in the order given.
    Keep(Vec<usize>),
    /// Remove these 1-based bullets, keeping the rest in original order.
    Delete(Vec<usize>),
}

/// The rewritten entry, for the confirmation reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub word: String,
    pub definition: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("No bullet numbers given - no action taken.")]
    EmptySelection,
    #[error("The last definition has no bullet points to edit.")]
    NoBullets,
    #[error("Bullet {index} does not exist: the last definition has {count} bullet points.")]
    OutOfRange { index: usize, count: usize },
    #[error("Bullet {index} was given more than once - no action taken.")]
    Duplicate { index: usize },
    #[error(transparent)]
    Log(#[from] LogError),
}

/// Rewrites the most recently logged definition in place. The last row is
/// read at call time; an append landing between the read and the write goes
/// unnoticed.
pub struct LastEntryEditor {
    log: Arc<dyn VocabLog>,
}

impl LastEntryEditor {
    pub fn new(log: Arc<dyn VocabLog>) -> Self {
        Self { log }
    }

    pub async fn edit(&self, op: EditOp) -> Result<EditOutcome, EditError> {
        let last = self.log.last_entry().await?;
        let lines = bullets::split_bullets(&last.definition);
        if lines.is_empty() {
            return Err(EditError::NoBullets);
        }

        let selected = match &op {
            EditOp::Keep(indices) | EditOp::Delete(indices) => indices.as_slice(),
        };
        validate(selected, lines.len())?;

        let kept: Vec<String> = match op {
            EditOp::Keep(indices) => indices.iter().map(|&index| lines[index - 1].clone()).collect(),
            EditOp::Delete(indices) => {
                let mut remaining = lines;
                let mut order = indices;
                order.sort_unstable_by(|a, b| b.cmp(a));
                for index in order {
                    remaining.remove(index - 1);
                }
                remaining
            }
        };

        let definition = if kept.len() == 1 {
            bullets::strip_bullet(&kept[0])
        } else {
            kept.join("\n")
        };

        self.log.update_definition(last.row, &definition).await?;

        Ok(EditOutcome { word: last.word, definition })
    }
}

fn validate(indices: &[usize], count: usize) -> Result<(), EditError> {
    if indices.is_empty() {
        return Err(EditError::EmptySelection);
    }
    let mut seen = vec![false; count + 1];
    for &index in indices {
        if index == 0 || index > count {
            return Err(EditError::OutOfRange { index, count });
        }
        if seen[index] {
            return Err(EditError::Duplicate { index });
        }
        seen[index] = true;
    }
    Ok(())
}
