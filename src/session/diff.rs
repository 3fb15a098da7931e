/// Classification of one passage position against the typed buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharStatus {
    Untyped,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffChar {
    pub expected: char,
    pub status: CharStatus,
}

/// Per-position comparison of a typed buffer against its passage.
///
/// `chars` has exactly one entry per passage character. Characters typed past
/// the end of the passage have no target and are kept in `overflow`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diff {
    pub chars: Vec<DiffChar>,
    pub overflow: Vec<char>,
}

impl Diff {
    pub fn correct_count(&self) -> usize {
        self.count(CharStatus::Correct)
    }

    pub fn incorrect_count(&self) -> usize {
        self.count(CharStatus::Incorrect)
    }

    /// Number of passage positions that have a typed character.
    pub fn scored_len(&self) -> usize {
        self.chars
            .iter()
            .filter(|c| c.status != CharStatus::Untyped)
            .count()
    }

    /// Length of the typed buffer this diff was built from.
    pub fn typed_len(&self) -> usize {
        self.scored_len() + self.overflow.len()
    }

    fn count(&self, status: CharStatus) -> usize {
        self.chars.iter().filter(|c| c.status == status).count()
    }
}

pub fn diff(passage: &[char], typed: &[char]) -> Diff {
    let chars = passage
        .iter()
        .enumerate()
        .map(|(i, &expected)| {
            let status = match typed.get(i) {
                Some(&actual) if actual == expected => CharStatus::Correct,
                Some(_) => CharStatus::Incorrect,
                None => CharStatus::Untyped,
            };
            DiffChar { expected, status }
        })
        .collect();

    let overflow = typed.get(passage.len()..).unwrap_or_default().to_vec();

    Diff { chars, overflow }
}
