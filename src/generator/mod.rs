pub mod passage;

/// Supplies the target text for a typing session.
pub trait PassageSource {
    fn next_passage(&mut self) -> String;
}
