use rand::{seq::SliceRandom, Rng};

/// Return a uniformly random permutation of `words`, leaving the input untouched
pub fn shuffle<T: Clone>(words: &[T]) -> Vec<T> {
    shuffle_with(words, &mut rand::thread_rng())
}

/// Same as [`shuffle`] but driven by the caller's rng
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(words: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = words.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
