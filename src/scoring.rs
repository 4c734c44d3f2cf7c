/// Words per minute for `score` correct words typed in `elapsed_secs`.
///
/// Zero elapsed seconds (the very start of a round) yields 0.
pub fn wpm(score: usize, elapsed_secs: u64) -> u64 {
    if elapsed_secs == 0 {
        return 0;
    }

    (score as f64 / elapsed_secs as f64 * 60.0).round() as u64
}
