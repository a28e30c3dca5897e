/// Rounds `value` to `places` decimal digits, ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to(200.0 / 3.0, 2), 66.67);
        assert_eq!(round_to(100.0 / 3.0, 2), 33.33);
        assert_eq!(round_to(100.0, 2), 100.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round_to(100.0 / 32.0, 2), 3.12);
        assert_eq!(round_to(300.0 / 32.0, 2), 9.38);
    }
}
