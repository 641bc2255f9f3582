//! Monetary rounding.
//!
//! Prices travel as floating point (the external catalog serves them that
//! way), so totals are rounded to 2 decimal places exactly where the
//! contract rounds them: cart summaries and receipt totals. Per-line
//! subtotals stay unrounded (`price * qty`).

/// Round to 2 decimal places, half away from zero (half-up for positives).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_half_up() {
        // 0.125 is exactly representable, so the half-up tie is real.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.544), 2.54);
        assert_eq!(round2(2.546), 2.55);
    }

    #[test]
    fn leaves_exact_cents_untouched() {
        assert_eq!(round2(25.50), 25.50);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn ten_percent_tax_example() {
        // 10.00*2 + 5.50*1 = 25.50 -> tax 2.55 -> total 28.05
        let subtotal = 10.00 * 2.0 + 5.50;
        assert_eq!(round2(subtotal), 25.50);
        assert_eq!(round2(subtotal * 0.10), 2.55);
        assert_eq!(round2(subtotal + subtotal * 0.10), 28.05);
    }
}
