//! Helpers for decimal currency amounts.
//!
//! Amounts are IEEE doubles carrying a decimal currency value. The engine
//! rounds to the nearest minor unit (0.01) at the points the calculators
//! dictate and nowhere else; in particular the equal-split remainder is not
//! redistributed, so the splits of one expense can drift from its total by up
//! to one cent per share. The settlement planner absorbs that drift with
//! [`EPSILON`].

/// Tolerance under which a balance counts as settled.
pub const EPSILON: f64 = 0.01;

/// Rounds a decimal amount to the nearest minor currency unit.
///
/// # Examples
///
/// ```rust
/// use engine::round_to_cents;
///
/// assert_eq!(round_to_cents(33.333333), 33.33);
/// assert_eq!(round_to_cents(0.125), 0.13);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders an amount next to its currency label, e.g. `33.33 USD`.
///
/// The label is opaque to the engine: it is printed back untouched, never
/// parsed or converted.
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}
