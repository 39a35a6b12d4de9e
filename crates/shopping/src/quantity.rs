/// Formats a quantity for display: whole numbers without a decimal point,
/// anything else rounded to two decimal places.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        return format!("{quantity:.0}");
    }

    let rounded = (quantity * 100.0).round() / 100.0;

    format!("{rounded}")
}
