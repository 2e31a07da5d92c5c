use std::fmt::Write;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;

use crate::app::simulation::MonthEntry;

/// `$1,234.56`, rounded to cents. The sign follows the dollar sign, so a
/// negative balance renders as `$-1,234.56`.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${sign}{grouped}.{cents}")
}

pub fn year_fragment(year: u32, entries: &[MonthEntry]) -> String {
    let mut text = format!("Year {year}:\n");
    for entry in entries {
        let _ = writeln!(text, "Month {:03}: {}", entry.month, currency(entry.balance));
    }
    text
}

pub fn final_summary(original_deposit: Decimal, final_balance: Decimal) -> String {
    format!(
        "\nFinal Report:\nInitial Deposit: {}\nFinal Balance: {}\n",
        currency(original_deposit),
        currency(final_balance)
    )
}
