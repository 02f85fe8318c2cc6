/// Whole dollars with thousands separators, e.g. `$41,000`.
pub fn usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::usd;

    #[test]
    fn groups_thousands() {
        assert_eq!(usd(0), "$0");
        assert_eq!(usd(999), "$999");
        assert_eq!(usd(1_000), "$1,000");
        assert_eq!(usd(41_000), "$41,000");
        assert_eq!(usd(145_000), "$145,000");
        assert_eq!(usd(1_234_567), "$1,234,567");
    }
}
