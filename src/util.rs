// Display helpers shared by the components.

/// `1234567` -> `"1,234,567"`.
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn guesses_left_label(left: u32) -> String {
    match left {
        1 => "1 guess left".to_string(),
        n => format!("{} guesses left", n),
    }
}
