/// Cell count printed with `'` between groups of three digits (`1'234'567`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NiceInt(u64);

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(value as u64)
    }
}

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let lead = digits.len() % 3;
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && i % 3 == lead {
                out.push('\'');
            }
            out.push(ch);
        }
        f.pad(&out)
    }
}
