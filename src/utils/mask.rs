const VISIBLE_PREFIX: usize = 3;
const VISIBLE_SUFFIX: usize = 4;
const MIN_MASKABLE_LEN: usize = 20;

/// Masks a secret for logs and console output.
///
/// Values of at least 20 characters keep their first 3 and last 4 characters,
/// anything shorter is fully hidden.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < MIN_MASKABLE_LEN {
        return "****".to_string();
    }

    let prefix: String = chars[..VISIBLE_PREFIX].iter().collect();
    let suffix: String = chars[chars.len() - VISIBLE_SUFFIX..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
