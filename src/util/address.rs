/// Addresses shorter than this are shown in full.
const MIN_SHORTENED_LEN: usize = 11;

/// Abbreviate an address to its first six and last four characters:
/// `0x9eca...a149`.
pub fn shorten_address(address: &str) -> String {
    let chars = address.chars().collect::<Vec<_>>();
    if chars.len() < MIN_SHORTENED_LEN {
        return address.to_owned();
    }

    let head = chars[..6].iter().collect::<String>();
    let tail = chars[chars.len() - 4..].iter().collect::<String>();
    format!("{head}...{tail}")
}
