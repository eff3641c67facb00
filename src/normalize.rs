/// Universal-newline normalization: `\r\n` and lone `\r` become `\n`.
pub fn stage0(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
